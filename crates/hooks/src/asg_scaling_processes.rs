use stackhook_core::{
    Directive, HookArgument, HookError, autoscaling_group_names, is_known_scaling_process,
};
use tracing::{debug, info, instrument, warn};

use crate::context::HookContext;
use crate::hook::Hook;

/// Registered name of the [`AsgScalingProcesses`] hook.
pub const ASG_SCALING_PROCESSES: &str = "asg_scaling_processes";

/// Resumes or suspends a scaling process on every Auto Scaling group in the
/// current stack.
///
/// The argument is a `<resume|suspend>::<process-name>` directive. Scheduled
/// actions, for example, must be suspended while a stack with Auto Scaling
/// groups is updated:
///
/// ```yaml
/// hooks:
///   before_update:
///     - !asg_scaling_processes suspend::ScheduledActions
///   after_update:
///     - !asg_scaling_processes resume::ScheduledActions
/// ```
///
/// Groups are processed one at a time in the order CloudFormation lists
/// them. The first failing call aborts the rest; nothing is rolled back.
#[derive(Debug, Default, Clone, Copy)]
pub struct AsgScalingProcesses;

impl AsgScalingProcesses {
    pub fn new() -> Self {
        Self
    }

    /// Physical IDs of the Auto Scaling groups in the deployment's stack.
    async fn find_autoscaling_groups(ctx: &HookContext) -> Result<Vec<String>, HookError> {
        let stack_name = ctx.deployment.full_stack_name();
        debug!(stack = %stack_name, "describing stack resources");

        let resources = ctx.connector.describe_stack_resources(&stack_name).await?;
        let groups = autoscaling_group_names(&resources);

        debug!(
            resources = resources.len(),
            groups = groups.len(),
            "resolved Auto Scaling groups"
        );
        Ok(groups)
    }
}

impl Hook for AsgScalingProcesses {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        ASG_SCALING_PROCESSES
    }

    #[instrument(
        skip_all,
        fields(hook = ASG_SCALING_PROCESSES, stack = %ctx.deployment.stack_name)
    )]
    async fn run(&self, argument: &HookArgument, ctx: &HookContext) -> Result<(), HookError> {
        let directive = Directive::from_argument(argument)?;

        if !is_known_scaling_process(&directive.process_name) {
            warn!(
                process = %directive.process_name,
                "unrecognised scaling process name, forwarding as-is"
            );
        }

        let groups = Self::find_autoscaling_groups(ctx).await?;
        let processes = std::slice::from_ref(&directive.process_name);

        for group in &groups {
            ctx.connector
                .set_scaling_processes(directive.action, group, processes)
                .await?;
            info!(
                group = %group,
                operation = directive.action.operation_name(),
                process = %directive.process_name,
                "scaling process updated"
            );
        }

        info!(
            directive = %directive,
            groups = groups.len(),
            "asg_scaling_processes hook complete"
        );
        Ok(())
    }
}
