use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use stackhook_core::{CloudError, ScalingAction, StackResource};
use tracing::debug;

use crate::connector::CloudConnector;

/// One recorded `set_scaling_processes` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalingCall {
    /// Wire operation, `resume_processes` or `suspend_processes`.
    pub operation: String,
    pub auto_scaling_group_name: String,
    pub scaling_processes: Vec<String>,
}

impl ScalingCall {
    pub fn new(
        operation: impl Into<String>,
        auto_scaling_group_name: impl Into<String>,
        scaling_processes: &[&str],
    ) -> Self {
        Self {
            operation: operation.into(),
            auto_scaling_group_name: auto_scaling_group_name.into(),
            scaling_processes: scaling_processes.iter().map(|&p| p.to_owned()).collect(),
        }
    }
}

/// In-memory connector serving canned stack resources and recording every
/// call it receives.
///
/// Describing a stack that was never added fails the way CloudFormation
/// does, with a "does not exist" service error.
#[derive(Debug, Default)]
pub struct MemoryConnector {
    stacks: HashMap<String, Vec<StackResource>>,
    failing_groups: HashSet<String>,
    describe_calls: Mutex<Vec<String>>,
    scaling_calls: Mutex<Vec<ScalingCall>>,
}

impl MemoryConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `resources` for `stack_name`.
    #[must_use]
    pub fn with_stack(
        mut self,
        stack_name: impl Into<String>,
        resources: Vec<StackResource>,
    ) -> Self {
        self.stacks.insert(stack_name.into(), resources);
        self
    }

    /// Fail any `set_scaling_processes` call targeting `group`.
    #[must_use]
    pub fn with_failing_group(mut self, group: impl Into<String>) -> Self {
        self.failing_groups.insert(group.into());
        self
    }

    /// Stack names passed to `describe_stack_resources`, in call order.
    pub fn describe_calls(&self) -> Vec<String> {
        self.describe_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// `set_scaling_processes` calls that succeeded, in call order.
    pub fn scaling_calls(&self) -> Vec<ScalingCall> {
        self.scaling_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl CloudConnector for MemoryConnector {
    async fn describe_stack_resources(
        &self,
        stack_name: &str,
    ) -> Result<Vec<StackResource>, CloudError> {
        self.describe_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(stack_name.to_owned());

        self.stacks.get(stack_name).cloned().ok_or_else(|| {
            CloudError::ServiceError(format!("Stack with id {stack_name} does not exist"))
        })
    }

    async fn set_scaling_processes(
        &self,
        action: ScalingAction,
        auto_scaling_group_name: &str,
        scaling_processes: &[String],
    ) -> Result<(), CloudError> {
        if self.failing_groups.contains(auto_scaling_group_name) {
            return Err(CloudError::ServiceError(format!(
                "AutoScalingGroup name not found - {auto_scaling_group_name}"
            )));
        }

        debug!(
            operation = action.operation_name(),
            group = %auto_scaling_group_name,
            "recording scaling call"
        );
        self.scaling_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ScalingCall {
                operation: action.operation_name().to_owned(),
                auto_scaling_group_name: auto_scaling_group_name.to_owned(),
                scaling_processes: scaling_processes.to_vec(),
            });
        Ok(())
    }
}
