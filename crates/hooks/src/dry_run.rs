use async_trait::async_trait;
use stackhook_core::{CloudError, ScalingAction, StackResource};
use tracing::info;

use crate::connector::CloudConnector;

/// A connector that reads through to `inner` but only logs mutating calls.
///
/// Useful for previewing which Auto Scaling groups a hook would touch
/// without changing them.
#[derive(Debug)]
pub struct DryRunConnector<C> {
    inner: C,
}

impl<C> DryRunConnector<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

#[async_trait]
impl<C: CloudConnector> CloudConnector for DryRunConnector<C> {
    async fn describe_stack_resources(
        &self,
        stack_name: &str,
    ) -> Result<Vec<StackResource>, CloudError> {
        self.inner.describe_stack_resources(stack_name).await
    }

    #[allow(clippy::unused_async)]
    async fn set_scaling_processes(
        &self,
        action: ScalingAction,
        auto_scaling_group_name: &str,
        scaling_processes: &[String],
    ) -> Result<(), CloudError> {
        info!(
            dry_run = true,
            operation = action.operation_name(),
            group = %auto_scaling_group_name,
            processes = ?scaling_processes,
            "skipping scaling process change"
        );
        Ok(())
    }
}
