use std::sync::Arc;

use async_trait::async_trait;
use stackhook_core::{CloudError, ScalingAction, StackResource};

/// Cloud API calls available to hooks.
///
/// Implementations must not retry or swallow failures; errors are returned
/// to the hook unchanged.
#[async_trait]
pub trait CloudConnector: Send + Sync {
    /// List the resources of the stack named `stack_name`.
    ///
    /// A response without a resource list yields an empty vector.
    async fn describe_stack_resources(
        &self,
        stack_name: &str,
    ) -> Result<Vec<StackResource>, CloudError>;

    /// Resume or suspend `scaling_processes` on one Auto Scaling group.
    async fn set_scaling_processes(
        &self,
        action: ScalingAction,
        auto_scaling_group_name: &str,
        scaling_processes: &[String],
    ) -> Result<(), CloudError>;
}

#[async_trait]
impl<C: CloudConnector + ?Sized> CloudConnector for Arc<C> {
    async fn describe_stack_resources(
        &self,
        stack_name: &str,
    ) -> Result<Vec<StackResource>, CloudError> {
        (**self).describe_stack_resources(stack_name).await
    }

    async fn set_scaling_processes(
        &self,
        action: ScalingAction,
        auto_scaling_group_name: &str,
        scaling_processes: &[String],
    ) -> Result<(), CloudError> {
        (**self)
            .set_scaling_processes(action, auto_scaling_group_name, scaling_processes)
            .await
    }
}
