use aws_sdk_autoscaling::error::DisplayErrorContext;
use stackhook_core::{CloudError, ScalingAction};
use tracing::{error, info, instrument};

use crate::error::classify_sdk_error;

/// Auto Scaling client used to suspend and resume scaling processes.
#[derive(Clone)]
pub struct AutoScalingClient {
    client: aws_sdk_autoscaling::Client,
}

impl std::fmt::Debug for AutoScalingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoScalingClient")
            .field("client", &"<AutoScalingClient>")
            .finish()
    }
}

impl AutoScalingClient {
    /// Build a client from a loaded SDK configuration.
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: aws_sdk_autoscaling::Client::new(sdk_config),
        }
    }

    /// Wrap a pre-built SDK client.
    pub fn with_client(client: aws_sdk_autoscaling::Client) -> Self {
        Self { client }
    }

    /// Call `SuspendProcesses` or `ResumeProcesses` on one group.
    #[instrument(
        skip(self, scaling_processes),
        fields(service = "autoscaling", operation = action.operation_name())
    )]
    pub async fn set_scaling_processes(
        &self,
        action: ScalingAction,
        auto_scaling_group_name: &str,
        scaling_processes: &[String],
    ) -> Result<(), CloudError> {
        let processes = Some(scaling_processes.to_vec());

        let result = match action {
            ScalingAction::Suspend => self
                .client
                .suspend_processes()
                .auto_scaling_group_name(auto_scaling_group_name)
                .set_scaling_processes(processes)
                .send()
                .await
                .map(|_| ())
                .map_err(|e| DisplayErrorContext(e).to_string()),
            ScalingAction::Resume => self
                .client
                .resume_processes()
                .auto_scaling_group_name(auto_scaling_group_name)
                .set_scaling_processes(processes)
                .send()
                .await
                .map(|_| ())
                .map_err(|e| DisplayErrorContext(e).to_string()),
        };

        if let Err(err_str) = result {
            error!(error = %err_str, "{} failed", action.operation_name());
            return Err(classify_sdk_error(&err_str));
        }

        info!(
            group = %auto_scaling_group_name,
            processes = ?scaling_processes,
            "{} succeeded",
            action.operation_name()
        );
        Ok(())
    }
}
