use async_trait::async_trait;
use stackhook_core::{CloudError, ScalingAction, StackResource};
use stackhook_hooks::CloudConnector;

use crate::auth::build_sdk_config;
use crate::autoscaling::AutoScalingClient;
use crate::cloudformation::CloudFormationClient;
use crate::config::AwsBaseConfig;

/// [`CloudConnector`] backed by the AWS SDK.
#[derive(Debug, Clone)]
pub struct AwsConnector {
    config: AwsBaseConfig,
    cloudformation: CloudFormationClient,
    autoscaling: AutoScalingClient,
}

impl AwsConnector {
    /// Create a connector by building AWS SDK clients from `config`.
    pub async fn new(config: AwsBaseConfig) -> Self {
        let sdk_config = build_sdk_config(&config).await;
        Self {
            cloudformation: CloudFormationClient::new(&sdk_config),
            autoscaling: AutoScalingClient::new(&sdk_config),
            config,
        }
    }

    /// Create a connector from pre-built clients (for testing).
    pub fn with_clients(
        config: AwsBaseConfig,
        cloudformation: CloudFormationClient,
        autoscaling: AutoScalingClient,
    ) -> Self {
        Self {
            config,
            cloudformation,
            autoscaling,
        }
    }

    pub fn config(&self) -> &AwsBaseConfig {
        &self.config
    }
}

#[async_trait]
impl CloudConnector for AwsConnector {
    async fn describe_stack_resources(
        &self,
        stack_name: &str,
    ) -> Result<Vec<StackResource>, CloudError> {
        self.cloudformation.describe_stack_resources(stack_name).await
    }

    async fn set_scaling_processes(
        &self,
        action: ScalingAction,
        auto_scaling_group_name: &str,
        scaling_processes: &[String],
    ) -> Result<(), CloudError> {
        self.autoscaling
            .set_scaling_processes(action, auto_scaling_group_name, scaling_processes)
            .await
    }
}


#[cfg(all(test, feature = "integration"))]
mod integration_tests {
    use super::*;

    // Runs against LocalStack on the default port.

    #[tokio::test]
    async fn describe_missing_stack_is_service_error() {
        let config = AwsBaseConfig::new("us-east-1").with_endpoint_url("http://localhost:4566");
        let connector = AwsConnector::new(config).await;
        let err = connector
            .describe_stack_resources("stackhook-missing-stack")
            .await
            .unwrap_err();
        assert!(matches!(err, CloudError::ServiceError(_)));
    }
}
