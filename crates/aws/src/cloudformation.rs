use aws_sdk_cloudformation::error::DisplayErrorContext;
use aws_sdk_cloudformation::operation::describe_stack_resources::DescribeStackResourcesOutput;
use stackhook_core::{CloudError, StackResource};
use tracing::{debug, error, instrument};

use crate::error::classify_sdk_error;

/// `CloudFormation` client used to list the resources of a deployed stack.
#[derive(Clone)]
pub struct CloudFormationClient {
    client: aws_sdk_cloudformation::Client,
}

impl std::fmt::Debug for CloudFormationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudFormationClient")
            .field("client", &"<CloudFormationClient>")
            .finish()
    }
}

impl CloudFormationClient {
    /// Build a client from a loaded SDK configuration.
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: aws_sdk_cloudformation::Client::new(sdk_config),
        }
    }

    /// Wrap a pre-built SDK client.
    pub fn with_client(client: aws_sdk_cloudformation::Client) -> Self {
        Self { client }
    }

    /// Call `DescribeStackResources` for `stack_name`.
    #[instrument(skip(self), fields(service = "cloudformation"))]
    pub async fn describe_stack_resources(
        &self,
        stack_name: &str,
    ) -> Result<Vec<StackResource>, CloudError> {
        let output = self
            .client
            .describe_stack_resources()
            .stack_name(stack_name)
            .send()
            .await
            .map_err(|e| {
                let err_str = DisplayErrorContext(e).to_string();
                error!(error = %err_str, "describe_stack_resources failed");
                classify_sdk_error(&err_str)
            })?;

        let resources = stack_resources_from_output(&output);
        debug!(count = resources.len(), "stack resources described");
        Ok(resources)
    }
}

/// Map a `DescribeStackResources` response to stack resources.
///
/// A response without a resource list yields no resources. Resources not
/// yet created have no physical ID and cannot be targeted, so they are
/// skipped. A missing type maps to an empty type, which matches nothing.
pub fn stack_resources_from_output(output: &DescribeStackResourcesOutput) -> Vec<StackResource> {
    output
        .stack_resources()
        .iter()
        .filter_map(|r| {
            let Some(physical_id) = r.physical_resource_id() else {
                debug!(
                    logical_id = ?r.logical_resource_id(),
                    resource_type = ?r.resource_type(),
                    "skipping resource without a physical ID"
                );
                return None;
            };
            Some(StackResource::new(
                r.resource_type().unwrap_or_default(),
                physical_id,
            ))
        })
        .collect()
}
