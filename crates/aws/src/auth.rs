use tracing::{debug, info};

use crate::config::AwsBaseConfig;

/// Load the SDK configuration both stackhook clients are built from.
///
/// Credentials come from the environment chain. With `role_arn` set, they
/// are exchanged for the role's credentials through an `AssumeRoleProvider`,
/// which refreshes them before expiry; deployments of large stacks can
/// outlive a single STS session.
///
/// # Examples
///
/// ```no_run
/// use stackhook_aws::config::AwsBaseConfig;
/// use stackhook_aws::auth::build_sdk_config;
///
/// # async fn example() {
/// let config = AwsBaseConfig::new("us-east-1")
///     .with_endpoint_url("http://localhost:4566");
/// let sdk_config = build_sdk_config(&config).await;
/// # }
/// ```
pub async fn build_sdk_config(config: &AwsBaseConfig) -> aws_config::SdkConfig {
    let mut loader = aws_config::from_env().region(aws_config::Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        debug!(endpoint = %endpoint, "using custom AWS endpoint");
        loader = loader.endpoint_url(endpoint);
    }

    let Some(role_arn) = &config.role_arn else {
        return loader.load().await;
    };

    let session_name = config.session_name_or_default();
    info!(role_arn = %role_arn, session_name = %session_name, "assuming IAM role via STS");

    // The assume-role provider inherits the endpoint override and base
    // credentials for its own STS calls.
    let base_config = loader.load().await;

    let mut provider_builder = aws_config::sts::AssumeRoleProvider::builder(role_arn)
        .session_name(session_name)
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(external_id) = &config.external_id {
        provider_builder = provider_builder.external_id(external_id);
    }

    let assume_role_provider = provider_builder.configure(&base_config).build().await;

    let mut final_loader = aws_config::from_env()
        .region(aws_config::Region::new(config.region.clone()))
        .credentials_provider(assume_role_provider);

    if let Some(endpoint) = &config.endpoint_url {
        final_loader = final_loader.endpoint_url(endpoint);
    }

    final_loader.load().await
}
