use serde::{Deserialize, Serialize};

/// Default STS session name used when assuming a role.
pub const DEFAULT_SESSION_NAME: &str = "stackhook";

/// Connection settings shared by the `CloudFormation` and Auto Scaling
/// clients. Read from the `[aws]` table of `stackhook.toml`; missing keys
/// take their defaults.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsBaseConfig {
    /// Region the deployed stack lives in.
    pub region: String,

    /// Role to assume before calling AWS, for stacks in another account.
    pub role_arn: Option<String>,

    /// Endpoint override, e.g. `http://localhost:4566` for `LocalStack`.
    pub endpoint_url: Option<String>,

    /// STS session name; see [`DEFAULT_SESSION_NAME`].
    pub session_name: Option<String>,

    /// External ID required by the role's trust policy, if any.
    pub external_id: Option<String>,
}

impl std::fmt::Debug for AwsBaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsBaseConfig")
            .field("region", &self.region)
            .field("role_arn", &self.role_arn.as_ref().map(|_| "[REDACTED]"))
            .field("endpoint_url", &self.endpoint_url)
            .field("session_name", &self.session_name)
            .field("external_id", &self.external_id)
            .finish()
    }
}

impl AwsBaseConfig {
    /// Defaults with `region` set.
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            ..Self::default()
        }
    }

    /// Assume `role_arn` before making calls.
    #[must_use]
    pub fn with_role_arn(mut self, role_arn: impl Into<String>) -> Self {
        self.role_arn = Some(role_arn.into());
        self
    }

    #[must_use]
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    #[must_use]
    pub fn with_session_name(mut self, session_name: impl Into<String>) -> Self {
        self.session_name = Some(session_name.into());
        self
    }

    #[must_use]
    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    /// The session name to use when assuming `role_arn`.
    pub fn session_name_or_default(&self) -> &str {
        self.session_name.as_deref().unwrap_or(DEFAULT_SESSION_NAME)
    }
}

impl Default for AwsBaseConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_owned(),
            role_arn: None,
            endpoint_url: None,
            session_name: None,
            external_id: None,
        }
    }
}
