use serde::{Deserialize, Serialize};

/// Identity of the stack being deployed, as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentContext {
    /// Project code prefixed to every stack name.
    pub project_code: String,
    /// Environment path, e.g. `dev/eu-west-1`.
    pub environment_path: String,
    /// Stack name within the environment.
    pub stack_name: String,
}

impl DeploymentContext {
    /// Create a new context.
    pub fn new(
        project_code: impl Into<String>,
        environment_path: impl Into<String>,
        stack_name: impl Into<String>,
    ) -> Self {
        Self {
            project_code: project_code.into(),
            environment_path: environment_path.into(),
            stack_name: stack_name.into(),
        }
    }

    /// The deployed stack name: the three parts joined with `-`, with every
    /// `/` replaced by `-`.
    pub fn full_stack_name(&self) -> String {
        [
            self.project_code.as_str(),
            self.environment_path.as_str(),
            self.stack_name.as_str(),
        ]
        .join("-")
        .replace('/', "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_stack_name_replaces_slashes() {
        let ctx = DeploymentContext::new("proj", "dev/east", "app");
        assert_eq!(ctx.full_stack_name(), "proj-dev-east-app");
    }

    #[test]
    fn full_stack_name_flat_environment() {
        let ctx = DeploymentContext::new("acme", "prod", "web");
        assert_eq!(ctx.full_stack_name(), "acme-prod-web");
    }

    #[test]
    fn full_stack_name_nested_stack() {
        let ctx = DeploymentContext::new("acme", "prod/eu-west-1", "network/vpc");
        assert_eq!(ctx.full_stack_name(), "acme-prod-eu-west-1-network-vpc");
    }
}
