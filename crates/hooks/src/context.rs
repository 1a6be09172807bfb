use std::sync::Arc;

use stackhook_core::DeploymentContext;

use crate::connector::CloudConnector;

/// Everything a hook may read while it runs.
#[derive(Clone)]
pub struct HookContext {
    /// Identity of the stack being deployed.
    pub deployment: DeploymentContext,
    /// Connector used for all cloud API calls.
    pub connector: Arc<dyn CloudConnector>,
}

impl HookContext {
    pub fn new(deployment: DeploymentContext, connector: Arc<dyn CloudConnector>) -> Self {
        Self {
            deployment,
            connector,
        }
    }
}

impl std::fmt::Debug for HookContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookContext")
            .field("deployment", &self.deployment)
            .field("connector", &"<CloudConnector>")
            .finish()
    }
}
