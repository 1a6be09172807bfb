use std::collections::HashMap;
use std::sync::Arc;

use stackhook_core::{HookArgument, HookError};
use tracing::debug;

use crate::asg_scaling_processes::AsgScalingProcesses;
use crate::context::HookContext;
use crate::hook::DynHook;

/// Hooks indexed by the name stack configs reference them with.
#[derive(Default)]
pub struct HookRegistry {
    hooks: HashMap<String, Arc<dyn DynHook>>,
}

impl HookRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in hook.
    pub fn with_builtin_hooks() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(AsgScalingProcesses::new()));
        registry
    }

    /// Register a hook under its own name, replacing any previous hook with
    /// that name.
    pub fn register(&mut self, hook: Arc<dyn DynHook>) {
        let name = hook.name().to_owned();
        debug!(hook = %name, "registering hook");
        self.hooks.insert(name, hook);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn DynHook>> {
        self.hooks.get(name).cloned()
    }

    /// Registered hook names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.hooks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Run the hook registered as `name`.
    pub async fn run(
        &self,
        name: &str,
        argument: &HookArgument,
        ctx: &HookContext,
    ) -> Result<(), HookError> {
        let hook = self
            .get(name)
            .ok_or_else(|| HookError::UnknownHook(name.to_owned()))?;
        hook.run(argument, ctx).await
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookRegistry")
            .field("hooks", &self.names())
            .finish()
    }
}
