use async_trait::async_trait;
use stackhook_core::{HookArgument, HookError};

use crate::context::HookContext;

/// Strongly-typed hook trait with native `async fn`.
///
/// This trait is **not** object-safe. Use [`DynHook`] for dynamic dispatch;
/// every `Hook` implements it through a blanket implementation.
pub trait Hook: Send + Sync {
    /// Name the hook is registered and referenced under.
    fn name(&self) -> &str;

    /// Run the hook once with the argument from the stack config.
    fn run(
        &self,
        argument: &HookArgument,
        ctx: &HookContext,
    ) -> impl std::future::Future<Output = Result<(), HookError>> + Send;
}

/// Object-safe hook trait for use behind `Arc<dyn DynHook>`.
///
/// Implement [`Hook`] instead and rely on the blanket implementation.
#[async_trait]
pub trait DynHook: Send + Sync {
    fn name(&self) -> &str;

    async fn run(&self, argument: &HookArgument, ctx: &HookContext) -> Result<(), HookError>;
}

#[async_trait]
impl<T: Hook + Sync> DynHook for T {
    fn name(&self) -> &str {
        Hook::name(self)
    }

    async fn run(&self, argument: &HookArgument, ctx: &HookContext) -> Result<(), HookError> {
        Hook::run(self, argument, ctx).await
    }
}
