//! Deployment hooks for stackhook.
//!
//! A hook is resolved by name from a [`HookRegistry`] and run once with the
//! argument from the stack config and a [`HookContext`] describing the
//! deployment. Cloud access goes through the [`CloudConnector`] seam:
//!
//! - [`MemoryConnector`] serves canned resources and records calls (tests,
//!   local runs)
//! - [`DryRunConnector`] reads through to another connector but only logs
//!   mutating calls
//! - `stackhook-aws` provides the AWS SDK implementation

pub mod asg_scaling_processes;
pub mod connector;
pub mod context;
pub mod dry_run;
pub mod hook;
pub mod memory;
pub mod registry;

pub use asg_scaling_processes::{ASG_SCALING_PROCESSES, AsgScalingProcesses};
pub use connector::CloudConnector;
pub use context::HookContext;
pub use dry_run::DryRunConnector;
pub use hook::{DynHook, Hook};
pub use memory::{MemoryConnector, ScalingCall};
pub use registry::HookRegistry;
