pub mod context;
pub mod directive;
pub mod error;
pub mod resource;

pub use context::DeploymentContext;
pub use directive::{
    DIRECTIVE_SEPARATOR, Directive, HookArgument, KNOWN_SCALING_PROCESSES, ScalingAction,
    is_known_scaling_process,
};
pub use error::{CloudError, HookError};
pub use resource::{AUTOSCALING_GROUP_TYPE, StackResource, autoscaling_group_names};
