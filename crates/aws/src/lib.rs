//! AWS connector for stackhook hooks.
//!
//! [`AwsConnector`] implements [`stackhook_hooks::CloudConnector`] on the
//! AWS SDK:
//!
//! - **`CloudFormation`** lists the resources of the deployed stack
//! - **Auto Scaling** suspends and resumes scaling processes
//!
//! Both clients share one [`AwsBaseConfig`](config::AwsBaseConfig) for
//! region, endpoint override, and optional STS assume-role credentials.

pub mod auth;
pub mod autoscaling;
pub mod cloudformation;
pub mod config;
pub mod connector;
pub mod error;

pub use autoscaling::AutoScalingClient;
pub use cloudformation::CloudFormationClient;
pub use config::AwsBaseConfig;
pub use connector::AwsConnector;
pub use error::classify_sdk_error;
