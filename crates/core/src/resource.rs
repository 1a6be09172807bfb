use serde::{Deserialize, Serialize};

/// CloudFormation resource type of an Auto Scaling group.
pub const AUTOSCALING_GROUP_TYPE: &str = "AWS::AutoScaling::AutoScalingGroup";

/// A resource belonging to a deployed stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackResource {
    /// CloudFormation resource type, e.g. `AWS::EC2::Instance`.
    pub resource_type: String,
    /// Physical ID assigned by the provider.
    pub physical_resource_id: String,
}

impl StackResource {
    pub fn new(resource_type: impl Into<String>, physical_resource_id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            physical_resource_id: physical_resource_id.into(),
        }
    }

    pub fn is_autoscaling_group(&self) -> bool {
        self.resource_type == AUTOSCALING_GROUP_TYPE
    }
}

/// Physical IDs of every Auto Scaling group in `resources`, in input order.
pub fn autoscaling_group_names(resources: &[StackResource]) -> Vec<String> {
    resources
        .iter()
        .filter(|r| r.is_autoscaling_group())
        .map(|r| r.physical_resource_id.clone())
        .collect()
}
