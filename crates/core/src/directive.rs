use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HookError;

/// Separator between the action and the scaling process name.
pub const DIRECTIVE_SEPARATOR: &str = "::";

/// Untyped argument handed to a hook by the host, as parsed from stack config.
pub type HookArgument = serde_json::Value;

/// Scaling processes recognised by the Auto Scaling API.
///
/// Names outside this list are still forwarded; the API is the authority.
pub const KNOWN_SCALING_PROCESSES: &[&str] = &[
    "Launch",
    "Terminate",
    "AddToLoadBalancer",
    "AlarmNotification",
    "AZRebalance",
    "HealthCheck",
    "InstanceRefresh",
    "ReplaceUnhealthy",
    "ScheduledActions",
];

/// Returns `true` if `name` is one of [`KNOWN_SCALING_PROCESSES`].
pub fn is_known_scaling_process(name: &str) -> bool {
    KNOWN_SCALING_PROCESSES.contains(&name)
}

/// Whether scaling processes are resumed or suspended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalingAction {
    Resume,
    Suspend,
}

impl ScalingAction {
    /// The directive keyword for this action.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Resume => "resume",
            Self::Suspend => "suspend",
        }
    }

    /// The Auto Scaling operation invoked for this action
    /// (`resume_processes` or `suspend_processes`).
    pub fn operation_name(self) -> &'static str {
        match self {
            Self::Resume => "resume_processes",
            Self::Suspend => "suspend_processes",
        }
    }
}

impl fmt::Display for ScalingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScalingAction {
    type Err = HookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resume" => Ok(Self::Resume),
            "suspend" => Ok(Self::Suspend),
            other => Err(HookError::InvalidArgumentValue {
                value: other.to_owned(),
                reason: "valid actions are \"resume\" or \"suspend\"".to_owned(),
            }),
        }
    }
}

/// A parsed `<resume|suspend>::<process-name>` directive.
///
/// The directive is split on the first `::` only; anything after it,
/// including further separators, belongs to the process name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    pub action: ScalingAction,
    pub process_name: String,
}

impl Directive {
    /// Parse a directive string.
    ///
    /// Checks run in order and the first failure wins: the separator must
    /// be present, the action must be `resume` or `suspend`, and the
    /// process name must be non-empty.
    pub fn parse(input: &str) -> Result<Self, HookError> {
        let Some((action, process_name)) = input.split_once(DIRECTIVE_SEPARATOR) else {
            return Err(HookError::InvalidArgumentSyntax(input.to_owned()));
        };

        let action: ScalingAction = action.parse()?;

        if process_name.is_empty() {
            return Err(HookError::InvalidArgumentValue {
                value: input.to_owned(),
                reason: "the scaling process name must not be empty".to_owned(),
            });
        }

        Ok(Self {
            action,
            process_name: process_name.to_owned(),
        })
    }

    /// Narrow an untyped hook argument to a string, then parse it.
    pub fn from_argument(argument: &HookArgument) -> Result<Self, HookError> {
        let raw = argument
            .as_str()
            .ok_or_else(|| HookError::InvalidArgumentType(argument.to_string()))?;
        Self::parse(raw)
    }
}

impl FromStr for Directive {
    type Err = HookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{DIRECTIVE_SEPARATOR}{}", self.action, self.process_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_suspend() {
        let directive = Directive::parse("suspend::Launch").unwrap();
        assert_eq!(directive.action, ScalingAction::Suspend);
        assert_eq!(directive.process_name, "Launch");
    }

    #[test]
    fn parse_resume() {
        let directive: Directive = "resume::ScheduledActions".parse().unwrap();
        assert_eq!(directive.action, ScalingAction::Resume);
        assert_eq!(directive.process_name, "ScheduledActions");
    }

    #[test]
    fn missing_separator_is_syntax_error() {
        for input in ["", "suspend", "suspend:Launch", "resume Terminate"] {
            let err = Directive::parse(input).unwrap_err();
            assert!(
                matches!(err, HookError::InvalidArgumentSyntax(ref arg) if arg == input),
                "unexpected error for {input:?}: {err:?}"
            );
        }
    }

    #[test]
    fn unknown_action_is_value_error() {
        for input in ["::x", "bogus::x", "Suspend::Launch", " suspend::Launch"] {
            let err = Directive::parse(input).unwrap_err();
            assert!(
                matches!(err, HookError::InvalidArgumentValue { .. }),
                "unexpected error for {input:?}: {err:?}"
            );
        }
    }

    #[test]
    fn value_error_names_the_action() {
        let err = Directive::parse("bogus::Launch").unwrap_err();
        assert!(err.to_string().contains("\"bogus\""));
    }

    #[test]
    fn action_is_checked_before_process_name() {
        let err = Directive::parse("bogus::").unwrap_err();
        match err {
            HookError::InvalidArgumentValue { value, .. } => assert_eq!(value, "bogus"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_process_name_is_value_error() {
        let err = Directive::parse("suspend::").unwrap_err();
        assert!(matches!(err, HookError::InvalidArgumentValue { .. }));
    }

    #[test]
    fn splits_on_first_separator_only() {
        let directive = Directive::parse("suspend::Launch::Extra").unwrap();
        assert_eq!(directive.action, ScalingAction::Suspend);
        assert_eq!(directive.process_name, "Launch::Extra");
    }

    #[test]
    fn from_argument_rejects_non_strings() {
        for argument in [
            serde_json::json!(42),
            serde_json::json!(true),
            serde_json::json!(null),
            serde_json::json!(["suspend::Launch"]),
            serde_json::json!({"suspend": "Launch"}),
        ] {
            let err = Directive::from_argument(&argument).unwrap_err();
            assert!(
                matches!(err, HookError::InvalidArgumentType(_)),
                "unexpected error for {argument}: {err:?}"
            );
        }
    }

    #[test]
    fn type_error_names_the_value() {
        let err = Directive::from_argument(&serde_json::json!(42)).unwrap_err();
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn from_argument_accepts_strings() {
        let directive = Directive::from_argument(&serde_json::json!("resume::Terminate")).unwrap();
        assert_eq!(directive.action, ScalingAction::Resume);
        assert_eq!(directive.process_name, "Terminate");
    }

    #[test]
    fn operation_names() {
        assert_eq!(ScalingAction::Resume.operation_name(), "resume_processes");
        assert_eq!(ScalingAction::Suspend.operation_name(), "suspend_processes");
    }

    #[test]
    fn display_matches_input_form() {
        let directive = Directive::parse("suspend::AZRebalance").unwrap();
        assert_eq!(directive.to_string(), "suspend::AZRebalance");
    }

    #[test]
    fn known_processes() {
        assert!(is_known_scaling_process("Launch"));
        assert!(is_known_scaling_process("AZRebalance"));
        assert!(!is_known_scaling_process("launch"));
        assert!(!is_known_scaling_process("Teleport"));
    }
}
