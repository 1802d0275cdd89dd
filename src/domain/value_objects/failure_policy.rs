//! Failure policy value object - what the build does after a template fails
//!
//! - `Abort`: no further templates are started (the default)
//! - `Continue`: every remaining template is still attempted

use serde::{Deserialize, Serialize};

/// Policy applied when one template of the catalog fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop scheduling templates after the first failure
    #[default]
    Abort,
    /// Skip only the failing template and keep building
    Continue,
}

impl FailurePolicy {
    /// Parse a user-supplied policy name
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "abort" | "stop" => Some(FailurePolicy::Abort),
            "continue" | "keep-going" => Some(FailurePolicy::Continue),
            _ => None,
        }
    }

    /// Returns true if a failure should stop the run
    pub fn stops_on_failure(&self) -> bool {
        matches!(self, FailurePolicy::Abort)
    }
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailurePolicy::Abort => write!(f, "abort"),
            FailurePolicy::Continue => write!(f, "continue"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!(FailurePolicy::parse("ABORT"), Some(FailurePolicy::Abort));
        assert_eq!(FailurePolicy::parse("keep-going"), Some(FailurePolicy::Continue));
        assert_eq!(FailurePolicy::parse("retry"), None);
    }

    #[test]
    fn default_is_abort() {
        assert!(FailurePolicy::default().stops_on_failure());
    }
}
