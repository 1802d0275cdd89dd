//! Per-template build state machine
//!
//! `Idle → WorkspaceReset → FilesMaterialized → Archived → Done`

use std::fmt;

/// Phase of a single template build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuildPhase {
    Idle,
    /// Scratch workspace removed and recreated
    WorkspaceReset,
    /// Template files written into the workspace
    FilesMaterialized,
    /// Workspace packed into `<name>.zip`
    Archived,
    Done,
}

impl BuildPhase {
    /// The phase that follows this one; `Done` is terminal
    pub fn next(self) -> Option<BuildPhase> {
        match self {
            BuildPhase::Idle => Some(BuildPhase::WorkspaceReset),
            BuildPhase::WorkspaceReset => Some(BuildPhase::FilesMaterialized),
            BuildPhase::FilesMaterialized => Some(BuildPhase::Archived),
            BuildPhase::Archived => Some(BuildPhase::Done),
            BuildPhase::Done => None,
        }
    }

    /// Stable identifier used in JSON events
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildPhase::Idle => "idle",
            BuildPhase::WorkspaceReset => "workspace_reset",
            BuildPhase::FilesMaterialized => "files_materialized",
            BuildPhase::Archived => "archived",
            BuildPhase::Done => "done",
        }
    }
}

impl fmt::Display for BuildPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildPhase::Idle => write!(f, "idle"),
            BuildPhase::WorkspaceReset => write!(f, "workspace reset"),
            BuildPhase::FilesMaterialized => write!(f, "materialize"),
            BuildPhase::Archived => write!(f, "archive"),
            BuildPhase::Done => write!(f, "done"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_advance_in_order() {
        let mut phase = BuildPhase::Idle;
        let mut seen = vec![phase];
        while let Some(next) = phase.next() {
            assert!(next > phase);
            seen.push(next);
            phase = next;
        }
        assert_eq!(
            seen,
            vec![
                BuildPhase::Idle,
                BuildPhase::WorkspaceReset,
                BuildPhase::FilesMaterialized,
                BuildPhase::Archived,
                BuildPhase::Done,
            ]
        );
    }
}
