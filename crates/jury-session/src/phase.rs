//! Game phase machine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Viewer-local stage of play.
///
/// Strictly forward: Discovery → Deliberation → Result. A resuming
/// viewer who already ruled is placed directly in `Result` at load time;
/// that is a derivation, not a transition of a running machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Discovery,
    Deliberation,
    Result,
}

impl Phase {
    /// Whether `next` is a legal forward step from here
    pub fn can_advance_to(&self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Phase::Discovery, Phase::Deliberation) | (Phase::Deliberation, Phase::Result)
        )
    }

    /// `Result` has no further transitions within a session
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Result)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Discovery => "DISCOVERY",
            Phase::Deliberation => "DELIBERATION",
            Phase::Result => "RESULT",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_steps_allowed() {
        assert!(Phase::Discovery.can_advance_to(Phase::Deliberation));
        assert!(Phase::Deliberation.can_advance_to(Phase::Result));
    }

    #[test]
    fn test_backward_and_skipping_steps_rejected() {
        assert!(!Phase::Deliberation.can_advance_to(Phase::Discovery));
        assert!(!Phase::Result.can_advance_to(Phase::Deliberation));
        assert!(!Phase::Discovery.can_advance_to(Phase::Result));
        assert!(!Phase::Discovery.can_advance_to(Phase::Discovery));
    }

    #[test]
    fn test_result_is_terminal() {
        assert!(Phase::Result.is_terminal());
        assert!(!Phase::Discovery.is_terminal());
        assert!(!Phase::Deliberation.is_terminal());
    }

    #[test]
    fn test_serialization_tags() {
        let json = serde_json::to_string(&Phase::Deliberation).unwrap();
        assert_eq!(json, "\"DELIBERATION\"");
    }
}
