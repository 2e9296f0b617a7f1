//! Deterministic fallback case
//!
//! Served whenever the authoring collaborator is unavailable or returns
//! unusable data. The content communicates the failure in-theme; it is
//! part of the collaborator contract, not an error path.

use once_cell::sync::Lazy;

use jury_core::CaseDraft;

static FALLBACK: Lazy<CaseDraft> = Lazy::new(|| {
    CaseDraft::new(
        "The Case of the Missing Data",
        "The AI is on strike. The judge is confused.",
        "The Users",
        "The Server",
    )
    .with_evidence("Exhibit A", "A blank sheet of paper.")
    .with_evidence("Testimony", "I saw nothing.")
    .with_evidence("History", "The logs are empty.")
});

/// The placeholder case draft, identical on every call
pub fn fallback_draft() -> CaseDraft {
    FALLBACK.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_usable() {
        let draft = fallback_draft();
        assert!(draft.is_usable());
        assert_eq!(draft.evidence.len(), 3);
    }

    #[test]
    fn test_fallback_is_deterministic() {
        let a = fallback_draft();
        let b = fallback_draft();
        assert_eq!(a.title, b.title);
        assert_eq!(a.evidence.len(), b.evidence.len());
    }
}
