//! Authoring collaborator seam and fallback resolution

use async_trait::async_trait;

use jury_core::{CaseDraft, Result};

use crate::fallback::fallback_draft;
use crate::prompt::PromptParameters;

/// External generative component producing new case content.
///
/// Implementations wrap whatever backend is available (a hosted model,
/// a canned script in tests). Errors are expected and handled by
/// [`resolve_case`]; implementors should surface them rather than
/// invent content.
#[async_trait]
pub trait CaseAuthor: Send + Sync {
    async fn generate_case(&self, params: &PromptParameters) -> Result<CaseDraft>;
}

/// Author used when no generation backend is configured.
///
/// Always reports the collaborator as unavailable, so every resolution
/// serves the placeholder case. Missing credentials are an expected
/// deployment state, not an error.
pub struct OfflineAuthor;

#[async_trait]
impl CaseAuthor for OfflineAuthor {
    async fn generate_case(&self, _params: &PromptParameters) -> Result<CaseDraft> {
        Err(jury_core::JuryError::AuthoringUnavailable(
            "no generation backend configured".to_string(),
        ))
    }
}

/// Ask the collaborator for a case, falling back on any failure.
///
/// This is the only entry point the rest of the system uses; it cannot
/// fail. An unusable generation (error, malformed payload, empty display
/// fields) is logged and replaced with the deterministic placeholder.
pub async fn resolve_case(author: &dyn CaseAuthor, params: &PromptParameters) -> CaseDraft {
    match author.generate_case(params).await {
        Ok(draft) if draft.is_usable() => draft,
        Ok(_) => {
            tracing::warn!("authoring returned unusable draft, serving fallback");
            fallback_draft()
        }
        Err(e) => {
            tracing::warn!(error = %e, "authoring unavailable, serving fallback");
            fallback_draft()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jury_core::JuryError;

    /// Returns the scripted draft, or errors when none is scripted
    struct ScriptedAuthor {
        draft: Option<CaseDraft>,
    }

    #[async_trait]
    impl CaseAuthor for ScriptedAuthor {
        async fn generate_case(&self, _params: &PromptParameters) -> Result<CaseDraft> {
            self.draft
                .clone()
                .ok_or_else(|| JuryError::AuthoringUnavailable("scripted failure".to_string()))
        }
    }

    #[tokio::test]
    async fn test_resolve_passes_through_usable_draft() {
        let author = ScriptedAuthor {
            draft: Some(CaseDraft::new("T", "D", "/u/p", "/u/d")),
        };
        let draft = resolve_case(&author, &PromptParameters::default()).await;
        assert_eq!(draft.title, "T");
    }

    #[tokio::test]
    async fn test_resolve_falls_back_on_error() {
        let author = ScriptedAuthor { draft: None };
        let draft = resolve_case(&author, &PromptParameters::default()).await;
        assert_eq!(draft.title, "The Case of the Missing Data");
        assert!(draft.is_usable());
    }

    #[tokio::test]
    async fn test_offline_author_always_serves_fallback() {
        let draft = resolve_case(&OfflineAuthor, &PromptParameters::default()).await;
        assert_eq!(draft.title, "The Case of the Missing Data");
    }

    #[tokio::test]
    async fn test_resolve_falls_back_on_unusable_draft() {
        let author = ScriptedAuthor {
            draft: Some(CaseDraft::new("", "", "", "")),
        };
        let draft = resolve_case(&author, &PromptParameters::default()).await;
        assert_eq!(draft.title, "The Case of the Missing Data");
    }
}
