//! Generated payload decoding
//!
//! The collaborator is asked for strict JSON: title, description,
//! plaintiff, defendant, and an evidence array of `{title, content}`
//! pairs. Anything that fails to decode, or decodes with empty display
//! fields, is unusable and triggers the fallback.

use serde::{Deserialize, Serialize};

use jury_core::{CaseDraft, EvidenceDraft, JuryError, Result};

/// Raw generation response before it becomes a `CaseDraft`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPayload {
    pub title: String,
    pub description: String,
    pub plaintiff: String,
    pub defendant: String,
    #[serde(default)]
    pub evidence: Vec<GeneratedEvidence>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedEvidence {
    pub title: String,
    pub content: String,
}

impl GeneratedPayload {
    /// Decode a raw response body into a usable draft
    pub fn decode(raw: &str) -> Result<CaseDraft> {
        let payload: GeneratedPayload = serde_json::from_str(raw)
            .map_err(|e| JuryError::AuthoringUnavailable(format!("malformed response: {}", e)))?;
        payload.into_draft()
    }

    /// Convert into a draft, rejecting empty display fields
    pub fn into_draft(self) -> Result<CaseDraft> {
        let draft = CaseDraft {
            title: self.title,
            description: self.description,
            plaintiff: self.plaintiff,
            defendant: self.defendant,
            evidence: self
                .evidence
                .into_iter()
                .map(|e| EvidenceDraft {
                    title: e.title,
                    content: e.content,
                })
                .collect(),
        };
        if !draft.is_usable() {
            return Err(JuryError::AuthoringUnavailable(
                "response missing display fields".to_string(),
            ));
        }
        Ok(draft)
    }
}
