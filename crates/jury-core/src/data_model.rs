//! Data Model: Case, Evidence, Verdict, UserProfile
//!
//! Field names serialize in camelCase to match the hosting platform's
//! key-value payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::day::day_key;

/// Maximum verdict text length after trimming
pub const VERDICT_MAX_LEN: usize = 140;

/// The daily scenario under judgment.
///
/// `id` is the UTC calendar date (`YYYY-MM-DD`) the case was created on;
/// it doubles as the "is this today's case" test. At most one case per id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: String,
    pub title: String,
    pub description: String,
    pub plaintiff: String,
    pub defendant: String,
    pub evidence: Vec<Evidence>,
    /// Epoch milliseconds; display/lock heuristics only, never identity
    pub created_at: i64,
}

impl Case {
    /// Materialize a draft into today's case
    pub fn from_draft(draft: CaseDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: day_key(now),
            title: draft.title,
            description: draft.description,
            plaintiff: draft.plaintiff,
            defendant: draft.defendant,
            evidence: draft
                .evidence
                .into_iter()
                .enumerate()
                .map(|(i, e)| Evidence::new(format!("ev-{}", i), e.title, e.content))
                .collect(),
            created_at: now.timestamp_millis(),
        }
    }

    /// Whether this case is the active one for the given instant
    pub fn is_active_on(&self, now: DateTime<Utc>) -> bool {
        self.id == day_key(now)
    }
}

/// A discoverable clue attached to a case, revealed on demand
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evidence {
    pub id: String,
    pub title: String,
    pub content: String,
    pub is_revealed: bool,
}

impl Evidence {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            is_revealed: false,
        }
    }

    /// Flip the reveal flag. Monotonic: revealing twice is a no-op.
    /// Returns `true` only on the first reveal.
    pub fn reveal(&mut self) -> bool {
        if self.is_revealed {
            return false;
        }
        self.is_revealed = true;
        true
    }
}

/// Categorical ruling value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stance {
    Guilty,
    Innocent,
    /// "Everyone Sucks Here"
    Esh,
}

impl Stance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stance::Guilty => "GUILTY",
            Stance::Innocent => "INNOCENT",
            Stance::Esh => "ESH",
        }
    }
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user-submitted ruling on a case.
///
/// `(case_id, author)` is unique across all verdicts; votes may go
/// negative in principle, only the voting operation mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub id: String,
    pub case_id: String,
    pub author: String,
    pub text: String,
    pub stance: Stance,
    pub votes: i64,
}

impl Verdict {
    /// Materialize a draft with a server-assigned id and zero votes
    pub fn from_draft(draft: VerdictDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            case_id: draft.case_id,
            author: draft.author,
            text: draft.text,
            stance: draft.stance,
            votes: 0,
        }
    }
}

/// Identity handed in from the hosting context; no auth design here
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
}

impl User {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
        }
    }
}

/// Per-session gamification counters. Not persisted beyond the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    pub xp: u32,
    pub level: u32,
    pub streak: u32,
    /// Day key of the last submission, `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_played: Option<String>,
}

impl UserProfile {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            xp: 0,
            level: 1,
            streak: 0,
            last_played: None,
        }
    }
}

/// Candidate case payload from the authoring collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDraft {
    pub title: String,
    pub description: String,
    pub plaintiff: String,
    pub defendant: String,
    #[serde(default)]
    pub evidence: Vec<EvidenceDraft>,
}

impl CaseDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        plaintiff: impl Into<String>,
        defendant: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            plaintiff: plaintiff.into(),
            defendant: defendant.into(),
            evidence: Vec::new(),
        }
    }

    pub fn with_evidence(mut self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.evidence.push(EvidenceDraft {
            title: title.into(),
            content: content.into(),
        });
        self
    }

    /// A draft is usable when every display field is non-empty
    pub fn is_usable(&self) -> bool {
        !(self.title.trim().is_empty()
            || self.description.trim().is_empty()
            || self.plaintiff.trim().is_empty()
            || self.defendant.trim().is_empty())
    }
}

/// One piece of evidence inside a case draft
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceDraft {
    pub title: String,
    pub content: String,
}

/// A submission candidate, validated by the court service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictDraft {
    pub case_id: String,
    pub author: String,
    pub text: String,
    pub stance: Stance,
}

impl VerdictDraft {
    pub fn new(
        case_id: impl Into<String>,
        author: impl Into<String>,
        text: impl Into<String>,
        stance: Stance,
    ) -> Self {
        Self {
            case_id: case_id.into(),
            author: author.into(),
            text: text.into(),
            stance,
        }
    }
}
