//! Jury Core: Data Model, Error Taxonomy, and Day Arithmetic
//!
//! Foundation crate for the Reddit Jury court game. Defines the shared
//! case/verdict data model, the unified error type, and the UTC day-key
//! helpers every other crate keys off.

pub mod data_model;
pub mod day;
pub mod error;

pub use data_model::{
    Case, CaseDraft, Evidence, EvidenceDraft, Stance, User, UserProfile, Verdict, VerdictDraft,
    VERDICT_MAX_LEN,
};
pub use day::{day_key, format_countdown, next_utc_midnight, time_until_reset, today_key};
pub use error::{JuryError, Result};

/// Version of the jury engine
pub const JURY_VERSION: &str = "1.0.0";
