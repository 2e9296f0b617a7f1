//! Jury Session: Viewer-Facing Phase Controller
//!
//! Per-viewer, in-memory state machine over the court service data:
//! Discovery (examine evidence) → Deliberation (rule) → Result (watch
//! the jury). Evidence reveal flags and the XP/streak profile live here,
//! scoped to the viewer's session; nothing in this crate writes case
//! state back to storage.

pub mod phase;
pub mod profile;
pub mod session;

pub use phase::Phase;
pub use profile::{award_reveal, award_submission, XP_PER_LEVEL, XP_PER_REVEAL, XP_PER_SUBMISSION};
pub use session::{Session, SessionState};
