//! Jury Authoring: Case Authoring Collaborator
//!
//! A generative collaborator produces candidate case payloads from a
//! courtroom prompt. The collaborator may be missing credentials, return
//! malformed data, or fail outright; none of that ever reaches the end
//! user as a hard error. Every failure resolves to a deterministic
//! in-theme fallback case so the game loop is never blocked on this
//! dependency.

pub mod author;
pub mod fallback;
pub mod payload;
pub mod prompt;

pub use author::{resolve_case, CaseAuthor, OfflineAuthor};
pub use fallback::fallback_draft;
pub use payload::GeneratedPayload;
pub use prompt::PromptParameters;
