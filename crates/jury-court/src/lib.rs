//! Jury Court: Case and Verdict Authority
//!
//! Sole owner of case/verdict persistence rules. Every mutation to the
//! two collections flows through [`CourtService`]; callers hold it
//! explicitly (constructed once, handed to the session controller)
//! rather than reaching it through any ambient global.

pub mod ranking;
pub mod service;

pub use ranking::rank;
pub use service::{CourtService, VoteDirection};
