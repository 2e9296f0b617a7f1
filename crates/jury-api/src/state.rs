//! Shared application state
use std::sync::Arc;

use chrono::Utc;

use jury_authoring::{CaseAuthor, OfflineAuthor};
use jury_core::Result;
use jury_court::CourtService;
use jury_store::{MemoryStorage, Storage};

/// Collaborators handed to every handler. Constructed once per process
/// and injected; handlers never reach for globals.
#[derive(Clone)]
pub struct AppState {
    pub court: Arc<CourtService>,
    pub author: Arc<dyn CaseAuthor>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>, author: Arc<dyn CaseAuthor>) -> Self {
        Self {
            court: Arc::new(CourtService::new(storage)),
            author,
        }
    }

    /// Demo state: seeded in-memory store, no generation backend
    pub fn seeded() -> Result<Self> {
        let storage = Arc::new(MemoryStorage::seeded(Utc::now())?);
        Ok(Self::new(storage, Arc::new(OfflineAuthor)))
    }
}
