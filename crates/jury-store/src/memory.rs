//! In-memory store standing in for the platform key-value service
use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use tokio::sync::RwLock;

use jury_core::Result;

use crate::seed;
use crate::storage::{Storage, COLLECTION_CASES, COLLECTION_VERDICTS};

/// Whole-collection map behind an async lock. Optional latency mimics
/// the round trip to the real store so loading states stay exercisable.
pub struct MemoryStorage {
    collections: RwLock<HashMap<String, Vec<Value>>>,
    latency: Duration,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
            latency: Duration::ZERO,
        }
    }

    /// Simulate a store round trip of the given duration per call
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// A store pre-loaded with the canonical seed case and verdicts,
    /// keyed to the day of `now`
    pub fn seeded(now: DateTime<Utc>) -> Result<Self> {
        let store = Self::new();
        let case = seed::seed_case(now);
        let verdicts = seed::seed_verdicts(&case.id);

        let mut collections = HashMap::new();
        collections.insert(
            COLLECTION_CASES.to_string(),
            vec![serde_json::to_value(&case)?],
        );
        collections.insert(
            COLLECTION_VERDICTS.to_string(),
            verdicts
                .iter()
                .map(serde_json::to_value)
                .collect::<std::result::Result<Vec<_>, _>>()?,
        );

        Ok(Self {
            collections: RwLock::new(collections),
            latency: Duration::ZERO,
        })
    }

    async fn delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, collection: &str) -> Result<Option<Vec<Value>>> {
        self.delay().await;
        let collections = self.collections.read().await;
        Ok(collections.get(collection).cloned())
    }

    async fn put(&self, collection: &str, records: Vec<Value>) -> Result<()> {
        self.delay().await;
        let mut collections = self.collections.write().await;
        collections.insert(collection.to_string(), records);
        Ok(())
    }
}
