//! In-memory patient store (for testing).

use crate::{PatientStore, Result};
use async_trait::async_trait;
use muawin_core::{PatientId, PatientRecord};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Patient store kept in a map. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<BTreeMap<PatientId, PatientRecord>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `records`.
    pub fn with_records(records: impl IntoIterator<Item = PatientRecord>) -> Self {
        let records = records.into_iter().map(|r| (r.id.clone(), r)).collect();
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl PatientStore for MemoryStore {
    async fn lookup(&self, id: &PatientId) -> Result<Option<PatientRecord>> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn upsert(&self, record: &PatientRecord) -> Result<()> {
        record.validate()?;
        self.records
            .write()
            .await
            .insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<PatientRecord>> {
        Ok(self.records.read().await.values().cloned().collect())
    }
}
