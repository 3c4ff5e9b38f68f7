//! Storage abstraction.

use crate::Result;
use async_trait::async_trait;
use muawin_core::{PatientId, PatientRecord};

/// A single-table store of patient records keyed by [`PatientId`].
#[async_trait]
pub trait PatientStore: Send + Sync {
    /// Reads the record for `id`. `Ok(None)` means the patient is new.
    async fn lookup(&self, id: &PatientId) -> Result<Option<PatientRecord>>;

    /// Writes every field of `record`, inserting or replacing the row for
    /// its id. Last write wins.
    async fn upsert(&self, record: &PatientRecord) -> Result<()>;

    /// All records, ordered by id.
    async fn list_all(&self) -> Result<Vec<PatientRecord>>;
}
