//! SQLite-backed patient store.
//!
//! Each operation opens its own connection and closes it before
//! returning; nothing is held between requests.

use crate::codec::{
    decode_age, decode_conditions, decode_gender, decode_language, encode_conditions,
};
use crate::{PatientStore, Result};
use async_trait::async_trait;
use muawin_core::{PatientId, PatientRecord};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{ConnectOptions, Connection, Row};
use std::path::{Path, PathBuf};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS patients (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL DEFAULT '',
    age INTEGER NOT NULL DEFAULT 0,
    gender TEXT NOT NULL DEFAULT 'Male',
    pre_conditions TEXT NOT NULL DEFAULT '[]',
    language TEXT NOT NULL DEFAULT 'English'
)";

/// `id` with the whitespace `PatientId` strips removed, so ids written
/// untrimmed by older tools still match.
const TRIMMED_ID: &str = "trim(id, ' ' || char(9, 10, 13))";

const SELECT_COLUMNS: &str = "SELECT id, name, age, gender, pre_conditions, language FROM patients";

/// Patient store in a local SQLite file.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl SqliteStore {
    /// Opens the store at `path`, creating the file and the `patients`
    /// table if either is missing. Existing tables are left untouched.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);
        let store = Self { path, options };

        let mut conn = store.connect().await?;
        sqlx::query(CREATE_TABLE).execute(&mut conn).await?;
        conn.close().await?;

        tracing::info!(path = %store.path.display(), "Opened patient store");
        Ok(store)
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn connect(&self) -> Result<SqliteConnection> {
        Ok(self.options.connect().await?)
    }
}

fn record_from_row(row: &SqliteRow) -> Result<PatientRecord> {
    let raw_id: String = row.try_get("id")?;
    let id = PatientId::new(&raw_id)?;
    let name: Option<String> = row.try_get("name")?;
    let age: Option<i64> = row.try_get("age")?;
    let gender: Option<String> = row.try_get("gender")?;
    let language: Option<String> = row.try_get("language")?;
    let pre_conditions: Option<String> = row.try_get("pre_conditions")?;

    Ok(PatientRecord {
        name: name.unwrap_or_default(),
        age: decode_age(&id, age),
        gender: decode_gender(&id, gender.as_deref()),
        language: decode_language(&id, language.as_deref()),
        conditions: decode_conditions(&id, pre_conditions.as_deref()),
        id,
    })
}

#[async_trait]
impl PatientStore for SqliteStore {
    async fn lookup(&self, id: &PatientId) -> Result<Option<PatientRecord>> {
        let mut conn = self.connect().await?;
        let sql = format!("{SELECT_COLUMNS} WHERE {TRIMMED_ID} = ? ORDER BY rowid LIMIT 1");
        let row = sqlx::query(&sql)
            .bind(id.as_str())
            .fetch_optional(&mut conn)
            .await?;
        conn.close().await?;

        let record = row.as_ref().map(record_from_row).transpose()?;
        tracing::debug!(patient = %id, found = record.is_some(), "Lookup");
        Ok(record)
    }

    async fn upsert(&self, record: &PatientRecord) -> Result<()> {
        record.validate()?;
        let pre_conditions = encode_conditions(&record.conditions)?;

        let mut conn = self.connect().await?;
        let mut tx = conn.begin().await?;

        // Existence check instead of ON CONFLICT: older files may lack a
        // unique constraint on `id`, and may hold ids with stray whitespace.
        let exists_sql = format!("SELECT 1 FROM patients WHERE {TRIMMED_ID} = ? LIMIT 1");
        let exists = sqlx::query(&exists_sql)
            .bind(record.id.as_str())
            .fetch_optional(&mut *tx)
            .await?
            .is_some();

        let sql = if exists {
            format!(
                "UPDATE patients SET name = ?, age = ?, gender = ?, pre_conditions = ?, \
                 language = ? WHERE {TRIMMED_ID} = ?"
            )
        } else {
            "INSERT INTO patients (name, age, gender, pre_conditions, language, id) \
             VALUES (?, ?, ?, ?, ?, ?)"
                .to_string()
        };
        sqlx::query(&sql)
            .bind(&record.name)
            .bind(i64::from(record.age))
            .bind(record.gender.as_str())
            .bind(&pre_conditions)
            .bind(record.language.as_str())
            .bind(record.id.as_str())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        conn.close().await?;

        tracing::info!(patient = %record.id, updated = exists, "Saved patient record");
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<PatientRecord>> {
        let mut conn = self.connect().await?;
        let rows = sqlx::query(&format!("{SELECT_COLUMNS} ORDER BY {TRIMMED_ID}, rowid"))
            .fetch_all(&mut conn)
            .await?;
        conn.close().await?;

        // Rows sharing a trimmed id collapse to the first, matching `lookup`.
        let mut records: Vec<PatientRecord> = Vec::with_capacity(rows.len());
        for row in &rows {
            match record_from_row(row) {
                Ok(record) if records.last().is_some_and(|last| last.id == record.id) => {
                    tracing::warn!(patient = %record.id, "Skipping duplicate row");
                }
                Ok(record) => records.push(record),
                Err(crate::Error::Core(e)) => {
                    tracing::warn!(error = %e, "Skipping row with unusable id");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(records)
    }
}
