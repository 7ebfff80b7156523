//! Record store — prior registrations used for duplicate detection.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RecordStoreError;

/// A prior registration: an ID number and the photo file it was filed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub photo_name: String,
}

impl Record {
    pub fn new(id: impl Into<String>, photo_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            photo_name: photo_name.into(),
        }
    }

    /// Exact match on the ID, case-insensitive match on the photo name.
    pub fn matches(&self, user_id: &str, photo_name: &str) -> bool {
        self.id == user_id && self.photo_name.to_lowercase() == photo_name.to_lowercase()
    }
}

/// Read-only source of prior registrations.
pub trait RecordStore: Send + Sync {
    fn records(&self) -> &[Record];

    /// First record matching the ID and photo name, if any.
    fn find_duplicate(&self, user_id: &str, photo_name: &str) -> Option<&Record> {
        self.records()
            .iter()
            .find(|r| r.matches(user_id, photo_name))
    }
}

/// A fixed, in-memory record list.
#[derive(Debug, Clone, Default)]
pub struct StaticRecordStore {
    records: Vec<Record>,
}

impl StaticRecordStore {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// The built-in sample registrations.
    pub fn sample() -> Self {
        Self::new(vec![
            Record::new("123-45-6789", "passport.png"),
            Record::new("555-66-7777", "duplicate.png"),
            Record::new("999-88-7777", "jane.png"),
        ])
    }

    /// Load a record list from a JSON array of `{"id", "photo_name"}` objects.
    pub fn from_json_file(path: &Path) -> Result<Self, RecordStoreError> {
        let raw = std::fs::read_to_string(path).map_err(|source| RecordStoreError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let records: Vec<Record> =
            serde_json::from_str(&raw).map_err(|source| RecordStoreError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        tracing::info!(path = %path.display(), count = records.len(), "Loaded records");
        Ok(Self::new(records))
    }
}

impl RecordStore for StaticRecordStore {
    fn records(&self) -> &[Record] {
        &self.records
    }
}
