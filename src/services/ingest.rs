//! Catalog ingest.
//!
//! Turns the raw catalog document into an immutable [`Catalog`]: accepts a
//! single record object or an array of record objects, drops drafts and
//! derives the sorted tag list.

use std::collections::BTreeSet;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::Record;

/// Reasons a catalog payload cannot be ingested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    /// The payload is neither an object nor an array.
    #[error("catalog payload must be an object or an array of objects, got {0}")]
    UnsupportedShape(String),

    /// An array element is not an object.
    #[error("catalog entry {index} is not an object (got {kind})")]
    InvalidRecord {
        /// Position of the entry in the array.
        index: usize,
        /// JSON kind of the entry.
        kind: String,
    },

    /// The document is not valid JSON.
    #[error("catalog document is not valid JSON: {0}")]
    Json(String),
}

/// The published records of a gallery.
///
/// Never contains a draft. The tag list is derived once at construction and
/// stays in sync with the records because neither can change afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<Record>,
    tags: Vec<String>,
    drafts_dropped: usize,
}

impl Catalog {
    /// Ingests a parsed catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::UnsupportedShape`] if the payload is not an
    /// object or array, and [`IngestError::InvalidRecord`] if an array entry
    /// is not an object.
    #[instrument(skip(payload))]
    pub fn ingest(payload: &Value) -> Result<Self, IngestError> {
        let records = match payload {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    Record::from_value(item).ok_or_else(|| IngestError::InvalidRecord {
                        index,
                        kind: json_kind(item).to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
            Value::Object(_) => Record::from_value(payload).into_iter().collect(),
            other => return Err(IngestError::UnsupportedShape(json_kind(other).to_string())),
        };

        Ok(Self::from_records(records))
    }

    /// Parses and ingests a catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Json`] for invalid JSON, otherwise the errors of
    /// [`Catalog::ingest`].
    pub fn parse(text: &str) -> Result<Self, IngestError> {
        let payload: Value =
            serde_json::from_str(text).map_err(|e| IngestError::Json(e.to_string()))?;
        Self::ingest(&payload)
    }

    /// Builds a catalog from records, dropping drafts.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut drafts_dropped = 0;
        let records: Vec<Record> = records
            .into_iter()
            .filter(|record| {
                let draft = record.is_draft();
                if draft {
                    drafts_dropped += 1;
                }
                !draft
            })
            .collect();

        let tags = records
            .iter()
            .flat_map(|r| r.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        debug!(
            records = records.len(),
            drafts_dropped, "catalog ingested"
        );

        Self {
            records,
            tags,
            drafts_dropped,
        }
    }

    /// Returns the published records in source order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns every tag used by a published record, sorted and deduplicated.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the number of published records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the catalog has no published records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns how many drafts were dropped at ingest.
    #[must_use]
    pub const fn drafts_dropped(&self) -> usize {
        self.drafts_dropped
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
