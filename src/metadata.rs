//! Founders Online metadata records.
//!
//! Records are kept as raw JSON objects. Only `permalink` is interpreted;
//! every other field passes through to the output untouched and in its
//! original order.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::result::Extraction;

/// Field holding the document URL.
pub const PERMALINK_FIELD: &str = "permalink";

/// Field the extracted text (or failure message) is written to.
pub const CONTENT_FIELD: &str = "content";

/// Field holding the tagged failure, present only when extraction failed.
pub const CONTENT_ERROR_FIELD: &str = "content_error";

/// One metadata entry from the archive export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataRecord(Map<String, Value>);

impl MetadataRecord {
    /// Wrap an existing JSON object.
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// The record's permalink, if it is present and a string.
    #[must_use]
    pub fn permalink(&self) -> Option<&str> {
        self.0.get(PERMALINK_FIELD).and_then(Value::as_str)
    }

    /// Any field by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Store an extraction outcome on the record.
    ///
    /// `content` always receives a string: the text, or the failure message.
    /// `content_error` is set only for failures and removed otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the failure cannot be serialized; the
    /// record is left untouched in that case.
    pub fn set_extraction(&mut self, extraction: &Extraction) -> Result<()> {
        let tagged = extraction.failure().map(serde_json::to_value).transpose()?;

        self.0
            .insert(CONTENT_FIELD.to_string(), Value::String(extraction.content()));

        match tagged {
            Some(tagged) => {
                self.0.insert(CONTENT_ERROR_FIELD.to_string(), tagged);
            }
            None => {
                self.0.remove(CONTENT_ERROR_FIELD);
            }
        }
        Ok(())
    }

    /// The underlying JSON object.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Load metadata records from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not JSON, or does not
/// hold a list of objects.
pub fn load_metadata(path: &Path) -> Result<Vec<MetadataRecord>> {
    let bytes = fs::read(path)?;
    let document: Value = serde_json::from_slice(&bytes)?;
    let records = records_from_value(document)?;
    tracing::info!(path = %path.display(), records = records.len(), "loaded metadata");
    Ok(records)
}

/// Pull the record list out of a parsed metadata document.
///
/// Accepts a top-level array, or an object wrapping the list. In an object
/// the record list is the first non-empty array whose entries are all
/// objects; arrays of scalars (tags, counts) are skipped. If the only
/// candidates are empty arrays, the first of them yields zero records.
///
/// # Errors
///
/// Returns [`Error::InvalidMetadata`] when no list is found or a list entry
/// is not an object.
pub fn records_from_value(document: Value) -> Result<Vec<MetadataRecord>> {
    let items = match document {
        Value::Array(items) => items,
        Value::Object(fields) => record_list_field(fields)
            .ok_or_else(|| Error::InvalidMetadata("object contains no record list".into()))?,
        other => {
            return Err(Error::InvalidMetadata(format!(
                "expected an array of records, found {}",
                json_kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(MetadataRecord(fields)),
            other => Err(Error::InvalidMetadata(format!(
                "record {index} is {}, expected an object",
                json_kind(&other)
            ))),
        })
        .collect()
}

fn record_list_field(fields: Map<String, Value>) -> Option<Vec<Value>> {
    let mut first_empty = None;
    for (_, value) in fields {
        let Value::Array(items) = value else {
            continue;
        };
        if items.is_empty() {
            if first_empty.is_none() {
                first_empty = Some(items);
            }
        } else if items.iter().all(Value::is_object) {
            return Some(items);
        }
    }
    first_empty
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
