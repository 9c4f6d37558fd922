//! JSON document loading and saving
//!
//! Every document this tool reads or writes is a JSON object whose single
//! top-level key holds an array of records. Loading decodes each record on
//! its own so a bad record can be reported by index, or skipped, according
//! to one [`MissingFieldPolicy`] applied to every record type.

use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{ErrorCode, ErrorExt, RaceDbError, Result};

/// What to do with a record that cannot be decoded
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum MissingFieldPolicy {
    /// Fail the whole run on the first bad record
    #[default]
    Abort,
    /// Log the bad record, count it and carry on
    Skip,
}

impl std::str::FromStr for MissingFieldPolicy {
    type Err = RaceDbError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            other => Err(RaceDbError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                format!("unknown missing-field policy '{}', expected 'abort' or 'skip'", other),
            )),
        }
    }
}

/// Records decoded from one document
#[derive(Debug, Clone)]
pub struct Decoded<T> {
    pub records: Vec<T>,
    /// Indices of records left out under [`MissingFieldPolicy::Skip`]
    pub skipped: Vec<usize>,
}

impl<T> Decoded<T> {
    /// Number of records present in the source document
    pub fn total(&self) -> usize {
        self.records.len() + self.skipped.len()
    }
}

/// Read `path` and return the array stored under `key`
pub fn read_document(path: &Path, key: &str) -> Result<Vec<Value>> {
    let text = fs::read_to_string(path)
        .to_io_error(format!("Failed to read {}", path.display()))
        .map_err(|e| e.with_path(path))?;

    let value: Value = serde_json::from_str(&text).map_err(|e| {
        RaceDbError::parse_with_code(
            ErrorCode::PARSE_INVALID_JSON,
            "invalid JSON",
            Some(path.to_path_buf()),
        )
        .with_source(e)
    })?;

    extract_array(value, key).map_err(|e| e.with_path(path))
}

fn extract_array(value: Value, key: &str) -> Result<Vec<Value>> {
    let Value::Object(mut map) = value else {
        return Err(RaceDbError::parse_with_code(
            ErrorCode::PARSE_NOT_AN_ARRAY,
            format!("expected an object with a '{}' key at the top level", key),
            None,
        ));
    };

    match map.remove(key) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(RaceDbError::parse_with_code(
            ErrorCode::PARSE_NOT_AN_ARRAY,
            format!("'{}' does not hold an array", key),
            None,
        )),
        None => Err(RaceDbError::parse_with_code(
            ErrorCode::PARSE_MISSING_KEY,
            format!("top-level key '{}' not found", key),
            None,
        )),
    }
}

/// Decode each item into `T`, applying `policy` to items that fail
pub fn decode_records<T: DeserializeOwned>(
    items: Vec<Value>,
    document: &str,
    policy: MissingFieldPolicy,
) -> Result<Decoded<T>> {
    let mut records = Vec::with_capacity(items.len());
    let mut skipped = Vec::new();

    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<T>(item) {
            Ok(record) => records.push(record),
            Err(e) => match policy {
                MissingFieldPolicy::Abort => {
                    return Err(RaceDbError::record(
                        ErrorCode::RECORD_UNDECODABLE,
                        e.to_string(),
                        document,
                        index,
                    ));
                }
                MissingFieldPolicy::Skip => {
                    warn!("Skipping record {} of '{}': {}", index, document, e);
                    skipped.push(index);
                }
            },
        }
    }

    Ok(Decoded { records, skipped })
}

/// Read a document and decode its records
pub fn load_records<T: DeserializeOwned>(
    path: &Path,
    key: &str,
    policy: MissingFieldPolicy,
) -> Result<Decoded<T>> {
    let items = read_document(path, key)?;
    debug!("Read {} records from {}", items.len(), path.display());

    let document = path.display().to_string();
    decode_records(items, &document, policy)
}

struct Document<'a, T> {
    key: &'a str,
    records: &'a [T],
}

impl<T: Serialize> Serialize for Document<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, self.records)?;
        map.end()
    }
}

/// Render `records` under `key` with `indent` spaces per level
pub fn render_document<T: Serialize>(key: &str, records: &[T], indent: usize) -> Result<Vec<u8>> {
    let indent = vec![b' '; indent];
    let formatter = PrettyFormatter::with_indent(&indent);
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);

    Document { key, records }
        .serialize(&mut serializer)
        .map_err(|e| {
            RaceDbError::io_with_code(
                ErrorCode::IO_WRITE_FAILED,
                format!("Failed to serialize '{}' document", key),
                None,
            )
            .with_source(e)
        })?;

    Ok(out)
}

/// Write a document atomically: a failure leaves any existing file untouched
pub fn write_document<T: Serialize>(
    path: &Path,
    key: &str,
    records: &[T],
    indent: usize,
) -> Result<()> {
    let bytes = render_document(key, records, indent)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)
        .to_write_error(format!("Failed to create {}", dir.display()))
        .map_err(|e| e.with_path(&dir))?;

    let mut temp = tempfile::NamedTempFile::new_in(&dir)
        .to_write_error("Failed to create temporary file")
        .map_err(|e| e.with_path(&dir))?;
    temp.write_all(&bytes)
        .to_write_error(format!("Failed to write {}", path.display()))?;
    temp.persist(path)
        .map_err(|e| e.error)
        .to_write_error(format!("Failed to move output into place at {}", path.display()))
        .map_err(|e| e.with_path(path))?;

    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
