//! Command implementation modules
//!
//! Each batch job loads its input, runs a pure transformation and writes its
//! outputs, returning a summary that the router prints to stdout.

pub mod classify;
pub mod cleanup;
pub mod split;
pub mod split_ranges;

pub use classify::run_classify;
pub use cleanup::{run_cleanup, CleanupSummary};
pub use split::{run_split, SplitSummary};
pub use split_ranges::{run_split_ranges, SplitRangesSummary};

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::document::write_document;

/// An output document that was written during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub records: usize,
}

impl fmt::Display for WrittenFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} records saved to: {}", self.records, self.path.display())
    }
}

/// Write `records` to `path` using the configured indentation
fn save<T: Serialize>(config: &Config, path: &Path, key: &str, records: &[T]) -> Result<WrittenFile> {
    write_document(path, key, records, config.output.indent)
        .with_context(|| format!("Failed to save {}", path.display()))?;

    Ok(WrittenFile {
        path: path.to_path_buf(),
        records: records.len(),
    })
}
