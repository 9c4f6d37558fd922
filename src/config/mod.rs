use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod loader;

pub use loader::{load_config, parse_config, CONFIG_FILE_NAME};

use crate::document::MissingFieldPolicy;
use crate::error::{ErrorCode, RaceDbError, Result};
use crate::partition::range::{RangeSpec, DEFAULT_BOUNDARIES};

/// Largest accepted indent width for output documents
const MAX_INDENT: usize = 16;

/// File and key settings for every batch job
///
/// Every field has a default, so an empty or partial config file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub races: RacesConfig,
    pub output: OutputConfig,
    pub ranges: RangesConfig,
    pub cleanup: CleanupConfig,
    pub records: RecordsConfig,
}

/// Where the input race document lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RacesConfig {
    pub file: PathBuf,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub indent: usize,
    /// Top-level key of race info and results documents
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RangesConfig {
    pub boundaries: Vec<u32>,
    pub open_ended: bool,
    pub info_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CleanupConfig {
    pub athletes_file: PathBuf,
    pub athletes_key: String,
    pub canonical_file: PathBuf,
    pub canonical_key: String,
    pub output_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RecordsConfig {
    pub on_missing_field: MissingFieldPolicy,
}

impl Default for RacesConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("results.json"),
            key: "results".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            indent: 4,
            key: "races".to_string(),
        }
    }
}

impl Default for RangesConfig {
    fn default() -> Self {
        Self {
            boundaries: DEFAULT_BOUNDARIES.to_vec(),
            open_ended: false,
            info_file: PathBuf::from("races-info.json"),
        }
    }
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            athletes_file: PathBuf::from("input.json"),
            athletes_key: "athletes".to_string(),
            canonical_file: PathBuf::from("races-info.json"),
            canonical_key: "races".to_string(),
            output_file: PathBuf::from("OUTPUT.json"),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `RACEDB_*` environment overrides
    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_env_with(|name| std::env::var(name).ok())
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value
    pub fn merge_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("RACEDB_OUTPUT_DIR") {
            self.output.dir = PathBuf::from(dir);
        }

        if let Some(policy) = lookup("RACEDB_ON_MISSING_FIELD") {
            self.records.on_missing_field = policy
                .parse()
                .map_err(|e: RaceDbError| e.with_context("in RACEDB_ON_MISSING_FIELD"))?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.output.indent > MAX_INDENT {
            return Err(RaceDbError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                format!(
                    "output.indent must be at most {}, got {}",
                    MAX_INDENT, self.output.indent
                ),
            ));
        }

        for (name, key) in [
            ("races.key", &self.races.key),
            ("output.key", &self.output.key),
            ("cleanup.athletes_key", &self.cleanup.athletes_key),
            ("cleanup.canonical_key", &self.cleanup.canonical_key),
        ] {
            if key.is_empty() {
                return Err(RaceDbError::config_with_code(
                    ErrorCode::CONFIG_INVALID_VALUE,
                    format!("{} must not be empty", name),
                ));
            }
        }

        Ok(())
    }

    /// Range layout built from `[ranges]`; checked only by `split-ranges`
    pub fn range_spec(&self) -> Result<RangeSpec> {
        RangeSpec::new(&self.ranges.boundaries, self.ranges.open_ended)
    }

    /// Resolve an output file name against the output directory
    pub fn output_path(&self, file: impl AsRef<std::path::Path>) -> PathBuf {
        self.output.dir.join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_file_layout() {
        let config = Config::new();
        assert_eq!(config.races.file, PathBuf::from("results.json"));
        assert_eq!(config.races.key, "results");
        assert_eq!(config.output.indent, 4);
        assert_eq!(config.cleanup.output_file, PathBuf::from("OUTPUT.json"));
        assert_eq!(config.records.on_missing_field, MissingFieldPolicy::Abort);
        assert!(config.validate().is_ok());
        assert_eq!(config.range_spec().unwrap(), RangeSpec::default());
    }

    #[test]
    fn test_merge_env_with() {
        let env: HashMap<&str, &str> = [
            ("RACEDB_OUTPUT_DIR", "/tmp/out"),
            ("RACEDB_ON_MISSING_FIELD", "skip"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::new();
        config
            .merge_env_with(|name| env.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.output.dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.records.on_missing_field, MissingFieldPolicy::Skip);
        assert_eq!(config.output_path("a.json"), PathBuf::from("/tmp/out/a.json"));
    }

    #[test]
    fn test_merge_env_rejects_unknown_policy() {
        let mut config = Config::new();
        let err = config
            .merge_env_with(|name| (name == "RACEDB_ON_MISSING_FIELD").then(|| "maybe".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("RACEDB_ON_MISSING_FIELD"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::new();
        config.output.indent = 64;
        assert_eq!(config.validate().unwrap_err().exit_code(), 2);

        let mut config = Config::new();
        config.cleanup.athletes_key.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_ranges_only_fail_the_range_layout() {
        let mut config = Config::new();
        config.ranges.boundaries = vec![5];

        assert!(config.validate().is_ok());
        let err = config.range_spec().unwrap_err();
        assert_eq!(err.code(), ErrorCode::VALIDATION_INVALID_BOUNDARIES);
    }
}
