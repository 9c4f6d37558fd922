use std::fs;
use std::path::Path;
use tracing::debug;

use super::Config;
use crate::error::{ErrorCode, ErrorExt, RaceDbError, Result};

/// Config file picked up from the working directory when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "racedb.toml";

/// Parse a TOML config document
pub fn parse_config(text: &str) -> Result<Config> {
    let config: Config = toml::from_str(text)?;
    Ok(config)
}

/// Load configuration: defaults, then the config file, then environment
///
/// An explicit path must exist. Without one, `racedb.toml` in `working_dir`
/// is used when present.
pub fn load_config(explicit: Option<&Path>, working_dir: &Path) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(RaceDbError::config_with_code(
                    ErrorCode::CONFIG_NOT_FOUND,
                    format!("Configuration file not found: {}", path.display()),
                ));
            }
            load_file(path)?
        }
        None => {
            let default_path = working_dir.join(CONFIG_FILE_NAME);
            if default_path.exists() {
                load_file(&default_path)?
            } else {
                debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                Config::new()
            }
        }
    };

    config.merge_env_vars()?;
    Ok(config)
}

fn load_file(path: &Path) -> Result<Config> {
    debug!("Loading configuration from {}", path.display());

    let text = fs::read_to_string(path)
        .to_config_error(format!("Failed to read {}", path.display()))?;

    parse_config(&text).map_err(|e| e.with_context(path.display()))
}
