//! Input validation for command arguments

use std::path::Path;

use crate::error::{ErrorCode, RaceDbError, Result};

/// Check that an input document exists and is a file
pub fn validate_input_file(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        return Err(RaceDbError::validation_with_code(
            ErrorCode::VALIDATION_FILE_NOT_FOUND,
            format!("{} file '{}' does not exist", what, path.display()),
            Some(what.to_string()),
        ));
    }

    if !path.is_file() {
        return Err(RaceDbError::validation_with_code(
            ErrorCode::VALIDATION_INVALID_INPUT,
            format!("{} path '{}' is not a file", what, path.display()),
            Some(what.to_string()),
        ));
    }

    Ok(())
}

/// Check that the output directory, if it exists, is a directory
pub fn validate_output_dir(path: &Path) -> Result<()> {
    if path.exists() && !path.is_dir() {
        return Err(RaceDbError::validation_with_code(
            ErrorCode::VALIDATION_INVALID_INPUT,
            format!("Output path '{}' is not a directory", path.display()),
            Some("output_dir".to_string()),
        ));
    }
    Ok(())
}
