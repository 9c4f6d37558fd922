use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;
pub mod helpers;

pub use codes::{describe_error_code, ErrorCode};
pub use helpers::ErrorExt;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// The unified error type for racedb
#[derive(Error, Debug)]
pub enum RaceDbError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] I/O error: {message}")]
    Io {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Document error: {message}")]
    Parse {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Record {index} in '{document}': {message}")]
    Record {
        code: u16,
        message: String,
        document: String,
        index: usize,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Validation error: {message}")]
    Validation {
        code: u16,
        message: String,
        field: Option<String>,
        #[source]
        source: Option<BoxedSource>,
    },

}

impl RaceDbError {
    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::config_with_code(ErrorCode::CONFIG_GENERIC, message)
    }

    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with specific code and path
    pub fn io_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Io {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a document parse error with specific code and path
    pub fn parse_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Parse {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a record error for the record at `index` of `document`
    pub fn record(
        code: u16,
        message: impl Into<String>,
        document: impl Into<String>,
        index: usize,
    ) -> Self {
        Self::Record {
            code,
            message: message.into(),
            document: document.into(),
            index,
            source: None,
        }
    }

    /// Create a validation error with specific code and field
    pub fn validation_with_code(
        code: u16,
        message: impl Into<String>,
        field: Option<String>,
    ) -> Self {
        Self::Validation {
            code,
            message: message.into(),
            field,
            source: None,
        }
    }

    /// Add a source error to this error
    pub fn with_source(mut self, source: impl Into<BoxedSource>) -> Self {
        match &mut self {
            Self::Config { source: src, .. }
            | Self::Io { source: src, .. }
            | Self::Parse { source: src, .. }
            | Self::Record { source: src, .. }
            | Self::Validation { source: src, .. } => {
                *src = Some(source.into());
            }
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Config { message, .. }
            | Self::Io { message, .. }
            | Self::Parse { message, .. }
            | Self::Record { message, .. }
            | Self::Validation { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
        }
        self
    }

    /// Attach a path to I/O and parse errors
    pub fn with_path(mut self, new_path: impl Into<PathBuf>) -> Self {
        match &mut self {
            Self::Io { path, .. } | Self::Parse { path, .. } => {
                *path = Some(new_path.into());
            }
            _ => {}
        }
        self
    }

    /// Get the exit code for this error
    ///
    /// Argument and configuration problems exit with 2, bad input data with 3.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } | Self::Validation { .. } => 2,
            Self::Parse { .. } | Self::Record { .. } => 3,
            Self::Io { .. } => 1,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::Io { code, .. }
            | Self::Parse { code, .. }
            | Self::Record { code, .. }
            | Self::Validation { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, .. } => format!("Configuration problem: {}", message),
            Self::Io { message, path, .. } => match path {
                Some(p) => format!("Cannot access {}: {}", p.display(), message),
                None => format!("I/O error: {}", message),
            },
            Self::Parse { message, path, .. } => match path {
                Some(p) => format!("{} is not a valid document: {}", p.display(), message),
                None => format!("Invalid document: {}", message),
            },
            Self::Record {
                message,
                document,
                index,
                ..
            } => format!(
                "Record {} of '{}' could not be read: {} (use --on-missing-field skip to continue past bad records)",
                index, document, message
            ),
            Self::Validation { message, field, .. } => match field {
                Some(f) => format!("Invalid value for '{}': {}", f, message),
                None => format!("Validation error: {}", message),
            },
        }
    }

    /// Get a developer-friendly error message with full chain
    pub fn developer_message(&self) -> String {
        let mut out = format!("{} ({})", self, describe_error_code(self.code()));
        let mut current = std::error::Error::source(self);
        while let Some(cause) = current {
            out.push_str(&format!("\n  caused by: {}", cause));
            current = cause.source();
        }
        out
    }
}

/// Type alias for Results using RaceDbError
pub type Result<T> = std::result::Result<T, RaceDbError>;

impl From<toml::de::Error> for RaceDbError {
    fn from(err: toml::de::Error) -> Self {
        RaceDbError::config_with_code(ErrorCode::CONFIG_INVALID_TOML, "Invalid TOML syntax")
            .with_source(err)
    }
}
