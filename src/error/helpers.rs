use super::{ErrorCode, RaceDbError};

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    /// Convert to RaceDbError with specific error type
    fn to_config_error(self, message: impl Into<String>) -> Result<T, RaceDbError>;
    fn to_io_error(self, message: impl Into<String>) -> Result<T, RaceDbError>;
    fn to_write_error(self, message: impl Into<String>) -> Result<T, RaceDbError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_config_error(self, message: impl Into<String>) -> Result<T, RaceDbError> {
        self.map_err(|e| RaceDbError::config(message).with_source(e))
    }

    fn to_io_error(self, message: impl Into<String>) -> Result<T, RaceDbError> {
        self.map_err(|e| {
            RaceDbError::io_with_code(ErrorCode::IO_READ_FAILED, message, None).with_source(e)
        })
    }

    fn to_write_error(self, message: impl Into<String>) -> Result<T, RaceDbError> {
        self.map_err(|e| {
            RaceDbError::io_with_code(ErrorCode::IO_WRITE_FAILED, message, None).with_source(e)
        })
    }
}
