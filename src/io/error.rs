//! Error types for level validation, rendering and export

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all snowflake operations
#[derive(Debug)]
pub enum SnowflakeError {
    /// User-supplied parameter failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A curve without segments was handed to the renderer
    EmptyCurve,

    /// Failed to encode or save a rendered image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The platform viewer could not be launched for a saved image
    Display {
        /// Image that should have been shown
        path: PathBuf,
        /// Underlying launcher error
        source: std::io::Error,
    },

    /// Numerical computation produced an unusable result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Reading from or writing to the terminal failed
    Io {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SnowflakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyCurve => write!(f, "Curve has no segments to render"),
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Display { path, source } => {
                write!(f, "Cannot display '{}': {source}", path.display())
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::Io { source } => write!(f, "Terminal I/O error: {source}"),
        }
    }
}

impl std::error::Error for SnowflakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } | Self::Display { source, .. } | Self::Io { source } => {
                Some(source)
            }
            _ => None,
        }
    }
}

/// Convenience type alias for snowflake results
pub type Result<T> = std::result::Result<T, SnowflakeError>;

impl From<std::io::Error> for SnowflakeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io { source: err }
    }
}

/// Attaches a file system location to bare I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into [`SnowflakeError::FileSystem`] for `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| SnowflakeError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SnowflakeError {
    SnowflakeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> SnowflakeError {
    SnowflakeError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
