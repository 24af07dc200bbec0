//! Error types for host memory queries

use thiserror::Error;

/// Main error type for host memory queries
///
/// Every variant means the same thing at the process boundary: the OS
/// memory-accounting facility could not be queried. There is no retry and
/// no fallback value; callers surface the error and exit non-zero.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SystemError {
    /// The memory-accounting facility does not exist on this platform
    #[error("Host memory query is not supported on this platform: {platform}")]
    Unsupported {
        /// `std::env::consts::OS` of the running host
        platform: &'static str,
    },

    /// The facility exists but refused the query
    #[error("Permission denied querying host memory: {operation}")]
    PermissionDenied {
        /// What was being queried
        operation: String,
    },

    /// Platform-specific failure surfaced by the facility itself
    #[error("Platform error: {message}")]
    Platform {
        /// Error message
        message: String,
        /// OS error code if available
        code: Option<i32>,
    },
}

/// Result type for host memory queries
pub type SystemResult<T> = std::result::Result<T, SystemError>;

impl SystemError {
    /// Create a platform error from an OS error
    pub fn from_os_error(err: &std::io::Error) -> Self {
        Self::Platform {
            message: err.to_string(),
            code: err.raw_os_error(),
        }
    }
}
