//! Error types for image acquisition
//!
//! Closed taxonomy for everything the two image sources can fail with.
//! Every variant carries an owned reason string, so errors stay cloneable
//! and comparable for the mock source and the test suites. `Display`
//! renders the bare reason; composing the user-facing message around it
//! belongs to the response layer (see [`crate::mcp_content`]).

/// Result type alias for image source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Failure modes of the image sources
///
/// These are expected operational failures. Tool handlers convert them
/// into explanatory text responses; they never surface as protocol-level
/// faults.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// Capture utility not found on the execution path
    #[error("{utility} is not installed")]
    DependencyMissing {
        /// Name of the missing utility
        utility: String,
    },

    /// Capture utility failed to run or produced no image
    #[error("{reason}")]
    CaptureFailed {
        /// Utility stderr, exit status, or spawn failure text
        reason: String,
    },

    /// Home-directory file missing or unreadable
    #[error("{reason}")]
    FileUnreadable {
        /// Underlying I/O error text
        reason: String,
    },
}

impl SourceError {
    /// Builds a `CaptureFailed` from any displayable cause
    pub fn capture_failed(reason: impl std::fmt::Display) -> Self {
        SourceError::CaptureFailed { reason: reason.to_string() }
    }

    /// Builds a `FileUnreadable` from any displayable cause
    pub fn file_unreadable(reason: impl std::fmt::Display) -> Self {
        SourceError::FileUnreadable { reason: reason.to_string() }
    }
}
