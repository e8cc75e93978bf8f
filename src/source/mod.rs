//! Image sources for the tool handlers
//!
//! The clipboard server talks to the outside world only through the
//! [`ClipboardSource`] trait, so the handlers can be exercised with the
//! mock source instead of a real clipboard. The home-directory server
//! reads through [`HomeImageSource`] directly; there is nothing to probe
//! and nothing platform-specific about reading a file.

use async_trait::async_trait;

use crate::error::SourceResult;

pub mod home;
pub mod mock;
pub mod pngpaste;

pub use home::{HOORAY_FILE_NAME, HomeImageSource};
pub use mock::MockClipboardSource;
pub use pngpaste::{PNGPASTE, PngpasteSource};

/// Capability interface over the external clipboard-capture utility
///
/// Both methods run fresh on every invocation. Nothing is cached between
/// calls, so installing or removing the utility while the server runs is
/// picked up on the next tool call. A capture may still fail after a
/// positive availability check; callers treat that as an ordinary
/// capture failure.
#[async_trait]
pub trait ClipboardSource: Send + Sync {
    /// Checks whether the capture utility resolves on the execution path
    async fn is_available(&self) -> bool;

    /// Captures the current clipboard image as raw PNG bytes
    ///
    /// A successful capture returns the utility's stdout unmodified,
    /// including a zero-byte payload if that is what the utility printed.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::CaptureFailed`](crate::error::SourceError)
    /// when the utility cannot be spawned, exits unsuccessfully, or finds
    /// no image on the clipboard.
    async fn capture(&self) -> SourceResult<Vec<u8>>;
}
