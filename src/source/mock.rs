//! Mock clipboard source for testing
//!
//! Implements [`ClipboardSource`] without touching `pngpaste` or any real
//! clipboard state. Availability, the captured bytes, and injected
//! failures are all configured through builder methods, so handler tests
//! can drive every response shape deterministically.

use async_trait::async_trait;

use super::ClipboardSource;
use crate::error::{SourceError, SourceResult};

/// PNG file signature, enough payload for tests that decode the response
const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Mock clipboard source with configurable behavior
///
/// Defaults to an available source whose capture returns a PNG-signature
/// payload.
#[derive(Debug, Clone)]
pub struct MockClipboardSource {
    /// Whether the capture utility should appear installed
    available:       bool,
    /// Bytes returned by a successful capture
    image:           Vec<u8>,
    /// Error returned by `capture` instead of the image
    error_injection: Option<SourceError>,
}

impl MockClipboardSource {
    /// Creates an available source returning a PNG-signature payload
    pub fn new() -> Self {
        Self {
            available:       true,
            image:           PNG_SIGNATURE.to_vec(),
            error_injection: None,
        }
    }

    /// Creates a source that behaves like an empty clipboard
    ///
    /// Available on the path, but the capture fails with the same
    /// diagnostic the real utility prints when nothing is copied.
    pub fn empty_clipboard() -> Self {
        Self::new().with_error(SourceError::CaptureFailed {
            reason: "No image data found on the clipboard, or could not convert!".to_string(),
        })
    }

    /// Sets the bytes returned by a successful capture
    pub fn with_image(mut self, image: impl Into<Vec<u8>>) -> Self {
        self.image = image.into();
        self
    }

    /// Injects an error returned by `capture`
    pub fn with_error(mut self, error: SourceError) -> Self {
        self.error_injection = Some(error);
        self
    }

    /// Marks the capture utility as not installed
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }
}

impl Default for MockClipboardSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardSource for MockClipboardSource {
    async fn is_available(&self) -> bool {
        self.available
    }

    async fn capture(&self) -> SourceResult<Vec<u8>> {
        if let Some(error) = &self.error_injection {
            return Err(error.clone());
        }

        Ok(self.image.clone())
    }
}
