//! `pngpaste`-backed clipboard source
//!
//! Shells out twice per tool call: `which <utility>` to probe
//! availability, then `<utility> -` to stream the clipboard image to
//! stdout. The utility name is a field so tests can swap in standard
//! Unix commands and exercise the subprocess plumbing without a
//! clipboard.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use super::ClipboardSource;
use crate::error::{SourceError, SourceResult};

/// Name of the clipboard capture utility
pub const PNGPASTE: &str = "pngpaste";

/// Clipboard source backed by the `pngpaste` utility
#[derive(Debug, Clone)]
pub struct PngpasteSource {
    /// Utility name resolved on the execution path
    utility: String,
}

impl PngpasteSource {
    /// Creates a source that invokes the real `pngpaste` utility
    pub fn new() -> Self {
        Self {
            utility: PNGPASTE.to_string(),
        }
    }

    /// Overrides the utility name
    pub fn with_utility(mut self, utility: impl Into<String>) -> Self {
        self.utility = utility.into();
        self
    }
}

impl Default for PngpasteSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardSource for PngpasteSource {
    async fn is_available(&self) -> bool {
        match Command::new("which").arg(&self.utility).output().await {
            Ok(output) => output.status.success(),
            Err(error) => {
                debug!("availability probe for {} failed: {error}", self.utility);
                false
            }
        }
    }

    async fn capture(&self) -> SourceResult<Vec<u8>> {
        // `-` sends the image to stdout instead of a file.
        let output = Command::new(&self.utility)
            .arg("-")
            .output()
            .await
            .map_err(SourceError::capture_failed)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = if stderr.trim().is_empty() {
                format!("{} exited with {}", self.utility, output.status)
            } else {
                stderr.trim().to_string()
            };
            return Err(SourceError::CaptureFailed { reason });
        }

        debug!("captured {} clipboard bytes", output.stdout.len());
        Ok(output.stdout)
    }
}
