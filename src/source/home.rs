//! Home-directory image source
//!
//! Reads a fixed image file from the invoking user's home directory. The
//! path is resolved on every read, so the handler stays stateless across
//! invocations.

use std::path::PathBuf;

use tracing::debug;

use crate::error::{SourceError, SourceResult};

/// File name read from the home directory
pub const HOORAY_FILE_NAME: &str = "hooray.png";

/// Image source reading `hooray.png` from the home directory
#[derive(Debug, Clone, Default)]
pub struct HomeImageSource {
    /// Home directory override; `None` resolves the real home per read
    home_override: Option<PathBuf>,
}

impl HomeImageSource {
    /// Creates a source reading from the invoking user's home directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the home directory
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home_override = Some(home.into());
        self
    }

    /// Resolves the full path of the image file
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::FileUnreadable`] when no home directory can
    /// be determined for the invoking user.
    pub fn resolve_path(&self) -> SourceResult<PathBuf> {
        let home = match &self.home_override {
            Some(home) => home.clone(),
            None => dirs::home_dir().ok_or_else(|| SourceError::FileUnreadable {
                reason: "could not determine the home directory".to_string(),
            })?,
        };

        Ok(home.join(HOORAY_FILE_NAME))
    }

    /// Reads the full image file contents
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::FileUnreadable`] when the file is missing,
    /// not a readable regular file, or the home directory is unknown.
    pub async fn read(&self) -> SourceResult<Vec<u8>> {
        let path = self.resolve_path()?;

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(SourceError::file_unreadable)?;

        debug!("read {} bytes from {}", bytes.len(), path.display());
        Ok(bytes)
    }
}
