//! MCP content builders for the image tools
//!
//! Converts raw image bytes and source failures into the responses the
//! tools return. A success is always a caption text part followed by one
//! base64 image part; a failure is always a single text part carrying the
//! full user-facing message. Both shapes are protocol-level successes so
//! the calling agent always receives displayable content.

use base64::{Engine, engine::general_purpose::STANDARD};
use rmcp::model::{CallToolResult, Content};

use crate::error::SourceError;

/// Caption preceding the clipboard image part
pub const CLIPBOARD_CAPTION: &str = "Here is the current image from your clipboard:";

/// Caption preceding the home-directory image part
pub const HOORAY_CAPTION: &str = "Here is the hooray.png image from your home directory:";

/// MIME type of every image payload served by these tools
pub const PNG_MIME_TYPE: &str = "image/png";

/// Builds the two-part success response: caption text, then inline image
///
/// The bytes are base64-encoded and embedded so clients can display the
/// image without fetching anything. They are passed through untouched; a
/// zero-byte capture produces a zero-byte payload.
pub fn build_image_result(caption: &str, data: &[u8]) -> CallToolResult {
    let encoded = STANDARD.encode(data);
    CallToolResult::success(vec![Content::text(caption), Content::image(encoded, PNG_MIME_TYPE)])
}

/// Builds the single-part failure response
pub fn build_error_result(message: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(message.into())])
}

/// Maps a source error to the clipboard tool's user-facing text
///
/// A missing utility gets the install instruction; every other failure
/// gets the capture wording with the clipboard reminder appended.
pub fn clipboard_error_text(error: &SourceError) -> String {
    match error {
        SourceError::DependencyMissing { utility } => format!(
            "Error: {utility} is not installed. Please install it with: brew install {utility}"
        ),
        _ => format!(
            "Error capturing clipboard image: {error}. Make sure you have an image copied to \
             your clipboard."
        ),
    }
}

/// Maps a source error to the home-file tool's user-facing text
pub fn hooray_error_text(error: &SourceError) -> String {
    format!("Error reading hooray.png: {error}")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== build_image_result Tests ==========

    #[test]
    fn test_image_result_is_caption_then_image() {
        let result = build_image_result(CLIPBOARD_CAPTION, &[1, 2, 3]);

        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result.content.len(), 2);

        let caption = result.content[0].as_text().expect("first part should be text");
        assert_eq!(caption.text, CLIPBOARD_CAPTION);

        let image = result.content[1].as_image().expect("second part should be an image");
        assert_eq!(image.mime_type, PNG_MIME_TYPE);
    }

    #[test]
    fn test_image_result_round_trips_bytes() {
        let data = vec![137, 80, 78, 71, 13, 10, 26, 10, 42];
        let result = build_image_result(HOORAY_CAPTION, &data);

        let image = result.content[1].as_image().unwrap();
        let decoded = STANDARD.decode(&image.data).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_image_result_with_empty_payload() {
        let result = build_image_result(CLIPBOARD_CAPTION, &[]);

        assert_eq!(result.content.len(), 2);
        let image = result.content[1].as_image().unwrap();
        assert!(image.data.is_empty());
    }

    // ========== build_error_result Tests ==========

    #[test]
    fn test_error_result_is_single_text_part() {
        let result = build_error_result("something went wrong");

        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result.content.len(), 1);

        let text = result.content[0].as_text().expect("part should be text");
        assert_eq!(text.text, "something went wrong");
        assert!(result.content[0].as_image().is_none());
    }

    // ========== Error Text Tests ==========

    #[test]
    fn test_missing_dependency_text_includes_install_instruction() {
        let error = SourceError::DependencyMissing {
            utility: "pngpaste".to_string(),
        };

        assert_eq!(
            clipboard_error_text(&error),
            "Error: pngpaste is not installed. Please install it with: brew install pngpaste"
        );
    }

    #[test]
    fn test_capture_failure_text_appends_clipboard_reminder() {
        let error = SourceError::capture_failed("No image data found on the clipboard");

        assert_eq!(
            clipboard_error_text(&error),
            "Error capturing clipboard image: No image data found on the clipboard. Make sure \
             you have an image copied to your clipboard."
        );
    }

    #[test]
    fn test_hooray_text_names_the_file() {
        let error = SourceError::file_unreadable("No such file or directory (os error 2)");

        assert_eq!(
            hooray_error_text(&error),
            "Error reading hooray.png: No such file or directory (os error 2)"
        );
    }
}
