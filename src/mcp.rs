//! MCP server implementations with tool routing
//!
//! Two sibling servers, one tool each. `ClipboardImageServer` exposes
//! `getClipboardImage` over an injected [`ClipboardSource`];
//! `HoorayImageServer` exposes `getHoorayImage` over a
//! [`HomeImageSource`]. Handlers convert every expected failure into a
//! single-text response, so a tool call only errors at the protocol level
//! if the runtime itself breaks.

use std::sync::Arc;

use rmcp::{
    ServerHandler,
    handler::server::tool::ToolRouter,
    model::{CallToolResult, ErrorData as McpError, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::{
    error::SourceError,
    mcp_content::{
        CLIPBOARD_CAPTION, HOORAY_CAPTION, build_error_result, build_image_result,
        clipboard_error_text, hooray_error_text,
    },
    source::{ClipboardSource, HomeImageSource, PNGPASTE},
};

/// Builds the advertised identity for one server variant
fn server_info(name: &str, instructions: &str) -> ServerInfo {
    ServerInfo {
        capabilities: ServerCapabilities::builder().enable_tools().build(),
        server_info: Implementation {
            name: name.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Implementation::default()
        },
        instructions: Some(instructions.to_string()),
        ..ServerInfo::default()
    }
}

/// Clipboard image MCP server
///
/// Serves `getClipboardImage`, which captures the current clipboard image
/// through the injected source and returns it as base64-encoded PNG
/// content behind a caption.
#[derive(Clone)]
pub struct ClipboardImageServer {
    /// Tool router for dispatching tool calls
    tool_router: ToolRouter<Self>,
    /// Injected clipboard capture capability
    source:      Arc<dyn ClipboardSource>,
}

#[tool_router]
impl ClipboardImageServer {
    /// Creates a server around the given clipboard source
    pub fn new(source: Arc<dyn ClipboardSource>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            source,
        }
    }

    /// Captures the clipboard image and wraps it in MCP content
    ///
    /// Probes for the capture utility on every invocation before
    /// capturing, so an install or removal mid-session is reflected on
    /// the next call. The utility can still disappear between probe and
    /// capture; that surfaces as an ordinary capture failure.
    #[tool(
        name = "getClipboardImage",
        description = "Capture and display the current image from the system clipboard"
    )]
    pub async fn get_clipboard_image(&self) -> Result<CallToolResult, McpError> {
        if !self.source.is_available().await {
            let error = SourceError::DependencyMissing {
                utility: PNGPASTE.to_string(),
            };
            return Ok(build_error_result(clipboard_error_text(&error)));
        }

        match self.source.capture().await {
            Ok(bytes) => Ok(build_image_result(CLIPBOARD_CAPTION, &bytes)),
            Err(error) => Ok(build_error_result(clipboard_error_text(&error))),
        }
    }
}

#[tool_handler]
impl ServerHandler for ClipboardImageServer {
    fn get_info(&self) -> ServerInfo {
        server_info(
            "Clipboard Image Server",
            "This server provides tools to capture and display images directly from the system \
             clipboard using pngpaste.",
        )
    }
}

/// Home-directory image MCP server
///
/// Serves `getHoorayImage`, which reads `hooray.png` from the home
/// directory and returns it the same way the clipboard server returns a
/// capture. Only the acquisition step differs between the two.
#[derive(Clone)]
pub struct HoorayImageServer {
    /// Tool router for dispatching tool calls
    tool_router: ToolRouter<Self>,
    /// Home-directory image reader
    source:      HomeImageSource,
}

#[tool_router]
impl HoorayImageServer {
    /// Creates a server reading from the invoking user's home directory
    pub fn new() -> Self {
        Self::with_source(HomeImageSource::new())
    }

    /// Creates a server around a specific home-file source
    pub fn with_source(source: HomeImageSource) -> Self {
        Self {
            tool_router: Self::tool_router(),
            source,
        }
    }

    /// Reads the home-directory image and wraps it in MCP content
    #[tool(
        name = "getHoorayImage",
        description = "Read and display the hooray.png image from your home directory"
    )]
    pub async fn get_hooray_image(&self) -> Result<CallToolResult, McpError> {
        match self.source.read().await {
            Ok(bytes) => Ok(build_image_result(HOORAY_CAPTION, &bytes)),
            Err(error) => Ok(build_error_result(hooray_error_text(&error))),
        }
    }
}

impl Default for HoorayImageServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for HoorayImageServer {
    fn get_info(&self) -> ServerInfo {
        server_info(
            "Hooray Image Server",
            "This server provides tools to read and display the hooray.png image from the user's \
             home directory.",
        )
    }
}

#[cfg(test)]
mod tests {
    use base64::{Engine, engine::general_purpose::STANDARD};

    use super::*;
    use crate::source::{HOORAY_FILE_NAME, MockClipboardSource};

    fn clipboard_server(source: MockClipboardSource) -> ClipboardImageServer {
        ClipboardImageServer::new(Arc::new(source))
    }

    // ========== getClipboardImage Tests ==========

    #[tokio::test]
    async fn test_clipboard_success_is_caption_then_image() {
        let bytes = vec![137, 80, 78, 71, 13, 10, 26, 10, 1, 2, 3];
        let server = clipboard_server(MockClipboardSource::new().with_image(bytes.clone()));

        let result = server.get_clipboard_image().await.unwrap();

        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result.content.len(), 2);

        let caption = result.content[0].as_text().expect("first part should be text");
        assert_eq!(caption.text, "Here is the current image from your clipboard:");

        let image = result.content[1].as_image().expect("second part should be an image");
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(STANDARD.decode(&image.data).unwrap(), bytes);
    }

    #[tokio::test]
    async fn test_clipboard_missing_utility_reports_install_instruction() {
        let server = clipboard_server(MockClipboardSource::new().unavailable());

        let result = server.get_clipboard_image().await.unwrap();

        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result.content.len(), 1);

        let text = result.content[0].as_text().expect("part should be text");
        assert_eq!(
            text.text,
            "Error: pngpaste is not installed. Please install it with: brew install pngpaste"
        );
        assert!(result.content[0].as_image().is_none());
    }

    #[tokio::test]
    async fn test_clipboard_capture_failure_reports_reminder() {
        let server = clipboard_server(MockClipboardSource::empty_clipboard());

        let result = server.get_clipboard_image().await.unwrap();

        assert_eq!(result.content.len(), 1);
        let text = result.content[0].as_text().unwrap();
        assert!(text.text.starts_with("Error capturing clipboard image:"));
        assert!(text.text.contains("No image data found on the clipboard"));
        assert!(text.text.ends_with("Make sure you have an image copied to your clipboard."));
    }

    #[tokio::test]
    async fn test_clipboard_zero_byte_capture_passes_through() {
        let server = clipboard_server(MockClipboardSource::new().with_image(Vec::new()));

        let result = server.get_clipboard_image().await.unwrap();

        assert_eq!(result.content.len(), 2);
        let image = result.content[1].as_image().unwrap();
        assert!(STANDARD.decode(&image.data).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clipboard_router_registers_single_tool() {
        let server = clipboard_server(MockClipboardSource::new());

        let tools = server.tool_router.list_all();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "getClipboardImage");
        assert!(tools[0].description.as_ref().is_some_and(|d| !d.is_empty()));
    }

    // ========== getHoorayImage Tests ==========

    #[tokio::test]
    async fn test_hooray_success_is_caption_then_image() {
        let dir = tempfile::tempdir().unwrap();
        let bytes = b"hooray png bytes".to_vec();
        std::fs::write(dir.path().join(HOORAY_FILE_NAME), &bytes).unwrap();

        let server = HoorayImageServer::with_source(HomeImageSource::new().with_home(dir.path()));
        let result = server.get_hooray_image().await.unwrap();

        assert_eq!(result.content.len(), 2);

        let caption = result.content[0].as_text().unwrap();
        assert_eq!(caption.text, "Here is the hooray.png image from your home directory:");

        let image = result.content[1].as_image().unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(STANDARD.decode(&image.data).unwrap(), bytes);
    }

    #[tokio::test]
    async fn test_hooray_missing_file_reports_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let server = HoorayImageServer::with_source(HomeImageSource::new().with_home(dir.path()));

        let result = server.get_hooray_image().await.unwrap();

        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result.content.len(), 1);

        let text = result.content[0].as_text().unwrap();
        assert!(text.text.starts_with("Error reading hooray.png:"));
        assert!(result.content[0].as_image().is_none());
    }

    #[tokio::test]
    async fn test_hooray_router_registers_single_tool() {
        let server = HoorayImageServer::new();

        let tools = server.tool_router.list_all();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "getHoorayImage");
    }

    // ========== Server Identity Tests ==========

    #[test]
    fn test_server_identities() {
        let clipboard = clipboard_server(MockClipboardSource::new());
        let info = clipboard.get_info();
        assert_eq!(info.server_info.name, "Clipboard Image Server");
        assert_eq!(info.server_info.version, "1.0.0");
        assert!(info.instructions.as_ref().is_some_and(|i| i.contains("pngpaste")));

        let hooray = HoorayImageServer::new();
        let info = hooray.get_info();
        assert_eq!(info.server_info.name, "Hooray Image Server");
        assert!(info.instructions.as_ref().is_some_and(|i| i.contains("hooray.png")));
    }
}
