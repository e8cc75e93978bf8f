//! clipboard-image-mcp: image-serving MCP servers for coding agents
//!
//! Two sibling Model Context Protocol servers built from the same parts:
//! one captures the current clipboard image through `pngpaste`, the other
//! reads `hooray.png` from the invoking user's home directory. Both hand
//! the image to the client as base64-encoded PNG content over stdio or a
//! streamable HTTP endpoint.

pub mod bootstrap;
pub mod error;
pub mod mcp;
pub mod mcp_content;
pub mod source;
pub mod startup;
