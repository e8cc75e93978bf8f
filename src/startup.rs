//! Startup configuration: CLI token parsing and transport selection
//!
//! The parser is total. Any token sequence produces either a
//! [`StartupArgs`] or the help early-exit, never an error: unknown tokens
//! are skipped, and `--transport` values other than the two known modes
//! are consumed and dropped. Environment input (the raw `PORT` value) is
//! handed in by the binary entry points, so nothing here reads process
//! globals.

/// Default port for the HTTP streaming transport
pub const DEFAULT_PORT: u16 = 4000;

/// Endpoint path served by the HTTP streaming transport
pub const MCP_ENDPOINT: &str = "/mcp";

/// Connection mode requested on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransportMode {
    /// Duplex byte-stream transport over stdin/stdout
    #[default]
    Stdio,
    /// HTTP server with a single streaming endpoint
    HttpStream,
}

impl TransportMode {
    /// Parses a CLI value token into a mode
    ///
    /// Only the exact spellings `stdio` and `httpStream` are recognized;
    /// anything else is `None` and the caller drops the token.
    pub fn parse_token(token: &str) -> Option<Self> {
        match token {
            "stdio" => Some(TransportMode::Stdio),
            "httpStream" => Some(TransportMode::HttpStream),
            _ => None,
        }
    }

    /// Returns the mode's CLI spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Stdio => "stdio",
            TransportMode::HttpStream => "httpStream",
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parsed startup configuration
///
/// Built once from the process arguments and environment, then consumed
/// to produce a [`TransportConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupArgs {
    /// Requested connection mode
    pub transport_mode: TransportMode,
    /// Port for the HTTP streaming transport
    pub port:           u16,
}

impl Default for StartupArgs {
    fn default() -> Self {
        Self {
            transport_mode: TransportMode::default(),
            port:           DEFAULT_PORT,
        }
    }
}

/// Concrete transport selection, fixed for the process lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportConfig {
    /// Serve over stdin/stdout
    Stdio,
    /// Serve over HTTP with a streaming endpoint
    HttpStream {
        /// Port to bind on loopback
        port:     u16,
        /// Endpoint path, always [`MCP_ENDPOINT`]
        endpoint: &'static str,
    },
}

/// Outcome of parsing the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Run the server with the parsed configuration
    Serve(StartupArgs),
    /// `--help`/`-h` was passed: print usage and exit successfully
    Help,
}

/// Parses raw CLI tokens and the raw `PORT` value into an invocation
///
/// Token handling:
/// - `--transport`/`-t` consumes the next token as its value. The value
///   changes the mode only when it is exactly `stdio` or `httpStream`;
///   an unknown value is dropped without complaint and never re-examined
///   as a flag (a consumed `-h` does not trigger help).
/// - `--help`/`-h` short-circuits to [`Invocation::Help`].
/// - Every other token is ignored.
pub fn parse_invocation<I>(tokens: I, port_env: Option<&str>) -> Invocation
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut args = StartupArgs {
        port: parse_port(port_env),
        ..StartupArgs::default()
    };

    let mut tokens = tokens.into_iter();
    while let Some(token) = tokens.next() {
        match token.as_ref() {
            "--transport" | "-t" => {
                if let Some(value) = tokens.next() {
                    if let Some(mode) = TransportMode::parse_token(value.as_ref()) {
                        args.transport_mode = mode;
                    }
                }
            }
            "--help" | "-h" => return Invocation::Help,
            _ => {}
        }
    }

    Invocation::Serve(args)
}

/// Parses the raw `PORT` environment value
///
/// Anything that does not parse as a port number falls back to
/// [`DEFAULT_PORT`]. A literal `0` passes through uncorrected and later
/// asks the OS for an ephemeral port.
pub fn parse_port(port_env: Option<&str>) -> u16 {
    port_env
        .and_then(|raw| raw.trim().parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Builds the transport configuration for the parsed arguments
///
/// Pure and deterministic: equal arguments always produce equal
/// configurations. The port is carried along even for stdio, where it is
/// simply unused.
pub fn build_transport(args: &StartupArgs) -> TransportConfig {
    match args.transport_mode {
        TransportMode::Stdio => TransportConfig::Stdio,
        TransportMode::HttpStream => TransportConfig::HttpStream {
            port:     args.port,
            endpoint: MCP_ENDPOINT,
        },
    }
}

/// One-screen usage text for `--help`
pub fn usage(bin_name: &str) -> String {
    format!(
        "\
Usage: {bin_name} [--transport <stdio|httpStream>]

Options:
  -t, --transport <MODE>  Connection mode: stdio (default) or httpStream
  -h, --help              Print this help and exit

The PORT environment variable selects the httpStream port (default {DEFAULT_PORT}).
"
    )
}
