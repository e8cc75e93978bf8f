//! Server bootstrap: tracing setup and transport serving
//!
//! Serving is an ordinary result-returning call. The binaries hand in a
//! handler factory, a transport configuration, and a shutdown future,
//! then map the outcome to their process exit status. Nothing in this
//! module calls `exit` or installs global state beyond the tracing
//! subscriber, which keeps the whole path testable in-process.

use std::future::{Future, IntoFuture};
use std::net::{Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};
use rmcp::{
    ServerHandler, ServiceExt,
    transport::{
        stdio,
        streamable_http_server::{StreamableHttpService, session::local::LocalSessionManager},
    },
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::startup::TransportConfig;

/// How a serve call came to an end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeOutcome {
    /// The transport closed on its own, e.g. the stdio peer went away
    Completed,
    /// The shutdown future resolved; in-flight requests were dropped
    Interrupted,
}

/// Initializes the tracing subscriber
///
/// Logs go to stderr so stdout stays reserved for protocol traffic in
/// stdio mode. `RUST_LOG` overrides the default crate-level info filter.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("clipboard_image_mcp=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Resolves when the operator interrupts the process (Ctrl-C)
pub async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler could be installed; park forever rather than
        // fabricating an interrupt.
        std::future::pending::<()>().await;
    }
}

/// Serves one tool server over the selected transport
///
/// `make_handler` runs once for stdio and once per HTTP session, so every
/// connection gets a fresh handler. The call returns when the transport
/// closes ([`ServeOutcome::Completed`]), when `shutdown` resolves
/// ([`ServeOutcome::Interrupted`], abruptly, without draining), or with
/// an error when the transport cannot start. The shutdown future is
/// honored through every phase, including the stdio initialize handshake.
pub async fn serve<H, F, S>(
    make_handler: F,
    config: TransportConfig,
    shutdown: S,
) -> Result<ServeOutcome>
where
    H: ServerHandler + Send + Sync + 'static,
    F: Fn() -> H + Send + Sync + 'static,
    S: Future<Output = ()> + Send,
{
    match config {
        TransportConfig::Stdio => serve_stdio(make_handler, shutdown).await,
        TransportConfig::HttpStream { port, endpoint } => {
            serve_http_stream(make_handler, port, endpoint, shutdown).await
        }
    }
}

async fn serve_stdio<H, F, S>(make_handler: F, shutdown: S) -> Result<ServeOutcome>
where
    H: ServerHandler + Send + Sync + 'static,
    F: Fn() -> H + Send + Sync + 'static,
    S: Future<Output = ()> + Send,
{
    info!("serving over stdio");

    let serving = async {
        let service = make_handler()
            .serve(stdio())
            .await
            .context("stdio transport failed to start")?;
        service
            .waiting()
            .await
            .context("stdio transport failed while serving")?;
        Ok::<_, anyhow::Error>(())
    };

    tokio::select! {
        result = serving => {
            result?;
            Ok(ServeOutcome::Completed)
        }
        _ = shutdown => {
            info!("interrupt received, shutting down");
            Ok(ServeOutcome::Interrupted)
        }
    }
}

async fn serve_http_stream<H, F, S>(
    make_handler: F,
    port: u16,
    endpoint: &str,
    shutdown: S,
) -> Result<ServeOutcome>
where
    H: ServerHandler + Send + Sync + 'static,
    F: Fn() -> H + Send + Sync + 'static,
    S: Future<Output = ()> + Send,
{
    let bind = SocketAddr::from((Ipv4Addr::LOCALHOST, port));
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind HTTP server on {bind}"))?;

    info!("serving over httpStream at http://{bind}{endpoint}");

    let service = StreamableHttpService::new(
        move || Ok(make_handler()),
        LocalSessionManager::default().into(),
        Default::default(),
    );
    let router = axum::Router::new().nest_service(endpoint, service);
    let server = axum::serve(listener, router).into_future();

    tokio::select! {
        result = server => {
            result.context("HTTP transport failed while serving")?;
            Ok(ServeOutcome::Completed)
        }
        _ = shutdown => {
            info!("interrupt received, shutting down");
            Ok(ServeOutcome::Interrupted)
        }
    }
}
