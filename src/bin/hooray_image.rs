//! hooray-image-mcp server binary
//!
//! Reads `hooray.png` from the invoking user's home directory and serves
//! it to MCP clients over stdio (default) or a streamable HTTP endpoint.

use std::process::ExitCode;

use clipboard_image_mcp::{
    bootstrap,
    mcp::HoorayImageServer,
    startup::{self, Invocation},
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    bootstrap::init_tracing();

    let invocation =
        startup::parse_invocation(std::env::args().skip(1), std::env::var("PORT").ok().as_deref());
    let args = match invocation {
        Invocation::Serve(args) => args,
        Invocation::Help => {
            print!("{}", startup::usage("hooray-image-mcp"));
            return ExitCode::SUCCESS;
        }
    };

    let config = startup::build_transport(&args);
    info!("Hooray Image Server starting");
    info!("Transport: {}", args.transport_mode);

    let server = HoorayImageServer::new();
    match bootstrap::serve(move || server.clone(), config, bootstrap::shutdown_signal()).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            error!("server failed to start: {error:#}");
            ExitCode::FAILURE
        }
    }
}
