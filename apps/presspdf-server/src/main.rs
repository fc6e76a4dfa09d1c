//! PressPDF Server
//!
//! Serves posts and pages from the content store and exports any single
//! item as a print-styled PDF when requested with `?generate_pdf=true`.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use presspdf_server::{app, state::AppState};

/// Command-line arguments for the PressPDF server
#[derive(Parser, Debug)]
#[command(name = "presspdf-server")]
#[command(about = "Content delivery server with PDF export")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Render timeout in milliseconds
    #[arg(long, default_value = "30000")]
    timeout_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Initializing PressPDF server...");
    let state = Arc::new(AppState::new(args.timeout_ms).await?);

    let app = app(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Render timeout: {}ms", args.timeout_ms);

    axum::serve(listener, app).await?;

    Ok(())
}
