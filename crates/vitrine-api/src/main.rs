//! Vitrine entry point.
//!
//! Binary name: `vitrine`
//!
//! Parses CLI arguments, reads the external-service configuration from the
//! environment, then serves the portfolio site and chat API.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod http;
mod site;
mod state;

use state::AppState;

#[derive(Parser)]
#[command(name = "vitrine", version, about = "Portfolio site with contact chat")]
struct Cli {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1", env = "VITRINE_HOST")]
    host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 3000, env = "VITRINE_PORT")]
    port: u16,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,vitrine=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Fail fast on missing store/realtime credentials.
    let state = AppState::init()?;

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "vitrine listening");

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
