//! EduBuddy REST API entry point.
//!
//! Binary name: `edubuddy`
//!
//! Parses CLI arguments, initializes the database and services, then starts
//! the API server. Logging is controlled through `RUST_LOG`.

mod http;
mod state;

use clap::{Parser, Subcommand};
use clap_complete::generate;

use state::AppState;

#[derive(Parser)]
#[command(name = "edubuddy", about = "AI mentor chat service", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value_t = 5000, env = "EDUBUDDY_PORT")]
        port: u16,
        /// Host address to bind.
        #[arg(long, default_value = "127.0.0.1", env = "EDUBUDDY_HOST")]
        host: String,
        /// Export spans via OpenTelemetry (stdout exporter).
        #[arg(long)]
        otel: bool,
    },
    /// Generate shell completions.
    Completions {
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "edubuddy", &mut std::io::stdout());
        return Ok(());
    }

    let Commands::Serve { port, host, otel } = cli.command else {
        unreachable!("handled above");
    };

    edubuddy_observe::tracing_setup::init_tracing(otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    // Initialize application state (DB, services)
    let state = AppState::init().await?;

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!(
        "  {} EduBuddy API listening on {}",
        console::style("⚡").bold(),
        console::style(format!("http://{addr}")).cyan()
    );
    println!("  {}", console::style("Press Ctrl+C to stop").dim());

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    edubuddy_observe::tracing_setup::shutdown_tracing();
    println!("\n  Server stopped.");

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
