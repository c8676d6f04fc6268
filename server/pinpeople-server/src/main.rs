use clap::Parser;
use colored::*;
use std::{env, net::SocketAddr};
use tracing::{info, Level};
use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use error_common::{PinPeopleError, Result};
use pinpeople_server::{create_app, PinPeopleServer};
use pinpeople_server::server::ServerConfig;

/// Pin People HTTP Server
#[derive(Parser, Debug)]
#[command(name = "pinpeople-server")]
#[command(about = "User accounts with pins on a map")]
struct Args {
    /// Server bind address
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Server port
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let args = Args::parse();

    init_tracing(args.verbose)?;

    info!("{}", "Starting Pin People HTTP Server".bright_cyan());
    info!("Version: {}", env!("CARGO_PKG_VERSION").bright_white());
    info!(
        "Bind address: {}",
        format!("{}:{}", args.host, args.port).bright_yellow()
    );

    let config = ServerConfig::from_env()
        .map_err(|e| PinPeopleError::ConfigError(format!("Configuration error: {e}")))?;

    let server = PinPeopleServer::new(config)
        .await
        .map_err(|e| PinPeopleError::DatabaseError(format!("Database connection failed: {e}")))?;

    let app = create_app(server);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| PinPeopleError::NetworkError(format!("Failed to bind to {addr}: {e}")))?;

    info!(
        "{}",
        format!(
            "Pin People server running on http://{}:{}",
            args.host, args.port
        )
        .bright_green()
    );
    info!(
        "{}",
        format!(
            "Health check available at: http://{}:{}/health",
            args.host, args.port
        )
        .bright_blue()
    );
    info!(
        "{}",
        format!(
            "API docs available at: http://{}:{}/docs",
            args.host, args.port
        )
        .bright_blue()
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| PinPeopleError::ServerError(format!("HTTP server error: {e}")))?;

    Ok(())
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let is_development =
        env::var("PINPEOPLE_ENV").unwrap_or_else(|_| "development".to_string()) == "development";
    let use_colors = env::var("NO_COLOR").is_err() && atty::is(atty::Stream::Stdout);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("pinpeople_server={level},tower_http=info,sqlx=warn,hyper=info").into()
    });

    if is_development && use_colors {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(true),
            )
            .init();
    } else {
        // Structured JSON logging for production
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .json(),
            )
            .init();
    }

    Ok(())
}
