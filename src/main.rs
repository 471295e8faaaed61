use anyhow::{Result, anyhow};
use sensemesh_engine::{config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Builds the subscriber filter for a single global level such as `debug`.
///
/// Target directives are not accepted here, so a typo cannot silently
/// become a target name.
fn log_filter(level: &str) -> Result<EnvFilter> {
    let max_level: LevelFilter = level.trim().parse().map_err(|_| {
        anyhow!(
            "Unknown log level '{}', expected one of off, error, warn, info, debug, trace",
            level
        )
    })?;
    Ok(EnvFilter::default().add_directive(max_level.into()))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration decides the log level, so it is loaded before tracing is up
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    let env_filter = match log_filter(&log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .json()
        .init();

    info!(
        "Starting SenseMesh AI Engine with log level: {}",
        log_level
    );

    // Model loading failures end the process here, before anything is served
    server::run(config).await?;

    Ok(())
}
