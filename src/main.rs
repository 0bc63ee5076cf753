// Tech Shop - terminal storefront
//
// Browse a small product catalog, open a product's details, read its reviews
// and post new ones. Everything lives in memory for the length of the run.
//
// Architecture:
// - Catalog: immutable product snapshots, seeded from built-ins or a JSON fixture
// - Session: route, selection, review form and notices (all state transitions)
// - TUI (ratatui): renders the session and maps keys onto session operations
// - Logging: tracing into an in-app activity buffer, optionally a JSON file

mod catalog;
mod cli;
mod config;
mod logging;
mod session;
mod tui;

use anyhow::Result;
use clap::Parser;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use session::Session;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let config = Config::from_env();

    // Subcommands print to the terminal, so their logs go to stderr
    let tui_mode = cli.command.is_none();
    let log_buffer = LogBuffer::new();
    let _file_guard = init_tracing(&config, &log_buffer, tui_mode);

    if cli::handle_command(&cli, &config)? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let catalog = catalog::fixture::seed(cli.fixture_path(&config).as_deref())?;
    let session = Session::with_notice_ttl(catalog, config.notice_ttl());
    let app = tui::app::App::with_config(session, log_buffer, &config);

    tracing::info!("Starting TUI");
    if let Err(e) = tui::run_tui(app).await {
        tracing::error!("TUI error: {:?}", e);
        return Err(e);
    }

    tracing::info!("Shutting down");
    Ok(())
}

/// Initialize tracing
///
/// In TUI mode logs are captured to the activity buffer so they don't garble
/// the display; otherwise they go to stderr. File logging is added on top
/// when enabled. Precedence: RUST_LOG env var > config file > default "info".
///
/// The returned guard must stay alive for file logs to flush.
fn init_tracing(config: &Config, log_buffer: &LogBuffer, tui_mode: bool) -> Option<WorkerGuard> {
    let default_filter = format!("techshop={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let tui_layer = tui_mode.then(|| TuiLogLayer::new(log_buffer.clone()));
    let stderr_layer =
        (!tui_mode).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let (file_layer, guard) = if config.logging.file_enabled {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let dir = &config.logging.file_dir;
                let prefix = &config.logging.file_prefix;
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(dir, prefix),
                    LogRotation::Daily => tracing_appender::rolling::daily(dir, prefix),
                    LogRotation::Never => tracing_appender::rolling::never(dir, prefix),
                };
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_ansi(false);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}
