use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use locpick::api::LocationClient;
use locpick::config::Config;
use locpick::ui;

/// Terminal cascading location selector: country → state → city.
#[derive(Debug, Parser)]
#[command(name = "locpick", version, about)]
struct Args {
    /// Override the location API base URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Read configuration from this file instead of the default path.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = args.base_url {
        config.override_base_url(base_url)?;
    }

    let client = LocationClient::new(
        &config.api.base_url,
        Duration::from_secs(config.api.timeout_seconds),
    )
    .context("failed to build HTTP client")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build async runtime")?;

    tracing::info!(base_url = %client.base_url(), "starting UI");
    ui::run(client, runtime.handle().clone())?;
    Ok(())
}

/// Initialize tracing with file output.
///
/// Logging is disabled by default: writing to stderr would corrupt the
/// TUI. Set `LOCPICK_LOG` to a file path to enable it.
fn init_tracing() {
    let Ok(log_path) = std::env::var("LOCPICK_LOG") else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&log_path) else {
        eprintln!("Warning: failed to create log file: {}", log_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
