use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context};
use clap::Parser;

use postboard::api::ApiClient;
use postboard::config::Config;
use postboard::logging::init_tracing;
use postboard::ui::route::Route;
use postboard::ui::runtime::{self, RunOptions};

/// Terminal client for the JSONPlaceholder posts API.
#[derive(Debug, Parser)]
#[command(name = "postboard", version, about)]
struct Cli {
    /// Config file (default: <config_dir>/postboard/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Start on this route, e.g. "/" or "/post/5"
    #[arg(long, value_name = "PATH", default_value = "/")]
    route: String,

    /// Override the log file location
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    if let Some(log_file) = cli.log_file {
        config.logging.file = Some(log_file);
    }
    config.validate()?;

    let initial_route =
        Route::parse(&cli.route).ok_or_else(|| anyhow!("unknown route '{}'", cli.route))?;

    init_tracing(&config.logging).context("failed to open log file")?;
    tracing::info!(
        base_url = %config.api.base_url,
        config = %config_path.display(),
        "Starting postboard"
    );

    let gateway = Arc::new(ApiClient::new(&config.api.base_url)?);
    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let options = RunOptions {
        tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
        notification_ticks: config.ui.notification_ticks(),
        initial_route,
    };
    runtime::run(tokio_runtime.handle(), gateway, options)?;

    tokio_runtime.shutdown_timeout(Duration::from_millis(500));
    Ok(())
}
