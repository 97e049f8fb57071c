mod menu;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use clinic_queue_core::{Dispatcher, DispatcherConfig};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::menu::Menu;
use crate::render::Renderer;

#[derive(Parser)]
#[command(name = "clinic-queue", version, about = "Single-clinic patient queue desk")]
struct Cli {
    /// Average minutes spent per patient (overrides the config file)
    #[arg(long, env = "CLINIC_AVG_SERVICE_TIME", value_name = "MINUTES")]
    avg_service_time: Option<u32>,

    /// JSON config file, e.g. {"avg_service_time": 10}
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Emit one JSON object per result instead of text
    #[arg(long)]
    json: bool,

    /// Show times in UTC instead of local time
    #[arg(long)]
    utc: bool,
}

fn init_tracing() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn load_config(cli: &Cli) -> Result<DispatcherConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            DispatcherConfig::from_json_str(&raw)
                .with_context(|| format!("loading config file {}", path.display()))?
        }
        None => DispatcherConfig::default(),
    };
    if let Some(minutes) = cli.avg_service_time {
        config.avg_service_time = minutes;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let dispatcher = Dispatcher::new(config)?;
    info!(avg_service_time = config.avg_service_time, "clinic queue open");

    let renderer = Renderer {
        json: cli.json,
        utc: cli.utc,
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(dispatcher, renderer, stdin.lock(), stdout.lock())
        .run()
        .context("menu I/O failed")?;
    Ok(())
}
