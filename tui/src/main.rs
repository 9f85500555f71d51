use std::{env, fs::File};

use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use visualizer::configs::{self, VisualizationConfig};

mod app;
mod state;
mod ui;

/// Env var naming the file logs are written to. Without it nothing is logged, since the
/// terminal is taken by the UI.
const LOG_FILE_VAR: &str = "DESCENT_LOG";

fn main() -> Result<()> {
    init_logger()?;

    let config = match env::args().nth(1) {
        Some(path) => {
            configs::load(&path).with_context(|| format!("loading config from {path}"))?
        }
        None => VisualizationConfig::default(),
    };

    let runtime = Runtime::new()?;
    let session = visualizer::visualize(&config, runtime.handle().clone())?;

    app::run::run(state::Player::new(session))
}

fn init_logger() -> Result<()> {
    let Ok(path) = env::var(LOG_FILE_VAR) else {
        return Ok(());
    };

    let file = File::create(&path).with_context(|| format!("creating log file {path}"))?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
