use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use cloud_heroes::{
    GameConfig, Result,
    app,
    game::{GameSession, SystemClock},
    logger,
};

/// Match cloud services to what they do before the clock runs out.
#[derive(Parser, Debug)]
#[command(name = "cloud-heroes", version)]
struct Args {
    /// TOML file overriding round timing, window size or the catalog
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_logger(args.verbose);

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let session = GameSession::from_config(&config, SystemClock::new())?;
    info!(entries = session.catalog().len(), "catalog loaded");

    app::run(config, session);
    Ok(())
}
