/// devlay terminal demo
///
/// Renders the developer overlay for a small scene around a spinning local
/// player.
/// Controls:
///   - Arrow keys: Orbit the camera
///   - W/S: Move closer / further
///   - +/-: Zoom
///   - P/N/O/R: Toggle players, NPCs, tile objects, projectiles
///   - Space: Pause
///   - Q/ESC: Quit
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use devlay_core::model_io::load_model;
use devlay_terminal::{DemoConfig, DemoScene, TerminalApp};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "devlay-terminal")]
#[command(about = "Developer overlay demo rendered in the terminal")]
#[command(version)]
struct Cli {
    /// JSON file with overlay toggles and camera settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// OBJ model to use for the local player
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Local units per OBJ unit
    #[arg(long, default_value_t = 64.0)]
    model_scale: f64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they stay off the rendered frame.
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };

    let model = cli
        .model
        .as_ref()
        .map(|path| {
            load_model(path, cli.model_scale)
                .with_context(|| format!("failed to load model {}", path.display()))
        })
        .transpose()?;
    if let Some(model) = &model {
        tracing::info!(vertices = model.len(), "using custom player model");
    }

    println!("devlay terminal overlay - starting (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(DemoScene::new(model), config)?;
    app.run()?;

    Ok(())
}
