use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::GameConfig;
use grid_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Grid-based snake game for the terminal")]
struct Cli {
    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cell size in pixels
    #[arg(long)]
    cell_size: Option<u32>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<u32>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<u32>,

    /// Ticks per second
    #[arg(long)]
    fps: Option<u32>,

    /// Snake colour (#rrggbb or a colour name)
    #[arg(long)]
    snake_color: Option<String>,

    /// Food colour (#rrggbb or a colour name)
    #[arg(long)]
    food_color: Option<String>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if let Some(color) = &self.snake_color {
            config.snake_color = color.clone();
        }
        if let Some(color) = &self.food_color {
            config.food_color = color.clone();
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        grid_snake::logging::init(path)?;
    }

    let config = cli.game_config()?;
    tracing::info!(?config, "starting");

    let mut human_mode = HumanMode::new(&config)?;
    human_mode.run().await?;

    Ok(())
}
