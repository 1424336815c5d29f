use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::geometry::Grid;

/// Largest grid side, in cells
pub const MAX_GRID_CELLS: u32 = u16::MAX as u32;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cell size must be at least 1 pixel")]
    ZeroCellSize,

    #[error("grid must be at least 3x3 cells, got {width}x{height}")]
    GridTooSmall { width: u32, height: u32 },

    #[error("grid is too large: {width}x{height} cells of {cell_size}px")]
    GridTooLarge {
        width: u32,
        height: u32,
        cell_size: u32,
    },

    #[error("fps must be between 1 and 1000, got {0}")]
    FpsOutOfRange(u32),

    #[error("invalid {field} colour {value:?}")]
    InvalidColor { field: &'static str, value: String },

    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration for the game, fixed at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Edge length of one cell in pixels
    pub cell_size: u32,
    /// Width of the game grid in cells
    pub grid_width: u32,
    /// Height of the game grid in cells
    pub grid_height: u32,
    /// Ticks per second
    pub fps: u32,
    /// Fill colour for snake cells (`#rrggbb` or a colour name)
    pub snake_color: String,
    /// Fill colour for the food cell
    pub food_color: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: 10,
            grid_width: 50,
            grid_height: 40,
            fps: 15,
            snake_color: "#333333".to_string(),
            food_color: "#999999".to_string(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Load a JSON config file. Missing fields take their default values.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.grid_width < 3 || self.grid_height < 3 {
            return Err(ConfigError::GridTooSmall {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if !self.fits_pixel_space() {
            return Err(ConfigError::GridTooLarge {
                width: self.grid_width,
                height: self.grid_height,
                cell_size: self.cell_size,
            });
        }
        if !(1..=1000).contains(&self.fps) {
            return Err(ConfigError::FpsOutOfRange(self.fps));
        }
        self.palette()?;
        Ok(())
    }

    /// Each side is at most `MAX_GRID_CELLS`, and one cell past each edge
    /// (where a breaching head lands) must still have an `i32` pixel offset.
    fn fits_pixel_space(&self) -> bool {
        let fits = |cells: u32| {
            cells <= MAX_GRID_CELLS
                && (i64::from(cells) + 1) * i64::from(self.cell_size) <= i64::from(i32::MAX)
        };
        fits(self.grid_width) && fits(self.grid_height)
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height, self.cell_size)
    }

    /// Time between ticks (1000 / fps milliseconds)
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }

    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            snake: parse_color("snake", &self.snake_color)?,
            food: parse_color("food", &self.food_color)?,
        })
    }
}

/// The two fill colours used by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub snake: Color,
    pub food: Color,
}

fn parse_color(field: &'static str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value).map_err(|_| ConfigError::InvalidColor {
        field,
        value: value.to_string(),
    })
}
