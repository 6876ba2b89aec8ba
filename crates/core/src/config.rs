//! Game configuration and startup errors.

use thiserror::Error;

use crate::types::{
    Tile, DEFAULT_GRID_SIZE, DEFAULT_WIN_TILE, MAX_GRID_SIZE, MIN_GRID_SIZE, MIN_WIN_TILE,
};

/// Invalid configuration or board input. Fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size {size} is out of range ({min}..={max})")]
    SizeOutOfRange { size: usize, min: usize, max: usize },

    #[error("win tile {0} is not a power of two")]
    WinTileNotPowerOfTwo(Tile),

    #[error("win tile {tile} is below the minimum of {min}")]
    WinTileTooSmall { tile: Tile, min: Tile },

    #[error("grid is not square: row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },

    #[error("cell ({row}, {col}) holds {value}, which is neither 0 nor a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: Tile },
}

/// Validated game settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    size: usize,
    win_tile: Tile,
}

impl GameConfig {
    pub fn new(size: usize, win_tile: Tile) -> Result<Self, ConfigError> {
        check_size(size)?;
        if !win_tile.is_power_of_two() {
            return Err(ConfigError::WinTileNotPowerOfTwo(win_tile));
        }
        if win_tile < MIN_WIN_TILE {
            return Err(ConfigError::WinTileTooSmall {
                tile: win_tile,
                min: MIN_WIN_TILE,
            });
        }
        Ok(Self { size, win_tile })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn win_tile(&self) -> Tile {
        self.win_tile
    }

    /// Same win tile on a board of `size`. Callers pass a size taken from an
    /// existing [`Grid`](crate::Grid), which is already in range.
    pub(crate) fn with_size(self, size: usize) -> Self {
        debug_assert!(check_size(size).is_ok());
        Self { size, ..self }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            win_tile: DEFAULT_WIN_TILE,
        }
    }
}

pub(crate) fn check_size(size: usize) -> Result<(), ConfigError> {
    if (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(ConfigError::SizeOutOfRange {
            size,
            min: MIN_GRID_SIZE,
            max: MAX_GRID_SIZE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_classic() {
        let config = GameConfig::default();
        assert_eq!(config.size(), 4);
        assert_eq!(config.win_tile(), 2048);
        assert_eq!(GameConfig::new(4, 2048), Ok(config));
    }

    #[test]
    fn rejects_degenerate_sizes() {
        assert_eq!(
            GameConfig::new(1, 2048),
            Err(ConfigError::SizeOutOfRange {
                size: 1,
                min: MIN_GRID_SIZE,
                max: MAX_GRID_SIZE
            })
        );
        assert!(GameConfig::new(0, 2048).is_err());
        assert!(GameConfig::new(MAX_GRID_SIZE + 1, 2048).is_err());
        assert!(GameConfig::new(MIN_GRID_SIZE, 2048).is_ok());
    }

    #[test]
    fn rejects_bad_win_tiles() {
        assert_eq!(
            GameConfig::new(4, 1000),
            Err(ConfigError::WinTileNotPowerOfTwo(1000))
        );
        assert_eq!(
            GameConfig::new(4, 2),
            Err(ConfigError::WinTileTooSmall { tile: 2, min: 4 })
        );
        assert!(GameConfig::new(4, 0).is_err());
    }

    #[test]
    fn error_messages_name_the_value() {
        let err = GameConfig::new(9, 2048).unwrap_err();
        assert_eq!(err.to_string(), "grid size 9 is out of range (2..=8)");
    }
}
