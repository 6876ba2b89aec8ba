//! Command-line and environment configuration.
//!
//! Every flag can also come from a `TUI_2048_*` environment variable; the
//! flag wins when both are set.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use crate::core::{ConfigError, GameConfig};
use crate::types::{Tile, DEFAULT_GRID_SIZE, DEFAULT_WIN_TILE};

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "tui-2048", version, about = "Play 2048 in the terminal")]
pub struct Args {
    /// Side length of the square board
    #[arg(long, env = "TUI_2048_SIZE", default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Tile value that wins the game (power of two)
    #[arg(long, env = "TUI_2048_WIN", default_value_t = DEFAULT_WIN_TILE)]
    pub win: Tile,

    /// Seed for tile spawns; random when omitted
    #[arg(long, env = "TUI_2048_SEED")]
    pub seed: Option<u64>,

    /// Write logs to this file (the terminal is busy with the game)
    #[arg(long, value_name = "FILE", env = "TUI_2048_LOG")]
    pub log_file: Option<PathBuf>,

    /// Log verbosity when --log-file is set
    #[arg(long, env = "TUI_2048_LOG_LEVEL", default_value = "info", value_parser = parse_level)]
    pub log_level: LevelFilter,
}

impl Args {
    /// Validate the game settings.
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        GameConfig::new(self.size, self.win)
    }
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse()
        .map_err(|_| format!("unknown log level `{s}` (off, error, warn, info, debug, trace)"))
}

/// Send `log` records to `path`. Without a path, logging stays disabled.
pub fn init_logging(path: Option<&Path>, level: LevelFilter) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    WriteLogger::init(level, Config::default(), file).context("failed to install logger")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_classic() {
        let args = Args::try_parse_from(["tui-2048"]).unwrap();
        assert_eq!(args.size, 4);
        assert_eq!(args.win, 2048);
        assert_eq!(args.seed, None);
        assert_eq!(args.log_level, LevelFilter::Info);
        assert_eq!(args.game_config(), Ok(GameConfig::default()));
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "tui-2048",
            "--size",
            "5",
            "--win",
            "512",
            "--seed",
            "9",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.size, 5);
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.log_level, LevelFilter::Debug);
        let config = args.game_config().unwrap();
        assert_eq!((config.size(), config.win_tile()), (5, 512));
    }

    #[test]
    fn invalid_size_is_a_config_error() {
        let args = Args::try_parse_from(["tui-2048", "--size", "1"]).unwrap();
        assert!(matches!(
            args.game_config(),
            Err(ConfigError::SizeOutOfRange { size: 1, .. })
        ));
    }

    #[test]
    fn non_numeric_size_is_rejected_by_the_parser() {
        assert!(Args::try_parse_from(["tui-2048", "--size", "four"]).is_err());
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        assert!(Args::try_parse_from(["tui-2048", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn no_log_file_means_no_logger() {
        assert!(init_logging(None, LevelFilter::Debug).is_ok());
    }
}
