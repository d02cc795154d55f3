// config.rs - Symbol configuration and command line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::cell::{ALIVE_SYMBOL, DEAD_SYMBOL};
use crate::error::{LifeError, Result};

/// Characters used to read and write cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Symbols {
    pub alive: char,
    pub dead: char,
}

impl Default for Symbols {
    fn default() -> Self {
        Self { alive: ALIVE_SYMBOL, dead: DEAD_SYMBOL }
    }
}

impl Symbols {
    pub fn new(alive: char, dead: char) -> Result<Self> {
        if alive == dead {
            return Err(LifeError::InvalidArgument(format!(
                "alive and dead symbols must differ (both '{alive}')"
            )));
        }
        if is_line_break(alive) || is_line_break(dead) {
            return Err(LifeError::InvalidArgument(
                "cell symbols cannot be line breaks".to_string(),
            ));
        }
        Ok(Self { alive, dead })
    }
}

/// Largest accepted board, counted in rendered characters (cells plus one
/// line break per row).
pub const MAX_BOARD_CHARS: usize = 1 << 30;

/// Line breaks separate rows and never count as cell tokens.
pub fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Simulate Conway's Game of Life on a bounded grid.
///
/// Reads `height width steps` followed by the cell rows, writes the final
/// generation to stdout.
#[derive(Debug, Parser)]
#[command(name = "conway", version)]
pub struct CliArgs {
    /// Input file; stdin when omitted
    pub input: Option<PathBuf>,

    /// Character marking a living cell
    #[arg(long, default_value_t = ALIVE_SYMBOL)]
    pub alive: char,

    /// Character used for dead cells in the output
    #[arg(long, default_value_t = DEAD_SYMBOL)]
    pub dead: char,
}

impl CliArgs {
    pub fn symbols(&self) -> Result<Symbols> {
        Symbols::new(self.alive, self.dead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_symbols() {
        let symbols = Symbols::default();
        assert_eq!(symbols.alive, 'X');
        assert_eq!(symbols.dead, '.');
    }

    #[test]
    fn identical_symbols_rejected() {
        assert!(matches!(Symbols::new('#', '#'), Err(LifeError::InvalidArgument(_))));
        assert!(matches!(Symbols::new('\n', '.'), Err(LifeError::InvalidArgument(_))));
        assert!(Symbols::new('#', ' ').is_ok());
    }

    #[test]
    fn parses_cli_args() {
        let args = CliArgs::parse_from(["conway", "board.txt", "--alive", "#"]);
        assert_eq!(args.input, Some(PathBuf::from("board.txt")));
        assert_eq!(args.symbols().unwrap(), Symbols::new('#', '.').unwrap());

        let args = CliArgs::parse_from(["conway"]);
        assert!(args.input.is_none());
        assert_eq!(args.symbols().unwrap(), Symbols::default());
    }
}
