// lib.rs - Conway's Game of Life on a bounded, non-wrapping grid

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod input;
pub mod patterns;
pub mod simulator;

pub use cell::{Cell, ALIVE_SYMBOL, DEAD_SYMBOL};
pub use config::{CliArgs, Symbols};
pub use error::{LifeError, Result};
pub use grid::Grid;
pub use input::{decode, parse_input, read_input, Header, Input};
pub use simulator::{advance_one, run, Simulator};

/// Reads a complete input, runs it and renders the final generation.
/// Nothing is rendered unless every stage succeeds.
pub fn simulate(text: &str, symbols: &Symbols) -> Result<String> {
    let Input { steps, grid } = parse_input(text, symbols)?;
    let last = run(grid, steps)?;
    Ok(last.render(symbols))
}
