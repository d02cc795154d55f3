// grid.rs - Fixed-size grid of cells with bounded (non-wrapping) neighbors

use std::fmt;

use log::debug;

use crate::cell::Cell;
use crate::config::{MAX_BOARD_CHARS, Symbols, is_line_break};
use crate::error::{LifeError, Result};

// Offsets of the 8 surrounding positions, row-major, centre excluded
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Rectangular generation snapshot, stored row-major in a flat buffer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-dead grid.
    pub fn new(height: usize, width: usize) -> Self {
        let len = height
            .checked_mul(width)
            .unwrap_or_else(|| panic!("grid {height}x{width} does not fit in memory"));
        Self { height, width, cells: vec![Cell::Dead; len] }
    }

    /// Builds a grid from `height` rows of `width` cells.
    pub fn from_cells(height: usize, width: usize, cells: Vec<Cell>) -> Result<Self> {
        if height.checked_mul(width) != Some(cells.len()) {
            return Err(LifeError::InvalidArgument(format!(
                "{} cells cannot fill a {height}x{width} grid",
                cells.len()
            )));
        }
        Ok(Self::with_cells(height, width, cells))
    }

    /// `cells` must hold exactly `height * width` entries.
    pub(crate) fn with_cells(height: usize, width: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(Some(cells.len()), height.checked_mul(width));
        Self { height, width, cells }
    }

    /// Reads `height * width` cell tokens using the canonical symbols.
    pub fn from_stream<I>(height: i64, width: i64, source: &mut I) -> Result<Self>
    where
        I: Iterator<Item = char>,
    {
        Self::from_stream_with(height, width, source, &Symbols::default())
    }

    /// Reads `height * width` cell tokens. Line breaks are skipped; the alive
    /// symbol is a living cell and any other character a dead one.
    pub fn from_stream_with<I>(height: i64, width: i64, source: &mut I, symbols: &Symbols) -> Result<Self>
    where
        I: Iterator<Item = char>,
    {
        let (rows, cols, len) = checked_dimensions(height, width)?;
        debug!("reading {rows}x{cols} grid ({len} cells)");

        // Grown per token; the header alone never sizes the allocation
        let mut cells = Vec::new();
        while cells.len() < len {
            let token = source.find(|c| !is_line_break(*c)).ok_or_else(|| {
                LifeError::InputError(format!(
                    "input ended after {} of {len} cells",
                    cells.len()
                ))
            })?;
            cells.push(Cell::from(token == symbols.alive));
        }

        Ok(Self::with_cells(rows, cols, cells))
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    fn index(&self, row: usize, col: usize) -> usize {
        if !self.contains(row, col) {
            panic!(
                "cell ({row}, {col}) out of bounds for {}x{} grid",
                self.height, self.width
            );
        }
        row * self.width + col
    }

    /// Panics if `(row, col)` lies outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Panics if `(row, col)` lies outside the grid.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let i = self.index(row, col);
        self.cells[i] = cell;
    }

    pub fn toggle(&mut self, row: usize, col: usize) {
        let next = Cell::from(!self.get(row, col).is_alive());
        self.set(row, col, next);
    }

    /// Live cells among the up to 8 in-bounds neighbors of `(row, col)`.
    /// Positions beyond an edge are absent; edges never wrap.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for &(dr, dc) in &NEIGHBOR_OFFSETS {
            let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
                continue;
            };
            if self.contains(nr, nc) && self.get(nr, nc).is_alive() {
                count += 1;
            }
        }
        count
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        (0..self.height).map(move |r| &self.cells[r * self.width..(r + 1) * self.width])
    }

    /// `height` lines of `width` symbols, each line terminated by `\n`.
    pub fn render(&self, symbols: &Symbols) -> String {
        let mut out = String::with_capacity(self.cells.len());
        for row in self.rows() {
            out.extend(row.iter().map(|c| if c.is_alive() { symbols.alive } else { symbols.dead }));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Symbols::default()))
    }
}

// The rendered board (cells plus one line break per row) must stay within MAX_BOARD_CHARS
fn checked_dimensions(height: i64, width: i64) -> Result<(usize, usize, usize)> {
    let invalid = || LifeError::InvalidDimensions { height, width };
    let rows = usize::try_from(height).map_err(|_| invalid())?;
    let cols = usize::try_from(width).map_err(|_| invalid())?;
    let rendered = cols
        .checked_add(1)
        .and_then(|line| line.checked_mul(rows))
        .filter(|&chars| chars <= MAX_BOARD_CHARS)
        .ok_or_else(invalid)?;
    Ok((rows, cols, rendered - rows))
}
