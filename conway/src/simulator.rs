// simulator.rs - Generation stepping

use std::collections::VecDeque;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use log::{debug, info};

use crate::error::{LifeError, Result};
use crate::grid::Grid;

/// Derives the next generation from `grid`.
///
/// Every neighbor count is read from the input snapshot, so no output cell
/// can observe a partially updated generation.
pub fn advance_one(grid: &Grid) -> Grid {
    let (height, width) = (grid.height(), grid.width());
    let mut cells = Vec::with_capacity(height * width);
    for row in 0..height {
        for col in 0..width {
            let neighbors = grid.count_live_neighbors(row, col);
            cells.push(grid.get(row, col).next(neighbors));
        }
    }
    Grid::with_cells(height, width, cells)
}

/// Applies [`advance_one`] `steps` times. Zero steps returns `initial` as is.
pub fn run(initial: Grid, steps: i64) -> Result<Grid> {
    let steps = u64::try_from(steps)
        .map_err(|_| LifeError::InvalidArgument(format!("steps must be non-negative, got {steps}")))?;
    info!("running {steps} generation(s) on {}x{} grid", initial.height(), initial.width());

    let mut sim = Simulator::new(initial);
    sim.run_to(steps);
    Ok(sim.into_grid())
}

// Hashes of the most recent generations kept for cycle detection
const HISTORY_LEN: usize = 10;

fn hash_grid(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}

/// Owns the current generation and replaces it wholesale on each step.
#[derive(Clone, Debug)]
pub struct Simulator {
    current: Grid,
    generation: u64,
    still: bool,
    history: VecDeque<u64>,   // Oldest first, current generation last
}

impl Simulator {
    pub fn new(initial: Grid) -> Self {
        let mut history = VecDeque::with_capacity(HISTORY_LEN);
        history.push_back(hash_grid(&initial));
        Self { current: initial, generation: 0, still: false, history }
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True once a step produced a generation identical to its predecessor.
    pub fn is_still(&self) -> bool {
        self.still
    }

    pub fn into_grid(self) -> Grid {
        self.current
    }

    /// Shortest period `p` for which the last `p` generation hashes repeat
    /// the `p` before them. Only periods up to half the history are seen.
    pub fn cycle_period(&self) -> Option<usize> {
        let hashes = &self.history;
        let len = hashes.len();
        (1..=len / 2).find(|&p| (0..p).all(|i| hashes[len - 1 - i] == hashes[len - 1 - i - p]))
    }

    /// Advances one generation.
    pub fn step(&mut self) {
        if !self.still {
            let next = advance_one(&self.current);
            self.still = next == self.current;
            self.current = next;
        }
        self.generation += 1;

        if self.history.len() == HISTORY_LEN {
            self.history.pop_front();
        }
        self.history.push_back(hash_grid(&self.current));
    }

    /// Steps until `target` generations have been applied. A still life
    /// cannot change further and an oscillator repeats every period, so
    /// whole periods are skipped.
    pub fn run_to(&mut self, target: u64) {
        while self.generation < target {
            self.step();
            let remaining = target.saturating_sub(self.generation);
            if self.still {
                debug!("still life at generation {}, skipping to {target}", self.generation);
                self.generation = target;
            } else if let Some(period) = self.cycle_period() {
                let skip = remaining - remaining % period as u64;
                if skip > 0 {
                    debug!("period {period} cycle at generation {}, skipping {skip}", self.generation);
                    self.generation += skip;
                    self.history.clear();
                    self.history.push_back(hash_grid(&self.current));
                }
            }
        }
    }

    /// Replaces the current generation and restarts the count.
    pub fn reset(&mut self, grid: Grid) {
        *self = Self::new(grid);
    }

    /// Flips one cell of the current generation.
    pub fn toggle(&mut self, row: usize, col: usize) {
        self.current.toggle(row, col);
        self.still = false;
        self.history.clear();
        self.history.push_back(hash_grid(&self.current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    fn parse(height: i64, width: i64, text: &str) -> Grid {
        Grid::from_stream(height, width, &mut text.chars()).unwrap()
    }

    #[test]
    fn blinker_oscillates() {
        let horizontal = parse(3, 3, "...\nXXX\n...");
        let vertical = advance_one(&horizontal);
        assert_eq!(vertical.to_string(), ".X.\n.X.\n.X.\n");
        assert_eq!(advance_one(&vertical), horizontal);
    }

    #[test]
    fn birth_needs_exactly_three() {
        let three = parse(3, 3, "X.X\n...\n.X.");
        assert_eq!(advance_one(&three).get(1, 1), Cell::Alive);

        let two = parse(3, 3, "X.X\n...\n...");
        assert_eq!(advance_one(&two).get(1, 1), Cell::Dead);
    }

    #[test]
    fn input_grid_is_untouched() {
        let grid = parse(3, 3, "...\nXXX\n...");
        let before = grid.clone();
        let _ = advance_one(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn deterministic() {
        let grid = parse(4, 5, "X.XX.\n.XX.X\nXX..X\n..XXX");
        assert_eq!(advance_one(&grid), advance_one(&grid));
    }

    #[test]
    fn zero_steps_is_identity() {
        let grid = parse(2, 3, "X.o\n.XX");
        assert_eq!(run(grid.clone(), 0).unwrap(), grid);
    }

    #[test]
    fn negative_steps_rejected() {
        let err = run(Grid::new(2, 2), -1).unwrap_err();
        assert!(matches!(err, LifeError::InvalidArgument(_)));
    }

    #[test]
    fn still_life_short_circuit_matches_full_run() {
        let block = parse(4, 4, "....\n.XX.\n.XX.\n....");
        let mut sim = Simulator::new(block.clone());
        sim.run_to(1_000_000_000);
        assert!(sim.is_still());
        assert_eq!(sim.generation(), 1_000_000_000);
        assert_eq!(sim.into_grid(), block);
    }

    #[test]
    fn dying_pattern_settles_on_empty_grid() {
        let grid = parse(3, 3, "X..\n...\n..X");
        let result = run(grid, 7).unwrap();
        assert_eq!(result.population(), 0);
        assert_eq!(result.height(), 3);
    }

    #[test]
    fn glider_moves_diagonally() {
        let glider = parse(5, 5, ".X...\n..X..\nXXX..\n.....\n.....");
        let moved = run(glider, 4).unwrap();
        assert_eq!(moved.to_string(), ".....\n..X..\n...X.\n.XXX.\n.....\n");
    }

    #[test]
    fn oscillator_skip_matches_full_run() {
        let horizontal = parse(5, 5, ".....\n.....\n.XXX.\n.....\n.....");
        let vertical = advance_one(&horizontal);

        let mut sim = Simulator::new(horizontal.clone());
        sim.run_to(4);
        assert_eq!(sim.cycle_period(), Some(2));

        assert_eq!(run(horizontal.clone(), i64::MAX).unwrap(), vertical);
        assert_eq!(run(horizontal.clone(), i64::MAX - 1).unwrap(), horizontal);
        for steps in 0..12 {
            let mut slow = horizontal.clone();
            for _ in 0..steps {
                slow = advance_one(&slow);
            }
            assert_eq!(run(horizontal.clone(), steps).unwrap(), slow, "{steps} steps");
        }
    }

    #[test]
    fn no_cycle_while_pattern_evolves() {
        let glider = parse(8, 8, ".X......\n..X.....\nXXX.....\n........\n........\n........\n........\n........");
        let mut sim = Simulator::new(glider);
        sim.step();
        sim.step();
        assert_eq!(sim.cycle_period(), None);
    }

    #[test]
    fn toggle_clears_still_flag() {
        let mut sim = Simulator::new(Grid::new(3, 3));
        sim.step();
        assert!(sim.is_still());
        sim.toggle(1, 1);
        assert!(!sim.is_still());
        sim.step();
        assert_eq!(sim.grid().population(), 0);
        assert_eq!(sim.generation(), 2);
    }
}
