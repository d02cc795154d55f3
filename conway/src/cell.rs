// cell.rs - Cell states and the transition rule

/// Symbol for a living cell on input and output.
pub const ALIVE_SYMBOL: char = 'X';
/// Symbol for a dead cell on output.
pub const DEAD_SYMBOL: char = '.';

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    Alive,
    #[default]
    Dead,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Next state of this cell given its live neighbor count.
    pub fn next(self, live_neighbors: u8) -> Cell {
        match (self, live_neighbors) {
            (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,  // Survival
            (Cell::Dead, 3)                     => Cell::Alive,  // Birth
            _                                   => Cell::Dead,   // Under/over-population or stays dead
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_cell_rules() {
        assert_eq!(Cell::Alive.next(0), Cell::Dead);
        assert_eq!(Cell::Alive.next(1), Cell::Dead);
        assert_eq!(Cell::Alive.next(2), Cell::Alive);
        assert_eq!(Cell::Alive.next(3), Cell::Alive);
        for n in 4..=8 {
            assert_eq!(Cell::Alive.next(n), Cell::Dead, "{n} neighbors");
        }
    }

    #[test]
    fn dead_cell_rules() {
        for n in 0..=8 {
            let expected = if n == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(Cell::Dead.next(n), expected, "{n} neighbors");
        }
    }

    #[test]
    fn from_bool() {
        assert_eq!(Cell::from(true), Cell::Alive);
        assert_eq!(Cell::from(false), Cell::Dead);
        assert!(!Cell::default().is_alive());
    }
}
