//! Winning lines: the eight fixed three-cell configurations of the board.

use core::fmt;

use crate::common::Move;
use crate::config::Grid;

/// Three collinear cells spanning the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    cells: [(usize, usize); 3],
}

impl Line {
    /// Create a line from three `(row, col)` cells.
    pub const fn new(cells: [(usize, usize); 3]) -> Self {
        Self { cells }
    }

    /// The cells of the line, in the order they were declared.
    pub fn cells(&self) -> [(usize, usize); 3] {
        self.cells
    }

    /// The cells of the line as moves.
    pub fn moves(&self) -> [Move; 3] {
        self.cells.map(Move::from)
    }

    /// Returns `true` if `(row, col)` lies on this line.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }

    /// Occupancy mask of the line.
    pub fn mask(&self) -> Grid {
        let mut mask = Grid::new();
        for (r, c) in self.cells {
            // Line tables are built from in-range constants only.
            let _ = mask.set(r, c);
        }
        mask
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.moves();
        write!(f, "Line({}-{}-{})", a, b, c)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.moves();
        write!(f, "{} {} {}", a, b, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LINES;

    #[test]
    fn every_line_has_three_cells() {
        for line in LINES {
            assert_eq!(line.mask().count_ones(), 3, "{:?}", line);
        }
    }

    #[test]
    fn lines_are_distinct() {
        for (i, a) in LINES.iter().enumerate() {
            for b in LINES.iter().skip(i + 1) {
                assert_ne!(a.mask(), b.mask());
            }
        }
    }

    #[test]
    fn center_lies_on_four_lines() {
        let n = LINES.iter().filter(|l| l.contains(1, 1)).count();
        assert_eq!(n, 4);
    }
}
