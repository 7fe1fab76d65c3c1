use serde::{Deserialize, Serialize};

/// A bounded, fixed-size generation of cells. The outermost ring of rows and
/// columns is the border: the evolution rule never evaluates it and never
/// brings it alive, so in practice it stays dead unless a cell is added there
/// by hand.
///
/// Dimensions are fixed at creation; a new generation is a new `Grid` value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    height: u16,
    width: u16,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-dead grid. Dimensions are clamped to at least 1.
    pub fn new(height: u16, width: u16) -> Self {
        let height = height.max(1);
        let width = width.max(1);
        Self {
            height,
            width,
            cells: vec![false; usize::from(height) * usize::from(width)],
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn get(&self, row: u16, col: u16) -> bool {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: u16, col: u16, alive: bool) {
        let idx = self.index(row, col);
        self.cells[idx] = alive;
    }

    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < i32::from(self.height) && col >= 0 && col < i32::from(self.width)
    }

    pub fn is_border(&self, row: u16, col: u16) -> bool {
        row == 0 || row == self.height - 1 || col == 0 || col == self.width - 1
    }

    /// True when the grid has at least one interior cell to evolve.
    pub fn has_interior(&self) -> bool {
        self.height >= 3 && self.width >= 3
    }

    /// Number of live cells, border included.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    fn index(&self, row: u16, col: u16) -> usize {
        debug_assert!(row < self.height && col < self.width);
        usize::from(row) * usize::from(self.width) + usize::from(col)
    }
}
