//! Field module - manages the game grid
//!
//! The field is a `ROWS x COLS` grid of [`Cell`]s stored row-major in a nested
//! array, so it never allocates.
//! Coordinates: (row, col) where row grows top to bottom and col grows left to right.
//! Row 0, row ROWS-1, col 0 and col COLS-1 form the border ring.

use rand::Rng;

use crate::types::{BorderKind, Cell, FIELD_COLS, FIELD_ROWS};

/// The field at the size the game is played with.
pub type GameField = Field<FIELD_ROWS, FIELD_COLS>;

/// A bordered grid of cells.
///
/// Both dimensions include the border, so a `Field<12, 12>` has a 10x10 interior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<const ROWS: usize = FIELD_ROWS, const COLS: usize = FIELD_COLS> {
    cells: [[Cell; COLS]; ROWS],
}

impl<const ROWS: usize, const COLS: usize> Field<ROWS, COLS> {
    /// Create a field with the border drawn and an empty interior
    pub fn new() -> Self {
        let mut field = Self {
            cells: [[Cell::Empty; COLS]; ROWS],
        };
        field.clear();
        field
    }

    /// Reset every cell to empty and redraw the border ring.
    pub fn clear(&mut self) {
        for row in self.cells.iter_mut() {
            row.fill(Cell::Empty);
        }
        if ROWS == 0 || COLS == 0 {
            return;
        }

        let (last_row, last_col) = (ROWS - 1, COLS - 1);

        for col in 1..last_col {
            self.cells[0][col] = Cell::Border(BorderKind::Horizontal);
            self.cells[last_row][col] = Cell::Border(BorderKind::Horizontal);
        }
        for row in 1..last_row {
            self.cells[row][0] = Cell::Border(BorderKind::Vertical);
            self.cells[row][last_col] = Cell::Border(BorderKind::Vertical);
        }

        for (row, col) in [(0, 0), (0, last_col), (last_row, 0), (last_row, last_col)] {
            self.cells[row][col] = Cell::Border(BorderKind::Corner);
        }
    }

    /// Get cell at (row, col), or `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Get cell at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the field.
    #[track_caller]
    pub fn at(&self, row: usize, col: usize) -> Cell {
        match self.get(row, col) {
            Some(cell) => cell,
            None => panic!("read of ({row}, {col}) outside {ROWS}x{COLS} field"),
        }
    }

    /// Set cell at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the field.
    #[track_caller]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(slot) => *slot = cell,
            None => panic!("write of ({row}, {col}) outside {ROWS}x{COLS} field"),
        }
    }

    /// Whether (row, col) lies strictly inside the border ring.
    pub fn is_interior(&self, row: usize, col: usize) -> bool {
        row >= 1 && col >= 1 && row + 1 < ROWS && col + 1 < COLS
    }

    /// Interior positions in row-major order.
    pub fn interior_positions(&self) -> impl Iterator<Item = (usize, usize)> {
        (1..ROWS.saturating_sub(1))
            .flat_map(|row| (1..COLS.saturating_sub(1)).map(move |col| (row, col)))
    }

    /// Number of cells on the whole field holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|c| **c == cell)
            .count()
    }

    /// Number of empty interior cells.
    pub fn free_interior_cells(&self) -> usize {
        self.interior_positions()
            .filter(|&(row, col)| self.cells[row][col].is_empty())
            .count()
    }

    /// Pick a uniformly random empty interior cell by rejection sampling.
    ///
    /// Returns `None` when the interior has no empty cell left, instead of
    /// sampling forever.
    pub fn random_empty_interior_cell<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Option<(usize, usize)> {
        if self.free_interior_cells() == 0 {
            return None;
        }

        loop {
            let row = rng.gen_range(1..ROWS - 1);
            let col = rng.gen_range(1..COLS - 1);
            if self.cells[row][col].is_empty() {
                return Some((row, col));
            }
        }
    }

    /// Append the field as text, one line per row, each ending in `\n`.
    pub fn write_text(&self, out: &mut String) {
        out.reserve(ROWS * (COLS + 1));
        for row in &self.cells {
            out.extend(row.iter().map(Cell::glyph));
            out.push('\n');
        }
    }
}

impl<const ROWS: usize, const COLS: usize> Default for Field<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}
