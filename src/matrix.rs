use super::common::to_1d;

/// On/off state for every step cell, sequencer rows only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepMatrix {
    cells: Vec<bool>,
    width: usize,
    rows: usize,
}

impl StepMatrix {
    pub fn new(width: usize, rows: usize) -> Self {
        Self {
            cells: vec![false; width * rows],
            width,
            rows,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    fn index(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.rows && column < self.width).then(|| to_1d(column, row, self.width))
    }

    /// Flips one cell. Returns false and leaves the matrix untouched when out of range.
    pub fn toggle(&mut self, row: usize, column: usize) -> bool {
        match self.index(row, column) {
            Some(idx) => {
                self.cells[idx] ^= true;
                true
            }
            None => false,
        }
    }

    pub fn is_set(&self, row: usize, column: usize) -> bool {
        self.index(row, column)
            .map(|idx| self.cells[idx])
            .unwrap_or(false)
    }

    /// Rows with a step set in `column`, top to bottom.
    pub fn active_rows(&self, column: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.rows).filter(move |&row| self.is_set(row, column))
    }
}
