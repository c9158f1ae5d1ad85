//! Grid ranges and selection normalization.

use serde::{Deserialize, Serialize};

use crate::reference::col_to_label;

/// A normalized rectangular block of cells. Bounds are inclusive and
/// `row_start <= row_end`, `col_start <= col_end` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRange {
    pub row_start: usize,
    pub col_start: usize,
    pub row_end: usize,
    pub col_end: usize,
}

impl GridRange {
    /// Build a range from two corners in any order.
    pub fn from_corners(row1: usize, col1: usize, row2: usize, col2: usize) -> Self {
        Self {
            row_start: row1.min(row2),
            col_start: col1.min(col2),
            row_end: row1.max(row2),
            col_end: col1.max(col2),
        }
    }

    /// A single-cell range.
    pub fn single(row: usize, col: usize) -> Self {
        Self::from_corners(row, col, row, col)
    }

    pub fn row_span(&self) -> usize {
        self.row_end - self.row_start + 1
    }

    pub fn col_span(&self) -> usize {
        self.col_end - self.col_start + 1
    }

    pub fn is_single_column(&self) -> bool {
        self.col_start == self.col_end
    }

    pub fn rows(&self) -> std::ops::RangeInclusive<usize> {
        self.row_start..=self.row_end
    }

    /// Render as a spreadsheet reference: "A1" for a single cell,
    /// "A1:B5" otherwise.
    pub fn to_reference(&self) -> String {
        let start = format!("{}{}", col_to_label(self.col_start), self.row_start + 1);
        let end = format!("{}{}", col_to_label(self.col_end), self.row_end + 1);
        if start == end {
            start
        } else {
            format!("{}:{}", start, end)
        }
    }
}
