//! Spreadsheet-style reference parsing.
//!
//! A reference addresses a single cell ("A1"), a whole column ("A",
//! or "33" as a 1-based column number), or a rectangular range
//! ("A1:B5"). Parsing is case-insensitive and tolerant of surrounding
//! whitespace. Bounds are normalized to 0-based indexes; a missing
//! row end means "to the last row".
//!
//! Parsing fails closed: any shape outside the three forms yields
//! `None`, and whatever asked for the parse stays inert.

use serde::{Deserialize, Serialize};

/// Convert a column label to its 0-based index.
///
/// Labels use spreadsheet column numbering: a bijective base-26 where
/// A=1..Z=26 and AA=27 (there is no zero digit).
pub fn label_to_col(label: &str) -> Option<usize> {
    let label = label.trim();
    if label.is_empty() {
        return None;
    }
    let mut index: usize = 0;
    for ch in label.chars() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let digit = ch.to_ascii_uppercase() as usize - 'A' as usize + 1;
        // Absurdly long labels overflow; treat them as unparseable.
        index = index.checked_mul(26)?.checked_add(digit)?;
    }
    Some(index - 1)
}

/// Convert a 0-based column index to its label ("A", "Z", "AA", ...).
pub fn col_to_label(col: usize) -> String {
    let mut value = col + 1;
    let mut label = String::new();
    while value > 0 {
        let rem = (value - 1) % 26;
        label.insert(0, (b'A' + rem as u8) as char);
        value = (value - 1) / 26;
    }
    label
}

/// One side of a reference: optional column letters followed by an
/// optional 1-based row number. Both parts may be present ("A1"),
/// but a side with neither is rejected by the callers below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellToken {
    col: Option<usize>,
    row: Option<usize>,
}

fn parse_cell_token(token: &str) -> Option<CellToken> {
    let token = token.trim();
    let split = token
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(token.len());
    let (letters, digits) = token.split_at(split);

    // Letters strictly before digits; anything else ("1A", "A-1") is invalid.
    if !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let col = if letters.is_empty() {
        None
    } else {
        label_to_col(letters)
    };
    let row = if digits.is_empty() {
        None
    } else {
        // 1-based on the wire, 0-based internally; row "0" is invalid.
        Some(digits.parse::<usize>().ok()?.checked_sub(1)?)
    };

    Some(CellToken { col, row })
}

/// Normalized bounds of a parsed reference.
///
/// `row_end == None` means the reference extends to the last row.
/// Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedReference {
    pub col_start: usize,
    pub col_end: usize,
    pub row_start: usize,
    pub row_end: Option<usize>,
}

impl ParsedReference {
    /// Parse a reference string into normalized bounds.
    ///
    /// Three forms are accepted:
    /// - digits only ("33"): 1-based column index, full column
    /// - cell or column token ("A1", "A"): bare columns get an
    ///   unbounded row range
    /// - range ("X:Y"): per-axis min/max of both sides; a side that
    ///   omits its row contributes 0 (start) or unbounded (end)
    pub fn parse(reference: &str) -> Option<Self> {
        let reference = reference.trim();
        if reference.is_empty() {
            return None;
        }

        // Digits only: a 1-based column number covering the whole column.
        if reference.chars().all(|c| c.is_ascii_digit()) {
            let one_based: usize = reference.parse().ok()?;
            let col = one_based.checked_sub(1)?;
            return Some(Self {
                col_start: col,
                col_end: col,
                row_start: 0,
                row_end: None,
            });
        }

        let mut parts = reference.split(':');
        let first = parts.next()?;
        let second = parts.next();
        if parts.next().is_some() {
            // More than one colon.
            return None;
        }

        let left = parse_cell_token(first)?;
        let left_col = left.col?;

        let Some(second) = second else {
            // Single cell or bare column.
            return Some(Self {
                col_start: left_col,
                col_end: left_col,
                row_start: left.row.unwrap_or(0),
                row_end: left.row,
            });
        };

        let right = parse_cell_token(second)?;
        let right_col = right.col?;

        let left_row = left.row.unwrap_or(0);
        let (row_start, row_end) = match right.row {
            Some(right_row) => (left_row.min(right_row), Some(left_row.max(right_row))),
            None => (left_row, None),
        };

        Some(Self {
            col_start: left_col.min(right_col),
            col_end: left_col.max(right_col),
            row_start,
            row_end,
        })
    }

    /// Whether the cell at `(row, col)` falls inside these bounds.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        col >= self.col_start
            && col <= self.col_end
            && row >= self.row_start
            && self.row_end.map_or(true, |end| row <= end)
    }
}

/// Test a cell against a reference string, failing closed on a parse
/// failure.
pub fn reference_matches(row: usize, col: usize, reference: &str) -> bool {
    ParsedReference::parse(reference).map_or(false, |parsed| parsed.contains(row, col))
}
