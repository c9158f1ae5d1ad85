//! Direction-aware autofill extrapolation for numeric sequences.
//!
//! Replaces the widget's default drag-fill when the seed column forms
//! an arithmetic progression: the fill strictly continues the series
//! beyond the seed instead of repeating it. Anything the extrapolator
//! cannot prove is a series declines, and the widget fills normally.

use serde::{Deserialize, Serialize};

use gridlace_core::range::GridRange;

use crate::value::CellValue;

/// Drag direction as reported by the widget's before-autofill hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillDirection {
    Up,
    Down,
    Left,
    Right,
}

impl FillDirection {
    pub fn is_vertical(&self) -> bool {
        matches!(self, FillDirection::Up | FillDirection::Down)
    }
}

/// Constant difference of a strict arithmetic progression.
///
/// A single value defaults to a step of 1; empty and non-progressive
/// seeds have none. The comparison is exact: a seed that merely
/// "looks linear" declines.
pub fn detect_step(seed: &[f64]) -> Option<f64> {
    match seed {
        [] => None,
        [_] => Some(1.0),
        [first, second, rest @ ..] => {
            let step = second - first;
            let mut prev = *second;
            for value in rest {
                if value - prev != step {
                    return None;
                }
                prev = *value;
            }
            Some(step)
        }
    }
}

/// Continue the seed series for `span` values away from the drag edge.
///
/// Seeds are read top-to-bottom. Filling down continues past the
/// bottom seed value; filling up negates the step and continues past
/// the top one.
pub fn extrapolate(seed: &[f64], direction: FillDirection, span: usize) -> Option<Vec<f64>> {
    let step = detect_step(seed)?;
    let (start, step) = match direction {
        FillDirection::Down => (*seed.last()?, step),
        FillDirection::Up => (*seed.first()?, -step),
        _ => return None,
    };

    let mut values = Vec::with_capacity(span);
    let mut current = start;
    for _ in 0..span {
        current += step;
        values.push(current);
    }
    Some(values)
}

/// Build the replacement value matrix for a vertical drag-fill.
///
/// Declines unless source and target share one single column and every
/// seed cell has a numeric value.
pub fn plan_vertical_fill<F>(
    source: &GridRange,
    target: &GridRange,
    direction: FillDirection,
    value_at: F,
) -> Option<Vec<Vec<CellValue>>>
where
    F: Fn(usize, usize) -> CellValue,
{
    if !direction.is_vertical() {
        return None;
    }
    if !source.is_single_column() || !target.is_single_column() {
        return None;
    }
    if source.col_start != target.col_start {
        return None;
    }

    let mut seed = Vec::with_capacity(source.row_span());
    for row in source.rows() {
        match value_at(row, source.col_start).to_number() {
            Some(value) => seed.push(value),
            None => {
                log::debug!("series fill declined: non-numeric seed at row {}", row);
                return None;
            }
        }
    }

    let values = extrapolate(&seed, direction, target.row_span())?;
    Some(values
        .into_iter()
        .map(|value| vec![CellValue::Number(value)])
        .collect())
}
