//! In-memory widget double for controller tests.

use std::collections::{BTreeMap, BTreeSet};

use gridlace_core::range::GridRange;
use gridlace_engine::outline::{GroupMarker, RowVisibility};
use gridlace_engine::sort::SortEntry;
use gridlace_engine::value::CellValue;

use crate::widget::{GridWidget, HistoryCapability, SortCapability};

/// Records every capability call so tests can assert on effects.
pub struct MockGrid {
    data: BTreeMap<(usize, usize), CellValue>,
    rows: usize,
    hidden: BTreeSet<usize>,
    markers: BTreeMap<usize, GroupMarker>,
    sort_config: Vec<SortEntry>,
    pub selection: Option<GridRange>,
    pub listening: bool,
    pub row_visibility_enabled: bool,
    pub undo_count: usize,
    pub redo_count: usize,
    pub select_all_count: usize,
    pub render_count: usize,
    pub inserted_rows: Vec<(usize, usize)>,
    pub removed_rows: Vec<(usize, usize)>,
    pub inserted_cols: Vec<(usize, usize)>,
    pub removed_cols: Vec<(usize, usize)>,
    pub appended_total: usize,
    pub sort_calls: Vec<Vec<SortEntry>>,
}

impl MockGrid {
    pub fn with_rows(rows: usize) -> Self {
        Self {
            data: BTreeMap::new(),
            rows,
            hidden: BTreeSet::new(),
            markers: BTreeMap::new(),
            sort_config: Vec::new(),
            selection: None,
            listening: true,
            row_visibility_enabled: true,
            undo_count: 0,
            redo_count: 0,
            select_all_count: 0,
            render_count: 0,
            inserted_rows: Vec::new(),
            removed_rows: Vec::new(),
            inserted_cols: Vec::new(),
            removed_cols: Vec::new(),
            appended_total: 0,
            sort_calls: Vec::new(),
        }
    }

    pub fn set_value(&mut self, row: usize, col: usize, value: CellValue) {
        self.data.insert((row, col), value);
    }

    pub fn set_sort_config(&mut self, config: Vec<SortEntry>) {
        self.sort_config = config;
    }

    pub fn sort_config(&self) -> Vec<SortEntry> {
        self.sort_config.clone()
    }

    pub fn hidden_rows(&self) -> Vec<usize> {
        self.hidden.iter().copied().collect()
    }

    pub fn marker(&self, row: usize) -> Option<GroupMarker> {
        self.markers.get(&row).cloned()
    }
}

impl RowVisibility for MockGrid {
    fn hide_rows(&mut self, rows: &[usize]) {
        self.hidden.extend(rows.iter().copied());
    }

    fn show_rows(&mut self, rows: &[usize]) {
        for row in rows {
            self.hidden.remove(row);
        }
    }

    fn is_enabled(&self) -> bool {
        self.row_visibility_enabled
    }
}

impl SortCapability for MockGrid {
    fn sort_config(&self) -> Vec<SortEntry> {
        self.sort_config.clone()
    }

    fn sort(&mut self, config: &[SortEntry]) {
        self.sort_config = config.to_vec();
        self.sort_calls.push(config.to_vec());
    }
}

impl HistoryCapability for MockGrid {
    fn undo(&mut self) {
        self.undo_count += 1;
    }

    fn redo(&mut self) {
        self.redo_count += 1;
    }
}

impl GridWidget for MockGrid {
    fn row_count(&self) -> usize {
        self.rows
    }

    fn value_at(&self, row: usize, col: usize) -> CellValue {
        self.data.get(&(row, col)).cloned().unwrap_or_default()
    }

    fn selected_range(&self) -> Option<GridRange> {
        self.selection
    }

    fn is_listening(&self) -> bool {
        self.listening
    }

    fn select_all(&mut self) {
        self.select_all_count += 1;
    }

    fn insert_rows(&mut self, at: usize, count: usize) {
        self.rows += count;
        self.inserted_rows.push((at, count));
    }

    fn remove_rows(&mut self, at: usize, count: usize) {
        self.rows = self.rows.saturating_sub(count);
        self.removed_rows.push((at, count));
    }

    fn insert_cols(&mut self, at: usize, count: usize) {
        self.inserted_cols.push((at, count));
    }

    fn remove_cols(&mut self, at: usize, count: usize) {
        self.removed_cols.push((at, count));
    }

    fn append_rows(&mut self, count: usize) {
        self.rows += count;
        self.appended_total += count;
    }

    fn set_row_marker(&mut self, row: usize, marker: Option<GroupMarker>) {
        match marker {
            Some(marker) => {
                self.markers.insert(row, marker);
            }
            None => {
                self.markers.remove(&row);
            }
        }
    }

    fn request_render(&mut self) {
        self.render_count += 1;
    }
}
