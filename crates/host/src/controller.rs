//! Controller wiring the augmentation state to a widget instance.
//!
//! One controller per widget. The widget calls in through its hook
//! surface (key events, render callbacks, autofill interception, sort
//! header clicks); the controller mutates its own state and pushes
//! effects back through the `GridWidget` capability traits. Every
//! mutation that changes what the user sees ends with a render
//! request; pure queries never do.

use gridlace_core::range::GridRange;
use gridlace_engine::autofill::{plan_vertical_fill, FillDirection};
use gridlace_engine::conditional::{ConditionalRule, RuleSet};
use gridlace_engine::outline::{GroupMarker, RowGroupManager};
use gridlace_engine::populate::RowPopulator;
use gridlace_engine::sort::SortTracker;
use gridlace_engine::value::CellValue;

use crate::keyboard::{KeyEvent, ModifierTracker};
use crate::shortcuts::{self, ShortcutAction};
use crate::widget::GridWidget;

#[derive(Default)]
pub struct GridController {
    rules: RuleSet,
    groups: RowGroupManager,
    sorting: SortTracker,
    modifiers: ModifierTracker,
    populator: RowPopulator,
}

impl GridController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn groups(&self) -> &RowGroupManager {
        &self.groups
    }

    pub fn sorting(&self) -> &SortTracker {
        &self.sorting
    }

    // ====================================================================
    // Window-level modifier stream
    // ====================================================================

    pub fn window_key_down(&mut self, event: &KeyEvent) {
        self.modifiers.key_down(event);
    }

    pub fn window_key_up(&mut self, event: &KeyEvent) {
        self.modifiers.key_up(event);
    }

    pub fn window_blur(&mut self) {
        self.modifiers.window_blur();
    }

    // ====================================================================
    // Conditional formatting
    // ====================================================================

    pub fn add_rule(&mut self, rule: ConditionalRule, widget: &mut dyn GridWidget) {
        self.rules.add(rule);
        widget.request_render();
    }

    pub fn remove_rule(&mut self, id: &str, widget: &mut dyn GridWidget) -> bool {
        let removed = self.rules.remove(id);
        if removed {
            widget.request_render();
        }
        removed
    }

    pub fn set_rule_enabled(
        &mut self,
        id: &str,
        enabled: bool,
        widget: &mut dyn GridWidget,
    ) -> bool {
        let changed = self.rules.set_enabled(id, enabled);
        if changed {
            widget.request_render();
        }
        changed
    }

    /// Extra classes for a cell, in rule order. Called from the cell
    /// renderer on every paint, so it allocates only on a match.
    pub fn cell_classes(&self, row: usize, col: usize, value: &CellValue) -> Vec<&'static str> {
        self.rules
            .styles_for(row, col, value)
            .into_iter()
            .map(|style| style.class_name())
            .collect()
    }

    // ====================================================================
    // Selection
    // ====================================================================

    /// A1-style reference for the selection the widget just reported.
    pub fn selection_reference(&self, row1: usize, col1: usize, row2: usize, col2: usize) -> String {
        GridRange::from_corners(row1, col1, row2, col2).to_reference()
    }

    // ====================================================================
    // Autofill interception
    // ====================================================================

    /// Replacement matrix for a drag-fill, or `None` to let the widget
    /// do its default copy-fill. Only engages while Shift is held.
    pub fn before_autofill(
        &self,
        source: &GridRange,
        target: &GridRange,
        direction: FillDirection,
        widget: &dyn GridWidget,
    ) -> Option<Vec<Vec<CellValue>>> {
        if !self.modifiers.is_shift_held() {
            return None;
        }
        plan_vertical_fill(source, target, direction, |row, col| widget.value_at(row, col))
    }

    // ====================================================================
    // Row groups
    // ====================================================================

    pub fn row_header_marker(&self, row: usize) -> Option<GroupMarker> {
        self.groups.marker_for_row(row)
    }

    pub fn toggle_group(&mut self, id: &str, widget: &mut dyn GridWidget) -> bool {
        let toggled = self.groups.toggle(id, widget);
        if toggled {
            self.sync_group_markers(widget);
            widget.request_render();
        }
        toggled
    }

    pub fn group_selection(&mut self, widget: &mut dyn GridWidget) -> bool {
        let Some(selection) = widget.selected_range() else {
            return false;
        };
        let created = self
            .groups
            .create_group(selection.row_start, selection.row_end)
            .is_some();
        if created {
            self.sync_group_markers(widget);
            widget.request_render();
        }
        created
    }

    pub fn ungroup_selection(&mut self, widget: &mut dyn GridWidget) -> bool {
        let Some(selection) = widget.selected_range() else {
            return false;
        };
        let Some(id) = self
            .groups
            .find_by_row(selection.row_start)
            .map(|group| group.id.clone())
        else {
            return false;
        };
        let removed = self.groups.remove(&id, widget);
        if removed {
            self.sync_group_markers(widget);
            widget.request_render();
        }
        removed
    }

    pub fn collapse_selection(&mut self, widget: &mut dyn GridWidget) -> bool {
        self.fold_selection(widget, true)
    }

    pub fn expand_selection(&mut self, widget: &mut dyn GridWidget) -> bool {
        self.fold_selection(widget, false)
    }

    fn fold_selection(&mut self, widget: &mut dyn GridWidget, collapse: bool) -> bool {
        let Some(selection) = widget.selected_range() else {
            return false;
        };
        let Some(id) = self
            .groups
            .find_by_row(selection.row_start)
            .map(|group| group.id.clone())
        else {
            return false;
        };
        let changed = if collapse {
            self.groups.collapse(&id, widget)
        } else {
            self.groups.expand(&id, widget)
        };
        if changed {
            self.sync_group_markers(widget);
            widget.request_render();
        }
        changed
    }

    /// Push the marker for every row down to the widget's row headers.
    fn sync_group_markers(&self, widget: &mut dyn GridWidget) {
        for row in 0..widget.row_count() {
            widget.set_row_marker(row, self.groups.marker_for_row(row));
        }
    }

    // ====================================================================
    // Sorting
    // ====================================================================

    pub fn sort_indicator(&self, column: usize) -> &'static str {
        self.sorting.indicator(column)
    }

    /// Header click: advance the column's sort cycle and apply it.
    /// `multi` (Shift-click) keeps other columns' entries.
    pub fn cycle_sort(&mut self, column: usize, multi: bool, widget: &mut dyn GridWidget) {
        // The widget may have changed its own config (e.g. a plugin
        // cleared it on data load); resync before cycling.
        self.sorting.replace(widget.sort_config());
        let config = self.sorting.cycle(column, multi).to_vec();
        widget.sort(&config);
        widget.request_render();
    }

    // ====================================================================
    // Keyboard dispatch
    // ====================================================================

    /// Handle a window key event. Returns whether it was consumed
    /// (the host should then suppress the browser/page default).
    pub fn handle_key(&mut self, event: &KeyEvent, widget: &mut dyn GridWidget) -> bool {
        if !event.in_widget && !widget.is_listening() {
            return false;
        }
        let Some(action) = shortcuts::resolve(event) else {
            return false;
        };
        log::debug!("shortcut {:?}", action);
        match action {
            ShortcutAction::Undo => widget.undo(),
            ShortcutAction::Redo => widget.redo(),
            ShortcutAction::SelectAll => widget.select_all(),
            ShortcutAction::GroupRows => {
                self.group_selection(widget);
            }
            ShortcutAction::UngroupRows => {
                self.ungroup_selection(widget);
            }
            ShortcutAction::CollapseGroup => {
                self.collapse_selection(widget);
            }
            ShortcutAction::ExpandGroup => {
                self.expand_selection(widget);
            }
            ShortcutAction::InsertRowBelow => {
                let at = widget.selected_range().map_or(0, |s| s.row_end + 1);
                widget.insert_rows(at, 1);
            }
            ShortcutAction::RemoveRows => {
                if let Some(selection) = widget.selected_range() {
                    widget.remove_rows(selection.row_start, selection.row_span());
                }
            }
            ShortcutAction::InsertColAfter => {
                let at = widget.selected_range().map_or(0, |s| s.col_end + 1);
                widget.insert_cols(at, 1);
            }
            ShortcutAction::RemoveCols => {
                if let Some(selection) = widget.selected_range() {
                    widget.remove_cols(selection.col_start, selection.col_span());
                }
            }
        }
        true
    }

    // ====================================================================
    // Background population
    // ====================================================================

    /// One population tick. Returns whether the host should keep its
    /// timer running.
    pub fn populate_tick(&mut self, widget: &mut dyn GridWidget) -> bool {
        match self.populator.next_batch() {
            Some(batch) => {
                widget.append_rows(batch.count);
                widget.request_render();
                !self.populator.is_done()
            }
            None => false,
        }
    }
}
