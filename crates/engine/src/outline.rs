//! Row outline groups with collapse/expand.
//!
//! Groups are contiguous, non-overlapping row runs. Collapsing hides
//! the rows after the group's start row through the widget's
//! row-visibility capability; the start row stays visible and carries
//! the toggle affordance. Invariants:
//! - no two groups overlap in row range (enforced at creation)
//! - a group spans at least two rows
//! - every mutation on invalid preconditions is a no-op

use serde::{Deserialize, Serialize};

/// Row-visibility capability exposed by the hosting widget.
pub trait RowVisibility {
    fn hide_rows(&mut self, rows: &[usize]);
    fn show_rows(&mut self, rows: &[usize]);
    /// Whether the capability is available on this widget instance.
    fn is_enabled(&self) -> bool;
}

/// A contiguous run of rows that can be collapsed to its start row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowGroup {
    pub id: String,
    pub start_row: usize,
    /// Inclusive; always greater than `start_row`.
    pub end_row: usize,
    pub collapsed: bool,
    pub label: String,
}

impl RowGroup {
    /// Rows hidden while collapsed (everything but the start row).
    fn body_rows(&self) -> Vec<usize> {
        (self.start_row + 1..=self.end_row).collect()
    }

    fn covers(&self, row: usize) -> bool {
        row >= self.start_row && row <= self.end_row
    }
}

/// Per-row marker for the widget's row header affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMarker {
    pub group_id: String,
    pub collapsed: bool,
}

/// Owns the group table for one widget instance.
#[derive(Debug, Default)]
pub struct RowGroupManager {
    groups: Vec<RowGroup>,
    next_id: u64,
}

impl RowGroupManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn groups(&self) -> &[RowGroup] {
        &self.groups
    }

    /// Create a group over `start_row..=end_row`. Declined when the
    /// span is under two rows or any row already belongs to a group.
    /// Ids increase monotonically for the manager's lifetime.
    pub fn create_group(&mut self, start_row: usize, end_row: usize) -> Option<&RowGroup> {
        if end_row <= start_row {
            log::debug!("group over rows {}..={} declined: too small", start_row, end_row);
            return None;
        }
        if self
            .groups
            .iter()
            .any(|group| start_row <= group.end_row && group.start_row <= end_row)
        {
            log::debug!(
                "group over rows {}..={} declined: overlaps an existing group",
                start_row,
                end_row
            );
            return None;
        }

        let id = format!("group-{}", self.next_id);
        self.next_id += 1;
        self.groups.push(RowGroup {
            id,
            start_row,
            end_row,
            collapsed: false,
            label: format!("Rows {}-{}", start_row + 1, end_row + 1),
        });
        self.groups.last()
    }

    pub fn find_by_row(&self, row: usize) -> Option<&RowGroup> {
        self.groups.iter().find(|group| group.covers(row))
    }

    pub fn find_by_start_row(&self, row: usize) -> Option<&RowGroup> {
        self.groups.iter().find(|group| group.start_row == row)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut RowGroup> {
        self.groups.iter_mut().find(|group| group.id == id)
    }

    /// Hide the group's body rows. No-op when already collapsed or the
    /// row-visibility capability is unavailable. Returns whether state
    /// changed.
    pub fn collapse<V: RowVisibility + ?Sized>(&mut self, id: &str, rows: &mut V) -> bool {
        if !rows.is_enabled() {
            log::debug!("collapse {} declined: row visibility unavailable", id);
            return false;
        }
        let Some(group) = self.find_mut(id) else {
            return false;
        };
        if group.collapsed {
            return false;
        }
        rows.hide_rows(&group.body_rows());
        group.collapsed = true;
        true
    }

    /// Show the group's body rows again. No-op when already expanded
    /// or the capability is unavailable.
    pub fn expand<V: RowVisibility + ?Sized>(&mut self, id: &str, rows: &mut V) -> bool {
        if !rows.is_enabled() {
            log::debug!("expand {} declined: row visibility unavailable", id);
            return false;
        }
        let Some(group) = self.find_mut(id) else {
            return false;
        };
        if !group.collapsed {
            return false;
        }
        rows.show_rows(&group.body_rows());
        group.collapsed = false;
        true
    }

    pub fn toggle<V: RowVisibility + ?Sized>(&mut self, id: &str, rows: &mut V) -> bool {
        match self.find_mut(id) {
            Some(group) if group.collapsed => self.expand(id, rows),
            Some(_) => self.collapse(id, rows),
            None => false,
        }
    }

    /// Delete a group, expanding it first so no rows stay hidden.
    pub fn remove<V: RowVisibility + ?Sized>(&mut self, id: &str, rows: &mut V) -> bool {
        self.expand(id, rows);
        let before = self.groups.len();
        self.groups.retain(|group| group.id != id);
        self.groups.len() != before
    }

    /// Marker for a row header: present only on a group's start row.
    pub fn marker_for_row(&self, row: usize) -> Option<GroupMarker> {
        self.find_by_start_row(row).map(|group| GroupMarker {
            group_id: group.id.clone(),
            collapsed: group.collapsed,
        })
    }
}
