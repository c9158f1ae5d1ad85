//! Multi-column sort state.
//!
//! The widget owns row reordering; this tracker owns the sort
//! configuration and the none → asc → desc → none cycle behind the
//! custom header indicators. Entry order encodes precedence: earlier
//! entries sort first.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortEntry {
    pub column: usize,
    #[serde(rename = "sortOrder")]
    pub order: SortOrder,
}

/// Ordered sort configuration for one widget instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortTracker {
    entries: Vec<SortEntry>,
}

impl SortTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[SortEntry] {
        &self.entries
    }

    /// Resync from the widget's own sort capability.
    pub fn replace(&mut self, entries: Vec<SortEntry>) {
        self.entries = entries;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn order_for(&self, column: usize) -> Option<SortOrder> {
        self.entries
            .iter()
            .find(|entry| entry.column == column)
            .map(|entry| entry.order)
    }

    fn next_order(current: Option<SortOrder>) -> Option<SortOrder> {
        match current {
            None => Some(SortOrder::Ascending),
            Some(SortOrder::Ascending) => Some(SortOrder::Descending),
            Some(SortOrder::Descending) => None,
        }
    }

    /// Advance the cycle for `column` and return the new config.
    ///
    /// With `multi` held, other columns keep their entries and
    /// `column` moves to lowest precedence (or drops out when its
    /// cycle reaches "none"). Without it the whole config is replaced.
    pub fn cycle(&mut self, column: usize, multi: bool) -> &[SortEntry] {
        let next = Self::next_order(self.order_for(column));
        if multi {
            self.entries.retain(|entry| entry.column != column);
            if let Some(order) = next {
                self.entries.push(SortEntry { column, order });
            }
        } else {
            self.entries = match next {
                Some(order) => vec![SortEntry { column, order }],
                None => Vec::new(),
            };
        }
        &self.entries
    }

    /// Header indicator glyph for a column.
    pub fn indicator(&self, column: usize) -> &'static str {
        match self.order_for(column) {
            Some(SortOrder::Ascending) => "▲",
            Some(SortOrder::Descending) => "▼",
            None => "↕",
        }
    }
}
