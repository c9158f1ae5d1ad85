//! Collaborator contract exposed by the hosting grid widget.
//!
//! The augmentation layer never touches rendering or storage
//! directly. The widget calls the controller's hooks (cell render,
//! header render, selection end, before autofill, key down) and the
//! controller pushes effects back through these capability traits.
//! All calls are synchronous, in-process, and main-thread only.

use gridlace_core::range::GridRange;
use gridlace_engine::outline::{GroupMarker, RowVisibility};
use gridlace_engine::sort::SortEntry;
use gridlace_engine::value::CellValue;

/// Sort capability: the widget owns the actual row reordering.
pub trait SortCapability {
    fn sort_config(&self) -> Vec<SortEntry>;
    fn sort(&mut self, config: &[SortEntry]);
}

/// Undo/redo capability.
pub trait HistoryCapability {
    fn undo(&mut self);
    fn redo(&mut self);
}

/// Full widget surface consumed by the augmentation layer.
///
/// `RowVisibility` is the row-hiding plugin behind group collapse;
/// its `is_enabled` gates collapse/expand.
pub trait GridWidget: RowVisibility + SortCapability + HistoryCapability {
    fn row_count(&self) -> usize;

    fn value_at(&self, row: usize, col: usize) -> CellValue;

    /// Most recent selection, already normalized, if any.
    fn selected_range(&self) -> Option<GridRange>;

    /// Whether the widget currently holds an active/listening
    /// selection (keyboard focus may sit elsewhere on the page).
    fn is_listening(&self) -> bool;

    fn select_all(&mut self);

    fn insert_rows(&mut self, at: usize, count: usize);

    fn remove_rows(&mut self, at: usize, count: usize);

    fn insert_cols(&mut self, at: usize, count: usize);

    fn remove_cols(&mut self, at: usize, count: usize);

    /// Append rows at the bottom (background population task).
    fn append_rows(&mut self, count: usize);

    /// Attach or clear the outline toggle on a row header.
    fn set_row_marker(&mut self, row: usize, marker: Option<GroupMarker>);

    /// Repaint request after imperative state changes (row visibility,
    /// header decorations, cell classes are all widget-side effects).
    fn request_render(&mut self);
}
