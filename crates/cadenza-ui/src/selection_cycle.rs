// Selection-cycle container — single-selection cursor over an ordered
// widget collection, with wraparound cycling.

use crate::selection::{Selectable, SelectionState};

/// An ordered widget collection that cycles selection between its
/// children. At most one child is selected at a time; the selection
/// wraps around when moving past the first or last child.
///
/// The container assumes exclusive, single-threaded access from its
/// owner. All operations complete synchronously; cycling and deselection
/// are O(1), selection by widget is an O(n) lookup.
#[derive(Debug)]
pub struct SelectionCycleList<T: Selectable> {
    items: Vec<T>,
    selected_index: Option<usize>,
}

impl<T: Selectable> SelectionCycleList<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected_index: None,
        }
    }

    /// Appends a widget to the end of the cycle order.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Inserts a widget at `index`, shifting later widgets back. The
    /// cursor is not adjusted; a cursor pointing into the shifted range
    /// now refers to whichever widget occupies that slot.
    pub fn insert(&mut self, index: usize, item: T) {
        self.items.insert(index, item);
    }

    /// Removes and returns the widget at `index`. The cursor is not
    /// re-validated; a cursor left out of bounds reads as no selection.
    pub fn remove(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Selects the next widget in cycle order, wrapping to the front
    /// past the last widget. Starting from no selection also lands on
    /// the front. Does nothing while the collection is empty.
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }

        match self.selected_index {
            Some(index) if index + 1 < self.items.len() => self.set_selected(Some(index + 1)),
            _ => self.set_selected(Some(0)),
        }
    }

    /// Selects the previous widget in cycle order, wrapping to the back
    /// past the first widget. Starting from no selection lands on the
    /// back. Does nothing while the collection is empty.
    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }

        match self.selected_index {
            Some(index) if index > 0 && index < self.items.len() => {
                self.set_selected(Some(index - 1))
            }
            _ => self.set_selected(Some(self.items.len() - 1)),
        }
    }

    /// Clears the selection. Idempotent.
    pub fn deselect(&mut self) {
        self.set_selected(None);
    }

    /// Selects the given widget, located by equality. A widget not
    /// present in the collection clears the selection instead.
    pub fn select(&mut self, item: &T)
    where
        T: PartialEq,
    {
        let index = self.items.iter().position(|candidate| candidate == item);
        self.set_selected(index);
    }

    /// The currently selected widget, if the cursor still refers to one.
    /// A cursor left stale by removal reads as no selection.
    pub fn selected(&self) -> Option<&T> {
        self.selected_index.and_then(|index| self.items.get(index))
    }

    /// Mutable access to the selected widget, with the same bounds rule
    /// as [`selected`](Self::selected).
    pub fn selected_mut(&mut self) -> Option<&mut T> {
        self.selected_index
            .and_then(|index| self.items.get_mut(index))
    }

    /// The raw cursor value.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Single transition point for every selection change. An unchanged
    /// cursor returns immediately, so no widget sees a duplicate state
    /// write for a selection that did not actually move.
    fn set_selected(&mut self, index: Option<usize>) {
        if self.selected_index == index {
            return;
        }

        if let Some(old) = self.selected_index
            && let Some(item) = self.items.get_mut(old)
        {
            item.set_selection_state(SelectionState::NotSelected);
        }

        self.selected_index = index;

        if let Some(new) = self.selected_index
            && let Some(item) = self.items.get_mut(new)
        {
            item.set_selection_state(SelectionState::Selected);
        }
    }
}

impl<T: Selectable> Default for SelectionCycleList<T> {
    fn default() -> Self {
        Self::new()
    }
}
