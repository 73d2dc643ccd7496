// Selection capability — the contract a widget exposes so a container
// can drive its focus state.

use serde::{Deserialize, Serialize};

/// Focus state of a selectable widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SelectionState {
    #[default]
    NotSelected,
    Selected,
}

/// Capability a widget must expose to participate in container-driven
/// selection. The container reads and writes the selection state and
/// inspects nothing else about the widget. Widgets never change this
/// state themselves.
pub trait Selectable {
    fn selection_state(&self) -> SelectionState;

    fn set_selection_state(&mut self, state: SelectionState);

    /// Returns true while the widget is the current selection target.
    fn is_selected(&self) -> bool {
        self.selection_state() == SelectionState::Selected
    }
}
