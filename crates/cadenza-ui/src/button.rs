// Push-button widget state. Rendering and hit-testing live in the
// surrounding framework; this tracks the label, the click handler, and
// focus state.

use std::fmt;

use crate::selection::{Selectable, SelectionState};

/// A push button. The button is enabled exactly while it has a click
/// handler; assigning `None` disables it.
pub struct Button {
    text: String,
    action: Option<Box<dyn FnMut()>>,
    selection_state: SelectionState,
}

impl Button {
    /// Creates a button with no handler. It starts disabled.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: None,
            selection_state: SelectionState::NotSelected,
        }
    }

    /// Creates a button with a click handler already attached.
    pub fn with_action(text: impl Into<String>, action: impl FnMut() + 'static) -> Self {
        let mut button = Self::new(text);
        button.set_action(Some(Box::new(action)));
        button
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Replaces the click handler. `None` disables the button.
    pub fn set_action(&mut self, action: Option<Box<dyn FnMut()>>) {
        self.action = action;
    }

    /// Whether the button currently accepts activation.
    pub fn is_enabled(&self) -> bool {
        self.action.is_some()
    }

    /// Runs the click handler. Returns false without side effects while
    /// the button is disabled.
    pub fn trigger(&mut self) -> bool {
        match &mut self.action {
            Some(action) => {
                action();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("text", &self.text)
            .field("enabled", &self.is_enabled())
            .field("selection_state", &self.selection_state)
            .finish()
    }
}

impl Selectable for Button {
    fn selection_state(&self) -> SelectionState {
        self.selection_state
    }

    fn set_selection_state(&mut self, state: SelectionState) {
        self.selection_state = state;
    }
}
