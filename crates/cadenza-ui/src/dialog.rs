// Modal dialog overlay — a titled group of buttons with keyboard-driven
// focus cycling. Owns the selection-cycle list and translates focus
// commands into selection operations.

use tracing::info;

use crate::button::Button;
use crate::selection_cycle::SelectionCycleList;

/// Focus and activation commands a dialog understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogCommand {
    FocusNext,
    FocusPrevious,
    Confirm,
    Dismiss,
}

/// A modal dialog holding a cycling group of buttons.
pub struct ButtonDialog {
    title: String,
    buttons: SelectionCycleList<Button>,
}

impl ButtonDialog {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            buttons: SelectionCycleList::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Appends a button with the given click handler.
    pub fn add_button(&mut self, text: impl Into<String>, action: impl FnMut() + 'static) {
        self.buttons.push(Button::with_action(text, action));
    }

    /// Appends an already-built button, possibly disabled.
    pub fn push_button(&mut self, button: Button) {
        self.buttons.push(button);
    }

    pub fn buttons(&self) -> &SelectionCycleList<Button> {
        &self.buttons
    }

    /// Applies a focus or activation command. Returns true when the
    /// command activated a button.
    pub fn handle(&mut self, command: DialogCommand) -> bool {
        match command {
            DialogCommand::FocusNext => {
                self.buttons.select_next();
                false
            }
            DialogCommand::FocusPrevious => {
                self.buttons.select_previous();
                false
            }
            DialogCommand::Confirm => {
                let Some(button) = self.buttons.selected_mut() else {
                    return false;
                };
                if button.trigger() {
                    info!("Dialog '{}': confirmed '{}'", self.title, button.text());
                    true
                } else {
                    info!(
                        "Dialog '{}': confirm on disabled '{}'",
                        self.title,
                        button.text()
                    );
                    false
                }
            }
            DialogCommand::Dismiss => {
                self.buttons.deselect();
                info!("Dialog '{}': dismissed", self.title);
                false
            }
        }
    }
}
