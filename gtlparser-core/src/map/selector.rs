//! The basemap dropdown widget.
//!
//! ```text
//!             Toggle
//!  Expanded <--------> Collapsed
//!     |                    |
//!     +------ Close -------+---> Closed
//! ```
//!
//! Selecting an entry only has an effect while the dropdown is expanded.
//! Once closed, the widget ignores everything.

use serde::{Deserialize, Serialize};

use crate::legend::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorState {
    Expanded,
    Collapsed,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorEvent {
    /// The toggle button was clicked.
    Toggle,
    /// The close button was clicked.
    Close,
    /// A basemap name was picked from the dropdown.
    Select(String),
}

/// What the map has to do in response to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorAction {
    Nothing,
    ChangeBasemap(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasemapSelector {
    position: Position,
    state: SelectorState,
    options: Vec<String>,
    selected: Option<String>,
}

impl BasemapSelector {
    /// A new selector starts expanded.
    #[must_use]
    pub fn new(position: Position, options: Vec<String>) -> Self {
        Self {
            position,
            state: SelectorState::Expanded,
            options,
            selected: None,
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn state(&self) -> SelectorState {
        self.state
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Name of the basemap layer most recently added through this selector.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub(crate) fn set_selected(&mut self, name: String) {
        self.selected = Some(name);
    }

    pub fn handle(&mut self, event: SelectorEvent) -> SelectorAction {
        match (self.state, event) {
            (SelectorState::Closed, _) => SelectorAction::Nothing,
            (_, SelectorEvent::Close) => {
                self.state = SelectorState::Closed;
                SelectorAction::Nothing
            }
            (SelectorState::Expanded, SelectorEvent::Toggle) => {
                self.state = SelectorState::Collapsed;
                SelectorAction::Nothing
            }
            (SelectorState::Collapsed, SelectorEvent::Toggle) => {
                self.state = SelectorState::Expanded;
                SelectorAction::Nothing
            }
            (SelectorState::Expanded, SelectorEvent::Select(name)) => {
                SelectorAction::ChangeBasemap(name)
            }
            (SelectorState::Collapsed, SelectorEvent::Select(_)) => SelectorAction::Nothing,
        }
    }
}
