//! Plain-value navigation state.
//!
//! `NavState` holds the two pieces of shell state and the transitions
//! between them. The signal-backed hook in `hooks::use_shell_state` applies
//! these same transitions to its signals.

use crate::types::{PanelContent, Section};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub active_section: Section,
    pub menu_open: bool,
}

impl NavState {
    pub fn new(active_section: Section, menu_open: bool) -> Self {
        Self {
            active_section,
            menu_open,
        }
    }

    /// Flip the sidebar between open and closed
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the sidebar, keeping the active section
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Activate `section` and close the sidebar
    pub fn select_section(&mut self, section: Section) {
        self.active_section = section;
        self.menu_open = false;
    }

    pub fn panel(&self) -> PanelContent {
        self.active_section.panel()
    }

    /// The overlay is shown exactly while the sidebar is open.
    pub fn overlay_visible(&self) -> bool {
        self.menu_open
    }
}
