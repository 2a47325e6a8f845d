use dioxus::prelude::*;

use crate::state::NavState;
use crate::types::Section;

/// Shell state owned by the root component.
#[derive(Clone, Copy, PartialEq)]
pub struct ShellState {
    pub active_section: Signal<Section>,
    pub menu_open: Signal<bool>,
}

/// Create the shell signals, seeded from `initial` on first render only.
pub fn use_shell_state(initial: NavState) -> ShellState {
    let active_section = use_signal(|| initial.active_section);
    let menu_open = use_signal(|| initial.menu_open);

    ShellState {
        active_section,
        menu_open,
    }
}

impl ShellState {
    /// Current values. Subscribes the caller when read during render.
    pub fn snapshot(&self) -> NavState {
        NavState {
            active_section: *self.active_section.read(),
            menu_open: *self.menu_open.read(),
        }
    }

    pub fn toggle_menu(&mut self) {
        let mut next = self.current();
        next.toggle_menu();
        tracing::debug!(menu_open = next.menu_open, "menu toggled");
        self.commit(next);
    }

    pub fn close_menu(&mut self) {
        let mut next = self.current();
        next.close_menu();
        tracing::debug!("menu dismissed");
        self.commit(next);
    }

    pub fn select_section(&mut self, section: Section) {
        let mut next = self.current();
        let previous = next.active_section;
        next.select_section(section);
        tracing::debug!(from = %previous, to = %section, "section selected");
        self.commit(next);
    }

    fn current(&self) -> NavState {
        NavState {
            active_section: *self.active_section.peek(),
            menu_open: *self.menu_open.peek(),
        }
    }

    // Writes only the signals whose value changed.
    fn commit(&mut self, next: NavState) {
        let current = self.current();
        if current.active_section != next.active_section {
            self.active_section.set(next.active_section);
        }
        if current.menu_open != next.menu_open {
            self.menu_open.set(next.menu_open);
        }
    }
}
