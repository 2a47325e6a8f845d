use dioxus::prelude::*;

use crate::components::layout::{ContentPanel, Overlay, TopBar};
use crate::components::navigation::SidebarMenu;
use crate::config::DEFAULT_TITLE;
use crate::hooks::{use_shell_state, ShellState};
use crate::state::NavState;
use crate::types::{Section, NAVIGATION};

/// Root of the page. Owns the active section and the sidebar open state;
/// every child receives its slice of that state plus a handler.
#[component]
pub fn NavigationShell(
    #[props(into, default = DEFAULT_TITLE.to_string())] title: String,
    #[props(default)] initial: NavState,
) -> Element {
    let shell = use_shell_state(initial);

    rsx! {
        ShellView { title: title, shell: shell }
    }
}

/// Renders the shell from a state handle and wires every handler back to it.
#[component]
pub fn ShellView(title: String, shell: ShellState) -> Element {
    let mut shell = shell;
    let current = shell.snapshot();

    let toggle_menu = move |_: MouseEvent| shell.toggle_menu();
    let close_menu = move |_: MouseEvent| shell.close_menu();
    let select_section = move |section: Section| shell.select_section(section);

    rsx! {
        div { class: "min-h-screen bg-gray-50",
            TopBar {
                title: title,
                menu_open: current.menu_open,
                on_toggle: toggle_menu,
            }

            SidebarMenu {
                entries: NAVIGATION,
                active_section: current.active_section,
                menu_open: current.menu_open,
                on_select: select_section,
            }

            if current.overlay_visible() {
                Overlay { on_dismiss: close_menu }
            }

            main { class: "max-w-7xl mx-auto px-4 pt-20 pb-6",
                ContentPanel { section: current.active_section }
            }
        }
    }
}
