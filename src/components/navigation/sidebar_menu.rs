use dioxus::prelude::*;

use crate::components::navigation::NavItem;
use crate::types::{NavigationEntry, Section};

/// Slide-in menu on the left edge. Stays mounted while closed and is moved
/// off-screen by its transform class.
#[component]
pub fn SidebarMenu(
    entries: &'static [NavigationEntry],
    active_section: Section,
    menu_open: bool,
    on_select: EventHandler<Section>,
) -> Element {
    let slide = if menu_open { "translate-x-0" } else { "-translate-x-full" };

    rsx! {
        aside {
            id: "sidebar",
            class: "fixed inset-y-0 left-0 transform {slide} w-64 pt-16 bg-white shadow-lg transition-transform duration-300 ease-in-out z-20",
            div { class: "h-full flex flex-col",
                div { class: "flex-1 py-4 overflow-y-auto",
                    for entry in entries.iter().copied() {
                        NavItem {
                            key: "{entry.id}",
                            entry: entry,
                            active: entry.id == active_section,
                            on_select: on_select,
                        }
                    }
                }
            }
        }
    }
}
