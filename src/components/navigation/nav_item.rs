use dioxus::prelude::*;

use crate::components::icons::IconGlyph;
use crate::types::{NavigationEntry, Section};

#[component]
pub fn NavItem(entry: NavigationEntry, active: bool, on_select: EventHandler<Section>) -> Element {
    let section = entry.id;

    rsx! {
        button {
            id: "nav-{section}",
            class: if active {
                "w-full flex items-center px-4 py-2 text-sm font-medium text-blue-600 bg-blue-50"
            } else {
                "w-full flex items-center px-4 py-2 text-sm font-medium text-gray-600 hover:bg-gray-50"
            },
            onclick: move |_| on_select.call(section),
            IconGlyph { icon: entry.icon, class: "mr-3 h-5 w-5" }
            "{entry.name}"
        }
    }
}
