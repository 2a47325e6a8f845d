use dioxus::prelude::*;

use crate::types::Section;

#[component]
pub fn ContentPanel(section: Section) -> Element {
    let panel = section.panel();

    rsx! {
        div {
            id: "panel-{section}",
            class: "bg-white rounded-lg shadow border border-gray-200 p-6",
            h1 { class: "text-2xl font-bold mb-4", "{panel.title}" }
            p { class: "text-gray-600", "{panel.description}" }
        }
    }
}
