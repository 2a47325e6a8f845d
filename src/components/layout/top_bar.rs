use dioxus::prelude::*;

use crate::components::icons::{Icon, IconGlyph};

#[component]
pub fn TopBar(title: String, menu_open: bool, on_toggle: EventHandler<MouseEvent>) -> Element {
    let glyph = if menu_open { Icon::Close } else { Icon::Menu };

    rsx! {
        nav { class: "fixed top-0 inset-x-0 bg-white shadow-lg z-30",
            div { class: "max-w-7xl mx-auto px-4",
                div { class: "flex justify-between h-16",
                    div { class: "flex items-center",
                        button {
                            class: "p-2 rounded-md text-gray-600 hover:text-gray-900 focus:outline-none",
                            "aria-label": "Toggle menu",
                            onclick: move |evt| on_toggle.call(evt),
                            IconGlyph { icon: glyph, size: 24 }
                        }
                        span { class: "ml-4 text-xl font-semibold", "{title}" }
                    }
                }
            }
        }
    }
}
