use dioxus::prelude::*;

/// Dimmed backdrop behind the open sidebar. Clicking it dismisses the sidebar.
#[component]
pub fn Overlay(on_dismiss: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div {
            id: "shell-overlay",
            class: "fixed inset-0 bg-black bg-opacity-50 z-10",
            onclick: move |evt| on_dismiss.call(evt),
        }
    }
}
