use dioxus::prelude::*;
use tracing::Level;

use portfolio_shell::components::layout::NavigationShell;
use portfolio_shell::config::{init_logger, ShellConfig};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let loaded = ShellConfig::embedded();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    if let Err(e) = init_logger(config.level().unwrap_or(Level::INFO)) {
        eprintln!("{}; continuing without logging", e);
    }

    if let Err(e) = &loaded {
        tracing::warn!("Falling back to default shell config: {}", e);
    }
    tracing::info!(title = %config.title, level = %config.log_level, "Starting portfolio shell");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<ShellConfig>();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: "https://cdn.tailwindcss.com" }

        NavigationShell { title: config.title }
    }
}
