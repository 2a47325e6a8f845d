pub mod content_panel;
pub mod navigation_shell;
pub mod overlay;
pub mod top_bar;

pub use content_panel::ContentPanel;
pub use navigation_shell::{NavigationShell, ShellView};
pub use overlay::Overlay;
pub use top_bar::TopBar;
