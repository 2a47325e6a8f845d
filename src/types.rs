use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShellError;

/// Navigation destinations. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Portfolio,
    Finance,
    Green,
    Utilities,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Portfolio,
        Section::Finance,
        Section::Green,
        Section::Utilities,
    ];

    /// Stable lowercase id, used for element ids and list keys.
    pub fn id(self) -> &'static str {
        match self {
            Section::Portfolio => "portfolio",
            Section::Finance => "finance",
            Section::Green => "green",
            Section::Utilities => "utilities",
        }
    }

    /// Static panel shown in the main area for this section
    pub fn panel(self) -> PanelContent {
        match self {
            Section::Portfolio => PanelContent {
                title: "Welcome to My Portfolio",
                description: "This is where your portfolio content will go. We'll make this section dynamic and interactive as we build it out.",
            },
            Section::Finance => PanelContent {
                title: "Financial Tools",
                description: "This section will house our collection of personal finance tools.",
            },
            Section::Green => PanelContent {
                title: "Green Living Tools",
                description: "Track and improve your environmental impact with these tools.",
            },
            Section::Utilities => PanelContent {
                title: "Utility Tools",
                description: "General purpose utilities and helpful tools.",
            },
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| ShellError::UnknownSection(s.to_string()))
    }
}

/// Glyphs the shell draws. Rendered by `components::icons::IconGlyph`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Home,
    Wallet,
    Leaf,
    Settings,
    Menu,
    Close,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Home => "home",
            Icon::Wallet => "wallet",
            Icon::Leaf => "leaf",
            Icon::Settings => "settings",
            Icon::Menu => "menu",
            Icon::Close => "close",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelContent {
    pub title: &'static str,
    pub description: &'static str,
}

/// One sidebar entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationEntry {
    pub name: &'static str,
    pub icon: Icon,
    pub id: Section,
}

/// Sidebar entries, in display order.
pub const NAVIGATION: &[NavigationEntry] = &[
    NavigationEntry { name: "Portfolio", icon: Icon::Home, id: Section::Portfolio },
    NavigationEntry { name: "Finance Tools", icon: Icon::Wallet, id: Section::Finance },
    NavigationEntry { name: "Green Living", icon: Icon::Leaf, id: Section::Green },
    NavigationEntry { name: "Utilities", icon: Icon::Settings, id: Section::Utilities },
];
