//! Navigation shell for a personal portfolio page.
//!
//! A fixed top bar toggles a slide-in sidebar; picking a sidebar entry swaps
//! the static content panel shown in the main area.

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod state;
pub mod types;

pub use error::{ShellError, ShellResult};
