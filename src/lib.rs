//! # tabset - compound tabs widget for the terminal
//!
//! A container owns the active-tab index and hands an explicit shared
//! handle ([`TabsContext`]) to the tab selectors and the panel collection.
//! The binary wires the widget into a crossterm event loop.

pub mod app;
pub mod cli;
pub mod logging;
pub mod session;
pub mod store;
pub mod tabs;
pub mod ui;

// Re-export commonly used types
pub use app::{Action, App};
pub use tabs::context::TabsContext;
pub use tabs::definition::{TabDef, TabSet};
pub use tabs::error::TabsError;
