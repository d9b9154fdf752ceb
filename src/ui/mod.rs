//! UI widgets for the dashboard
//!
//! Pure rendering widgets, separated from application and host logic.
//! The event loop and layout live in the binary crate's `tui` module.

pub mod colors;
mod components;

pub use components::{banner::Widget as BannerWidget, status_bar::Widget as StatusBarWidget};
