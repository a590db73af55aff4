//! UI layer for the desktop GUI: app shell, dashboard painters and theme.

pub mod app;
pub mod dashboard;
pub mod theme;

pub use app::{FinHealthApp, StartupConfig};
