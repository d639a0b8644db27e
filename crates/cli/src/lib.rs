//! Terminal dashboard for Steam library storage usage.
//!
//! The binary lives in `main.rs`; this library exposes the dashboard's views
//! and components so they can be rendered in tests.

pub mod logging;
pub mod tui;
