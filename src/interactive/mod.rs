//! Interactive TUI interface
//!
//! The user holds the secret; the app suggests guesses and consumes the
//! feedback typed for each one.

mod app;
mod rendering;

pub use app::{App, run_tui};
