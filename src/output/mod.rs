//! Output formatting for inventory results.
//!
//! - [`json`] - JSON output for the frontend
//! - [`terminal`] - Terminal output with colors

mod json;
mod terminal;

pub use json::{print_json, to_json};
pub use terminal::{format_field, print_rows, TerminalRow};
