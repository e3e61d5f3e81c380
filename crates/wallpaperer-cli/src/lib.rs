//! Shared utilities for wallpaperer-cli
//!
//! String parsers and path handling reused by the CLI commands.

pub mod commands;
pub mod parsers;
pub mod processing;

// Re-export commonly used items at the crate root for convenience
pub use parsers::{parse_canvas_size, parse_color};
pub use processing::determine_output_path;
