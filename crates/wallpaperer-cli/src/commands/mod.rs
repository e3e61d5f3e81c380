//! Command implementations for the wallpaperer CLI.

mod compose;
mod detect;

// Re-export all command functions
pub use compose::cmd_compose;
pub use detect::cmd_detect;
