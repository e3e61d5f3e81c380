//! Output path handling.

mod input;

pub use input::determine_output_path;
