//! Data models for wallpaper composition.
//!
//! Core data structures for anchors, scale policies, and composition options.

mod anchor;
mod options;
mod scale;

// Re-export all public types
pub use anchor::Anchor;
pub use options::{CanvasSize, ComposeOptions};
pub use scale::ScaleOperation;
