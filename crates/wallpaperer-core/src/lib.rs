//! Wallpaperer Core Library
//!
//! Core functionality for turning an arbitrary raster image into a wallpaper:
//! background-color inference, canvas layout, and compositing.

pub mod color;
pub mod config;
pub mod decoders;
pub mod exporters;
pub mod models;
pub mod pipeline;
pub mod presets;

// Re-export commonly used types
pub use color::Rgba;
pub use models::{Anchor, CanvasSize, ComposeOptions, ScaleOperation};
pub use pipeline::{compose, detect_background, Canvas, Region};
