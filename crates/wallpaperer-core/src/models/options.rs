//! Composition options threaded through the pipeline.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::models::{Anchor, ScaleOperation};

/// Target canvas dimensions, both positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// Build a canvas size, rejecting degenerate dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, String> {
        if width == 0 || height == 0 {
            return Err(format!(
                "Canvas dimensions must be positive, got {}x{}",
                width, height
            ));
        }
        Ok(Self { width, height })
    }

    pub fn as_tuple(self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Options for one composition run.
///
/// Every mode that was a process-wide toggle in earlier incarnations of this
/// tool is an explicit field here; the pipeline reads no ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeOptions {
    /// Target canvas size.
    pub canvas_size: CanvasSize,

    /// Where on the canvas the image is placed.
    pub anchor: Anchor,

    /// Explicit canvas color. When set, background detection is skipped
    /// entirely.
    pub color: Option<Rgba>,

    /// Skip image edges pressed against the canvas under the chosen anchor
    /// when sampling for the background color.
    #[serde(default = "default_true")]
    pub ignore_covered_edges: bool,

    /// Use the O(perimeter) voting detector instead of flood fill. Less
    /// accurate on scattered backgrounds, but cheap for very large images.
    #[serde(default)]
    pub simple_detect: bool,

    /// Clockwise rotation in degrees, applied before scaling. Zero (or any
    /// multiple of 360) leaves the image untouched.
    #[serde(default)]
    pub rotate_degrees: u32,

    /// Active scale policy.
    #[serde(default)]
    pub scale: ScaleOperation,
}

impl ComposeOptions {
    /// Options with default behavior for the given canvas and anchor:
    /// detect the background from uncovered edges via flood fill, auto-fit
    /// oversized images, no rotation.
    pub fn new(canvas_size: CanvasSize, anchor: Anchor) -> Self {
        Self {
            canvas_size,
            anchor,
            color: None,
            ignore_covered_edges: true,
            simple_detect: false,
            rotate_degrees: 0,
            scale: ScaleOperation::default(),
        }
    }
}

pub(crate) fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_size_rejects_zero() {
        assert!(CanvasSize::new(0, 1080).is_err());
        assert!(CanvasSize::new(1920, 0).is_err());
        assert!(CanvasSize::new(1920, 1080).is_ok());
    }

    #[test]
    fn test_default_options() {
        let options = ComposeOptions::new(CanvasSize::new(1920, 1080).unwrap(), Anchor::Center);
        assert!(options.color.is_none());
        assert!(options.ignore_covered_edges);
        assert!(!options.simple_detect);
        assert_eq!(options.rotate_degrees, 0);
        assert_eq!(options.scale, ScaleOperation::AutoFitIfOversized);
    }
}
