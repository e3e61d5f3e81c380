//! Scale policies governing how the source image is resized before pasting.

use serde::{Deserialize, Serialize};

/// Policy for resizing the source image relative to the canvas.
///
/// At most one policy is active per run; requesting two at once is a
/// configuration error caught by [`ScaleOperation::from_flags`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum ScaleOperation {
    /// Scale down, preserving aspect ratio, only if the image exceeds the
    /// canvas in either dimension. Images that already fit are untouched.
    #[default]
    AutoFitIfOversized,

    /// Resize both dimensions to `fraction × original size`, regardless of
    /// whether the image is oversized or undersized.
    RelativeToImage(f64),

    /// Resize so height = `fraction × canvas height`, width scaled to
    /// preserve the image's aspect ratio.
    RelativeToCanvas(f64),
}

impl ScaleOperation {
    /// Build the active scale policy from the two optional CLI fractions.
    ///
    /// Both present is a configuration conflict; neither present selects
    /// the auto-fit default. Fractions must be positive.
    pub fn from_flags(
        relative_to_image: Option<f64>,
        relative_to_canvas: Option<f64>,
    ) -> Result<Self, String> {
        match (relative_to_image, relative_to_canvas) {
            (Some(_), Some(_)) => Err(
                "Cannot combine --scale-image and --scale-canvas; pick one scale policy"
                    .to_string(),
            ),
            (Some(fraction), None) => {
                validate_fraction(fraction, "--scale-image")?;
                Ok(ScaleOperation::RelativeToImage(fraction))
            }
            (None, Some(fraction)) => {
                validate_fraction(fraction, "--scale-canvas")?;
                Ok(ScaleOperation::RelativeToCanvas(fraction))
            }
            (None, None) => Ok(ScaleOperation::AutoFitIfOversized),
        }
    }
}

fn validate_fraction(fraction: f64, flag: &str) -> Result<(), String> {
    if !fraction.is_finite() || fraction <= 0.0 {
        return Err(format!(
            "{} requires a positive fraction, got: {}",
            flag, fraction
        ));
    }
    Ok(())
}
