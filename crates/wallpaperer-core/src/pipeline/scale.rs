//! Scale resolution: image size + canvas size + policy → final image size.
//!
//! The resolver is pure geometry. It never touches pixels; the compositor
//! applies the returned size with an actual resample.

use crate::models::ScaleOperation;

/// Final image size under the given scale policy.
///
/// Ratio math runs in `f64` and fractional pixel counts floor. Resolved
/// dimensions are clamped to a minimum of 1 so a tiny fraction can never
/// produce an empty image. Zero-size sources pass through unchanged; there
/// is nothing to scale.
pub fn resolve_scale(
    image_size: (u32, u32),
    canvas_size: (u32, u32),
    op: ScaleOperation,
) -> (u32, u32) {
    let (iwidth, iheight) = image_size;
    let (cwidth, cheight) = canvas_size;

    if iwidth == 0 || iheight == 0 {
        return image_size;
    }

    match op {
        ScaleOperation::AutoFitIfOversized => {
            if iwidth > cwidth || iheight > cheight {
                let ratio = f64::min(
                    f64::from(cwidth) / f64::from(iwidth),
                    f64::from(cheight) / f64::from(iheight),
                );
                scale_by(image_size, ratio)
            } else {
                image_size
            }
        }
        ScaleOperation::RelativeToImage(fraction) => scale_by(image_size, fraction),
        ScaleOperation::RelativeToCanvas(fraction) => {
            let target_height = floor_dim(f64::from(cheight) * fraction);
            let ratio = f64::from(target_height) / f64::from(iheight);
            (floor_dim(f64::from(iwidth) * ratio), target_height)
        }
    }
}

fn scale_by(size: (u32, u32), ratio: f64) -> (u32, u32) {
    (
        floor_dim(f64::from(size.0) * ratio),
        floor_dim(f64::from(size.1) * ratio),
    )
}

fn floor_dim(value: f64) -> u32 {
    (value.floor() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_fit_leaves_fitting_image_unchanged() {
        assert_eq!(
            resolve_scale((800, 600), (1920, 1080), ScaleOperation::AutoFitIfOversized),
            (800, 600)
        );
        // Exactly canvas-sized is not oversized
        assert_eq!(
            resolve_scale((1920, 1080), (1920, 1080), ScaleOperation::AutoFitIfOversized),
            (1920, 1080)
        );
    }

    #[test]
    fn test_auto_fit_shrinks_oversized_preserving_aspect() {
        // ratio = min(1920/4000, 1080/3000) = 0.36
        assert_eq!(
            resolve_scale((4000, 3000), (1920, 1080), ScaleOperation::AutoFitIfOversized),
            (1440, 1080)
        );
    }

    #[test]
    fn test_auto_fit_triggers_on_single_oversized_dimension() {
        // Width fits, height does not: ratio = 1080/2160 = 0.5
        assert_eq!(
            resolve_scale((1000, 2160), (1920, 1080), ScaleOperation::AutoFitIfOversized),
            (500, 1080)
        );
    }

    #[test]
    fn test_relative_to_image_identity() {
        assert_eq!(
            resolve_scale((123, 457), (10, 10), ScaleOperation::RelativeToImage(1.0)),
            (123, 457)
        );
    }

    #[test]
    fn test_relative_to_image_scales_unconditionally() {
        // Scales down even though the image already fits the canvas
        assert_eq!(
            resolve_scale((100, 50), (1920, 1080), ScaleOperation::RelativeToImage(0.5)),
            (50, 25)
        );
        // And up, regardless of the canvas
        assert_eq!(
            resolve_scale((100, 50), (10, 10), ScaleOperation::RelativeToImage(2.0)),
            (200, 100)
        );
    }

    #[test]
    fn test_relative_to_image_floors() {
        assert_eq!(
            resolve_scale((3, 5), (10, 10), ScaleOperation::RelativeToImage(0.5)),
            (1, 2)
        );
    }

    #[test]
    fn test_relative_to_canvas_derives_width_from_height_ratio() {
        // target height = floor(0.5 * 800) = 400; ratio = 400/100 = 4.0
        assert_eq!(
            resolve_scale((200, 100), (1000, 800), ScaleOperation::RelativeToCanvas(0.5)),
            (800, 400)
        );
    }

    #[test]
    fn test_resolved_dimensions_never_hit_zero() {
        assert_eq!(
            resolve_scale((100, 100), (10, 10), ScaleOperation::RelativeToImage(0.001)),
            (1, 1)
        );
        assert_eq!(
            resolve_scale((10, 2000), (1000, 800), ScaleOperation::RelativeToCanvas(0.0001)),
            (1, 1)
        );
    }

    #[test]
    fn test_zero_size_source_passes_through() {
        assert_eq!(
            resolve_scale((0, 100), (1920, 1080), ScaleOperation::AutoFitIfOversized),
            (0, 100)
        );
    }
}
