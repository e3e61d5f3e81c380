//! Tests for the composition pipeline
//!
//! End-to-end coverage of the compositor's stage ordering and the canvas
//! scenarios the tool is designed around.

use super::*;
use crate::models::{Anchor, CanvasSize, ScaleOperation};

const RED: Rgba = Rgba::opaque(255, 0, 0);
const GREEN: Rgba = Rgba::opaque(0, 255, 0);
const WHITE: Rgba = Rgba::WHITE;
const BLACK: Rgba = Rgba::BLACK;

fn solid_image(width: u32, height: u32, color: Rgba) -> DecodedImage {
    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    for _ in 0..width as usize * height as usize {
        data.extend_from_slice(&color.channels());
    }
    DecodedImage::from_rgba(width, height, data)
}

fn default_options(width: u32, height: u32, anchor: Anchor) -> ComposeOptions {
    ComposeOptions::new(CanvasSize::new(width, height).unwrap(), anchor)
}

// ========================================================================
// Canvas Tests
// ========================================================================

#[test]
fn test_canvas_filled() {
    let canvas = Canvas::filled(3, 2, RED);
    assert_eq!(canvas.data.len(), 24);
    for y in 0..2 {
        for x in 0..3 {
            assert_eq!(canvas.pixel(x, y), RED);
        }
    }
}

#[test]
fn test_canvas_fill_normalizes_to_full_opacity() {
    // A 3-channel color becomes a 4-channel fill with alpha 255
    let canvas = Canvas::filled(1, 1, Rgba::opaque(1, 2, 3));
    assert_eq!(canvas.pixel(0, 0).a, 255);
}

// ========================================================================
// Scenario Tests
// ========================================================================

#[test]
fn test_scenario_white_image_with_black_center_onto_large_canvas() {
    // 10×10 solid white except a 2×2 black square at the center;
    // canvas 100×100, anchor center, default options.
    let mut image = solid_image(10, 10, WHITE);
    for y in 4..6 {
        for x in 4..6 {
            image.put_pixel(x, y, BLACK);
        }
    }

    assert_eq!(paste_origin(Anchor::Center, (10, 10), (100, 100)), (45, 45));

    let canvas = compose(image, &default_options(100, 100, Anchor::Center)).unwrap();

    // Detected background is white, so fill and image blend seamlessly
    assert_eq!(canvas.pixel(0, 0), WHITE);
    assert_eq!(canvas.pixel(44, 44), WHITE);
    // The black square sits at image (4..6, 4..6), pasted at (45, 45)
    assert_eq!(canvas.pixel(49, 49), BLACK);
    assert_eq!(canvas.pixel(50, 50), BLACK);
    assert_eq!(canvas.pixel(48, 49), WHITE);
    assert_eq!(canvas.pixel(51, 50), WHITE);
}

#[test]
fn test_scenario_oversized_image_auto_fits_fullhd_ratio() {
    // min(1920/4000, 1080/3000) = 0.36
    assert_eq!(
        resolve_scale((4000, 3000), (1920, 1080), ScaleOperation::AutoFitIfOversized),
        (1440, 1080)
    );

    // Same geometry at a tenth of the scale, driven through the compositor
    let image = solid_image(400, 300, GREEN);
    let mut options = default_options(192, 108, Anchor::Center);
    options.color = Some(WHITE);
    let canvas = compose(image, &options).unwrap();

    // Resolved size (144, 108), centered at ((192-144)/2, 0) = (24, 0)
    assert_eq!(canvas.pixel(24, 0), GREEN);
    assert_eq!(canvas.pixel(167, 107), GREEN);
    assert_eq!(canvas.pixel(23, 0), WHITE);
    assert_eq!(canvas.pixel(168, 107), WHITE);
}

#[test]
fn test_scenario_explicit_color_skips_detection() {
    // A zero-size image makes background detection impossible; an explicit
    // color must bypass the selector entirely and still succeed.
    let image = DecodedImage::from_rgba(0, 0, Vec::new());
    let mut options = default_options(4, 3, Anchor::Center);
    options.color = Some(Rgba::opaque(255, 0, 0));

    let canvas = compose(image, &options).unwrap();
    for y in 0..3 {
        for x in 0..4 {
            assert_eq!(canvas.pixel(x, y), Rgba::new(255, 0, 0, 255));
        }
    }
}

#[test]
fn test_scenario_relative_to_canvas_scaling() {
    assert_eq!(
        resolve_scale((200, 100), (1000, 800), ScaleOperation::RelativeToCanvas(0.5)),
        (800, 400)
    );
}

#[test]
fn test_degenerate_image_without_explicit_color_fails() {
    let image = DecodedImage::from_rgba(0, 0, Vec::new());
    let err = compose(image, &default_options(4, 3, Anchor::Center)).unwrap_err();
    assert!(err.contains("edge pixels"), "got: {}", err);
}

// ========================================================================
// Stage Ordering Tests
// ========================================================================

#[test]
fn test_auto_fit_applies_before_placement() {
    // 4×4 image onto a 2×2 canvas: auto-fit shrinks it to exactly the
    // canvas, so the fill never shows
    let image = solid_image(4, 4, RED);
    let mut options = default_options(2, 2, Anchor::TopLeft);
    options.color = Some(WHITE);

    let canvas = compose(image, &options).unwrap();
    for y in 0..2 {
        for x in 0..2 {
            assert_eq!(canvas.pixel(x, y), RED);
        }
    }
}

#[test]
fn test_rotation_happens_before_placement() {
    // A 2×1 strip [R, G] rotated 90° clockwise becomes a 1×2 column
    // [R; G], pasted at the top-left
    let mut image = solid_image(2, 1, RED);
    image.put_pixel(1, 0, GREEN);

    let mut options = default_options(4, 4, Anchor::TopLeft);
    options.color = Some(WHITE);
    options.rotate_degrees = 90;

    let canvas = compose(image, &options).unwrap();
    assert_eq!(canvas.pixel(0, 0), RED);
    assert_eq!(canvas.pixel(0, 1), GREEN);
    assert_eq!(canvas.pixel(1, 0), WHITE);
    assert_eq!(canvas.pixel(0, 2), WHITE);
}

#[test]
fn test_rotation_bounding_box_feeds_the_scale_policy() {
    // 4×2 solid strip rotated 90° becomes 2×4; auto-fit against a 2×2
    // canvas must then shrink by the post-rotation height (ratio 0.5),
    // giving a 1×2 paste centered at x = 0 (Euclidean floor of (2-1)/2)
    let image = solid_image(4, 2, RED);
    let mut options = default_options(2, 2, Anchor::Center);
    options.color = Some(WHITE);
    options.rotate_degrees = 90;

    let canvas = compose(image, &options).unwrap();
    assert_eq!(canvas.pixel(0, 0), RED);
    assert_eq!(canvas.pixel(0, 1), RED);
    assert_eq!(canvas.pixel(1, 0), WHITE);
    assert_eq!(canvas.pixel(1, 1), WHITE);
}

#[test]
fn test_anchor_bottom_right_with_overhang_clips() {
    // 3×3 image onto a 2×2 canvas with scaling disabled via an exact
    // relative-to-image policy: anchored bottom-right, origin (-1, -1),
    // so only the image's bottom-right 2×2 block survives
    let mut image = solid_image(3, 3, RED);
    image.put_pixel(0, 0, GREEN);

    let mut options = default_options(2, 2, Anchor::BottomRight);
    options.color = Some(WHITE);
    options.scale = ScaleOperation::RelativeToImage(1.0);

    let canvas = compose(image, &options).unwrap();
    for y in 0..2 {
        for x in 0..2 {
            assert_eq!(canvas.pixel(x, y), RED);
        }
    }
}
