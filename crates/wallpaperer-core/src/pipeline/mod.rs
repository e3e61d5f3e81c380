//! Wallpaper composition pipeline
//!
//! Orchestrates the core stages in their required order:
//! fill color → canvas allocation → rotation → scaling → placement → paste.
//!
//! This module is organized into submodules:
//! - `background`: edge-seeded background color detection
//! - `edges`: boundary pixel sampling with covered-edge filtering
//! - `placement`: anchor placement geometry
//! - `scale`: scale-policy resolution
//! - `transform`: resize, rotate, and paste raster operations

mod background;
mod edges;
mod placement;
mod scale;
mod transform;

#[cfg(test)]
mod tests;

// Re-export public items from submodules
pub use background::{detect_background, flood_detect, vote_detect, Region};
pub use edges::{edge_pixels, EdgePixels};
pub use placement::paste_origin;
pub use scale::resolve_scale;
pub use transform::{paste_onto, resize_bilinear, rotate_expanded};

use crate::color::Rgba;
use crate::decoders::DecodedImage;
use crate::models::ComposeOptions;
use crate::verbose_println;

/// The composited result: an RGBA canvas ready for encoding.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// Canvas width
    pub width: u32,

    /// Canvas height
    pub height: u32,

    /// Interleaved RGBA data, `width * height * 4` bytes
    pub data: Vec<u8>,
}

impl Canvas {
    /// Allocate a canvas filled with a single color.
    pub fn filled(width: u32, height: u32, fill: Rgba) -> Self {
        let pixels = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixels * 4);
        for _ in 0..pixels {
            data.extend_from_slice(&fill.channels());
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Read the pixel at `(x, y)`. Coordinates must be in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        Rgba::new(
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }

    pub(crate) fn put_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.data[idx..idx + 4].copy_from_slice(&color.channels());
    }
}

/// Composite `image` onto a canvas per `options`.
///
/// The stage order is a hard requirement: the fill color is determined from
/// the unrotated source (explicit override first), rotation expands against
/// that fill, the scale policy resolves against the post-rotation size, and
/// placement uses the post-scale size.
pub fn compose(image: DecodedImage, options: &ComposeOptions) -> Result<Canvas, String> {
    let canvas_size = options.canvas_size.as_tuple();

    // Fill color: explicit override wins, otherwise infer from the edges
    let fill = match options.color {
        Some(color) => color,
        None => detect_background(
            &image,
            options.anchor,
            options.ignore_covered_edges,
            options.simple_detect,
        )?,
    };
    verbose_println!("compose: canvas {}x{} filled {}", canvas_size.0, canvas_size.1, fill);

    let mut canvas = Canvas::filled(canvas_size.0, canvas_size.1, fill);

    // Rotation first: it changes the bounding box the scale policy sees
    let image = if options.rotate_degrees % 360 != 0 {
        let rotated = rotate_expanded(&image, options.rotate_degrees, fill);
        verbose_println!(
            "compose: rotated {}° to {}x{}",
            options.rotate_degrees,
            rotated.width,
            rotated.height
        );
        rotated
    } else {
        image
    };

    // Scale the post-rotation image
    let target = resolve_scale(image.size(), canvas_size, options.scale);
    let image = if target != image.size() {
        verbose_println!(
            "compose: scaled {}x{} to {}x{}",
            image.width,
            image.height,
            target.0,
            target.1
        );
        resize_bilinear(&image, target)
    } else {
        image
    };

    // Place the post-scale image
    let origin = paste_origin(options.anchor, image.size(), canvas_size);
    verbose_println!("compose: pasting at ({}, {})", origin.0, origin.1);
    paste_onto(&mut canvas, &image, origin);

    Ok(canvas)
}
