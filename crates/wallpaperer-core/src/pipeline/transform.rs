//! Raster transforms: resize, rotate, and paste.
//!
//! All transforms produce new images; sources are never edited in place.

use crate::color::Rgba;
use crate::decoders::DecodedImage;

use super::Canvas;

/// Resize to `target` with bilinear interpolation.
///
/// Sampling is center-aligned: destination pixel centers map back into the
/// source grid and clamp at the borders, so edge colors are preserved
/// rather than smeared toward a phantom border.
pub fn resize_bilinear(image: &DecodedImage, target: (u32, u32)) -> DecodedImage {
    let (twidth, theight) = target;
    if target == image.size() {
        return image.clone();
    }

    let mut out = DecodedImage::from_rgba(
        twidth,
        theight,
        vec![0; twidth as usize * theight as usize * 4],
    );

    let x_ratio = f64::from(image.width) / f64::from(twidth);
    let y_ratio = f64::from(image.height) / f64::from(theight);

    for dy in 0..theight {
        let sy = ((f64::from(dy) + 0.5) * y_ratio - 0.5).clamp(0.0, f64::from(image.height - 1));
        let y0 = sy.floor() as u32;
        let y1 = (y0 + 1).min(image.height - 1);
        let fy = sy - f64::from(y0);

        for dx in 0..twidth {
            let sx = ((f64::from(dx) + 0.5) * x_ratio - 0.5).clamp(0.0, f64::from(image.width - 1));
            let x0 = sx.floor() as u32;
            let x1 = (x0 + 1).min(image.width - 1);
            let fx = sx - f64::from(x0);

            let p00 = image.pixel(x0, y0).channels();
            let p10 = image.pixel(x1, y0).channels();
            let p01 = image.pixel(x0, y1).channels();
            let p11 = image.pixel(x1, y1).channels();

            let mut blended = [0u8; 4];
            for channel in 0..4 {
                let top = f64::from(p00[channel]) * (1.0 - fx) + f64::from(p10[channel]) * fx;
                let bottom = f64::from(p01[channel]) * (1.0 - fx) + f64::from(p11[channel]) * fx;
                blended[channel] = (top * (1.0 - fy) + bottom * fy).round() as u8;
            }
            out.put_pixel(dx, dy, Rgba::from(blended));
        }
    }

    out
}

/// Rotate clockwise by `degrees`, expanding the output to the rotated
/// bounding box and filling uncovered corners with `fill`.
///
/// Exact multiples of 90° take lossless transposition paths; other angles
/// inverse-map each output pixel and sample the nearest source pixel.
pub fn rotate_expanded(image: &DecodedImage, degrees: u32, fill: Rgba) -> DecodedImage {
    match degrees % 360 {
        0 => image.clone(),
        90 => rotate90(image),
        180 => rotate180(image),
        270 => rotate270(image),
        angle => rotate_arbitrary(image, f64::from(angle), fill),
    }
}

fn rotate90(image: &DecodedImage) -> DecodedImage {
    let (width, height) = image.size();
    let mut out =
        DecodedImage::from_rgba(height, width, vec![0; width as usize * height as usize * 4]);
    for dy in 0..width {
        for dx in 0..height {
            out.put_pixel(dx, dy, image.pixel(dy, height - 1 - dx));
        }
    }
    out
}

fn rotate180(image: &DecodedImage) -> DecodedImage {
    let (width, height) = image.size();
    let mut out =
        DecodedImage::from_rgba(width, height, vec![0; width as usize * height as usize * 4]);
    for dy in 0..height {
        for dx in 0..width {
            out.put_pixel(dx, dy, image.pixel(width - 1 - dx, height - 1 - dy));
        }
    }
    out
}

fn rotate270(image: &DecodedImage) -> DecodedImage {
    let (width, height) = image.size();
    let mut out =
        DecodedImage::from_rgba(height, width, vec![0; width as usize * height as usize * 4]);
    for dy in 0..width {
        for dx in 0..height {
            out.put_pixel(dx, dy, image.pixel(width - 1 - dy, dx));
        }
    }
    out
}

fn rotate_arbitrary(image: &DecodedImage, degrees: f64, fill: Rgba) -> DecodedImage {
    let radians = degrees.to_radians();
    let (sin, cos) = radians.sin_cos();
    let (abs_sin, abs_cos) = (sin.abs(), cos.abs());

    let src_w = f64::from(image.width);
    let src_h = f64::from(image.height);
    let out_w = (src_w * abs_cos + src_h * abs_sin).ceil() as u32;
    let out_h = (src_w * abs_sin + src_h * abs_cos).ceil() as u32;

    let mut out =
        DecodedImage::from_rgba(out_w, out_h, vec![0; out_w as usize * out_h as usize * 4]);

    let (dst_cx, dst_cy) = (f64::from(out_w) / 2.0, f64::from(out_h) / 2.0);
    let (src_cx, src_cy) = (src_w / 2.0, src_h / 2.0);

    for dy in 0..out_h {
        for dx in 0..out_w {
            // Inverse rotation of the destination pixel center
            let vx = f64::from(dx) + 0.5 - dst_cx;
            let vy = f64::from(dy) + 0.5 - dst_cy;
            let sx = cos * vx + sin * vy + src_cx;
            let sy = -sin * vx + cos * vy + src_cy;

            let color = if sx >= 0.0 && sx < src_w && sy >= 0.0 && sy < src_h {
                image.pixel(sx as u32, sy as u32)
            } else {
                fill
            };
            out.put_pixel(dx, dy, color);
        }
    }

    out
}

/// Paste `image` onto `canvas` with its top-left corner at `origin`.
///
/// Negative origins and overhangs are legal; pixels falling outside the
/// canvas are clipped. Source pixels blend src-over, so transparent areas
/// show the canvas fill.
pub fn paste_onto(canvas: &mut Canvas, image: &DecodedImage, origin: (i64, i64)) {
    for sy in 0..image.height {
        let dy = origin.1 + i64::from(sy);
        if dy < 0 || dy >= i64::from(canvas.height) {
            continue;
        }
        for sx in 0..image.width {
            let dx = origin.0 + i64::from(sx);
            if dx < 0 || dx >= i64::from(canvas.width) {
                continue;
            }
            let src = image.pixel(sx, sy);
            let dst = canvas.pixel(dx as u32, dy as u32);
            canvas.put_pixel(dx as u32, dy as u32, blend_over(src, dst));
        }
    }
}

/// Source-over blend of two 8-bit RGBA pixels.
fn blend_over(src: Rgba, dst: Rgba) -> Rgba {
    match src.a {
        255 => src,
        0 => dst,
        alpha => {
            let a = u32::from(alpha);
            let inv = 255 - a;
            let mix = |s: u8, d: u8| ((u32::from(s) * a + u32::from(d) * inv + 127) / 255) as u8;
            Rgba::new(
                mix(src.r, dst.r),
                mix(src.g, dst.g),
                mix(src.b, dst.b),
                (a + u32::from(dst.a) * inv / 255) as u8,
            )
        }
    }
}
