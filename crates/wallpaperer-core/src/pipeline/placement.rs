//! Anchor placement: image size + canvas size → paste origin.

use crate::models::Anchor;

/// Top-left paste coordinate for the image on the canvas.
///
/// Pure closed-form geometry. Negative results are legal (the image
/// overhangs the canvas) and are never clamped; the paste step clips
/// instead. Centering uses Euclidean division so odd negative differences
/// still floor toward negative infinity.
pub fn paste_origin(anchor: Anchor, image_size: (u32, u32), canvas_size: (u32, u32)) -> (i64, i64) {
    let (iwidth, iheight) = (i64::from(image_size.0), i64::from(image_size.1));
    let (cwidth, cheight) = (i64::from(canvas_size.0), i64::from(canvas_size.1));

    match anchor {
        Anchor::TopLeft => (0, 0),
        Anchor::TopRight => (cwidth - iwidth, 0),
        Anchor::BottomLeft => (0, cheight - iheight),
        Anchor::BottomRight => (cwidth - iwidth, cheight - iheight),
        Anchor::Center => ((cwidth - iwidth).div_euclid(2), (cheight - iheight).div_euclid(2)),
        Anchor::CenterTop => ((cwidth - iwidth).div_euclid(2), 0),
        Anchor::CenterBottom => ((cwidth - iwidth).div_euclid(2), cheight - iheight),
        Anchor::CenterLeft => (0, (cheight - iheight).div_euclid(2)),
        Anchor::CenterRight => (cwidth - iwidth, (cheight - iheight).div_euclid(2)),
    }
}
