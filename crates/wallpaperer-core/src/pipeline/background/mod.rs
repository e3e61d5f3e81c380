//! Background color detection
//!
//! Infers the color a viewer would call the image's background by sampling
//! the boundary pixels the chosen anchor leaves visible:
//! - flood-fill mode (default) grows connected regions from the sampled
//!   edges and picks the largest one;
//! - simple/voting mode tallies raw edge-pixel colors, an O(perimeter)
//!   fallback for images where flood fill's O(area) worst case is too slow.
//!
//! The two modes are not guaranteed to agree when background pixels are
//! scattered along the edges without being connected; that divergence is
//! inherent to the algorithms, not a defect.

mod region;


pub use region::Region;
pub(crate) use region::{grow_region, VisitedMask};

use std::collections::HashMap;

use crate::color::Rgba;
use crate::decoders::DecodedImage;
use crate::models::Anchor;
use crate::pipeline::edges::edge_pixels;
use crate::verbose_println;

/// Infer the background color of `image` for the given anchor.
///
/// Fails when the sampler yields no pixels (zero-size image): such an image
/// has no well-defined background, and the caller must supply an explicit
/// color instead.
pub fn detect_background(
    image: &DecodedImage,
    anchor: Anchor,
    ignore_covered_edges: bool,
    simple_detect: bool,
) -> Result<Rgba, String> {
    if simple_detect {
        vote_detect(image, anchor, ignore_covered_edges)
    } else {
        flood_detect(image, anchor, ignore_covered_edges)
    }
}

/// Flood-fill detection: largest connected edge-touching region wins.
///
/// Regions are discovered in edge-sampling order; on equal size the first
/// one discovered wins. The tie-break is deliberate and relied on by tests.
pub fn flood_detect(
    image: &DecodedImage,
    anchor: Anchor,
    ignore_covered_edges: bool,
) -> Result<Rgba, String> {
    let mut visited = VisitedMask::new(image.width, image.height);
    let mut regions: Vec<Region> = Vec::new();

    for (x, y) in edge_pixels(image.width, image.height, anchor, ignore_covered_edges) {
        if visited.get(x, y) {
            continue;
        }
        regions.push(grow_region(image, (x, y), &mut visited));
    }

    verbose_println!(
        "flood detect: {} region(s) over {} claimed pixel(s)",
        regions.len(),
        visited.claimed_count()
    );

    let winner = regions
        .iter()
        .copied()
        .reduce(|best, candidate| {
            if candidate.pixel_count > best.pixel_count {
                candidate
            } else {
                best
            }
        })
        .ok_or_else(|| {
            "Image has no edge pixels to sample; supply an explicit background color".to_string()
        })?;

    verbose_println!(
        "flood detect: background {} ({} pixels)",
        winner.color,
        winner.pixel_count
    );
    Ok(winner.color)
}

/// Voting detection: most frequent edge-pixel color wins, ties broken by
/// first occurrence in sampling order.
pub fn vote_detect(
    image: &DecodedImage,
    anchor: Anchor,
    ignore_covered_edges: bool,
) -> Result<Rgba, String> {
    // color → (first occurrence position, count)
    let mut tally: HashMap<Rgba, (usize, u64)> = HashMap::new();
    let mut sampled: usize = 0;

    for (x, y) in edge_pixels(image.width, image.height, anchor, ignore_covered_edges) {
        let color = image.pixel(x, y);
        let entry = tally.entry(color).or_insert((sampled, 0));
        entry.1 += 1;
        sampled += 1;
    }

    verbose_println!(
        "vote detect: {} distinct color(s) over {} sample(s)",
        tally.len(),
        sampled
    );

    tally
        .into_iter()
        .max_by(|(_, (first_a, count_a)), (_, (first_b, count_b))| {
            // Highest count; on a tie the earlier first occurrence wins
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(color, _)| color)
        .ok_or_else(|| {
            "Image has no edge pixels to sample; supply an explicit background color".to_string()
        })
}
