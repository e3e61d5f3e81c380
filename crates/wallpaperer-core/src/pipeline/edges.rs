//! Edge sampling: the ordered boundary coordinates inspected for background
//! color detection.
//!
//! Order is fixed and deterministic: top row left→right, left column
//! top→bottom, right column top→bottom, bottom row left→right. An image
//! edge pressed against the canvas under the chosen anchor is assumed to be
//! a crop line of the original art, not background, and is skipped unless
//! `ignore_covered_edges` is disabled.

use crate::models::Anchor;

/// Which of the four image edges a sampling pass visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EdgeSet {
    top: bool,
    left: bool,
    right: bool,
    bottom: bool,
}

/// Finite iterator over boundary pixel coordinates.
///
/// Restartable by calling [`edge_pixels`] again with the same arguments;
/// corner pixels shared by two visited edges are yielded once per edge.
#[derive(Debug, Clone)]
pub struct EdgePixels {
    width: u32,
    height: u32,
    edges: EdgeSet,
    // 0 = top, 1 = left, 2 = right, 3 = bottom, 4 = done
    phase: u8,
    index: u32,
}

/// Boundary coordinates of a `width × height` image for the given anchor.
///
/// Degenerate zero-size images yield an empty sequence without error.
pub fn edge_pixels(
    width: u32,
    height: u32,
    anchor: Anchor,
    ignore_covered_edges: bool,
) -> EdgePixels {
    let pinned = anchor.pinned_sides();
    let edges = if width == 0 || height == 0 {
        EdgeSet {
            top: false,
            left: false,
            right: false,
            bottom: false,
        }
    } else {
        EdgeSet {
            top: !ignore_covered_edges || !pinned.top,
            left: !ignore_covered_edges || !pinned.left,
            right: !ignore_covered_edges || !pinned.right,
            bottom: !ignore_covered_edges || !pinned.bottom,
        }
    };

    EdgePixels {
        width,
        height,
        edges,
        phase: 0,
        index: 0,
    }
}

impl Iterator for EdgePixels {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<(u32, u32)> {
        loop {
            match self.phase {
                0 => {
                    if self.edges.top && self.index < self.width {
                        let x = self.index;
                        self.index += 1;
                        return Some((x, 0));
                    }
                }
                1 => {
                    if self.edges.left && self.index < self.height {
                        let y = self.index;
                        self.index += 1;
                        return Some((0, y));
                    }
                }
                2 => {
                    if self.edges.right && self.index < self.height {
                        let y = self.index;
                        self.index += 1;
                        return Some((self.width - 1, y));
                    }
                }
                3 => {
                    if self.edges.bottom && self.index < self.width {
                        let x = self.index;
                        self.index += 1;
                        return Some((x, self.height - 1));
                    }
                }
                _ => return None,
            }
            self.phase += 1;
            self.index = 0;
        }
    }
}
