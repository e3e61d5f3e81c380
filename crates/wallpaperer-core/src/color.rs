//! Color values for canvas fills and pixel comparison.
//!
//! The whole pipeline works in 8-bit RGBA. Three-channel colors are
//! normalized to four channels with full opacity before they are used as a
//! canvas fill.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An 8-bit RGBA color.
///
/// Derives `Eq` and `Hash` so that exact-equality flood fill and vote
/// tallying can use it directly as a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully opaque white.
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    /// Fully opaque black.
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Normalize a 3-channel color to 4 channels with full opacity.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Channel values in memory order (R, G, B, A).
    pub const fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(c: [u8; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl From<[u8; 3]> for Rgba {
    fn from(c: [u8; 3]) -> Self {
        Self::opaque(c[0], c[1], c[2])
    }
}

impl fmt::Display for Rgba {
    /// Hex notation: `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}
