//! Canvas anchors: where on the canvas the image is placed.

use serde::{Deserialize, Serialize};

/// Named position on the canvas where the image's origin is placed.
///
/// A closed enumeration so placement dispatch is an exhaustive `match`
/// rather than a runtime table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    #[default]
    Center,
    CenterTop,
    CenterBottom,
    CenterLeft,
    CenterRight,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Name/alias table. Short aliases resolve to the same canonical variant.
const ANCHOR_NAMES: &[(&str, Anchor)] = &[
    ("center", Anchor::Center),
    ("c", Anchor::Center),
    ("center-top", Anchor::CenterTop),
    ("ct", Anchor::CenterTop),
    ("center-bottom", Anchor::CenterBottom),
    ("cb", Anchor::CenterBottom),
    ("center-left", Anchor::CenterLeft),
    ("cl", Anchor::CenterLeft),
    ("center-right", Anchor::CenterRight),
    ("cr", Anchor::CenterRight),
    ("top-left", Anchor::TopLeft),
    ("tl", Anchor::TopLeft),
    ("top-right", Anchor::TopRight),
    ("tr", Anchor::TopRight),
    ("bottom-left", Anchor::BottomLeft),
    ("bl", Anchor::BottomLeft),
    ("bottom-right", Anchor::BottomRight),
    ("br", Anchor::BottomRight),
];

/// Canvas sides an image edge is pressed against under a given anchor.
///
/// A pressed edge is a crop line of the original art rather than
/// foreground-adjacent background, so edge sampling skips it by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PinnedSides {
    pub left: bool,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
}

impl Anchor {
    /// All canonical variants.
    pub const ALL: [Anchor; 9] = [
        Anchor::Center,
        Anchor::CenterTop,
        Anchor::CenterBottom,
        Anchor::CenterLeft,
        Anchor::CenterRight,
        Anchor::TopLeft,
        Anchor::TopRight,
        Anchor::BottomLeft,
        Anchor::BottomRight,
    ];

    /// Resolve a canonical name or alias (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self, String> {
        let lowered = name.trim().to_lowercase();
        ANCHOR_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == lowered)
            .map(|&(_, anchor)| anchor)
            .ok_or_else(|| {
                format!(
                    "Unknown anchor '{}' (expected one of: {})",
                    name,
                    Anchor::ALL
                        .iter()
                        .map(|a| a.name())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }

    /// Canonical name of this anchor.
    pub fn name(self) -> &'static str {
        match self {
            Anchor::Center => "center",
            Anchor::CenterTop => "center-top",
            Anchor::CenterBottom => "center-bottom",
            Anchor::CenterLeft => "center-left",
            Anchor::CenterRight => "center-right",
            Anchor::TopLeft => "top-left",
            Anchor::TopRight => "top-right",
            Anchor::BottomLeft => "bottom-left",
            Anchor::BottomRight => "bottom-right",
        }
    }

    /// Canvas sides this anchor pins the image against.
    ///
    /// Derived from the placement table: an offset of 0 pins the left/top
    /// side, an offset of `canvas - image` pins the right/bottom side.
    pub(crate) fn pinned_sides(self) -> PinnedSides {
        let (left, top, right, bottom) = match self {
            Anchor::Center => (false, false, false, false),
            Anchor::CenterTop => (false, true, false, false),
            Anchor::CenterBottom => (false, false, false, true),
            Anchor::CenterLeft => (true, false, false, false),
            Anchor::CenterRight => (false, false, true, false),
            Anchor::TopLeft => (true, true, false, false),
            Anchor::TopRight => (false, true, true, false),
            Anchor::BottomLeft => (true, false, false, true),
            Anchor::BottomRight => (false, false, true, true),
        };
        PinnedSides {
            left,
            top,
            right,
            bottom,
        }
    }
}
