//! Named canvas-size presets.
//!
//! A fixed table of well-known device and display sizes that the CLI accepts
//! in place of an explicit `WxH` size.

use crate::models::CanvasSize;

/// Named canvas sizes, `(name, (width, height))`.
pub const CANVAS_PRESETS: &[(&str, (u32, u32))] = &[
    ("android-ldpi", (240, 320)),
    ("android-mdpi", (320, 480)),
    ("android-hdpi", (480, 800)),
    ("android-xhdpi", (640, 960)),
    ("android-xxhdpi", (960, 1600)),
    ("android-xxxhdpi", (1280, 1920)),
    ("hd", (1366, 768)),
    ("fullhd", (1920, 1080)),
    ("4k-uhd", (3840, 2160)),
    ("4k-dci", (4096, 2160)),
];

/// Look up a named canvas-size preset.
///
/// Returns `None` for unknown names; the caller decides whether that is an
/// error or a cue to parse the string as an explicit `WxH` size.
pub fn lookup_preset(name: &str) -> Option<CanvasSize> {
    CANVAS_PRESETS
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|&(_, (width, height))| CanvasSize { width, height })
}

/// Names of all known presets, for help and error messages.
pub fn preset_names() -> Vec<&'static str> {
    CANVAS_PRESETS.iter().map(|(name, _)| *name).collect()
}
