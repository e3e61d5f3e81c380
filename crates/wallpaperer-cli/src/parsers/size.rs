//! Canvas size parsing: named presets and explicit `WxH` strings.

use wallpaperer_core::presets::{lookup_preset, preset_names};
use wallpaperer_core::CanvasSize;

/// Parse a canvas size string.
///
/// Accepts a named preset (`fullhd`, `4k-uhd`, ...) or an explicit
/// `WIDTHxHEIGHT` pair of positive integers.
pub fn parse_canvas_size(size_str: &str) -> Result<CanvasSize, String> {
    let trimmed = size_str.trim();

    if let Some(preset) = lookup_preset(&trimmed.to_lowercase()) {
        return Ok(preset);
    }

    if let Some((width_str, height_str)) = trimmed.split_once(['x', 'X']) {
        let width = width_str
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("Invalid width: {}", width_str))?;
        let height = height_str
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("Invalid height: {}", height_str))?;
        return CanvasSize::new(width, height);
    }

    Err(format!(
        "Invalid size '{}' (expected WIDTHxHEIGHT or one of: {})",
        size_str,
        preset_names().join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_presets() {
        let size = parse_canvas_size("fullhd").unwrap();
        assert_eq!((size.width, size.height), (1920, 1080));

        let size = parse_canvas_size("4K-UHD").unwrap();
        assert_eq!((size.width, size.height), (3840, 2160));
    }

    #[test]
    fn test_parse_explicit_dimensions() {
        let size = parse_canvas_size("800x600").unwrap();
        assert_eq!((size.width, size.height), (800, 600));

        let size = parse_canvas_size(" 1024 X 768 ").unwrap();
        assert_eq!((size.width, size.height), (1024, 768));
    }

    #[test]
    fn test_reject_malformed_sizes() {
        assert!(parse_canvas_size("8k").is_err());
        assert!(parse_canvas_size("800").is_err());
        assert!(parse_canvas_size("800x").is_err());
        assert!(parse_canvas_size("x600").is_err());
        assert!(parse_canvas_size("0x600").is_err());
        assert!(parse_canvas_size("-800x600").is_err());
    }
}
