//! Color string parsing: hex, byte tuples, and named colors.

use wallpaperer_core::Rgba;

/// Named colors accepted by `--color`.
const NAMED_COLORS: &[(&str, Rgba)] = &[
    ("black", Rgba::opaque(0, 0, 0)),
    ("white", Rgba::opaque(255, 255, 255)),
    ("red", Rgba::opaque(255, 0, 0)),
    ("lime", Rgba::opaque(0, 255, 0)),
    ("green", Rgba::opaque(0, 128, 0)),
    ("blue", Rgba::opaque(0, 0, 255)),
    ("yellow", Rgba::opaque(255, 255, 0)),
    ("cyan", Rgba::opaque(0, 255, 255)),
    ("aqua", Rgba::opaque(0, 255, 255)),
    ("magenta", Rgba::opaque(255, 0, 255)),
    ("fuchsia", Rgba::opaque(255, 0, 255)),
    ("gray", Rgba::opaque(128, 128, 128)),
    ("grey", Rgba::opaque(128, 128, 128)),
    ("silver", Rgba::opaque(192, 192, 192)),
    ("maroon", Rgba::opaque(128, 0, 0)),
    ("olive", Rgba::opaque(128, 128, 0)),
    ("navy", Rgba::opaque(0, 0, 128)),
    ("teal", Rgba::opaque(0, 128, 128)),
    ("purple", Rgba::opaque(128, 0, 128)),
    ("orange", Rgba::opaque(255, 165, 0)),
    ("transparent", Rgba::new(0, 0, 0, 0)),
];

/// Parse a color string into an `Rgba`.
///
/// Accepts:
/// - `#RGB` / `#RGBA` / `#RRGGBB` / `#RRGGBBAA` hex (leading `#` optional)
/// - `R,G,B` / `R,G,B,A` byte tuples, values 0-255
/// - named colors (case-insensitive): `white`, `navy`, ...
pub fn parse_color(color_str: &str) -> Result<Rgba, String> {
    let trimmed = color_str.trim();
    if trimmed.is_empty() {
        return Err("Color string is empty".to_string());
    }

    if trimmed.contains(',') {
        return parse_tuple(trimmed);
    }

    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        if let Some(color) = parse_hex(hex) {
            return Ok(color);
        }
    }

    let lowered = trimmed.to_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|&(_, color)| color)
        .ok_or_else(|| {
            format!(
                "Invalid color '{}' (expected hex like #1a2b3c, a tuple like 255,0,0, or a color name)",
                color_str
            )
        })
}

/// Parse "R,G,B" or "R,G,B,A" with 0-255 components.
fn parse_tuple(tuple_str: &str) -> Result<Rgba, String> {
    let parts: Vec<&str> = tuple_str.split(',').collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(format!(
            "Color must be in format R,G,B or R,G,B,A, got: {}",
            tuple_str
        ));
    }

    let mut channels = [0u8; 4];
    channels[3] = 255;
    for (slot, (part, name)) in channels
        .iter_mut()
        .zip(parts.iter().zip(["red", "green", "blue", "alpha"]))
    {
        *slot = part
            .trim()
            .parse::<u8>()
            .map_err(|_| format!("Invalid {} value: {}", name, part))?;
    }

    Ok(Rgba::from(channels))
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    match hex.len() {
        3 => Some(Rgba::opaque(
            expand_nibble(hex.as_bytes()[0])?,
            expand_nibble(hex.as_bytes()[1])?,
            expand_nibble(hex.as_bytes()[2])?,
        )),
        4 => Some(Rgba::new(
            expand_nibble(hex.as_bytes()[0])?,
            expand_nibble(hex.as_bytes()[1])?,
            expand_nibble(hex.as_bytes()[2])?,
            expand_nibble(hex.as_bytes()[3])?,
        )),
        6 => Some(Rgba::opaque(
            parse_byte(&hex[0..2])?,
            parse_byte(&hex[2..4])?,
            parse_byte(&hex[4..6])?,
        )),
        8 => Some(Rgba::new(
            parse_byte(&hex[0..2])?,
            parse_byte(&hex[2..4])?,
            parse_byte(&hex[4..6])?,
            parse_byte(&hex[6..8])?,
        )),
        _ => None,
    }
}

/// Expand a single hex nibble: 'f' → 0xFF, 'a' → 0xAA.
fn expand_nibble(ch: u8) -> Option<u8> {
    let n = hex_val(ch)?;
    Some(n << 4 | n)
}

fn hex_val(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

fn parse_byte(s: &str) -> Option<u8> {
    let hi = hex_val(s.as_bytes()[0])?;
    let lo = hex_val(s.as_bytes()[1])?;
    Some(hi << 4 | lo)
}
