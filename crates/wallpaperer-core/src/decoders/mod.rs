//! Image decoders for various formats
//!
//! Support for PNG, JPEG, and TIFF file formats. Every decoder normalizes
//! its output to interleaved 8-bit RGBA so the rest of the pipeline never
//! sees format-specific pixel layouts.

mod jpeg;
mod png;
mod tiff;

#[cfg(test)]
mod tests;

use std::path::Path;

use crate::color::Rgba;

/// Decoded image data, always interleaved 8-bit RGBA.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Interleaved RGBA data, `width * height * 4` bytes
    pub data: Vec<u8>,

    /// Channel count in the source file (1, 2, 3, or 4), before
    /// normalization to RGBA
    pub source_channels: u8,
}

impl DecodedImage {
    /// Wrap an already-normalized RGBA buffer.
    ///
    /// The buffer length must be exactly `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * 4);
        Self {
            width,
            height,
            data,
            source_channels: 4,
        }
    }

    /// Image dimensions as `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
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

    /// Overwrite the pixel at `(x, y)`. Coordinates must be in bounds.
    pub(crate) fn put_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.data[idx..idx + 4].copy_from_slice(&color.channels());
    }
}

/// Decode an image from a file path, dispatching on the file extension.
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<DecodedImage, String> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| "No file extension found".to_string())?;

    match extension.as_str() {
        "png" => png::decode_png(path),
        "jpg" | "jpeg" => jpeg::decode_jpeg(path),
        "tif" | "tiff" => tiff::decode_tiff(path),
        _ => Err(format!("Unsupported file format: {}", extension)),
    }
}

/// Expand an interleaved buffer with `channels` 8-bit channels per pixel to
/// RGBA. Grayscale is replicated across R, G, B; missing alpha becomes 255.
pub(crate) fn expand_to_rgba(bytes: &[u8], channels: usize) -> Result<Vec<u8>, String> {
    if channels == 0 || bytes.len() % channels != 0 {
        return Err(format!(
            "Pixel buffer length {} is not a multiple of {} channels",
            bytes.len(),
            channels
        ));
    }

    let pixels = bytes.len() / channels;
    let mut rgba = Vec::with_capacity(pixels * 4);
    for chunk in bytes.chunks_exact(channels) {
        match channels {
            1 => rgba.extend_from_slice(&[chunk[0], chunk[0], chunk[0], 255]),
            2 => rgba.extend_from_slice(&[chunk[0], chunk[0], chunk[0], chunk[1]]),
            3 => rgba.extend_from_slice(&[chunk[0], chunk[1], chunk[2], 255]),
            4 => rgba.extend_from_slice(chunk),
            n => return Err(format!("Unsupported channel count: {}", n)),
        }
    }
    Ok(rgba)
}

/// Narrow 16-bit samples to 8 bits by dropping the low byte.
pub(crate) fn narrow_u16_samples(samples: &[u16]) -> Vec<u8> {
    samples.iter().map(|&v| (v >> 8) as u8).collect()
}

/// Reinterpret big-endian 16-bit byte pairs as 8-bit samples by keeping the
/// high byte of each pair.
pub(crate) fn narrow_u16_bytes(bytes: &[u8]) -> Result<Vec<u8>, String> {
    if bytes.len() % 2 != 0 {
        return Err("16-bit pixel buffer has odd length".to_string());
    }
    Ok(bytes.chunks_exact(2).map(|pair| pair[0]).collect())
}
