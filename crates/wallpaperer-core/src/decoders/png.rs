//! PNG image decoder

use std::path::Path;

use super::{expand_to_rgba, narrow_u16_bytes, DecodedImage};

/// Decode a PNG file
pub(crate) fn decode_png<P: AsRef<Path>>(path: P) -> Result<DecodedImage, String> {
    use std::fs::File;
    use std::io::BufReader;

    let file = File::open(path.as_ref()).map_err(|e| format!("Failed to open PNG file: {}", e))?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e| format!("Failed to read PNG info: {}", e))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    // Allocate buffer for image data
    let buffer_size = reader
        .output_buffer_size()
        .ok_or_else(|| "Failed to determine PNG buffer size".to_string())?;
    let mut buf = vec![0u8; buffer_size];
    let frame_info = reader
        .next_frame(&mut buf)
        .map_err(|e| format!("Failed to read PNG frame: {}", e))?;

    // Get the actual bytes used
    let bytes = &buf[..frame_info.buffer_size()];

    let channels = match color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        png::ColorType::Indexed => {
            return Err("Indexed PNG not supported".to_string());
        }
    };

    // Normalize bit depth to 8, then channel layout to RGBA
    let bytes8 = match bit_depth {
        png::BitDepth::Eight => bytes.to_vec(),
        png::BitDepth::Sixteen => narrow_u16_bytes(bytes)?,
        other => {
            return Err(format!(
                "Unsupported PNG bit depth: {:?} (expected 8 or 16)",
                other
            ));
        }
    };
    let data = expand_to_rgba(&bytes8, channels)?;

    Ok(DecodedImage {
        width,
        height,
        data,
        source_channels: channels as u8,
    })
}
