//! TIFF image decoder

use std::path::Path;

use super::{expand_to_rgba, narrow_u16_samples, DecodedImage};

/// Decode a TIFF file
pub(crate) fn decode_tiff<P: AsRef<Path>>(path: P) -> Result<DecodedImage, String> {
    use std::fs::File;
    use std::io::BufReader;

    let file = File::open(path.as_ref()).map_err(|e| format!("Failed to open TIFF file: {}", e))?;

    let mut decoder = tiff::decoder::Decoder::new(BufReader::new(file))
        .map_err(|e| format!("Failed to create TIFF decoder: {}", e))?;

    // Get image dimensions
    let (width, height) = decoder
        .dimensions()
        .map_err(|e| format!("Failed to get TIFF dimensions: {}", e))?;

    // Get color type
    let color_type = decoder
        .colortype()
        .map_err(|e| format!("Failed to get TIFF color type: {}", e))?;

    let channels = match color_type {
        tiff::ColorType::Gray(_) => 1,
        tiff::ColorType::GrayA(_) => 2,
        tiff::ColorType::RGB(_) => 3,
        tiff::ColorType::RGBA(_) => 4,
        other => {
            return Err(format!("Unsupported TIFF color type: {:?}", other));
        }
    };

    // Read the image data
    let image_data = decoder
        .read_image()
        .map_err(|e| format!("Failed to read TIFF image data: {}", e))?;

    let bytes8 = match image_data {
        tiff::decoder::DecodingResult::U8(buf) => buf,
        tiff::decoder::DecodingResult::U16(buf) => narrow_u16_samples(&buf),
        _ => {
            return Err("Unsupported TIFF sample format (expected 8- or 16-bit unsigned)"
                .to_string());
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
