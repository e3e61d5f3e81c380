//! JPEG image decoder

use std::path::Path;

use super::{expand_to_rgba, DecodedImage};

/// Decode a JPEG file
pub(crate) fn decode_jpeg<P: AsRef<Path>>(path: P) -> Result<DecodedImage, String> {
    use std::fs::File;
    use std::io::BufReader;

    let file = File::open(path.as_ref()).map_err(|e| format!("Failed to open JPEG file: {}", e))?;
    let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(file));

    let pixels = decoder
        .decode()
        .map_err(|e| format!("Failed to decode JPEG: {}", e))?;
    let info = decoder
        .info()
        .ok_or_else(|| "Failed to read JPEG info".to_string())?;

    let width = u32::from(info.width);
    let height = u32::from(info.height);

    let (bytes8, channels) = match info.pixel_format {
        jpeg_decoder::PixelFormat::L8 => (pixels, 1),
        jpeg_decoder::PixelFormat::L16 => {
            // Big-endian 16-bit luma; keep the high byte
            if pixels.len() % 2 != 0 {
                return Err("16-bit JPEG buffer has odd length".to_string());
            }
            (pixels.chunks_exact(2).map(|pair| pair[0]).collect(), 1)
        }
        jpeg_decoder::PixelFormat::RGB24 => (pixels, 3),
        jpeg_decoder::PixelFormat::CMYK32 => {
            return Err("CMYK JPEG not supported".to_string());
        }
        #[allow(unreachable_patterns)]
        other => {
            return Err(format!("Unsupported JPEG pixel format: {:?}", other));
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
