//! Image exporters
//!
//! Persist a composited canvas to disk. Wallpapers are written as RGBA PNG;
//! the caller chooses the path.

use std::path::Path;

use crate::pipeline::Canvas;

/// Export a canvas to PNG format
pub fn export_png<P: AsRef<Path>>(canvas: &Canvas, path: P) -> Result<(), String> {
    use std::fs::File;
    use std::io::BufWriter;

    if canvas.width == 0 || canvas.height == 0 {
        return Err(format!(
            "Cannot export degenerate canvas ({}x{})",
            canvas.width, canvas.height
        ));
    }

    let file =
        File::create(path.as_ref()).map_err(|e| format!("Failed to create PNG file: {}", e))?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, canvas.width, canvas.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| format!("Failed to write PNG header: {}", e))?;
    writer
        .write_image_data(&canvas.data)
        .map_err(|e| format!("Failed to write PNG image data: {}", e))?;
    writer
        .finish()
        .map_err(|e| format!("Failed to finish PNG stream: {}", e))
}
