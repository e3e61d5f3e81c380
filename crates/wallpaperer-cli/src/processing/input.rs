//! Input file handling and path utilities.

use std::path::{Path, PathBuf};

/// Determine the output path for a composited wallpaper.
///
/// # Arguments
/// * `input` - Input file path
/// * `out` - Optional output directory or file path
///
/// # Returns
/// If `out` is a directory, the input's stem joined into it; if `out` is a
/// file path it is used as-is; if absent, the input's directory with a
/// `_wallpaper.png` suffix on the stem.
pub fn determine_output_path(input: &Path, out: &Option<PathBuf>) -> Result<PathBuf, String> {
    if let Some(out_path) = out {
        if out_path.is_dir() {
            let filename = input
                .file_stem()
                .ok_or("Invalid input filename")?
                .to_string_lossy();
            Ok(out_path.join(format!("{}_wallpaper.png", filename)))
        } else {
            Ok(out_path.clone())
        }
    } else {
        let filename = input
            .file_stem()
            .ok_or("Invalid input filename")?
            .to_string_lossy();
        let parent = input.parent().unwrap_or(Path::new("."));
        Ok(parent.join(format!("{}_wallpaper.png", filename)))
    }
}
