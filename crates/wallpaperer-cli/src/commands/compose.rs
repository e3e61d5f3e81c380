use std::path::PathBuf;
use std::time::Instant;

use wallpaperer_core::decoders::decode_image;
use wallpaperer_core::exporters::export_png;
use wallpaperer_core::{compose, Anchor, ComposeOptions, ScaleOperation};

use crate::parsers::{parse_canvas_size, parse_color};
use crate::processing::determine_output_path;

/// Canvas size used when none is requested.
const DEFAULT_SIZE: &str = "fullhd";

/// Execute the compose command for a single image.
///
/// Resolves all configuration up front (fail fast, before any pixel work),
/// then decodes, composites, and exports:
/// - anchor, size, and color string parsing
/// - scale-policy conflict detection
/// - background detection unless an explicit color was given
/// - rotation, scaling, placement, and paste
/// - PNG export
///
/// # Returns
/// Returns `Ok(())` on success, or an error message describing the failure.
#[allow(clippy::too_many_arguments)]
pub fn cmd_compose(
    input: PathBuf,
    position: String,
    size: Option<String>,
    color: Option<String>,
    out: Option<PathBuf>,
    all_edges: bool,
    simple: bool,
    rotate: u32,
    scale_image: Option<f64>,
    scale_canvas: Option<f64>,
    verbose: bool,
) -> Result<(), String> {
    if verbose {
        wallpaperer_core::config::set_verbose(true);
    }

    // Configuration conflicts abort before the image is touched
    let anchor = Anchor::from_name(&position)?;
    let canvas_size = parse_canvas_size(size.as_deref().unwrap_or(DEFAULT_SIZE))?;
    let color = color.as_deref().map(parse_color).transpose()?;
    let scale = ScaleOperation::from_flags(scale_image, scale_canvas)?;

    let options = ComposeOptions {
        canvas_size,
        anchor,
        color,
        ignore_covered_edges: !all_edges,
        simple_detect: simple,
        rotate_degrees: rotate,
        scale,
    };

    let start_time = Instant::now();

    let image = decode_image(&input)?;
    println!(
        "Loaded {} ({}x{}, {} channel(s))",
        input.display(),
        image.width,
        image.height,
        image.source_channels
    );

    let canvas = compose(image, &options)?;

    let output_path = determine_output_path(&input, &out)?;
    export_png(&canvas, &output_path)?;

    println!(
        "Saved {} ({}x{}, anchor {}) in {:.2}s",
        output_path.display(),
        canvas.width,
        canvas.height,
        anchor.name(),
        start_time.elapsed().as_secs_f32()
    );

    Ok(())
}
