use std::path::PathBuf;

use wallpaperer_core::decoders::decode_image;
use wallpaperer_core::{detect_background, Anchor};

/// Execute the detect command: print the inferred background color.
///
/// Runs the same detection the compose command uses, without compositing,
/// so a color can be inspected (or fed back via `--color`) before
/// committing to a full render.
pub fn cmd_detect(
    input: PathBuf,
    position: String,
    all_edges: bool,
    simple: bool,
    verbose: bool,
) -> Result<(), String> {
    if verbose {
        wallpaperer_core::config::set_verbose(true);
    }

    let anchor = Anchor::from_name(&position)?;
    let image = decode_image(&input)?;

    let color = detect_background(&image, anchor, !all_edges, simple)?;
    println!("{}", color);

    Ok(())
}
