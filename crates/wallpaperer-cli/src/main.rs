use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wallpaperer_cli::commands::{cmd_compose, cmd_detect};

#[derive(Parser)]
#[command(name = "wallpaperer")]
#[command(version, about = "Composite images onto auto-colored wallpaper canvases", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Composite an image onto a canvas
    Compose {
        /// Input image (PNG, JPEG, or TIFF)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Where to place the image (e.g. center, top-left, br)
        #[arg(value_name = "ANCHOR", default_value = "center")]
        position: String,

        /// Canvas size: WIDTHxHEIGHT or a preset name (fullhd, 4k-uhd, ...)
        #[arg(short, long, value_name = "SIZE")]
        size: Option<String>,

        /// Canvas color; skips background detection
        #[arg(short, long, value_name = "COLOR")]
        color: Option<String>,

        /// Output file or directory (default: <input>_wallpaper.png)
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,

        /// Sample all image edges, including those covered by the anchor.
        /// Covered edges are usually crop lines, so skipping them avoids
        /// picking a foreground color that runs off the original image.
        #[arg(long)]
        all_edges: bool,

        /// Use simple color voting instead of flood fill. May be less
        /// accurate but stays fast on very large images.
        #[arg(long)]
        simple: bool,

        /// Clockwise rotation in degrees before scaling
        #[arg(long, value_name = "DEGREES", default_value = "0")]
        rotate: u32,

        /// Resize to FRACTION of the image's own size
        #[arg(long, value_name = "FRACTION")]
        scale_image: Option<f64>,

        /// Resize so the image height is FRACTION of the canvas height
        #[arg(long, value_name = "FRACTION")]
        scale_canvas: Option<f64>,

        /// Print pipeline diagnostics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Detect and print an image's background color
    Detect {
        /// Input image (PNG, JPEG, or TIFF)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Anchor the detection assumes (controls covered edges)
        #[arg(value_name = "ANCHOR", default_value = "center")]
        position: String,

        /// Sample all image edges, including covered ones
        #[arg(long)]
        all_edges: bool,

        /// Use simple color voting instead of flood fill
        #[arg(long)]
        simple: bool,

        /// Print pipeline diagnostics
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compose {
            input,
            position,
            size,
            color,
            out,
            all_edges,
            simple,
            rotate,
            scale_image,
            scale_canvas,
            verbose,
        } => cmd_compose(
            input,
            position,
            size,
            color,
            out,
            all_edges,
            simple,
            rotate,
            scale_image,
            scale_canvas,
            verbose,
        ),

        Commands::Detect {
            input,
            position,
            all_edges,
            simple,
            verbose,
        } => cmd_detect(input, position, all_edges, simple, verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
