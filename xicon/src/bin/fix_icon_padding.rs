use anyhow::Result;
use appicon::pad::{DEFAULT_BG_COLOR, DEFAULT_CANVAS, DEFAULT_MARGIN_PCT};
use appicon::{pad_icon, Color, PadOpts};
use clap::Parser;
use std::path::PathBuf;

/// Fits an image inside a square canvas with a margin so the iOS icon mask
/// doesn't clip its edges.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Source image
    #[clap(long)]
    input: PathBuf,
    /// Where to write the padded PNG
    #[clap(long)]
    output: PathBuf,
    /// Side length of the square output in px
    #[clap(long, default_value_t = DEFAULT_CANVAS)]
    canvas: u32,
    /// Margin on each side in percent of the canvas, clamped to 0-45
    #[clap(
        long = "margin_pct",
        default_value_t = DEFAULT_MARGIN_PCT,
        allow_negative_numbers = true
    )]
    margin_pct: f64,
    /// Background color, e.g. `#0B0F1A`, `#0B0F1A80`, `rgb(11, 15, 26)` or `navy`
    #[clap(long = "bg_color", default_value = DEFAULT_BG_COLOR)]
    bg_color: String,
    /// Log debug output to stderr
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    xicon::init_logging(args.verbose);
    log::debug!("{:?}", args);
    let opts = PadOpts {
        canvas: args.canvas,
        margin_pct: args.margin_pct,
        background: args.bg_color.parse::<Color>()?,
    };
    let fit = pad_icon(&args.input, &args.output, &opts)?;
    println!(
        "Wrote {} ({}x{} image at {},{} on a {}x{} canvas)",
        args.output.display(),
        fit.width,
        fit.height,
        fit.x,
        fit.y,
        opts.canvas,
        opts.canvas,
    );
    Ok(())
}
