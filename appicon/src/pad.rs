//! Fits an image inside a square canvas, leaving a margin on every side.
//!
//! iOS masks icons with rounded corners; padding the artwork keeps glows and
//! edges away from the mask.

use crate::{write_png, Color, Scaler};
use anyhow::Result;
use image::{DynamicImage, RgbaImage};
use std::path::Path;

pub const DEFAULT_CANVAS: u32 = 1024;
pub const DEFAULT_MARGIN_PCT: f64 = 12.5;
pub const DEFAULT_BG_COLOR: &str = "#0B0F1A";
pub const MAX_MARGIN_PCT: f64 = 45.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PadOpts {
    /// Side length of the square output.
    pub canvas: u32,
    /// Margin on each side as a percentage of `canvas`.
    pub margin_pct: f64,
    pub background: Color,
}

impl Default for PadOpts {
    fn default() -> Self {
        Self {
            canvas: DEFAULT_CANVAS,
            margin_pct: DEFAULT_MARGIN_PCT,
            background: Color::rgb(0x0b, 0x0f, 0x1a),
        }
    }
}

impl PadOpts {
    /// Margin as a fraction, clamped to `[0, 0.45]`.
    pub fn margin(&self) -> f64 {
        f64::max(0.0, f64::min(MAX_MARGIN_PCT, self.margin_pct)) / 100.0
    }

    /// Side length of the square region the image is fitted into.
    pub fn inset(&self) -> u32 {
        (self.canvas as f64 * (1.0 - 2.0 * self.margin())).round() as u32
    }
}

/// Placement of the resized image on the canvas.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Fit {
    pub width: u32,
    pub height: u32,
    pub x: u32,
    pub y: u32,
}

impl Fit {
    pub fn new(canvas: u32, inset: u32, src_width: u32, src_height: u32) -> Self {
        let scale = f64::min(
            inset as f64 / src_width as f64,
            inset as f64 / src_height as f64,
        );
        let width = ((src_width as f64 * scale).round() as u32).max(1);
        let height = ((src_height as f64 * scale).round() as u32).max(1);
        Self {
            width,
            height,
            x: canvas.saturating_sub(width) / 2,
            y: canvas.saturating_sub(height) / 2,
        }
    }
}

/// Resizes the source to fit the inset and alpha composites it centered over
/// a canvas filled with the background color.
pub fn pad_image(scaler: &Scaler, opts: &PadOpts) -> Result<(RgbaImage, Fit)> {
    anyhow::ensure!(opts.canvas > 0, "canvas size must be at least 1 px");
    let (src_width, src_height) = scaler.dimensions();
    let fit = Fit::new(opts.canvas, opts.inset(), src_width, src_height);
    log::debug!(
        "fitting {}x{} into {}px inset: {:?}",
        src_width,
        src_height,
        opts.inset(),
        fit
    );
    let resized = scaler.resize(fit.width, fit.height)?;
    let mut canvas = RgbaImage::from_pixel(opts.canvas, opts.canvas, opts.background.into());
    image::imageops::overlay(&mut canvas, &resized, fit.x as i64, fit.y as i64);
    Ok((canvas, fit))
}

/// Pads the image at `input` and writes the result to `output` as PNG.
pub fn pad_icon<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    opts: &PadOpts,
) -> Result<Fit> {
    anyhow::ensure!(opts.canvas > 0, "canvas size must be at least 1 px");
    let scaler = Scaler::open(input)?;
    let (canvas, fit) = pad_image(&scaler, opts)?;
    write_png(output, &DynamicImage::ImageRgba8(canvas))?;
    Ok(fit)
}
