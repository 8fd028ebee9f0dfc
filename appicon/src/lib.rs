use anyhow::{Context, Result};
use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::{DynamicImage, ImageReader, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub mod color;
pub mod ios;
pub mod pad;

pub use color::Color;
pub use ios::{generate_icons, Category, Icon, IconSet, Progress, IOS_ICON_SIZES};
pub use pad::{pad_icon, pad_image, Fit, PadOpts};

/// Holds a decoded source image in RGBA8 and hands out resampled copies of it.
///
/// Every resize starts from the decoded original, so writing many sizes never
/// compounds resampling loss.
pub struct Scaler {
    img: RgbaImage,
}

impl Scaler {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let img = ImageReader::open(path)
            .with_context(|| format!("failed to open image '{}'", path.display()))?
            .with_guessed_format()
            .with_context(|| format!("failed to read image '{}'", path.display()))?
            .decode()
            .with_context(|| format!("failed to decode image '{}'", path.display()))?
            .to_rgba8();
        Self::new(img)
    }

    pub fn new(img: RgbaImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            anyhow::bail!("expected a non-empty image, got {}x{} px", width, height);
        }
        Ok(Self { img })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.img.dimensions()
    }

    /// Lanczos3 resample of the source to exactly `width x height`.
    ///
    /// Colors are multiplied by alpha before filtering and divided after, so
    /// fully transparent pixels contribute nothing to their neighbours.
    pub fn resize(&self, width: u32, height: u32) -> Result<RgbaImage> {
        let (src_width, src_height) = self.img.dimensions();
        log::debug!(
            "resizing {}x{} to {}x{}",
            src_width,
            src_height,
            width,
            height
        );
        let src = Image::from_vec_u8(
            src_width,
            src_height,
            self.img.as_raw().clone(),
            PixelType::U8x4,
        )?;
        let mut dst = Image::new(width, height, PixelType::U8x4);
        let mut options = ResizeOptions::new();
        options.algorithm = ResizeAlg::Convolution(FilterType::Lanczos3);
        Resizer::new()
            .resize(&src, &mut dst, &options)
            .with_context(|| format!("failed to resize to {}x{}", width, height))?;
        RgbaImage::from_raw(width, height, dst.into_vec())
            .with_context(|| format!("resized buffer does not match {}x{}", width, height))
    }
}

/// Writes `img` as a PNG using the strongest deflate setting and adaptive filtering.
pub fn write_png<P: AsRef<Path>>(path: P, img: &DynamicImage) -> Result<()> {
    let path = path.as_ref();
    let file =
        File::create(path).with_context(|| format!("failed to write '{}'", path.display()))?;
    let mut w = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(&mut w, CompressionType::Best, PngFilter::Adaptive);
    img.write_with_encoder(encoder)
        .with_context(|| format!("failed to encode '{}'", path.display()))?;
    w.flush()
        .with_context(|| format!("failed to write '{}'", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}
