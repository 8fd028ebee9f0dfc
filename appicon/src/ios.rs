use crate::{write_png, Scaler};
use anyhow::{Context, Result};
use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "AppIcons";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Category {
    Iphone,
    Ipad,
    Appstore,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Iphone, Self::Ipad, Self::Appstore];

    /// App Store submissions must not carry an alpha channel.
    pub fn is_opaque(self) -> bool {
        self == Self::Appstore
    }

    pub fn icons(self) -> impl Iterator<Item = Icon> {
        icons().filter(move |icon| icon.category == self)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Iphone => write!(f, "iphone"),
            Self::Ipad => write!(f, "ipad"),
            Self::Appstore => write!(f, "appstore"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Icon {
    pub category: Category,
    pub name: &'static str,
    pub size: u32,
}

const fn icon(category: Category, name: &'static str, size: u32) -> Icon {
    Icon {
        category,
        name,
        size,
    }
}

/// Every file of an iOS icon set, named the way Xcode asset catalogs expect.
pub const IOS_ICON_SIZES: [Icon; 21] = [
    icon(Category::Iphone, "Icon-20@1x.png", 20),
    icon(Category::Iphone, "Icon-20@2x.png", 40),
    icon(Category::Iphone, "Icon-20@3x.png", 60),
    icon(Category::Iphone, "Icon-29@1x.png", 29),
    icon(Category::Iphone, "Icon-29@2x.png", 58),
    icon(Category::Iphone, "Icon-29@3x.png", 87),
    icon(Category::Iphone, "Icon-40@1x.png", 40),
    icon(Category::Iphone, "Icon-40@2x.png", 80),
    icon(Category::Iphone, "Icon-40@3x.png", 120),
    icon(Category::Iphone, "Icon-60@2x.png", 120),
    icon(Category::Iphone, "Icon-60@3x.png", 180),
    icon(Category::Ipad, "Icon-20@1x.png", 20),
    icon(Category::Ipad, "Icon-20@2x.png", 40),
    icon(Category::Ipad, "Icon-29@1x.png", 29),
    icon(Category::Ipad, "Icon-29@2x.png", 58),
    icon(Category::Ipad, "Icon-40@1x.png", 40),
    icon(Category::Ipad, "Icon-40@2x.png", 80),
    icon(Category::Ipad, "Icon-76@1x.png", 76),
    icon(Category::Ipad, "Icon-76@2x.png", 152),
    icon(Category::Ipad, "Icon-83.5@2x.png", 167),
    icon(Category::Appstore, "AppIcon-1024.png", 1024),
];

pub fn icons() -> impl Iterator<Item = Icon> {
    IOS_ICON_SIZES.into_iter()
}

/// Composites `img` over an opaque background, dropping the alpha channel.
pub fn flatten(img: &RgbaImage, background: Rgb<u8>) -> RgbImage {
    RgbImage::from_fn(img.width(), img.height(), |x, y| {
        let Rgba([r, g, b, a]) = *img.get_pixel(x, y);
        let a = a as u32;
        let blend =
            |fg: u8, bg: u8| ((fg as u32 * a + bg as u32 * (255 - a) + 127) / 255) as u8;
        Rgb([
            blend(r, background[0]),
            blend(g, background[1]),
            blend(b, background[2]),
        ])
    })
}

/// Writes icons into `<root>/<category>/<name>`.
pub struct IconSet {
    root: PathBuf,
}

impl IconSet {
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)
            .with_context(|| format!("failed to create directory '{}'", root.display()))?;
        Ok(Self { root })
    }

    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.root.join(category.to_string())
    }

    pub fn path(&self, icon: &Icon) -> PathBuf {
        self.category_dir(icon.category).join(icon.name)
    }

    pub fn write(&self, scaler: &Scaler, icon: &Icon) -> Result<PathBuf> {
        let dir = self.category_dir(icon.category);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create directory '{}'", dir.display()))?;
        let resized = scaler.resize(icon.size, icon.size)?;
        let img = if icon.category.is_opaque() {
            DynamicImage::ImageRgb8(flatten(&resized, Rgb([255, 255, 255])))
        } else {
            DynamicImage::ImageRgba8(resized)
        };
        let path = self.path(icon);
        write_png(&path, &img)?;
        Ok(path)
    }
}

/// Steps of `generate_icons`, in the order they happen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Progress<'a> {
    Loaded { width: u32, height: u32 },
    Category(Category),
    Started(&'a Icon),
    Written(&'a Icon, &'a Path),
}

/// Writes the full iOS icon set for `source` below `out_dir`, reporting each
/// step to `progress`.
///
/// Nothing is created when `source` does not exist or fails to decode. A
/// failure halfway through leaves the icons written so far in place.
pub fn generate_icons<P, Q, F>(
    source: P,
    out_dir: Q,
    mut progress: F,
) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    F: FnMut(Progress<'_>),
{
    let source = source.as_ref();
    if !source.exists() {
        anyhow::bail!("Source image '{}' not found!", source.display());
    }
    let scaler = Scaler::open(source)?;
    let (width, height) = scaler.dimensions();
    progress(Progress::Loaded { width, height });
    let set = IconSet::new(out_dir)?;
    let mut written = Vec::with_capacity(IOS_ICON_SIZES.len());
    for category in Category::ALL {
        progress(Progress::Category(category));
        for icon in category.icons() {
            progress(Progress::Started(&icon));
            let path = set.write(&scaler, &icon)?;
            progress(Progress::Written(&icon, &path));
            written.push(path);
        }
    }
    Ok(written)
}
