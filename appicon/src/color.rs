use anyhow::{Context, Result};
use image::Rgba;

/// An 8-bit RGBA color.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl std::str::FromStr for Color {
    type Err = anyhow::Error;

    /// Accepts any CSS color: hex forms, the full named color table,
    /// `rgb()`, `rgba()`, `hsl()`, `hsla()` and `hwb()`.
    fn from_str(color: &str) -> Result<Self> {
        let [r, g, b, a] = csscolorparser::parse(color.trim())
            .with_context(|| format!("invalid color '{}'", color))?
            .to_rgba8();
        Ok(Self::rgba(r, g, b, a))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Rgba([color.r, color.g, color.b, color.a])
    }
}
