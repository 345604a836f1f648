use crate::foundation::error::{PolaroidError, PolaroidResult};

pub use kurbo::Affine;

/// Pixel dimensions of a decoded source image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImageSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageSize {
    /// Create a validated size; both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> PolaroidResult<Self> {
        let size = Self { width, height };
        size.validate()?;
        Ok(size)
    }

    /// Fail with [`PolaroidError::InvalidDimension`] when either dimension is zero.
    pub fn validate(self) -> PolaroidResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PolaroidError::invalid_dimension(self.width, self.height));
        }
        Ok(())
    }
}

/// Axis-aligned rectangle stored as origin plus extent.
///
/// Kept separate from `kurbo::Rect` so that `width`/`height` are exactly the values the layout
/// computed, not `x1 - x0` after a round trip through edges.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DrawRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl DrawRect {
    /// Right edge.
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Frame background.
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    /// Device name.
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    /// Caption prefix and footer (`#666`).
    pub const MUTED_GRAY: Self = Self::opaque(0x66, 0x66, 0x66);

    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Premultiply the color channels by alpha.
    pub fn to_premul(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
