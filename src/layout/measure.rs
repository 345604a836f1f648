use crate::foundation::error::PolaroidResult;

/// Font family used for every caption run.
pub const FONT_FAMILY: &str = "Roboto";

/// Font weight of a caption run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// CSS weight 400.
    Regular,
    /// CSS weight 700.
    Bold,
}

impl FontWeight {
    /// Numeric CSS weight.
    pub fn css_value(self) -> f32 {
        match self {
            Self::Regular => 400.0,
            Self::Bold => 700.0,
        }
    }
}

/// Font used to measure or draw one caption run.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FontSpec {
    /// Family name, always [`FONT_FAMILY`] for frames built by this crate.
    pub family: &'static str,
    /// Weight.
    pub weight: FontWeight,
    /// Font size in pixels.
    pub size_px: f64,
}

impl FontSpec {
    /// Regular-weight caption font at `size_px`.
    pub fn regular(size_px: f64) -> Self {
        Self {
            family: FONT_FAMILY,
            weight: FontWeight::Regular,
            size_px,
        }
    }

    /// Bold caption font at `size_px`.
    pub fn bold(size_px: f64) -> Self {
        Self {
            family: FONT_FAMILY,
            weight: FontWeight::Bold,
            size_px,
        }
    }
}

/// Result of measuring a single line of text.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct TextExtent {
    /// Advance width in pixels, including trailing whitespace.
    pub width: f64,
}

/// Capability that measures text with the host's font metrics.
///
/// The layout engine only consumes widths; it never loads fonts itself. Errors are propagated
/// unchanged to the caller.
pub trait TextMeasurer {
    /// Measure `text` set in `font` on a single unwrapped line.
    fn measure(&mut self, text: &str, font: &FontSpec) -> PolaroidResult<TextExtent>;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &mut M {
    fn measure(&mut self, text: &str, font: &FontSpec) -> PolaroidResult<TextExtent> {
        (**self).measure(text, font)
    }
}
