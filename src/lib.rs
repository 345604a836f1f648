//! Polaroid-style photo frames.
//!
//! The crate is split into a pure layout step and an effectful paint step:
//!
//! - [`compute_layout`] turns an image size, a [`CaptionSet`] and a [`FrameConfig`] into a
//!   [`FrameLayout`], using an injected [`TextMeasurer`] for caption widths.
//! - [`render()`] paints an [`ImageSource`] and the captions of a [`FrameLayout`] into a
//!   [`RasterSurface`], using an injected [`TextShaper`] for glyphs.
//!
//! [`TextLayoutEngine`] implements both capabilities on top of Parley with caller-supplied
//! font bytes.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Decoded source photos.
pub mod assets;
/// Caption strings and their composition.
pub mod caption;
/// Frame design parameters.
pub mod config;
pub mod layout;
/// Raster surface and compositor.
pub mod render;
/// Font-backed text measurement and shaping.
pub mod text;

pub use crate::assets::decode::ImageSource;
pub use crate::caption::{CaptionSet, DEFAULT_PREFIX};
pub use crate::config::FrameConfig;
pub use crate::foundation::core::{DrawRect, ImageSize, Rgba8};
pub use crate::foundation::error::{PolaroidError, PolaroidResult};
pub use crate::layout::{
    FONT_FAMILY, FontSpec, FontWeight, FooterLine, FrameLayout, MIN_FRAME_WIDTH, TextExtent,
    TextMeasurer, TitleLine, compute_layout,
};
pub use crate::render::compositor::{ShapedRun, TextShaper, photo_transform, render};
pub use crate::render::surface::RasterSurface;
pub use crate::text::engine::{TextBrushRgba8, TextLayoutEngine};
