//! Pure frame geometry: from image size and caption strings to a [`FrameLayout`].

/// Layout algorithm and its design constants.
pub mod engine;
/// Layout output value types.
pub mod frame;
/// Text measurement capability.
pub mod measure;

pub use engine::{
    FOOTER_SIZE_FACTOR, MIN_FRAME_WIDTH, PADDING_FACTOR, TITLE_SIZE_FACTOR, compute_layout,
};
pub use frame::{FooterLine, FrameLayout, TitleLine};
pub use measure::{FONT_FAMILY, FontSpec, FontWeight, TextExtent, TextMeasurer};
