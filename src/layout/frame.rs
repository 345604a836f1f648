use crate::foundation::core::DrawRect;

/// Title line: prefix immediately followed by the device name, sharing one baseline.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TitleLine {
    /// Left edge of the prefix run.
    pub prefix_x: f64,
    /// Left edge of the device-name run.
    pub title_x: f64,
    /// Shared baseline.
    pub baseline_y: f64,
    /// Drawn prefix text.
    pub prefix_text: String,
    /// Drawn device name.
    pub title_text: String,
    /// Measured width of the prefix run (including its separator, if any).
    pub prefix_width: f64,
    /// Measured width of the device name.
    pub title_width: f64,
}

/// Footer line with the shooting parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FooterLine {
    /// Left edge.
    pub x: f64,
    /// Baseline.
    pub baseline_y: f64,
    /// Drawn text.
    pub text: String,
    /// Measured width.
    pub width: f64,
}

/// Geometry of one framed render pass.
///
/// Produced by [`compute_layout`](crate::compute_layout), consumed by
/// [`render`](crate::render()). It is never patched; any input change means a fresh layout.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameLayout {
    /// Width the photo is drawn at: `max(MIN_FRAME_WIDTH, image width)`.
    pub display_width: f64,
    /// Uniform photo scale factor, `display_width / image width`.
    pub scale: f64,
    /// Exact frame width before truncation.
    pub frame_width: f64,
    /// Exact frame height before truncation.
    pub frame_height: f64,
    /// Raster width: `frame_width` truncated toward zero, widened to the photo's right edge.
    pub canvas_width: u32,
    /// Raster height: `frame_height` truncated toward zero, widened to the photo's bottom edge.
    pub canvas_height: u32,
    /// Border and spacing unit scaled to the display width.
    pub normalized_padding: f64,
    /// Title font size in pixels.
    pub normalized_title_size: f64,
    /// Footer font size in pixels.
    pub normalized_footer_size: f64,
    /// Where the scaled photo is painted.
    pub image_draw_rect: DrawRect,
    /// Title caption.
    pub title_line: TitleLine,
    /// Footer caption.
    pub footer_line: FooterLine,
}
