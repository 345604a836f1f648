use crate::{
    caption::CaptionSet,
    config::FrameConfig,
    foundation::{
        core::{DrawRect, ImageSize},
        error::{PolaroidError, PolaroidResult},
    },
    layout::{
        frame::{FooterLine, FrameLayout, TitleLine},
        measure::{FontSpec, TextExtent, TextMeasurer},
    },
};

/// Narrowest display width a frame is laid out at; smaller photos are upscaled to it.
pub const MIN_FRAME_WIDTH: f64 = 800.0;

/// Padding per design unit per display pixel.
pub const PADDING_FACTOR: f64 = 0.0016;
/// Title font size per design unit per display pixel.
pub const TITLE_SIZE_FACTOR: f64 = 0.0014;
/// Footer font size per design unit per display pixel.
pub const FOOTER_SIZE_FACTOR: f64 = 0.0012;

/// Compute the frame geometry for one render pass.
///
/// Pure and deterministic: identical inputs (and a deterministic measurer) give identical
/// layouts. Fails with [`PolaroidError::InvalidDimension`] for a zero-sized image, and
/// propagates measurer errors unchanged.
#[tracing::instrument(skip(captions, measurer), fields(width = size.width, height = size.height))]
pub fn compute_layout<M: TextMeasurer + ?Sized>(
    size: ImageSize,
    captions: &CaptionSet,
    config: &FrameConfig,
    measurer: &mut M,
) -> PolaroidResult<FrameLayout> {
    size.validate()?;
    config.validate()?;

    let image_w = f64::from(size.width);
    let image_h = f64::from(size.height);

    let display_width = MIN_FRAME_WIDTH.max(image_w);
    let scale = display_width / image_w;
    let scaled_height = image_h * scale;

    let padding = config.padding * display_width * PADDING_FACTOR;
    let title_size = config.title_size * display_width * TITLE_SIZE_FACTOR;
    let footer_size = config.title_size * display_width * FOOTER_SIZE_FACTOR;

    let prefix_text = captions.prefix_measure_text();
    let footer_text = captions.footer_text();
    let prefix = measure_run(measurer, &prefix_text, &FontSpec::regular(title_size))?;
    let title = measure_run(measurer, &captions.device_name, &FontSpec::bold(title_size))?;
    let footer = measure_run(measurer, &footer_text, &FontSpec::regular(footer_size))?;

    // Order of terms is part of the pixel contract; do not reassociate.
    let additional_height = 2.0 * padding // top and bottom border
        + 2.0 * padding // before and after the caption block
        + padding // between title and footer
        + title_size
        + footer_size;

    let frame_width = 2.0 * padding + display_width;
    let frame_height = scaled_height + additional_height;

    let prefix_x = centered_x(display_width, prefix.width + title.width);
    let title_baseline = scaled_height + 2.0 * padding + title_size;
    let footer_x = centered_x(display_width, footer.width);
    let footer_baseline = scaled_height + 2.0 * padding + padding + title_size + padding;

    let image_draw_rect = DrawRect {
        x: padding,
        y: padding,
        width: display_width,
        height: scaled_height,
    };

    let layout = FrameLayout {
        display_width,
        scale,
        frame_width,
        frame_height,
        canvas_width: canvas_px(frame_width, image_draw_rect.right()),
        canvas_height: canvas_px(frame_height, image_draw_rect.bottom()),
        normalized_padding: padding,
        normalized_title_size: title_size,
        normalized_footer_size: footer_size,
        image_draw_rect,
        title_line: TitleLine {
            prefix_x,
            title_x: prefix_x + prefix.width,
            baseline_y: title_baseline,
            prefix_text: captions.prefix.clone(),
            title_text: captions.device_name.clone(),
            prefix_width: prefix.width,
            title_width: title.width,
        },
        footer_line: FooterLine {
            x: footer_x,
            baseline_y: footer_baseline,
            text: footer_text,
            width: footer.width,
        },
    };

    tracing::debug!(
        display_width,
        scale,
        canvas_width = layout.canvas_width,
        canvas_height = layout.canvas_height,
        padding,
        "frame layout computed"
    );
    Ok(layout)
}

fn measure_run<M: TextMeasurer + ?Sized>(
    measurer: &mut M,
    text: &str,
    font: &FontSpec,
) -> PolaroidResult<TextExtent> {
    if text.is_empty() {
        return Ok(TextExtent::default());
    }

    let extent = measurer.measure(text, font)?;
    if !extent.width.is_finite() || extent.width < 0.0 {
        return Err(PolaroidError::measurement(format!(
            "measurer returned width {} for {text:?}",
            extent.width
        )));
    }
    Ok(extent)
}

/// Left edge that centers `width` within `[0, container)`; lines wider than the container
/// start at 0.
fn centered_x(container: f64, width: f64) -> f64 {
    ((container - width) / 2.0).max(0.0)
}

/// Raster canvases truncate fractional sizes toward zero, but never below the photo's far
/// edge; a sub-pixel padding would otherwise clip the last photo column or row.
fn canvas_px(frame_extent: f64, photo_edge: f64) -> u32 {
    (frame_extent.trunc() as u32).max(photo_edge.ceil() as u32)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
