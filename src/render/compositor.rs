use std::sync::Arc;

use crate::{
    assets::decode::ImageSource,
    foundation::{
        core::{Affine, DrawRect, Rgba8},
        error::{PolaroidError, PolaroidResult},
    },
    layout::{frame::FrameLayout, measure::FontSpec},
    render::surface::RasterSurface,
};

/// Glyphs of one shaped run, ready to fill.
///
/// Glyph `x` is measured from the start of the line, `y` from the baseline.
#[derive(Clone)]
pub struct ShapedRun {
    /// Face the glyph ids belong to.
    pub font: vello_cpu::peniko::FontData,
    /// Font size in pixels.
    pub font_size: f32,
    /// Fill color.
    pub color: Rgba8,
    /// Positioned glyphs.
    pub glyphs: Vec<vello_cpu::Glyph>,
}

/// Capability that turns caption text into drawable glyph runs.
pub trait TextShaper {
    /// Shape `text` on a single line in `font`, filled with `color`.
    fn shape(
        &mut self,
        text: &str,
        font: &FontSpec,
        color: Rgba8,
    ) -> PolaroidResult<Vec<ShapedRun>>;
}

impl<S: TextShaper + ?Sized> TextShaper for &mut S {
    fn shape(
        &mut self,
        text: &str,
        font: &FontSpec,
        color: Rgba8,
    ) -> PolaroidResult<Vec<ShapedRun>> {
        (**self).shape(text, font, color)
    }
}

/// Paint `image` and the captions of `layout` into `surface`.
///
/// The surface is resized to the layout's canvas (discarding prior content), filled white,
/// then the photo, title line and footer line are painted in that order.
///
/// Every fallible step (layout check, shaping, photo upload) runs before the surface is
/// resized, so on error the surface keeps its previous size and content.
#[tracing::instrument(
    skip_all,
    fields(canvas_width = layout.canvas_width, canvas_height = layout.canvas_height)
)]
pub fn render<S: TextShaper + ?Sized>(
    surface: &mut RasterSurface,
    image: &ImageSource,
    layout: &FrameLayout,
    shaper: &mut S,
) -> PolaroidResult<()> {
    check_layout_matches(image, layout)?;

    // Shape up front so a shaping failure leaves the surface untouched.
    let title = &layout.title_line;
    let footer = &layout.footer_line;
    let prefix_runs = shape_nonempty(
        shaper,
        &title.prefix_text,
        &FontSpec::regular(layout.normalized_title_size),
        Rgba8::MUTED_GRAY,
    )?;
    let title_runs = shape_nonempty(
        shaper,
        &title.title_text,
        &FontSpec::bold(layout.normalized_title_size),
        Rgba8::BLACK,
    )?;
    let footer_runs = shape_nonempty(
        shaper,
        &footer.text,
        &FontSpec::regular(layout.normalized_footer_size),
        Rgba8::MUTED_GRAY,
    )?;
    let photo = image_paint(image)?;

    surface.resize(layout.canvas_width, layout.canvas_height)?;
    let (w, h) = surface.dims_u16();
    let mut ctx = vello_cpu::RenderContext::new(w, h);

    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(color_to_cpu(Rgba8::WHITE));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(w),
        f64::from(h),
    ));

    ctx.set_transform(affine_to_cpu(photo_transform(layout)));
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(photo);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(image.width()),
        f64::from(image.height()),
    ));

    fill_runs(&mut ctx, &prefix_runs, title.prefix_x, title.baseline_y);
    fill_runs(&mut ctx, &title_runs, title.title_x, title.baseline_y);
    fill_runs(&mut ctx, &footer_runs, footer.x, footer.baseline_y);

    ctx.flush();
    ctx.render_to_pixmap(surface.pixmap_mut());

    tracing::debug!(width = w, height = h, "frame composited");
    Ok(())
}

/// Image-space to canvas transform: uniform `layout.scale`, then offset to the draw rect.
pub fn photo_transform(layout: &FrameLayout) -> Affine {
    let DrawRect { x, y, .. } = layout.image_draw_rect;
    Affine::translate((x, y)) * Affine::scale(layout.scale)
}

fn check_layout_matches(image: &ImageSource, layout: &FrameLayout) -> PolaroidResult<()> {
    let rect = layout.image_draw_rect;
    let expect_w = f64::from(image.width()) * layout.scale;
    let expect_h = f64::from(image.height()) * layout.scale;
    if (expect_w - rect.width).abs() > 1e-6 || (expect_h - rect.height).abs() > 1e-6 {
        return Err(PolaroidError::validation(format!(
            "layout was computed for a different image ({}x{} at scale {})",
            image.width(),
            image.height(),
            layout.scale
        )));
    }
    Ok(())
}

fn shape_nonempty<S: TextShaper + ?Sized>(
    shaper: &mut S,
    text: &str,
    font: &FontSpec,
    color: Rgba8,
) -> PolaroidResult<Vec<ShapedRun>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    shaper.shape(text, font, color)
}

fn fill_runs(ctx: &mut vello_cpu::RenderContext, runs: &[ShapedRun], x: f64, baseline_y: f64) {
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((x, baseline_y)));
    for run in runs {
        ctx.set_paint(color_to_cpu(run.color));
        ctx.glyph_run(&run.font)
            .font_size(run.font_size)
            .fill_glyphs(run.glyphs.iter().cloned());
    }
}

fn image_paint(image: &ImageSource) -> PolaroidResult<vello_cpu::Image> {
    let w: u16 = image
        .width()
        .try_into()
        .map_err(|_| PolaroidError::validation("image width exceeds u16"))?;
    let h: u16 = image
        .height()
        .try_into()
        .map_err(|_| PolaroidError::validation("image height exceeds u16"))?;

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(w as usize * h as usize);
    for px in image.rgba8_premul().chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, may_have_opacities);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
