use crate::{
    foundation::{
        core::Rgba8,
        error::{PolaroidError, PolaroidResult},
    },
    layout::measure::{FontSpec, FontWeight, TextExtent, TextMeasurer},
    render::compositor::{ShapedRun, TextShaper},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

impl From<TextBrushRgba8> for Rgba8 {
    fn from(b: TextBrushRgba8) -> Self {
        Self {
            r: b.r,
            g: b.g,
            b: b.b,
            a: b.a,
        }
    }
}

struct LoadedFace {
    family: String,
}

/// Parley-backed text measurement and shaping over caller-supplied font bytes.
///
/// The regular face is required before any text can be measured. The bold face is optional;
/// without it bold runs are shaped and drawn with the regular face.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    regular: Option<LoadedFace>,
    bold: Option<LoadedFace>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct an engine with fresh Parley contexts and no fonts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            regular: None,
            bold: None,
        }
    }

    /// Construct an engine from regular and optional bold font bytes.
    pub fn with_fonts(regular: Vec<u8>, bold: Option<Vec<u8>>) -> PolaroidResult<Self> {
        let mut engine = Self::new();
        engine.register_font(regular, FontWeight::Regular)?;
        if let Some(bold) = bold {
            engine.register_font(bold, FontWeight::Bold)?;
        }
        Ok(engine)
    }

    /// Register font bytes as the face used for `weight`, returning its family name.
    pub fn register_font(
        &mut self,
        font_bytes: Vec<u8>,
        weight: FontWeight,
    ) -> PolaroidResult<String> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            PolaroidError::validation("no font families registered from font bytes")
        })?;

        let family = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| PolaroidError::validation("registered font family has no name"))?
            .to_string();

        let face = LoadedFace {
            family: family.clone(),
        };
        tracing::debug!(%family, ?weight, "registered caption font");
        match weight {
            FontWeight::Regular => self.regular = Some(face),
            FontWeight::Bold => self.bold = Some(face),
        }
        Ok(family)
    }

    /// Family name of the registered regular face, if any.
    pub fn family_name(&self) -> Option<&str> {
        self.regular.as_ref().map(|f| f.family.as_str())
    }

    fn face_for(&self, weight: FontWeight) -> PolaroidResult<&LoadedFace> {
        let face = match weight {
            FontWeight::Bold => self.bold.as_ref().or(self.regular.as_ref()),
            FontWeight::Regular => self.regular.as_ref(),
        };
        face.ok_or_else(|| PolaroidError::measurement("no caption font registered"))
    }

    /// Shape and lay out `text` on a single unwrapped line.
    pub fn layout_line(
        &mut self,
        text: &str,
        font: &FontSpec,
        brush: TextBrushRgba8,
    ) -> PolaroidResult<parley::Layout<TextBrushRgba8>> {
        let size_px = font.size_px as f32;
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(PolaroidError::measurement(
                "font size_px must be finite and > 0",
            ));
        }

        let family = self.face_for(font.weight)?.family.clone();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::new(font.weight.css_value()),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

impl TextMeasurer for TextLayoutEngine {
    fn measure(&mut self, text: &str, font: &FontSpec) -> PolaroidResult<TextExtent> {
        let layout = self.layout_line(text, font, TextBrushRgba8::default())?;
        Ok(TextExtent {
            width: f64::from(layout.full_width()),
        })
    }
}

impl TextShaper for TextLayoutEngine {
    fn shape(
        &mut self,
        text: &str,
        font: &FontSpec,
        color: Rgba8,
    ) -> PolaroidResult<Vec<ShapedRun>> {
        let layout = self.layout_line(text, font, color.into())?;

        let mut runs = Vec::new();
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let baseline = run.baseline();
                let glyphs = run
                    .positioned_glyphs()
                    .map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y - baseline,
                    })
                    .collect();
                // Glyph ids index the face Parley resolved for this run.
                runs.push(ShapedRun {
                    font: run.run().font().clone(),
                    font_size: run.run().font_size(),
                    color: run.style().brush.into(),
                    glyphs,
                });
            }
        }
        Ok(runs)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/engine.rs"]
mod tests;
