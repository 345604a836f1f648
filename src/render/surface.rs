use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{PolaroidError, PolaroidResult};

/// Mutable premultiplied RGBA8 raster target backed by a `vello_cpu` pixmap.
///
/// One render pass owns the surface exclusively; concurrent renders need separate surfaces.
pub struct RasterSurface {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl RasterSurface {
    /// Allocate a transparent surface.
    pub fn new(width: u32, height: u32) -> PolaroidResult<Self> {
        let (width, height) = checked_dims(width, height)?;
        Ok(Self {
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(width, height),
        })
    }

    /// Resize to `width`x`height`. Prior content is always discarded, even at the same size.
    pub fn resize(&mut self, width: u32, height: u32) -> PolaroidResult<()> {
        let (width, height) = checked_dims(width, height)?;
        self.width = width;
        self.height = height;
        self.pixmap = vello_cpu::Pixmap::new(width, height);
        Ok(())
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    pub(crate) fn dims_u16(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub(crate) fn pixmap_mut(&mut self) -> &mut vello_cpu::Pixmap {
        &mut self.pixmap
    }

    /// Row-major premultiplied RGBA8 bytes.
    pub fn data_premul(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    /// Premultiplied RGBA8 at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let i = (y as usize * self.width() as usize + x as usize) * 4;
        let px = &self.data_premul()[i..i + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Straight-alpha RGBA8 copy for encoders.
    pub fn to_rgba8_straight(&self) -> Vec<u8> {
        let mut out = self.data_premul().to_vec();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    /// Encode the surface as PNG at `path`.
    pub fn save_png(&self, path: &Path) -> PolaroidResult<()> {
        image::save_buffer_with_format(
            path,
            &self.to_rgba8_straight(),
            self.width(),
            self.height(),
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

fn checked_dims(width: u32, height: u32) -> PolaroidResult<(u16, u16)> {
    let w: u16 = width
        .try_into()
        .map_err(|_| PolaroidError::validation("surface width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| PolaroidError::validation("surface height exceeds u16"))?;
    Ok((w, h))
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
