use std::sync::Arc;

use anyhow::Context;

use crate::foundation::{
    core::{ImageSize, Rgba8},
    error::{PolaroidError, PolaroidResult},
};

/// Decoded photo in premultiplied RGBA8 form.
///
/// Dimensions are immutable and always non-zero.
#[derive(Clone, Debug)]
pub struct ImageSource {
    width: u32,
    height: u32,
    rgba8_premul: Arc<Vec<u8>>,
}

impl ImageSource {
    /// Build from straight-alpha RGBA8 pixels, premultiplying them.
    pub fn from_rgba8(width: u32, height: u32, mut rgba8: Vec<u8>) -> PolaroidResult<Self> {
        ImageSize { width, height }.validate()?;
        if rgba8.len() != width as usize * height as usize * 4 {
            return Err(PolaroidError::validation("image byte length mismatch"));
        }
        premultiply_rgba8_in_place(&mut rgba8);
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba8),
        })
    }

    /// Decode any format supported by the `image` crate.
    pub fn decode(bytes: &[u8]) -> PolaroidResult<Self> {
        let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
        let rgba = dyn_img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba8(width, height, rgba.into_raw())
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel dimensions.
    pub fn size(&self) -> ImageSize {
        ImageSize {
            width: self.width,
            height: self.height,
        }
    }

    /// Row-major premultiplied RGBA8 bytes.
    pub fn rgba8_premul(&self) -> &[u8] {
        self.rgba8_premul.as_slice()
    }
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let straight = Rgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        };
        px.copy_from_slice(&straight.to_premul());
    }
}
