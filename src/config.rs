use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{PolaroidError, PolaroidResult};

/// Frame-level design parameters, in design-space pixels.
///
/// Both values are scaled by the display width before use, see
/// [`compute_layout`](crate::compute_layout).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FrameConfig {
    /// Base border and spacing unit.
    pub padding: f64,
    /// Base font size for the title line; the footer derives from it too.
    pub title_size: f64,
}

impl FrameConfig {
    /// Process-wide default configuration.
    pub const DEFAULT: Self = Self {
        padding: 16.0,
        title_size: 24.0,
    };

    /// Check that padding is finite and non-negative and the title size finite and positive.
    pub fn validate(&self) -> PolaroidResult<()> {
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(PolaroidError::validation(
                "frame padding must be finite and >= 0",
            ));
        }
        if !self.title_size.is_finite() || self.title_size <= 0.0 {
            return Err(PolaroidError::validation(
                "frame title_size must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON override. Missing fields keep their defaults.
    pub fn from_json_str(s: &str) -> PolaroidResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| PolaroidError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read a JSON override from disk.
    pub fn from_path(path: &Path) -> PolaroidResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read frame config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
