/// Fixed literal that precedes the device name on the title line.
pub const DEFAULT_PREFIX: &str = "Shot on";

/// Display strings and values for the frame captions.
///
/// Values are rendered as-is; nothing here is validated beyond the fallbacks for non-finite
/// numbers, so a caption set never fails to compose.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaptionSet {
    /// Title prefix, normally [`DEFAULT_PREFIX`].
    pub prefix: String,
    /// Camera or phone model; may be empty.
    pub device_name: String,
    /// Focal length in millimetres.
    pub focal_length: f64,
    /// Aperture f-number.
    pub aperture: f64,
    /// Exposure time as displayed, e.g. `1/400`.
    pub shutter_speed: String,
    /// ISO sensitivity.
    pub iso: u32,
}

impl Default for CaptionSet {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            device_name: String::new(),
            focal_length: 0.0,
            aperture: 0.0,
            shutter_speed: String::new(),
            iso: 0,
        }
    }
}

impl CaptionSet {
    /// Text measured for the prefix run.
    ///
    /// Includes the separating space when a device name follows, so the device name starts
    /// right after it. With no device name the prefix alone is centered.
    pub fn prefix_measure_text(&self) -> String {
        if self.device_name.is_empty() {
            self.prefix.clone()
        } else {
            format!("{} ", self.prefix)
        }
    }

    /// Composed footer, e.g. `24mm f/1.8 1/400s ISO200`.
    pub fn footer_text(&self) -> String {
        format!(
            "{}mm f/{} {}s ISO{}",
            display_number(self.focal_length),
            display_number(self.aperture),
            self.shutter_speed,
            self.iso
        )
    }

    /// Parse captions from JSON; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> crate::PolaroidResult<Self> {
        serde_json::from_str(s).map_err(|e| crate::PolaroidError::serde(e.to_string()))
    }
}

/// Shortest round-trip decimal form; non-finite values and negative zero render as `0`.
pub fn display_number(v: f64) -> String {
    if !v.is_finite() || v == 0.0 {
        return "0".to_string();
    }
    v.to_string()
}
