/// Density of the reference device profile (xxhdpi-ish phone, 420 dpi / 160).
pub const DEFAULT_DENSITY: f32 = 2.625;

/// Settings for one document conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentOptions {
    /// Multiplier from density-independent units to the runtime's pixels.
    ///
    /// Defaults to `2.625`.
    pub density: f32,
    /// Document width in dp. Defaults to `400`.
    pub width_dp: u32,
    /// Document height in dp. Defaults to `800`.
    pub height_dp: u32,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            width_dp: 400,
            height_dp: 800,
        }
    }
}

impl DocumentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn with_size(mut self, width_dp: u32, height_dp: u32) -> Self {
        self.width_dp = width_dp;
        self.height_dp = height_dp;
        self
    }

    pub fn dp(&self, value: i32) -> f32 {
        value as f32 * self.density
    }

    /// Font sizes scale with the same multiplier; there is no separate font scale.
    pub fn sp(&self, value: i32) -> f32 {
        value as f32 * self.density
    }

    pub fn width_px(&self) -> u32 {
        (self.width_dp as f32 * self.density) as u32
    }

    pub fn height_px(&self) -> u32 {
        (self.height_dp as f32 * self.density) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_with_default_density() {
        let options = DocumentOptions::default();
        assert_eq!(options.dp(16), 42.0);
        assert_eq!(options.width_px(), 1050);
        assert_eq!(options.height_px(), 2100);
    }

    #[test]
    fn density_is_configurable() {
        let options = DocumentOptions::new().with_density(2.0).with_size(360, 640);
        assert_eq!(options.dp(24), 48.0);
        assert_eq!(options.sp(16), 32.0);
        assert_eq!((options.width_px(), options.height_px()), (720, 1280));
    }
}
