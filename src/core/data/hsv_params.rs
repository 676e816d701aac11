/// User-chosen colour parameters threaded through every render.
///
/// `hue` is a base offset in degrees, `saturation` and `value` are fractions in
/// `[0, 1]`. Values outside those ranges are not clamped here; the colour map
/// wraps the hue and leaves the rest to the caller.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HsvParams {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Default for HsvParams {
    fn default() -> Self {
        Self {
            hue: 0.0,
            saturation: 0.85,
            value: 1.0,
        }
    }
}

impl HsvParams {
    #[must_use]
    pub fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self { hue, saturation, value }
    }

    /// Builds parameters from slider positions: hue in whole degrees,
    /// saturation and value in percent.
    #[must_use]
    pub fn from_slider_values(hue_degrees: i32, saturation_percent: i32, value_percent: i32) -> Self {
        Self {
            hue: hue_degrees as f64,
            saturation: saturation_percent as f64 / 100.0,
            value: value_percent as f64 / 100.0,
        }
    }
}
