use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::hsv_params::HsvParams;
use crate::core::data::iteration_result::IterationResult;
use crate::core::util::colour_math::hsv_to_rgb;

/// Lower bound on |z| so that ln(ln|z|) stays finite.
pub const MIN_SMOOTHING_MODULUS: f64 = 1.0000001;

/// Continuous escape count: `n + 1 - log2(ln|z|)`.
#[inline]
#[must_use]
pub fn smooth_iteration_count(result: IterationResult) -> f64 {
    let modulus = result.escaped_modulus_squared.sqrt().max(MIN_SMOOTHING_MODULUS);

    result.iterations as f64 + 1.0 - modulus.ln().ln() / std::f64::consts::LN_2
}

/// Colours one iteration result.
///
/// Points that never escaped are black whatever the parameters. Escaped points
/// walk the colour wheel in proportion to their smoothed escape speed, starting
/// from the base hue.
#[must_use]
pub fn colourize(result: IterationResult, max_iterations: i32, params: HsvParams) -> Colour {
    if !result.escaped(max_iterations) {
        return Colour::BLACK;
    }

    let t = smooth_iteration_count(result) / max_iterations as f64;
    let hue = (params.hue + 360.0 * t) % 360.0;

    hsv_to_rgb(hue, params.saturation, params.value)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothHsvColourMap {
    max_iterations: i32,
    params: HsvParams,
}

impl ColourMap<IterationResult> for SmoothHsvColourMap {
    #[inline]
    fn map(&self, value: IterationResult) -> Colour {
        colourize(value, self.max_iterations, self.params)
    }

    fn display_name(&self) -> &str {
        "Smooth HSV"
    }
}

impl SmoothHsvColourMap {
    #[must_use]
    pub fn new(max_iterations: i32, params: HsvParams) -> Self {
        Self {
            max_iterations,
            params,
        }
    }

    #[must_use]
    pub fn params(&self) -> HsvParams {
        self.params
    }
}
