use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Runs z ← z² + c from z = 0 until |z|² exceeds 4 or the cap is reached.
///
/// The bound is checked before each update and the counter is bumped after
/// it, so the escaping update is never counted and the returned |z|² belongs
/// to the reported iteration.
#[must_use]
pub fn iterate(c: Complex, max_iterations: i32) -> IterationResult {
    let mut z = Complex::ZERO;
    let mut iterations = 0;

    while iterations < max_iterations {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            break;
        }
        z = z * z + c;
        iterations += 1;
    }

    IterationResult {
        iterations,
        escaped_modulus_squared: z.magnitude_squared(),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    size: CanvasSize,
    max_iterations: i32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Output = IterationResult;

    fn compute(&self, pixel: Point) -> Self::Output {
        let c = pixel_to_complex_coords(pixel, &self.viewport, self.size);

        iterate(c, self.max_iterations)
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, size: CanvasSize, max_iterations: i32) -> Self {
        Self {
            viewport,
            size,
            max_iterations,
        }
    }
}
