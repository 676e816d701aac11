use crate::core::data::point::Point;

/// Per-pixel computation driven by the fractal generators.
///
/// Implementations must be pure functions of the pixel so that rows can be
/// computed on any thread in any order.
pub trait FractalAlgorithm {
    type Output;

    fn compute(&self, pixel: Point) -> Self::Output;
}
