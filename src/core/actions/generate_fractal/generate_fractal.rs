use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::fractal_grid::FractalGrid;
use crate::core::data::point::Point;

/// Single-threaded reference generator: rows top to bottom, pixels left to right.
pub fn generate_fractal<Alg: FractalAlgorithm>(size: CanvasSize, algorithm: &Alg) -> FractalGrid<Alg::Output> {
    let values = (0..size.height.max(0))
        .flat_map(|y| (0..size.width.max(0)).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect();

    FractalGrid::from_values(size, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubAlgorithm {}

    impl FractalAlgorithm for StubAlgorithm {
        type Output = (i32, i32);

        fn compute(&self, pixel: Point) -> Self::Output {
            (pixel.x, pixel.y)
        }
    }

    #[test]
    fn test_visits_pixels_in_row_major_order() {
        let grid = generate_fractal(CanvasSize::new(3, 2), &StubAlgorithm {});

        assert_eq!(
            grid.values(),
            &[(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
        assert_eq!(grid.rows().count(), 2);
    }

    #[test]
    fn test_single_pixel_canvas() {
        let grid = generate_fractal(CanvasSize::new(1, 1), &StubAlgorithm {});

        assert_eq!(grid.values(), &[(0, 0)]);
    }
}
