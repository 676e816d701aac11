use rayon::prelude::*;

use crate::core::actions::cancellation::{check_cancelled, CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::fractal_grid::FractalGrid;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Each row is an independent unit of work writing its own slice of one
/// preallocated row-major grid. For cancel-aware generation, use
/// [`generate_fractal_parallel_rayon_cancelable`].
pub fn generate_fractal_parallel_rayon<Alg>(size: CanvasSize, algorithm: &Alg) -> FractalGrid<Alg::Output>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Output: Default + Clone + Send,
{
    match generate_fractal_parallel_rayon_cancelable(size, algorithm, &NeverCancel) {
        Ok(grid) => grid,
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Like [`generate_fractal_parallel_rayon`], but polls `cancel` at the start
/// of each row and every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row.
///
/// A cancelled run returns [`Cancelled`] and discards every finished row.
///
/// [`CANCEL_CHECK_INTERVAL_PIXELS`]: crate::core::actions::cancellation::CANCEL_CHECK_INTERVAL_PIXELS
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C>(
    size: CanvasSize,
    algorithm: &Alg,
    cancel: &C,
) -> Result<FractalGrid<Alg::Output>, Cancelled>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Output: Default + Clone + Send,
    C: CancelToken,
{
    let mut values: Vec<Alg::Output> = vec![Default::default(); size.pixel_count()];

    if values.is_empty() {
        return Ok(FractalGrid::from_values(size, values));
    }

    values
        .par_chunks_mut(size.width as usize)
        .enumerate()
        .try_for_each(|(y, row)| -> Result<(), Cancelled> {
            for (x, slot) in row.iter_mut().enumerate() {
                check_cancelled(cancel, x)?;
                *slot = algorithm.compute(Point {
                    x: x as i32,
                    y: y as i32,
                });
            }

            Ok(())
        })?;

    Ok(FractalGrid::from_values(size, values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Debug)]
    struct StubAlgorithm {}

    impl FractalAlgorithm for StubAlgorithm {
        type Output = u64;

        fn compute(&self, pixel: Point) -> Self::Output {
            (pixel.x * 1000 + pixel.y) as u64
        }
    }

    #[test]
    fn test_rayon_generates_same_results_as_serial() {
        let size = CanvasSize::new(37, 23);

        let serial = generate_fractal(size, &StubAlgorithm {});
        let parallel = generate_fractal_parallel_rayon(size, &StubAlgorithm {});

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_each_row_lands_in_its_own_slice() {
        let size = CanvasSize::new(5, 3);
        let grid = generate_fractal_parallel_rayon(size, &StubAlgorithm {});

        for (y, row) in grid.rows().enumerate() {
            let expected: Vec<u64> = (0..5).map(|x| x * 1000 + y as u64).collect();

            assert_eq!(row, expected.as_slice());
        }
    }

    #[test]
    fn test_empty_canvas_gives_empty_grid() {
        let grid = generate_fractal_parallel_rayon(CanvasSize::new(0, 7), &StubAlgorithm {});

        assert!(grid.values().is_empty());
    }

    #[test]
    fn test_cancelable_completes_when_not_cancelled() {
        let size = CanvasSize::new(8, 8);
        let flag = AtomicBool::new(false);
        let token = || flag.load(Ordering::Relaxed);

        let grid = generate_fractal_parallel_rayon_cancelable(size, &StubAlgorithm {}, &token).unwrap();

        assert_eq!(grid.values().len(), 64);
    }

    #[test]
    fn test_cancelled_before_start_returns_cancelled() {
        let size = CanvasSize::new(8, 8);
        let token = || true;

        let result = generate_fractal_parallel_rayon_cancelable(size, &StubAlgorithm {}, &token);

        assert_eq!(result, Err(Cancelled));
    }

    #[test]
    fn test_cancelling_mid_run_returns_no_grid() {
        let size = CanvasSize::new(4, 64);
        let polls = AtomicUsize::new(0);
        let token = || polls.fetch_add(1, Ordering::Relaxed) >= 10;

        let result = generate_fractal_parallel_rayon_cancelable(size, &StubAlgorithm {}, &token);

        assert_eq!(result, Err(Cancelled));
    }
}
