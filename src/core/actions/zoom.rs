use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    #[must_use]
    pub const fn scale_factor(self) -> f64 {
        match self {
            Self::In => 0.5,
            Self::Out => 2.0,
        }
    }
}

/// Viewport after clicking `pixel`: centred on the clicked point, with the
/// scale halved when zooming in and doubled when zooming out.
#[must_use]
pub fn zoom(viewport: &Viewport, pixel: Point, size: CanvasSize, direction: ZoomDirection) -> Viewport {
    let center = pixel_to_complex_coords(pixel, viewport, size);

    viewport.recentred(center, direction.scale_factor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    #[test]
    fn test_zoom_in_recentres_and_halves_scale() {
        let viewport = Viewport::new(-0.5, 0.0, 0.005);
        let size = CanvasSize::new(640, 640);

        let zoomed = zoom(&viewport, Point { x: 420, y: 220 }, size, ZoomDirection::In);

        assert_eq!(zoomed.center(), Complex::new(-0.5 + 100.0 * 0.005, 0.0 + 100.0 * 0.005));
        assert_eq!(zoomed.scale, 0.0025);
    }

    #[test]
    fn test_zoom_out_doubles_scale() {
        let viewport = Viewport::new(0.0, 0.0, 0.01);
        let size = CanvasSize::new(100, 100);

        let zoomed = zoom(&viewport, Point { x: 50, y: 50 }, size, ZoomDirection::Out);

        assert_eq!(zoomed, Viewport::new(0.0, 0.0, 0.02));
    }

    #[test]
    fn test_zoom_in_then_out_restores_scale() {
        let viewport = Viewport::new(-0.745, 0.105, 0.0008);
        let size = CanvasSize::new(640, 640);
        let pixel = Point { x: 12, y: 600 };

        let zoomed_in = zoom(&viewport, pixel, size, ZoomDirection::In);
        let zoomed_out = zoom(&zoomed_in, pixel, size, ZoomDirection::Out);

        assert!((zoomed_out.scale - viewport.scale).abs() <= f64::EPSILON * viewport.scale);
    }

    #[test]
    fn test_clicking_centre_keeps_centre() {
        let viewport = Viewport::new(0.285, 0.01, 0.0015);
        let size = CanvasSize::new(640, 480);

        let zoomed = zoom(&viewport, size.centre(), size, ZoomDirection::In);

        assert_eq!(zoomed.center(), viewport.center());
    }
}
