use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Maps a pixel to the point of the complex plane it shows.
///
/// The canvas centre (`width / 2.0`, `height / 2.0`) lands on the viewport
/// centre and each pixel step moves `scale` along the plane. Pixel rows grow
/// downwards while the imaginary axis grows upwards, hence the subtraction.
/// Total over all integer coordinates, including ones off the canvas.
#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, viewport: &Viewport, size: CanvasSize) -> Complex {
    Complex {
        real: column_to_real(pixel.x, viewport, size),
        imag: row_to_imag(pixel.y, viewport, size),
    }
}

#[inline]
pub(crate) fn column_to_real(px: i32, viewport: &Viewport, size: CanvasSize) -> f64 {
    viewport.center_x + (px as f64 - size.width as f64 / 2.0) * viewport.scale
}

#[inline]
pub(crate) fn row_to_imag(py: i32, viewport: &Viewport, size: CanvasSize) -> f64 {
    viewport.center_y - (py as f64 - size.height as f64 / 2.0) * viewport.scale
}
