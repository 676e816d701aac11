use std::time::Instant;

use log::{debug, info};

use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon_cancelable;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer_cancelable;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::render_request::RenderRequest;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::SmoothHsvColourMap;
use crate::core::fractals::mandelbrot::errors::RenderError;

/// Renders one complete frame for `request`.
///
/// The request is validated before any pixel is computed. The returned
/// buffer is tightly packed, row-major, `3 * width * height` bytes in the
/// request's channel order (BGR unless asked otherwise).
pub fn render(request: &RenderRequest) -> Result<FrameBuffer, RenderError> {
    render_cancelable(request, &NeverCancel)
}

/// Like [`render`], but gives up with [`RenderError::Cancelled`] once `cancel`
/// fires. Cancellation is only observed between pixels, and a cancelled render
/// never hands back a buffer.
pub fn render_cancelable<C: CancelToken>(request: &RenderRequest, cancel: &C) -> Result<FrameBuffer, RenderError> {
    request.validate()?;

    let size = request.size;
    debug!(
        "rendering {}x{} at ({}, {}) scale {} with {} iterations",
        size.width,
        size.height,
        request.viewport.center_x,
        request.viewport.center_y,
        request.viewport.scale,
        request.max_iterations
    );

    let start = Instant::now();
    let algorithm = MandelbrotAlgorithm::new(request.viewport, size, request.max_iterations);
    let colour_map = SmoothHsvColourMap::new(request.max_iterations, request.colour);

    let frame = generate_fractal_parallel_rayon_cancelable(size, &algorithm, cancel)
        .and_then(|grid| generate_pixel_buffer_cancelable(&grid, &colour_map, request.channel_order, cancel))
        .map_err(|cancelled| {
            info!("render cancelled after {:?}", start.elapsed());
            RenderError::from(cancelled)
        })?;

    debug!("rendered {} bytes in {:?}", frame.len(), start.elapsed());

    Ok(frame)
}
