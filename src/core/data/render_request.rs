use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::frame_buffer::ChannelOrder;
use crate::core::data::hsv_params::HsvParams;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::RenderError;

pub const DEFAULT_MAX_ITERATIONS: i32 = 300;

/// Everything needed to produce one frame. Built fresh for every render and
/// never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub viewport: Viewport,
    pub max_iterations: i32,
    pub size: CanvasSize,
    pub colour: HsvParams,
    pub channel_order: ChannelOrder,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            size: CanvasSize::default(),
            colour: HsvParams::default(),
            channel_order: ChannelOrder::default(),
        }
    }
}

impl RenderRequest {
    #[must_use]
    pub fn new(viewport: Viewport, max_iterations: i32, size: CanvasSize, colour: HsvParams) -> Self {
        Self {
            viewport,
            max_iterations,
            size,
            colour,
            channel_order: ChannelOrder::default(),
        }
    }

    #[must_use]
    pub fn with_channel_order(self, channel_order: ChannelOrder) -> Self {
        Self { channel_order, ..self }
    }

    /// Checks viewport, iteration cap and dimensions, in that order, and
    /// reports the first problem found.
    pub fn validate(&self) -> Result<(), RenderError> {
        if !self.viewport.is_valid() {
            return Err(RenderError::InvalidViewport {
                scale: self.viewport.scale,
            });
        }

        if self.max_iterations <= 0 {
            return Err(RenderError::InvalidIterationCap {
                max_iterations: self.max_iterations,
            });
        }

        if !self.size.is_valid() {
            return Err(RenderError::InvalidDimensions {
                width: self.size.width,
                height: self.size.height,
            });
        }

        Ok(())
    }
}
