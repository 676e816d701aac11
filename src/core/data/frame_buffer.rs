use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

/// Byte order of the three channels of each packed pixel.
///
/// `Bgr` is the default because it is what 24-bit device-independent bitmaps
/// expect. Display surfaces that want `[R,G,B]` can ask for `Rgb` instead.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    #[default]
    Bgr,
    Rgb,
}

impl ChannelOrder {
    #[inline]
    pub fn write(self, colour: Colour, dst: &mut [u8]) {
        match self {
            Self::Bgr => {
                dst[0] = colour.b;
                dst[1] = colour.g;
                dst[2] = colour.r;
            }
            Self::Rgb => {
                dst[0] = colour.r;
                dst[1] = colour.g;
                dst[2] = colour.b;
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn read(self, src: &[u8]) -> Colour {
        match self {
            Self::Bgr => Colour { r: src[2], g: src[1], b: src[0] },
            Self::Rgb => Colour { r: src[0], g: src[1], b: src[2] },
        }
    }
}

fn canvas_size_to_buffer_size(size: CanvasSize) -> usize {
    size.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameBufferError {
    PixelOutsideBounds { pixel: Point, size: CanvasSize },
    BoundsMismatch { expected_size: usize, buffer_size: usize },
}

impl fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "frame of {} bytes does not match buffer size {}",
                    expected_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, size } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} frame",
                    pixel.x, pixel.y, size.width, size.height
                )
            }
        }
    }
}

impl Error for FrameBufferError {}

/// A tightly packed, row-major raster: top row first, left to right,
/// three bytes per pixel in `channel_order`, no row padding.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    size: CanvasSize,
    channel_order: ChannelOrder,
    buffer: Vec<u8>,
}

impl FrameBuffer {
    #[must_use]
    pub fn new(size: CanvasSize, channel_order: ChannelOrder) -> Self {
        Self {
            size,
            channel_order,
            buffer: vec![0; canvas_size_to_buffer_size(size)],
        }
    }

    pub fn from_data(
        size: CanvasSize,
        channel_order: ChannelOrder,
        buffer: Vec<u8>,
    ) -> Result<Self, FrameBufferError> {
        let expected_size = canvas_size_to_buffer_size(size);

        if expected_size != buffer.len() {
            return Err(FrameBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            size,
            channel_order,
            buffer,
        })
    }

    #[must_use]
    pub fn size(&self) -> CanvasSize {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.size.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.size.height
    }

    #[must_use]
    pub fn channel_order(&self) -> ChannelOrder {
        self.channel_order
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn offset(&self, pixel: Point) -> Result<usize, FrameBufferError> {
        if !self.size.contains_point(pixel) {
            return Err(FrameBufferError::PixelOutsideBounds {
                pixel,
                size: self.size,
            });
        }

        Ok((pixel.y as usize * self.size.width as usize + pixel.x as usize) * BYTES_PER_PIXEL)
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, FrameBufferError> {
        let index = self.offset(pixel)?;

        Ok(self.channel_order.read(&self.buffer[index..index + BYTES_PER_PIXEL]))
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), FrameBufferError> {
        let index = self.offset(pixel)?;
        let order = self.channel_order;

        order.write(colour, &mut self.buffer[index..index + BYTES_PER_PIXEL]);

        Ok(())
    }

    /// Iterates over rows of packed bytes, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        let row_len = (self.size.width.max(1) as usize) * BYTES_PER_PIXEL;

        self.buffer.chunks_exact(row_len)
    }
}
