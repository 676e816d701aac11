use crate::core::data::point::Point;

pub const DEFAULT_CANVAS_WIDTH: i32 = 640;
pub const DEFAULT_CANVAS_HEIGHT: i32 = 640;

/// Output raster dimensions in pixels.
///
/// Signed so that a caller-supplied non-positive size can be represented and
/// rejected by validation instead of wrapping.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: i32,
    pub height: i32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl CanvasSize {
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Number of pixels; zero for invalid sizes.
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        if !self.is_valid() {
            return 0;
        }

        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0 && point.y >= 0 && point.x < self.width && point.y < self.height
    }

    #[must_use]
    pub fn centre(&self) -> Point {
        Point {
            x: self.width / 2,
            y: self.height / 2,
        }
    }
}
