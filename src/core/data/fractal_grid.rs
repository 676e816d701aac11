use crate::core::data::canvas_size::CanvasSize;

/// Row-major per-pixel results for a whole canvas. Its length always equals
/// `size.pixel_count()`, which is why it can only be built by the generators.
#[derive(Debug, Clone, PartialEq)]
pub struct FractalGrid<T> {
    size: CanvasSize,
    values: Vec<T>,
}

impl<T> FractalGrid<T> {
    pub(crate) fn from_values(size: CanvasSize, values: Vec<T>) -> Self {
        debug_assert_eq!(values.len(), size.pixel_count());

        Self { size, values }
    }

    #[must_use]
    pub fn size(&self) -> CanvasSize {
        self.size
    }

    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Iterates over rows of results, top row first.
    pub fn rows(&self) -> std::slice::Chunks<'_, T> {
        self.values.chunks(self.size.width.max(1) as usize)
    }
}
