use crate::core::data::frame_buffer::FrameBuffer;

/// A display surface a finished frame can be handed to.
pub trait FramePresenterPort {
    fn present(&mut self, frame: &FrameBuffer) -> std::io::Result<()>;
}
