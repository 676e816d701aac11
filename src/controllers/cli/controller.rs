use crate::controllers::ports::frame_presenter::FramePresenterPort;
use crate::core::actions::render_frame::render;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::render_request::RenderRequest;
use crate::core::fractals::mandelbrot::errors::RenderError;

pub struct CliController<P: FramePresenterPort> {
    presenter: P,
    frame: Option<FrameBuffer>,
}

impl<P: FramePresenterPort> CliController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            frame: None,
        }
    }

    pub fn generate(&mut self, request: &RenderRequest) -> Result<(), RenderError> {
        self.frame = Some(render(request)?);

        Ok(())
    }

    pub fn present(&mut self) -> std::io::Result<()> {
        if let Some(frame) = &self.frame {
            self.presenter.present(frame)?
        }

        Ok(())
    }

    #[must_use]
    pub fn frame(&self) -> Option<&FrameBuffer> {
        self.frame.as_ref()
    }
}
