use std::io::Write;

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};

use crate::adapters::pixel_format::frame_to_rgb;
use crate::controllers::ports::frame_presenter::FramePresenterPort;
use crate::core::data::frame_buffer::{BYTES_PER_PIXEL, FrameBuffer};

const UPPER_HALF_BLOCK: char = '\u{2580}';

/// Draws frames on a truecolor terminal, two pixel rows per text line: the
/// glyph's foreground is the upper pixel and its background the lower one.
pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl<W: Write> FramePresenterPort for TerminalPresenter<W> {
    fn present(&mut self, frame: &FrameBuffer) -> std::io::Result<()> {
        let rgb = frame_to_rgb(frame);
        let row_len = frame.width().max(0) as usize * BYTES_PER_PIXEL;

        if row_len == 0 {
            return Ok(());
        }

        let rows: Vec<&[u8]> = rgb.chunks_exact(row_len).collect();

        for pair in rows.chunks(2) {
            let upper = pair[0];

            for (x, top) in upper.chunks_exact(BYTES_PER_PIXEL).enumerate() {
                queue!(self.out, SetForegroundColor(rgb_colour(top)))?;

                match pair.get(1) {
                    Some(lower) => {
                        let bottom = &lower[x * BYTES_PER_PIXEL..(x + 1) * BYTES_PER_PIXEL];
                        queue!(self.out, SetBackgroundColor(rgb_colour(bottom)))?;
                    }
                    None => queue!(self.out, SetBackgroundColor(Color::Reset))?,
                }

                queue!(self.out, Print(UPPER_HALF_BLOCK))?;
            }

            queue!(self.out, ResetColor, Print('\n'))?;
        }

        self.out.flush()
    }
}

fn rgb_colour(pixel: &[u8]) -> Color {
    Color::Rgb {
        r: pixel[0],
        g: pixel[1],
        b: pixel[2],
    }
}

impl TerminalPresenter<std::io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
