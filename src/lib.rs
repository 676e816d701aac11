//! Escape-time Mandelbrot renderer.
//!
//! The core is a pure function from a [`RenderRequest`] to a packed
//! [`FrameBuffer`], plus the pixel-to-plane mapping and zoom rule that
//! interactive front ends need to turn clicks into new viewports.

mod adapters;
mod controllers;
mod core;
mod presenters;

pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel, CANCEL_CHECK_INTERVAL_PIXELS};
pub use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    generate_fractal_parallel_rayon, generate_fractal_parallel_rayon_cancelable,
};
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    generate_pixel_buffer, generate_pixel_buffer_cancelable,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::render_frame::{render, render_cancelable};
pub use crate::core::actions::zoom::{zoom, ZoomDirection};
pub use crate::core::data::canvas_size::{CanvasSize, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::fractal_grid::FractalGrid;
pub use crate::core::data::frame_buffer::{ChannelOrder, FrameBuffer, FrameBufferError, BYTES_PER_PIXEL};
pub use crate::core::data::hsv_params::HsvParams;
pub use crate::core::data::iteration_result::IterationResult;
pub use crate::core::data::point::Point;
pub use crate::core::data::render_request::{RenderRequest, DEFAULT_MAX_ITERATIONS};
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::mandelbrot::algorithm::{iterate, MandelbrotAlgorithm, ESCAPE_RADIUS_SQUARED};
pub use crate::core::fractals::mandelbrot::colour_map::{
    colourize, smooth_iteration_count, SmoothHsvColourMap, MIN_SMOOTHING_MODULUS,
};
pub use crate::core::fractals::mandelbrot::errors::RenderError;
pub use crate::core::fractals::mandelbrot::presets::{self, Preset, PRESETS};
pub use crate::core::util::colour_math::{clamp_channel, hsv_to_rgb, wrap_degrees};
pub use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords as pixel_to_complex;

pub use adapters::pixel_format::{aligned_stride, frame_to_rgb, pad_rows, swap_red_blue};
pub use controllers::cli::args::{format_presets, parse_click, CliArgs, CliError, ZoomClick};
pub use controllers::cli::controller::CliController;
pub use controllers::ports::frame_presenter::FramePresenterPort;
pub use presenters::terminal::presenter::TerminalPresenter;
