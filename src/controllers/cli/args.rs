use clap::Parser;
use log::LevelFilter;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::core::actions::zoom::{zoom, ZoomDirection};
use crate::core::data::canvas_size::{CanvasSize, DEFAULT_CANVAS_WIDTH};
use crate::core::data::frame_buffer::ChannelOrder;
use crate::core::data::hsv_params::HsvParams;
use crate::core::data::point::Point;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::presets::{self, PRESETS};

pub const DEFAULT_TERMINAL_WIDTH: i32 = 96;
pub const DEFAULT_TERMINAL_HEIGHT: i32 = 64;

#[derive(Debug, Clone, PartialEq)]
pub enum CliError {
    UnknownPreset(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPreset(name) => {
                write!(f, "unknown preset '{}', try --list-presets", name)
            }
        }
    }
}

impl Error for CliError {}

/// A simulated mouse click on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomClick {
    pub direction: ZoomDirection,
    pub pixel: Point,
}

/// Given a string and a separator, returns the two values on either side.
fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    let (left, right) = s.split_once(separator)?;

    match (T::from_str(left.trim()), T::from_str(right.trim())) {
        (Ok(l), Ok(r)) => Some((l, r)),
        _ => None,
    }
}

/// Parses `in:X,Y` or `out:X,Y`.
pub fn parse_click(s: &str) -> Result<ZoomClick, String> {
    let (direction, coords) = s
        .split_once(':')
        .ok_or_else(|| format!("expected in:X,Y or out:X,Y, got '{}'", s))?;

    let direction = match direction.trim().to_ascii_lowercase().as_str() {
        "in" => ZoomDirection::In,
        "out" => ZoomDirection::Out,
        other => return Err(format!("zoom direction must be 'in' or 'out', got '{}'", other)),
    };

    let (x, y) = parse_pair::<i32>(coords, ',').ok_or_else(|| format!("expected pixel X,Y, got '{}'", coords))?;

    Ok(ZoomClick {
        direction,
        pixel: Point { x, y },
    })
}

#[derive(Parser, Debug, Clone)]
#[command(name = "mandel_explorer")]
#[command(about = "Renders the Mandelbrot set with smooth HSV colouring to a truecolor terminal")]
pub struct CliArgs {
    /// Starting view, by name or slug
    #[arg(short, long, default_value = "basic")]
    pub preset: String,

    #[arg(long, allow_negative_numbers = true)]
    pub center_x: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub center_y: Option<f64>,

    /// Complex-plane distance per pixel; defaults to the preset's view fitted to --width
    #[arg(long, allow_negative_numbers = true)]
    pub scale: Option<f64>,

    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub max_iterations: Option<i32>,

    #[arg(long, default_value_t = DEFAULT_TERMINAL_WIDTH, allow_negative_numbers = true)]
    pub width: i32,

    /// Pixel rows; two rows share one terminal line
    #[arg(long, default_value_t = DEFAULT_TERMINAL_HEIGHT, allow_negative_numbers = true)]
    pub height: i32,

    /// Base hue in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub hue: f64,

    #[arg(long, default_value_t = 0.85)]
    pub saturation: f64,

    #[arg(long, default_value_t = 1.0)]
    pub value: f64,

    /// Zoom click applied to the view, in order: in:X,Y or out:X,Y
    #[arg(long = "click", value_parser = parse_click)]
    pub clicks: Vec<ZoomClick>,

    /// Render channels as RGB instead of BGR
    #[arg(long)]
    pub rgb: bool,

    #[arg(long)]
    pub list_presets: bool,

    #[arg(long, default_value = "error")]
    pub log_level: String,
}

impl CliArgs {
    /// Builds the request: preset, then explicit overrides, then clicks.
    pub fn to_request(&self) -> Result<RenderRequest, CliError> {
        let preset = presets::find(&self.preset).ok_or_else(|| CliError::UnknownPreset(self.preset.clone()))?;
        let size = CanvasSize::new(self.width, self.height);

        let mut viewport = Viewport {
            center_x: self.center_x.unwrap_or(preset.viewport.center_x),
            center_y: self.center_y.unwrap_or(preset.viewport.center_y),
            scale: self
                .scale
                .unwrap_or_else(|| fit_scale_to_width(preset.viewport.scale, self.width)),
        };

        for click in &self.clicks {
            viewport = zoom(&viewport, click.pixel, size, click.direction);
        }

        let channel_order = if self.rgb { ChannelOrder::Rgb } else { ChannelOrder::Bgr };

        Ok(RenderRequest::new(
            viewport,
            self.max_iterations.unwrap_or(preset.max_iterations),
            size,
            HsvParams::new(self.hue, self.saturation, self.value),
        )
        .with_channel_order(channel_order))
    }

    /// `--log-level` in any case; unknown names fall back to `error`.
    #[must_use]
    pub fn log_level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Error)
    }
}

/// Preset scales describe a canvas `DEFAULT_CANVAS_WIDTH` pixels wide; keep the
/// same horizontal extent on a canvas of `width` pixels.
fn fit_scale_to_width(scale: f64, width: i32) -> f64 {
    if width <= 0 {
        return scale;
    }

    scale * DEFAULT_CANVAS_WIDTH as f64 / width as f64
}

#[must_use]
pub fn format_presets() -> String {
    PRESETS
        .iter()
        .map(|p| {
            format!(
                "{:<16} {:<16} centre ({}, {}) scale {} iterations {}\n",
                p.slug, p.name, p.viewport.center_x, p.viewport.center_y, p.viewport.scale, p.max_iterations
            )
        })
        .collect()
}
