use crate::core::actions::cancellation::Cancelled;
use std::{error::Error, fmt};

/// Reasons a render produced no frame.
///
/// Every variant except `Cancelled` is a caller-input validation failure,
/// reported before any pixel is computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderError {
    InvalidViewport { scale: f64 },
    InvalidIterationCap { max_iterations: i32 },
    InvalidDimensions { width: i32, height: i32 },
    Cancelled(Cancelled),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidViewport { scale } => {
                write!(f, "viewport scale must be a positive number, got {}", scale)
            }
            Self::InvalidIterationCap { max_iterations } => {
                write!(f, "maximum iterations must be greater than zero, got {}", max_iterations)
            }
            Self::InvalidDimensions { width, height } => {
                write!(f, "output size must be positive: {}x{}", width, height)
            }
            Self::Cancelled(c) => write!(f, "render {}", c),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            _ => None,
        }
    }
}

impl From<Cancelled> for RenderError {
    fn from(c: Cancelled) -> Self {
        Self::Cancelled(c)
    }
}
