use crate::core::data::complex::Complex;

/// Region of the complex plane shown on the canvas.
///
/// `scale` is the distance in the complex plane covered by one pixel. It must
/// be finite and positive for a render to proceed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub center_x: f64,
    pub center_y: f64,
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center_x: -0.5,
            center_y: 0.0,
            scale: 0.005,
        }
    }
}

impl Viewport {
    #[must_use]
    pub fn new(center_x: f64, center_y: f64, scale: f64) -> Self {
        Self { center_x, center_y, scale }
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: self.center_x,
            imag: self.center_y,
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.scale.is_finite() && self.scale > 0.0
    }

    #[must_use]
    pub fn recentred(&self, center: Complex, scale_factor: f64) -> Self {
        Self {
            center_x: center.real,
            center_y: center.imag,
            scale: self.scale * scale_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_whole_set_view() {
        let viewport = Viewport::default();

        assert_eq!(viewport.center(), Complex::new(-0.5, 0.0));
        assert_eq!(viewport.scale, 0.005);
        assert!(viewport.is_valid());
    }

    #[test]
    fn test_non_positive_or_non_finite_scale_is_invalid() {
        assert!(!Viewport::new(0.0, 0.0, 0.0).is_valid());
        assert!(!Viewport::new(0.0, 0.0, -1.0).is_valid());
        assert!(!Viewport::new(0.0, 0.0, f64::NAN).is_valid());
        assert!(!Viewport::new(0.0, 0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_recentred_moves_centre_and_scales() {
        let viewport = Viewport::new(1.0, 1.0, 0.25);
        let moved = viewport.recentred(Complex::new(-2.0, 3.0), 2.0);

        assert_eq!(moved, Viewport::new(-2.0, 3.0, 0.5));
    }
}
