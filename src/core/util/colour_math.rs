use crate::core::data::colour::Colour;

const DEGREES_PER_TURN: f64 = 360.0;
const DEGREES_PER_SECTOR: f64 = 60.0;

/// Rounds a `[0, 1]` channel intensity to a byte, halves to even, clamped.
#[inline]
#[must_use]
pub fn clamp_channel(intensity: f64) -> u8 {
    let scaled = (intensity * 255.0).round_ties_even();

    scaled.clamp(0.0, 255.0) as u8
}

/// Wraps an angle in degrees into `[0, 360)`; negative angles wrap from the top.
#[inline]
#[must_use]
pub fn wrap_degrees(degrees: f64) -> f64 {
    (degrees % DEGREES_PER_TURN + DEGREES_PER_TURN) % DEGREES_PER_TURN
}

/// Standard six-sector HSV to RGB conversion. `hue` is wrapped, `saturation`
/// and `value` are used as given.
#[must_use]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Colour {
    let h = wrap_degrees(hue);
    let c = value * saturation;
    let x = c * (1.0 - ((h / DEGREES_PER_SECTOR) % 2.0 - 1.0).abs());
    let m = value - c;

    let (r1, g1, b1) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Colour {
        r: clamp_channel(r1 + m),
        g: clamp_channel(g1 + m),
        b: clamp_channel(b1 + m),
    }
}
