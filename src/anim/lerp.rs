//! Interpolation primitives.
//!
//! The exact numeric rules matter: widgets feed animator values straight
//! into these, so they decide what is drawn mid-animation.

use crate::color::Rgb;

/// `a + (b - a) * t`, with `t` clamped to `[0,1]`.
pub fn lerp_float(a: f64, b: f64, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    a + (b - a) * t
}

/// [`lerp_float`] rounded half-up to an integer.
pub fn lerp_int(a: i32, b: i32, t: f64) -> i32 {
    (lerp_float(f64::from(a), f64::from(b), t) + 0.5).floor() as i32
}

/// Per-channel interpolation between two hex colors.
///
/// Channels are truncated, not rounded: black to white at 0.5 is
/// `#7f7f7f`. Output is always lowercase `#rrggbb`.
pub fn lerp_hex(a_hex: &str, b_hex: &str, t: f64) -> String {
    let a = Rgb::from_hex(a_hex);
    let b = Rgb::from_hex(b_hex);
    let channel = |x: u8, y: u8| lerp_float(f64::from(x), f64::from(y), t) as i64;
    Rgb::from_channels(channel(a.r, b.r), channel(a.g, b.g), channel(a.b, b.b)).to_hex()
}
