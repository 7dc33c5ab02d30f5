//! 8-bit RGBA colors and their conversion to render-call channel arguments.

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    /// Opaque color with uniformly random channels.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Color {
        Color::rgb(rng.random(), rng.random(), rng.random())
    }
}

/// Rounds to the nearest integer and keeps the low byte.
///
/// Out-of-range inputs wrap around (300 -> 44, -1 -> 255) instead of
/// clamping, matching what a raw unsigned-byte color call receives.
fn wrap_to_byte(value: f32) -> u8 {
    value.round() as i32 as u8
}

/// Channel arguments for an unsigned-byte RGBA color call.
///
/// RGB pass through unchanged. Alpha becomes `alpha_mult * 255` when
/// `override_alpha` is set and `color.a * alpha_mult` otherwise. A
/// multiplier outside [0, 1] is not clamped; see [`wrap_to_byte`].
pub fn to_render_color(color: Color, alpha_mult: f32, override_alpha: bool) -> [u8; 4] {
    let alpha = if override_alpha {
        alpha_mult * 255.0
    } else {
        f32::from(color.a) * alpha_mult
    };
    [color.r, color.g, color.b, wrap_to_byte(alpha)]
}

pub fn to_render_color_exact(color: Color) -> [u8; 4] {
    [color.r, color.g, color.b, color.a]
}

/// Replaces the color's alpha with `alpha` in [0, 1].
pub fn with_alpha(color: Color, alpha: f32) -> [u8; 4] {
    to_render_color(color, alpha, true)
}

pub fn to_normalized_rgb(color: Color) -> [f32; 3] {
    [
        f32::from(color.r) / 255.0,
        f32::from(color.g) / 255.0,
        f32::from(color.b) / 255.0,
    ]
}

pub fn to_normalized_rgba(color: Color) -> [f32; 4] {
    let [r, g, b] = to_normalized_rgb(color);
    [r, g, b, f32::from(color.a) / 255.0]
}

#[cfg(feature = "sdl")]
impl From<Color> for sdl2::pixels::Color {
    fn from(color: Color) -> Self {
        sdl2::pixels::Color::RGBA(color.r, color.g, color.b, color.a)
    }
}
