//! Points on and inside rotated ellipses.
//!
//! `width` and `height` are the full extents of the ellipse along its own
//! axes before rotation, so the semi-axes are `width / 2` and `height / 2`.
//! Rotation offsets and angles are in degrees.

use rand::Rng;

use crate::fast_trig;
use crate::vector::{find_vector, rotate};

/// Point at parametric angle `angle` on an ellipse centered on `focus` and
/// rotated by `rotation_offset`.
pub fn point_on_ellipse(
    focus: [f32; 2],
    width: f32,
    height: f32,
    rotation_offset: f32,
    angle: f32,
) -> [f32; 2] {
    let offset = rotation_offset.to_radians();
    point_on_ellipse_rotated(
        focus,
        width,
        height,
        fast_trig::sin(offset),
        fast_trig::cos(offset),
        angle,
    )
}

/// [`point_on_ellipse`] with the rotation's sine and cosine precomputed.
pub(crate) fn point_on_ellipse_rotated(
    focus: [f32; 2],
    width: f32,
    height: f32,
    offset_sin: f32,
    offset_cos: f32,
    angle: f32,
) -> [f32; 2] {
    let rad = angle.to_radians();

    // Unrotated ellipse around the origin
    let x = width / 2.0 * fast_trig::cos(rad);
    let y = height / 2.0 * fast_trig::sin(rad);

    [
        x * offset_cos - y * offset_sin + focus[0],
        x * offset_sin + y * offset_cos + focus[1],
    ]
}

pub fn random_point_on_ellipse<R: Rng + ?Sized>(
    rng: &mut R,
    focus: [f32; 2],
    width: f32,
    height: f32,
    rotation_offset: f32,
) -> [f32; 2] {
    point_on_ellipse(focus, width, height, rotation_offset, rng.random::<f32>() * 360.0)
}

pub fn random_point_in_ellipse<R: Rng + ?Sized>(
    rng: &mut R,
    focus: [f32; 2],
    width: f32,
    height: f32,
    rotation_offset: f32,
) -> [f32; 2] {
    let u = rng.random::<f32>() + rng.random::<f32>();
    let r = if u > 1.0 { 2.0 - u } else { u };
    random_point_on_ellipse(rng, focus, width * r, height * r, rotation_offset)
}

/// Whether `point` lies inside (or within a hair of) the ellipse.
pub fn is_point_within_ellipse(
    point: [f32; 2],
    focus: [f32; 2],
    width: f32,
    height: f32,
    rotation_offset: f32,
) -> bool {
    let local = rotate(find_vector(focus, point), -rotation_offset);
    let a = width / 2.0;
    let b = height / 2.0;
    (local[0] * local[0]) / (a * a) + (local[1] * local[1]) / (b * b) <= 1.0001
}
