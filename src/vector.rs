//! Vector primitives over plain `[f32; 2]` values.

use crate::error::{LazyError, Result};
use crate::fast_trig;
use crate::math::clamp_angle;

pub fn dot(vec1: [f32; 2], vec2: [f32; 2]) -> f32 {
    vec1[0] * vec2[0] + vec1[1] * vec2[1]
}

/// Magnitude of `vec`. Uses `hypot` so huge or tiny components don't
/// overflow or underflow when squared.
pub fn length(vec: [f32; 2]) -> f32 {
    vec[0].hypot(vec[1])
}

pub fn length_squared(vec: [f32; 2]) -> f32 {
    dot(vec, vec)
}

pub fn is_zero_vector(vec: [f32; 2]) -> bool {
    vec[0] == 0.0 && vec[1] == 0.0
}

/// Unit vector in the direction of `vec`; the zero vector stays zero.
pub fn normalize(vec: [f32; 2]) -> [f32; 2] {
    let mag = length(vec);
    if mag == 0.0 {
        return [0.0, 0.0];
    }
    [vec[0] / mag, vec[1] / mag]
}

/// Vector pointing from `x` to `y`.
pub fn find_vector(x: [f32; 2], y: [f32; 2]) -> [f32; 2] {
    [y[0] - x[0], y[1] - x[1]]
}

/// Left-hand unit normal of the line running from `x` to `y`.
pub fn find_normal(x: [f32; 2], y: [f32; 2]) -> [f32; 2] {
    let vec = normalize(find_vector(x, y));
    [-vec[1], vec[0]]
}

pub fn directional_vector(source: [f32; 2], destination: [f32; 2]) -> [f32; 2] {
    normalize(find_vector(source, destination))
}

/// 2D cross product (z component of the 3D cross product).
pub fn cross_product(vec1: [f32; 2], vec2: [f32; 2]) -> f32 {
    vec1[0] * vec2[1] - vec1[1] * vec2[0]
}

/// Direction of `vec` in degrees, 0 = +x, wrapped to [0, 360).
///
/// Uses the fast `atan2` approximation. The zero vector faces 0.
pub fn facing(vec: [f32; 2]) -> f32 {
    if is_zero_vector(vec) {
        return 0.0;
    }
    clamp_angle(fast_trig::atan2(vec[1], vec[0]).to_degrees())
}

/// Same as [`facing`] but with the exact std `atan2`.
pub fn facing_strict(vec: [f32; 2]) -> f32 {
    if is_zero_vector(vec) {
        return 0.0;
    }
    clamp_angle(vec[1].atan2(vec[0]).to_degrees())
}

/// Angle in degrees of the direction from `from` to `to`.
pub fn angle_between(from: [f32; 2], to: [f32; 2]) -> f32 {
    facing(find_vector(from, to))
}

pub fn angle_between_strict(from: [f32; 2], to: [f32; 2]) -> f32 {
    facing_strict(find_vector(from, to))
}

/// Scales `vec` to `new_length`, keeping its direction.
pub fn resize(vec: [f32; 2], new_length: f32) -> [f32; 2] {
    if is_zero_vector(vec) {
        return vec;
    }
    let scale = new_length / length(vec);
    [vec[0] * scale, vec[1] * scale]
}

pub fn clamp_length(vec: [f32; 2], max_length: f32) -> [f32; 2] {
    if length_squared(vec) > max_length * max_length {
        resize(vec, max_length)
    } else {
        vec
    }
}

pub fn clamp_length_between(vec: [f32; 2], min_length: f32, max_length: f32) -> [f32; 2] {
    resize(vec, crate::math::clamp(length(vec), min_length, max_length))
}

fn rotate_with(vec: [f32; 2], sin: f32, cos: f32) -> [f32; 2] {
    [vec[0] * cos - vec[1] * sin, vec[0] * sin + vec[1] * cos]
}

/// Rotates `vec` counter-clockwise by `angle` degrees around the origin.
pub fn rotate(vec: [f32; 2], angle: f32) -> [f32; 2] {
    if angle == 0.0 {
        return vec;
    }
    let rad = angle.to_radians();
    rotate_with(vec, fast_trig::sin(rad), fast_trig::cos(rad))
}

pub fn rotate_around_pivot(vec: [f32; 2], pivot: [f32; 2], angle: f32) -> [f32; 2] {
    if angle == 0.0 {
        return vec;
    }
    let rotated = rotate(find_vector(pivot, vec), angle);
    [rotated[0] + pivot[0], rotated[1] + pivot[1]]
}

/// Rotates every point, computing the sine and cosine only once.
pub fn rotate_all(points: &[[f32; 2]], angle: f32) -> Vec<[f32; 2]> {
    if angle == 0.0 {
        return points.to_vec();
    }
    let rad = angle.to_radians();
    let (sin, cos) = (fast_trig::sin(rad), fast_trig::cos(rad));
    points.iter().map(|&p| rotate_with(p, sin, cos)).collect()
}

pub fn rotate_all_around_pivot(points: &[[f32; 2]], pivot: [f32; 2], angle: f32) -> Vec<[f32; 2]> {
    if angle == 0.0 {
        return points.to_vec();
    }
    let rad = angle.to_radians();
    let (sin, cos) = (fast_trig::sin(rad), fast_trig::cos(rad));
    points
        .iter()
        .map(|&p| {
            let r = rotate_with(find_vector(pivot, p), sin, cos);
            [r[0] + pivot[0], r[1] + pivot[1]]
        })
        .collect()
}

/// Splits an interleaved `[x0, y0, x1, y1, ...]` buffer into points.
pub fn to_vector_list(coordinates: &[f32]) -> Result<Vec<[f32; 2]>> {
    if coordinates.len() % 2 != 0 {
        return Err(LazyError::OddCoordinateCount(coordinates.len()));
    }
    Ok(coordinates.chunks_exact(2).map(|c| [c[0], c[1]]).collect())
}

pub fn to_float_array(points: &[[f32; 2]]) -> Vec<f32> {
    points.iter().flat_map(|p| [p[0], p[1]]).collect()
}
