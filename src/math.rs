//! Distances, angle helpers and points on circles, including the
//! randomized variants used for spawning effects.

use rand::Rng;
use std::f32::consts::TAU;

use crate::error::{LazyError, Result};
use crate::fast_trig;

/// Euclidean distance between two points (hypot-based).
pub fn distance(a: [f32; 2], b: [f32; 2]) -> f32 {
    (a[0] - b[0]).hypot(a[1] - b[1])
}

pub fn distance_squared(a: [f32; 2], b: [f32; 2]) -> f32 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx * dx + dy * dy
}

pub fn is_within_range(a: [f32; 2], b: [f32; 2], range: f32) -> bool {
    distance_squared(a, b) <= range * range
}

/// Wraps an angle in degrees into [0, 360).
pub fn clamp_angle(angle: f32) -> f32 {
    let mut angle = angle;
    if !(-360.0..360.0).contains(&angle) {
        angle %= 360.0;
    }
    if angle < 0.0 {
        angle += 360.0;
    }
    // -tiny + 360 rounds up to exactly 360 in f32
    if angle >= 360.0 { 0.0 } else { angle }
}

/// Clamps `value` into the range spanned by `min` and `max`, in either order.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if max < min {
        return clamp(value, max, min);
    }
    value.max(min).min(max)
}

/// Signed rotation in degrees, in [-180, 180), that turns `current` to `dest`.
pub fn shortest_rotation(current: f32, dest: f32) -> f32 {
    let turns = (dest - current + 180.0) / 360.0;
    (turns - turns.floor()) * 360.0 - 180.0
}

pub fn midpoint(a: [f32; 2], b: [f32; 2]) -> [f32; 2] {
    [(a[0] + b[0]) / 2.0, (a[1] + b[1]) / 2.0]
}

/// Point `radius` away from `center` in direction `angle` (degrees, 0 = +x).
pub fn point_on_circumference(center: [f32; 2], radius: f32, angle: f32) -> [f32; 2] {
    if radius == 0.0 {
        return center;
    }

    // Exact results on the axes
    let angle = clamp_angle(angle);
    if angle == 0.0 {
        [center[0] + radius, center[1]]
    } else if angle == 90.0 {
        [center[0], center[1] + radius]
    } else if angle == 180.0 {
        [center[0] - radius, center[1]]
    } else if angle == 270.0 {
        [center[0], center[1] - radius]
    } else {
        let rad = angle.to_radians();
        [
            center[0] + fast_trig::cos(rad) * radius,
            center[1] + fast_trig::sin(rad) * radius,
        ]
    }
}

/// `n` points evenly spaced around a circle, starting at `angle_offset`
/// degrees. Sine and cosine are evaluated once; each following point is
/// produced by rotating the previous one.
pub fn points_along_circumference(
    center: [f32; 2],
    radius: f32,
    num_points: usize,
    angle_offset: f32,
) -> Vec<[f32; 2]> {
    let step = TAU / num_points as f32;
    crate::shapes::VertexRing::new(center, radius, angle_offset.to_radians(), step, num_points)
        .collect()
}

pub fn is_point_within_circle(point: [f32; 2], center: [f32; 2], radius: f32) -> bool {
    distance_squared(point, center) <= radius * radius
}

/// Loose relative float comparison, tolerating about one part in ten million.
pub fn approx_equals(a: f32, b: f32) -> bool {
    if a == b {
        return true;
    }
    let (lo, hi) = if b < 0.0 {
        (b * 1.000_000_1, b * 0.999_999_9)
    } else {
        (b * 0.999_999_9, b * 1.000_000_1)
    };
    a >= lo && a <= hi
}

/// Grid of points `spacing` apart that fall strictly inside the circle.
pub fn equidistant_points_inside_circle(
    center: [f32; 2],
    radius: f32,
    spacing: f32,
) -> Result<Vec<[f32; 2]>> {
    if spacing <= 0.0 {
        return Err(LazyError::NonPositiveSpacing(spacing));
    }

    let steps = (2.0 * radius / spacing).ceil().max(0.0) as usize;
    let size = radius / spacing;
    let mut points = Vec::with_capacity((size * size * std::f32::consts::PI + 0.5) as usize);
    for i in 0..steps {
        let x = center[0] - radius + i as f32 * spacing;
        for j in 0..steps {
            let y = center[1] - radius + j as f32 * spacing;
            if distance_squared([x, y], center) < radius * radius {
                points.push([x, y]);
            }
        }
    }
    Ok(points)
}

/// Uniform float in `[min, max)`; reversed bounds are accepted.
pub fn random_number_in_range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    rng.random::<f32>() * (max - min) + min
}

pub fn random_point_on_circumference<R: Rng + ?Sized>(
    rng: &mut R,
    center: [f32; 2],
    radius: f32,
) -> [f32; 2] {
    point_on_circumference(center, radius, rng.random::<f32>() * 360.0)
}

/// Folded triangular sample, so points are uniform over the disc's area.
fn random_radius_fraction<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    let u = rng.random::<f32>() + rng.random::<f32>();
    if u > 1.0 { 2.0 - u } else { u }
}

pub fn random_point_in_circle<R: Rng + ?Sized>(
    rng: &mut R,
    center: [f32; 2],
    radius: f32,
) -> [f32; 2] {
    let t = TAU * rng.random::<f32>();
    let r = random_radius_fraction(rng) * radius;
    [
        center[0] + fast_trig::cos(t) * r,
        center[1] + fast_trig::sin(t) * r,
    ]
}

/// Uniform point inside the circular sector between two angles in degrees.
pub fn random_point_in_cone<R: Rng + ?Sized>(
    rng: &mut R,
    center: [f32; 2],
    radius: f32,
    min_angle: f32,
    max_angle: f32,
) -> [f32; 2] {
    let t = random_number_in_range(rng, min_angle, max_angle).to_radians();
    let r = random_radius_fraction(rng) * radius;
    [
        center[0] + fast_trig::cos(t) * r,
        center[1] + fast_trig::sin(t) * r,
    ]
}

pub fn random_point_on_line<R: Rng + ?Sized>(
    rng: &mut R,
    start: [f32; 2],
    end: [f32; 2],
) -> [f32; 2] {
    let t = rng.random::<f32>();
    [
        start[0] + t * (end[0] - start[0]),
        start[1] + t * (end[1] - start[1]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const NUM_TESTS: usize = 20_000;

    #[test]
    fn distance_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..NUM_TESTS {
            let a = [
                rng.random_range(-150_000.0..150_000.0),
                rng.random_range(-150_000.0..150_000.0),
            ];
            let b = [
                rng.random_range(-150_000.0..150_000.0),
                rng.random_range(-150_000.0..150_000.0),
            ];
            assert_eq!(distance(a, b), distance(b, a));
            assert_eq!(distance(a, a), 0.0);
            assert_eq!(distance_squared(a, b), distance_squared(b, a));
        }
        assert_eq!(distance([0.0, 0.0], [50.0, 0.0]), 50.0);
        assert_eq!(distance_squared([0.0, 0.0], [50.0, 0.0]), 2500.0);
    }

    #[test]
    fn distance_does_not_overflow() {
        let d = distance([-3.0e38, 0.0], [0.0, 0.0]);
        assert!(d.is_finite());
        assert!(distance([1.0e-30, 0.0], [0.0, 1.0e-30]) > 0.0);
    }

    #[test]
    fn clamp_angle_known_values() {
        assert_eq!(clamp_angle(420.0), 60.0);
        assert_eq!(clamp_angle(-420.0), 300.0);
        assert_eq!(clamp_angle(0.0), 0.0);
        assert_eq!(clamp_angle(360.0), 0.0);
        assert_eq!(clamp_angle(120.0), 120.0);

        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..NUM_TESTS {
            let clamped = clamp_angle(rng.random_range(-1.0e6..1.0e6));
            assert!((0.0..360.0).contains(&clamped), "{clamped}");
        }
    }

    #[test]
    fn clamp_accepts_reversed_bounds() {
        assert_eq!(clamp(5.0, 1.0, 3.0), 3.0);
        assert_eq!(clamp(-5.0, 1.0, 3.0), 1.0);
        assert_eq!(clamp(2.0, 3.0, 1.0), 2.0);
    }

    #[test]
    fn shortest_rotation_stays_in_half_turn() {
        assert!((shortest_rotation(10.0, 350.0) + 20.0).abs() < 1e-3);
        assert!((shortest_rotation(350.0, 10.0) - 20.0).abs() < 1e-3);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..NUM_TESTS {
            let r = shortest_rotation(
                rng.random_range(-360.0..360.0),
                rng.random_range(-360.0..360.0),
            );
            assert!((-180.0..=180.0).contains(&r), "{r}");
        }
    }

    #[test]
    fn circumference_fast_paths_are_exact() {
        let c = [10.0, -5.0];
        assert_eq!(point_on_circumference(c, 2.0, 0.0), [12.0, -5.0]);
        assert_eq!(point_on_circumference(c, 2.0, 90.0), [10.0, -3.0]);
        assert_eq!(point_on_circumference(c, 2.0, 180.0), [8.0, -5.0]);
        assert_eq!(point_on_circumference(c, 2.0, -90.0), [10.0, -7.0]);
        assert_eq!(point_on_circumference(c, 0.0, 33.0), c);
        let p = point_on_circumference(c, 2.0, 45.0);
        assert!((distance(p, c) - 2.0).abs() < 1e-5);
    }

    #[test]
    fn random_points_stay_inside_their_shapes() {
        let mut rng = StdRng::seed_from_u64(4);
        let center = [100.0, 200.0];
        for _ in 0..NUM_TESTS {
            let p = random_point_in_circle(&mut rng, center, 50.0);
            assert!(distance(p, center) <= 50.001);

            let p = random_point_on_circumference(&mut rng, center, 50.0);
            assert!((distance(p, center) - 50.0).abs() < 0.01);

            let p = random_point_in_cone(&mut rng, center, 50.0, 0.0, 90.0);
            assert!(p[0] >= center[0] - 0.01 && p[1] >= center[1] - 0.01);

            let p = random_point_on_line(&mut rng, [0.0, 0.0], [10.0, 0.0]);
            assert!(p[1] == 0.0 && (0.0..=10.0).contains(&p[0]));
        }
    }

    #[test]
    fn equidistant_points_rejects_bad_spacing() {
        assert_eq!(
            equidistant_points_inside_circle([0.0, 0.0], 10.0, 0.0),
            Err(LazyError::NonPositiveSpacing(0.0))
        );
        let pts = equidistant_points_inside_circle([5.0, 5.0], 10.0, 1.0).unwrap();
        assert!(!pts.is_empty());
        assert!(pts.iter().all(|&p| distance(p, [5.0, 5.0]) < 10.0));
    }

    #[test]
    fn approx_equals_tolerates_rounding() {
        assert!(approx_equals(1.0, 1.0));
        assert!(approx_equals(-2.0, -2.0000001));
        assert!(!approx_equals(1.0, 1.001));
    }

    #[test]
    fn points_along_circumference_are_evenly_spaced() {
        let pts = points_along_circumference([0.0, 0.0], 10.0, 4, 90.0);
        assert_eq!(pts.len(), 4);
        assert!((pts[0][0]).abs() < 1e-4 && (pts[0][1] - 10.0).abs() < 1e-4);
        assert!((pts[1][0] + 10.0).abs() < 1e-3 && pts[1][1].abs() < 1e-3);
    }
}
