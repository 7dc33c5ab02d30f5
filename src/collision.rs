//! Line segments and the intersection/containment tests built on them.

use crate::math::{approx_equals, distance, distance_squared};
use crate::vector::{dot, find_vector, length_squared};

/// Points closer than this (squared: 1/9) to a segment count as touching it.
const ON_SEGMENT_TOLERANCE_SQ: f32 = 0.11111;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: [f32; 2],
    pub b: [f32; 2],
}

impl Segment {
    pub fn new(a: [f32; 2], b: [f32; 2]) -> Segment {
        Segment { a, b }
    }

    pub fn length(&self) -> f32 {
        distance(self.a, self.b)
    }

    /// Unnormalized direction from `a` to `b`.
    pub fn direction(&self) -> [f32; 2] {
        find_vector(self.a, self.b)
    }

    pub fn midpoint(&self) -> [f32; 2] {
        crate::math::midpoint(self.a, self.b)
    }

    /// Point at parameter `t` along the segment (0 = `a`, 1 = `b`).
    pub fn point_at(&self, t: f32) -> [f32; 2] {
        let d = self.direction();
        [self.a[0] + t * d[0], self.a[1] + t * d[1]]
    }
}

/// Intersection of the infinite lines through `s1` and `s2`.
///
/// Parallel lines (determinant exactly zero) never intersect. With
/// `clamp_to_segment`, an intersection outside either segment's extent is
/// also rejected.
pub fn segment_intersect(s1: Segment, s2: Segment, clamp_to_segment: bool) -> Option<[f32; 2]> {
    let [dx1, dy1] = s1.direction();
    let [dx2, dy2] = s2.direction();
    let denom = dy2 * dx1 - dx2 * dy1;
    if denom == 0.0 {
        return None;
    }

    let ox = s1.a[0] - s2.a[0];
    let oy = s1.a[1] - s2.a[1];
    let ua = (dx2 * oy - dy2 * ox) / denom;
    let ub = (dx1 * oy - dy1 * ox) / denom;

    if clamp_to_segment && !((0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub)) {
        return None;
    }

    Some(s1.point_at(ua))
}

/// Where `s1` first touches `s2`, for hit detection.
///
/// Unlike [`segment_intersect`] this snaps to an endpoint of `s1` that lies
/// within a third of a unit of `s2` (end before start), so grazing hits are
/// not lost to rounding.
pub fn collision_point(s1: Segment, s2: Segment) -> Option<[f32; 2]> {
    if distance_to_segment_squared(s1.b, s2) <= ON_SEGMENT_TOLERANCE_SQ {
        return Some(s1.b);
    }
    if distance_to_segment_squared(s1.a, s2) <= ON_SEGMENT_TOLERANCE_SQ {
        return Some(s1.a);
    }

    let [dx1, dy1] = s1.direction();
    let [dx2, dy2] = s2.direction();
    let denom = dx1 * dy2 - dy1 * dx2;
    if approx_equals(0.0, denom) {
        return None;
    }

    let ox = s1.a[0] - s2.a[0];
    let oy = s1.a[1] - s2.a[1];
    let r = (oy * dx2 - ox * dy2) / denom;
    let s = (oy * dx1 - ox * dy1) / denom;
    if !(0.0..=1.0).contains(&r) || !(0.0..=1.0).contains(&s) {
        return None;
    }

    Some(s1.point_at(r))
}

/// Closest point to `point` that lies on `segment`.
pub fn nearest_point_on_segment(point: [f32; 2], segment: Segment) -> [f32; 2] {
    let ab = segment.direction();
    let len2 = length_squared(ab);
    if len2 == 0.0 {
        return segment.a;
    }
    let t = (dot(find_vector(segment.a, point), ab) / len2).clamp(0.0, 1.0);
    segment.point_at(t)
}

pub fn distance_to_segment_squared(point: [f32; 2], segment: Segment) -> f32 {
    distance_squared(point, nearest_point_on_segment(point, segment))
}

pub fn is_point_on_segment(point: [f32; 2], segment: Segment) -> bool {
    distance_to_segment_squared(point, segment) <= ON_SEGMENT_TOLERANCE_SQ
}

/// Whether any part of `segment` lies within `radius` of `center`.
pub fn segment_collides_circle(segment: Segment, center: [f32; 2], radius: f32) -> bool {
    distance_to_segment_squared(center, segment) <= radius * radius
}
