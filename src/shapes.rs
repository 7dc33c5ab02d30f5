//! Vertex generation for circles, ellipses and arcs.
//!
//! Instead of evaluating sine and cosine for every vertex, the generators
//! compute one rotation step up front and repeatedly apply it to the running
//! offset from the center. The offset drifts slightly over many segments,
//! which is invisible at render resolution.

use std::f32::consts::TAU;
use std::iter::{Chain, FusedIterator};
use std::option;

use crate::fast_trig;
use crate::vector::to_float_array;

/// Segment count used when the caller doesn't pick one.
pub const DEFAULT_SEGMENT_COUNT: usize = 32;

/// How a vertex sequence is connected when it's rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    /// Filled shape; the first vertex is shared by every triangle.
    TriangleFan,
    /// Closed outline; the last vertex connects back to the first.
    LineLoop,
    /// Open polyline.
    LineStrip,
}

/// Lazy incremental-rotation vertex generator.
///
/// Cloning yields an independent copy positioned at the same vertex, so a
/// fresh clone of an unstarted ring replays the whole sequence.
#[derive(Debug, Clone)]
pub struct VertexRing {
    center: [f32; 2],
    x: f32,
    y: f32,
    step_sin: f32,
    step_cos: f32,
    // Post-transform that turns the circle into a rotated ellipse
    y_factor: f32,
    rot_sin: f32,
    rot_cos: f32,
    remaining: usize,
}

impl VertexRing {
    /// `count` vertices on a circle, the first at `start` radians, each
    /// following one `step` radians further counter-clockwise.
    pub fn new(center: [f32; 2], radius: f32, start: f32, step: f32, count: usize) -> VertexRing {
        VertexRing {
            center,
            x: radius * fast_trig::cos(start),
            y: radius * fast_trig::sin(start),
            step_sin: fast_trig::sin(step),
            step_cos: fast_trig::cos(step),
            y_factor: 1.0,
            rot_sin: 0.0,
            rot_cos: 1.0,
            remaining: count,
        }
    }

    /// Squashes the circle vertically by `y_factor` and then rotates it by
    /// `rotation` radians around the center.
    fn into_ellipse(mut self, y_factor: f32, rotation: f32) -> VertexRing {
        self.y_factor = y_factor;
        self.rot_sin = fast_trig::sin(rotation);
        self.rot_cos = fast_trig::cos(rotation);
        self
    }
}

impl Iterator for VertexRing {
    type Item = [f32; 2];

    fn next(&mut self) -> Option<[f32; 2]> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let sy = self.y * self.y_factor;
        let vertex = [
            self.x * self.rot_cos - sy * self.rot_sin + self.center[0],
            self.x * self.rot_sin + sy * self.rot_cos + self.center[1],
        ];

        // Apply the rotation matrix
        let tmp = self.x;
        self.x = self.step_cos * self.x - self.step_sin * self.y;
        self.y = self.step_sin * tmp + self.step_cos * self.y;

        Some(vertex)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for VertexRing {}

impl FusedIterator for VertexRing {}

/// A vertex sequence plus the primitive it should be drawn with.
#[derive(Debug, Clone)]
pub struct Tessellation {
    mode: DrawMode,
    hub: Option<[f32; 2]>,
    ring: VertexRing,
}

impl Tessellation {
    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// A fresh pass over the vertices; call again to restart.
    pub fn vertices(&self) -> Chain<option::IntoIter<[f32; 2]>, VertexRing> {
        self.hub.into_iter().chain(self.ring.clone())
    }

    pub fn len(&self) -> usize {
        self.ring.len() + usize::from(self.hub.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Interleaved `[x0, y0, x1, y1, ...]` buffer, ready for a vertex array.
    pub fn to_flat(&self) -> Vec<f32> {
        to_float_array(&self.vertices().collect::<Vec<_>>())
    }
}

impl IntoIterator for &Tessellation {
    type Item = [f32; 2];
    type IntoIter = Chain<option::IntoIter<[f32; 2]>, VertexRing>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices()
    }
}

fn full_turn_step(segment_count: usize) -> f32 {
    TAU / segment_count as f32
}

/// `segment_count` vertices around a circle, starting on the +x axis.
/// `filled` only picks the draw mode (fan or loop).
pub fn circle_vertices(
    center: [f32; 2],
    radius: f32,
    segment_count: usize,
    filled: bool,
) -> Tessellation {
    Tessellation {
        mode: if filled { DrawMode::TriangleFan } else { DrawMode::LineLoop },
        hub: None,
        ring: VertexRing::new(center, radius, 0.0, full_turn_step(segment_count), segment_count),
    }
}

/// Vertices of an ellipse `width` by `height` (full extents), rotated by
/// `angle_offset` degrees.
pub fn ellipse_vertices(
    center: [f32; 2],
    width: f32,
    height: f32,
    angle_offset: f32,
    segment_count: usize,
    filled: bool,
) -> Tessellation {
    let ring = VertexRing::new(center, width / 2.0, 0.0, full_turn_step(segment_count), segment_count)
        .into_ellipse(height / width, angle_offset.to_radians());
    Tessellation {
        mode: if filled { DrawMode::TriangleFan } else { DrawMode::LineLoop },
        hub: None,
        ring,
    }
}

/// `segment_count + 1` vertices from `start_angle` to
/// `start_angle + arc_angle` degrees inclusive.
pub fn arc_vertices(
    center: [f32; 2],
    radius: f32,
    start_angle: f32,
    arc_angle: f32,
    segment_count: usize,
) -> VertexRing {
    let step = arc_angle.to_radians() / segment_count as f32;
    VertexRing::new(center, radius, start_angle.to_radians(), step, segment_count + 1)
}

/// An arc ready to draw: a fan around the center when filled (a pie
/// slice), an open strip otherwise.
pub fn arc(
    center: [f32; 2],
    radius: f32,
    start_angle: f32,
    arc_angle: f32,
    segment_count: usize,
    filled: bool,
) -> Tessellation {
    Tessellation {
        mode: if filled { DrawMode::TriangleFan } else { DrawMode::LineStrip },
        hub: filled.then_some(center),
        ring: arc_vertices(center, radius, start_angle, arc_angle, segment_count),
    }
}

pub fn create_circle(center_x: f32, center_y: f32, radius: f32, segment_count: usize) -> Vec<f32> {
    circle_vertices([center_x, center_y], radius, segment_count, false).to_flat()
}

pub fn create_ellipse(
    center_x: f32,
    center_y: f32,
    width: f32,
    height: f32,
    angle_offset: f32,
    segment_count: usize,
) -> Vec<f32> {
    ellipse_vertices([center_x, center_y], width, height, angle_offset, segment_count, false).to_flat()
}

pub fn create_arc(
    center_x: f32,
    center_y: f32,
    radius: f32,
    start_angle: f32,
    arc_angle: f32,
    segment_count: usize,
) -> Vec<f32> {
    let points: Vec<_> = arc_vertices([center_x, center_y], radius, start_angle, arc_angle, segment_count).collect();
    to_float_array(&points)
}
