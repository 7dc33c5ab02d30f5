//! Drawing tessellated shapes on an SDL2 canvas through the gfx primitives.
//!
//! Coordinates are taken as screen pixels and rounded to the nearest one.

use sdl2::gfx::primitives::DrawRenderer;
use sdl2::render::{Canvas, RenderTarget};

use crate::color::{Color, to_render_color};
use crate::shapes::{self, DrawMode, Tessellation};

/// Reorders channels for the gfx primitives, which read the packed color
/// with the opposite byte order to the rest of SDL2.
pub fn to_gfx_color(rgba: [u8; 4]) -> sdl2::pixels::Color {
    let [r, g, b, a] = rgba;
    sdl2::pixels::Color::RGBA(a, b, g, r)
}

fn to_screen(shape: &Tessellation) -> (Vec<i16>, Vec<i16>) {
    shape
        .vertices()
        .map(|[x, y]| (x.round() as i16, y.round() as i16))
        .unzip()
}

/// Draws `shape` with the primitive matching its draw mode.
pub fn draw_tessellation<T: RenderTarget>(
    canvas: &mut Canvas<T>,
    shape: &Tessellation,
    rgba: [u8; 4],
) -> Result<(), String> {
    let (vx, vy) = to_screen(shape);
    let color = to_gfx_color(rgba);
    match shape.mode() {
        DrawMode::TriangleFan => canvas.filled_polygon(&vx, &vy, color),
        DrawMode::LineLoop => canvas.polygon(&vx, &vy, color),
        DrawMode::LineStrip => {
            for i in 1..vx.len() {
                canvas.line(vx[i - 1], vy[i - 1], vx[i], vy[i], color)?;
            }
            Ok(())
        }
    }
}

/// Draws a circle; `segments` defaults to [`shapes::DEFAULT_SEGMENT_COUNT`].
pub fn draw_circle<T: RenderTarget>(
    canvas: &mut Canvas<T>,
    center: [f32; 2],
    radius: f32,
    segments: Option<usize>,
    filled: bool,
    color: Color,
    alpha_mult: f32,
) -> Result<(), String> {
    let segments = segments.unwrap_or(shapes::DEFAULT_SEGMENT_COUNT);
    if segments < 3 {
        log::warn!("skipping circle with {segments} segments");
        return Ok(());
    }
    let shape = shapes::circle_vertices(center, radius, segments, filled);
    draw_tessellation(canvas, &shape, to_render_color(color, alpha_mult, false))
}

#[allow(clippy::too_many_arguments)]
pub fn draw_ellipse<T: RenderTarget>(
    canvas: &mut Canvas<T>,
    center: [f32; 2],
    width: f32,
    height: f32,
    angle_offset: f32,
    segments: Option<usize>,
    filled: bool,
    color: Color,
) -> Result<(), String> {
    let segments = segments.unwrap_or(shapes::DEFAULT_SEGMENT_COUNT);
    if segments < 3 {
        log::warn!("skipping ellipse with {segments} segments");
        return Ok(());
    }
    let shape = shapes::ellipse_vertices(center, width, height, angle_offset, segments, filled);
    draw_tessellation(canvas, &shape, to_render_color(color, 1.0, false))
}

/// Draws an arc, or a pie slice when `filled`.
#[allow(clippy::too_many_arguments)]
pub fn draw_arc<T: RenderTarget>(
    canvas: &mut Canvas<T>,
    center: [f32; 2],
    radius: f32,
    start_angle: f32,
    arc_angle: f32,
    segments: Option<usize>,
    filled: bool,
    color: Color,
) -> Result<(), String> {
    let segments = segments.unwrap_or(shapes::DEFAULT_SEGMENT_COUNT);
    if segments < 1 {
        log::warn!("skipping arc with no segments");
        return Ok(());
    }
    let shape = shapes::arc(center, radius, start_angle, arc_angle, segments, filled);
    draw_tessellation(canvas, &shape, to_render_color(color, 1.0, false))
}
