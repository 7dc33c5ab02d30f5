mod common;

use common::assert_close;
use lazylib::collision::{Segment, segment_intersect};
use lazylib::color::{Color, to_render_color};
use lazylib::ellipse::point_on_ellipse;
use lazylib::math::{distance, point_on_circumference};
use lazylib::shapes::{arc_vertices, circle_vertices, create_circle};
use lazylib::vector::to_vector_list;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NUM_TESTS: usize = 10_000;

#[test]
fn distance_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..NUM_TESTS {
        let a = [rng.random_range(-1e4..1e4), rng.random_range(-1e4..1e4)];
        let b = [rng.random_range(-1e4..1e4), rng.random_range(-1e4..1e4)];
        assert_eq!(distance(a, b), distance(b, a));
        assert_eq!(distance(a, a), 0.0);
    }
    let huge = distance([0.0, 0.0], [3e30, 4e30]);
    assert!(((huge - 5e30) / 5e30).abs() < 1e-6, "{huge}");
}

#[test]
fn crossing_beams_meet_once() {
    // Two beams through a common point from random directions
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..NUM_TESTS {
        let hit = [rng.random_range(-100.0..100.0), rng.random_range(-100.0..100.0)];
        let first = rng.random_range(0.0..180.0f32);
        let second = first + rng.random_range(20.0..160.0f32);
        let s1 = Segment::new(
            point_on_circumference(hit, 50.0, first),
            point_on_circumference(hit, 50.0, first + 180.0),
        );
        let s2 = Segment::new(
            point_on_circumference(hit, 30.0, second),
            point_on_circumference(hit, 30.0, second + 180.0),
        );
        let clamped = segment_intersect(s1, s2, true).unwrap();
        assert_close(clamped, hit, 1e-2);
        assert_eq!(Some(clamped), segment_intersect(s1, s2, false));
    }
}

#[test]
fn ellipse_axes() {
    let focus = [-30.0, 45.0];
    assert_close(point_on_ellipse(focus, 60.0, 20.0, 0.0, 0.0), [0.0, 45.0], 1e-4);
    assert_close(point_on_ellipse(focus, 60.0, 20.0, 0.0, 90.0), [-30.0, 55.0], 1e-4);
}

#[test]
fn tessellations_feed_vertex_buffers() {
    let ring: Vec<_> = circle_vertices([0.0, 0.0], 10.0, 24, true).vertices().collect();
    let flat = create_circle(0.0, 0.0, 10.0, 24);
    assert_eq!(to_vector_list(&flat).unwrap(), ring);

    let arc: Vec<_> = arc_vertices([0.0, 0.0], 10.0, 270.0, 180.0, 6).collect();
    assert_eq!(arc.len(), 7);
    assert_close(arc[0], [0.0, -10.0], 1e-4);
    assert_close(arc[6], [0.0, 10.0], 1e-3);
}

#[test]
fn faded_colors_keep_their_hue() {
    let color = Color::rgba(200, 100, 50, 180);
    assert_eq!(to_render_color(color, 0.5, false), [200, 100, 50, 90]);
    assert_eq!(to_render_color(color, 0.5, true), [200, 100, 50, 128]);
}
