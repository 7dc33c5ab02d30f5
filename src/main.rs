//! A small orrery and turret demo for lazylib.
//!
//! A planet follows an elliptical orbit around a star while its moon follows
//! a Keplerian orbit around the planet. A rotating ship carries a turret
//! anchored to its hull, and the turret's beam stops where it hits a wall.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use lazylib::collision::{Segment, collision_point};
use lazylib::color::{Color, to_render_color_exact};
use lazylib::draw::{draw_arc, draw_circle, draw_ellipse, to_gfx_color};
use lazylib::entities::AnchoredEntity;
use lazylib::host::{CombatEntity, Located};
use lazylib::math::{clamp_angle, point_on_circumference};
use lazylib::orbit::{EllipticalOrbit, FixedClock, KeplerOrbit, Orbit};
use sdl2::event::Event;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::keyboard::Keycode;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Window title displayed in the title bar
const TITLE: &str = "lazylib demo";
/// Width of the window in pixels
const WINDOW_WIDTH: u32 = 800;
/// Height of the window in pixels
const WINDOW_HEIGHT: u32 = 800;
const BACKGROUND: Color = Color::BLACK;
const STAR_COUNT: usize = 120;
/// Degrees per second the ship turns
const SHIP_TURN_RATE: f32 = 25.0;
const BEAM_LENGTH: f32 = 600.0;

/// A ship that spins in place.
struct Ship {
    location: [f32; 2],
    facing: f32,
}

impl Located for Ship {
    fn location(&self) -> [f32; 2] {
        self.location
    }
}

impl CombatEntity for Ship {
    fn facing(&self) -> f32 {
        self.facing
    }

    fn collision_radius(&self) -> f32 {
        30.0
    }
}

type Body = Rc<RefCell<[f32; 2]>>;

struct Scene {
    stars: Vec<([f32; 2], Color)>,
    star: [f32; 2],
    planet: Body,
    moon: Body,
    planet_orbit: EllipticalOrbit<[f32; 2], Body>,
    moon_orbit: KeplerOrbit<Body, Body>,
    ship: Rc<RefCell<Ship>>,
    turret: AnchoredEntity<Rc<RefCell<Ship>>>,
    wall: Segment,
}

/// Builds the scene and binds both orbits.
fn set_up() -> Scene {
    let mut rng = rand::rng();
    let stars = (0..STAR_COUNT)
        .map(|_| {
            let x: f32 = rand::random_range(0.0..WINDOW_WIDTH as f32);
            let y: f32 = rand::random_range(0.0..WINDOW_HEIGHT as f32);
            ([x, y], Color::random(&mut rng))
        })
        .collect();

    let star = [WINDOW_WIDTH as f32 / 2.0, WINDOW_HEIGHT as f32 / 2.0];
    let planet: Body = Rc::new(RefCell::new([0.0, 0.0]));
    let moon: Body = Rc::new(RefCell::new([0.0, 0.0]));

    let mut planet_orbit = EllipticalOrbit::new(star, 520.0, 360.0, 20.0, Some(0.0), 6.0);
    planet_orbit.bind(Rc::clone(&planet));
    let mut moon_orbit = KeplerOrbit::new(Rc::clone(&planet), 110.0, 70.0, 45.0, 12.0, true);
    moon_orbit.bind(Rc::clone(&moon));

    let ship = Rc::new(RefCell::new(Ship {
        location: [140.0, 660.0],
        facing: 0.0,
    }));
    let turret = AnchoredEntity::new(Rc::clone(&ship), [165.0, 660.0]);

    Scene {
        stars,
        star,
        planet,
        moon,
        planet_orbit,
        moon_orbit,
        ship,
        turret,
        wall: Segment::new([40.0, 420.0], [360.0, 500.0]),
    }
}

/// Advances the simulation and renders one frame.
fn main_loop(scene: &mut Scene, canvas: &mut Canvas<Window>, clock: &FixedClock, dt: f32) -> Result<(), String> {
    canvas.set_draw_color(BACKGROUND);
    canvas.clear();

    scene.planet_orbit.advance(clock, dt);
    scene.moon_orbit.advance(clock, dt);
    {
        let mut ship = scene.ship.borrow_mut();
        ship.facing = clamp_angle(ship.facing + SHIP_TURN_RATE * dt);
    }

    for (position, color) in &scene.stars {
        canvas.pixel(position[0] as i16, position[1] as i16, to_gfx_color(to_render_color_exact(*color)))?;
    }

    draw_ellipse(
        canvas,
        scene.star,
        scene.planet_orbit.orbit_width(),
        scene.planet_orbit.orbit_height(),
        scene.planet_orbit.orbit_angle(),
        Some(96),
        false,
        Color::rgba(80, 80, 80, 255),
    )?;
    draw_circle(canvas, scene.star, 40.0, None, true, Color::YELLOW, 1.0)?;
    draw_circle(canvas, *scene.planet.borrow(), 14.0, None, true, Color::BLUE, 1.0)?;
    draw_circle(canvas, *scene.moon.borrow(), 5.0, Some(12), true, Color::WHITE, 1.0)?;

    draw_scene_ship(scene, canvas)
}

/// Draws the ship, its turret, and the turret's beam against the wall.
fn draw_scene_ship(scene: &Scene, canvas: &mut Canvas<Window>) -> Result<(), String> {
    let ship = scene.ship.borrow();
    let radius = ship.collision_radius();
    draw_circle(canvas, ship.location, radius, None, false, Color::GREEN, 0.6)?;
    // Forward arc marks the bow
    draw_arc(canvas, ship.location, radius + 6.0, ship.facing - 30.0, 60.0, Some(8), false, Color::GREEN)?;

    let muzzle = scene.turret.location();
    draw_circle(canvas, muzzle, 6.0, Some(10), true, Color::CYAN, 1.0)?;

    let beam = Segment::new(muzzle, point_on_circumference(muzzle, BEAM_LENGTH, scene.turret.facing()));
    let end = collision_point(beam, scene.wall).unwrap_or(beam.b);
    let wall_color = to_gfx_color(to_render_color_exact(Color::rgb(160, 160, 160)));
    canvas.thick_line(
        scene.wall.a[0] as i16,
        scene.wall.a[1] as i16,
        scene.wall.b[0] as i16,
        scene.wall.b[1] as i16,
        4,
        wall_color,
    )?;
    let beam_color = to_gfx_color(to_render_color_exact(Color::RED));
    canvas.line(muzzle[0] as i16, muzzle[1] as i16, end[0] as i16, end[1] as i16, beam_color)?;
    if end != beam.b {
        draw_circle(canvas, end, 4.0, Some(8), true, Color::YELLOW, 0.8)?;
    }
    Ok(())
}

fn main() -> Result<(), String> {
    env_logger::init();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window(TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas.set_draw_color(BACKGROUND);
    canvas.clear();
    canvas.present();

    let mut scene = set_up();
    let clock = FixedClock::default();
    log::info!("demo running, {} seconds per day", clock.seconds_per_day);

    let mut last_frame_time = Instant::now();
    let mut event_pump = sdl_context.event_pump()?;

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } | Event::KeyDown { keycode: Some(Keycode::Escape), .. } => break 'running,
                _ => {}
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_frame_time).as_secs_f32();
        last_frame_time = now;

        main_loop(&mut scene, &mut canvas, &clock, dt)?;

        canvas.present();
        // Target 60 FPS
        ::std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 60));
    }
    Ok(())
}
