#![allow(dead_code)]

use lazylib::host::{CombatEntity, Located, Movable};

/// A minimal host-side combat object.
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub location: [f32; 2],
    pub facing: f32,
    pub velocity: [f32; 2],
}

impl Ship {
    pub fn new(location: [f32; 2], facing: f32) -> Ship {
        Ship {
            location,
            facing,
            velocity: [0.0, 0.0],
        }
    }
}

impl Located for Ship {
    fn location(&self) -> [f32; 2] {
        self.location
    }
}

impl Movable for Ship {
    fn set_location(&mut self, location: [f32; 2]) {
        self.location = location;
    }
}

impl CombatEntity for Ship {
    fn facing(&self) -> f32 {
        self.facing
    }

    fn velocity(&self) -> [f32; 2] {
        self.velocity
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn assert_close(actual: [f32; 2], expected: [f32; 2], tolerance: f32) {
    assert!(
        (actual[0] - expected[0]).abs() <= tolerance && (actual[1] - expected[1]).abs() <= tolerance,
        "{actual:?} is not within {tolerance} of {expected:?}"
    );
}
