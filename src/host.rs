//! Capabilities the host engine implements so its objects can be used by
//! orbits and proxy entities.
//!
//! Implementations are provided for shared and interior-mutable wrappers,
//! so a host can hand out `&Ship`, `Rc<RefCell<Ship>>` or `Arc<Ship>`
//! without this crate owning anything.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// Anything with a world position.
pub trait Located {
    fn location(&self) -> [f32; 2];
}

/// A positioned object whose location can be written, e.g. an orbiting body.
pub trait Movable: Located {
    fn set_location(&mut self, location: [f32; 2]);
}

/// Orientation and motion of a combat object.
///
/// The defaults describe a motionless point facing +x.
pub trait CombatEntity: Located {
    /// Facing in degrees, 0 = +x.
    fn facing(&self) -> f32 {
        0.0
    }

    fn velocity(&self) -> [f32; 2] {
        [0.0, 0.0]
    }

    fn collision_radius(&self) -> f32 {
        0.0
    }
}

/// Converts raw simulation time into elapsed in-game days.
pub trait SimClock {
    fn convert_to_days(&self, amount: f32) -> f32;
}

/// Seconds of simulation time per in-game day.
pub const DEFAULT_SECONDS_PER_DAY: f32 = 10.0;

/// A clock with a constant number of seconds per day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock {
    pub seconds_per_day: f32,
}

impl FixedClock {
    pub fn new(seconds_per_day: Option<f32>) -> FixedClock {
        FixedClock {
            seconds_per_day: seconds_per_day.unwrap_or(DEFAULT_SECONDS_PER_DAY),
        }
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        FixedClock::new(None)
    }
}

impl SimClock for FixedClock {
    fn convert_to_days(&self, amount: f32) -> f32 {
        amount / self.seconds_per_day
    }
}

impl Located for [f32; 2] {
    fn location(&self) -> [f32; 2] {
        *self
    }
}

impl Movable for [f32; 2] {
    fn set_location(&mut self, location: [f32; 2]) {
        *self = location;
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn location(&self) -> [f32; 2] {
        (**self).location()
    }
}

impl<T: Located + ?Sized> Located for &mut T {
    fn location(&self) -> [f32; 2] {
        (**self).location()
    }
}

impl<T: Movable + ?Sized> Movable for &mut T {
    fn set_location(&mut self, location: [f32; 2]) {
        (**self).set_location(location)
    }
}

impl<T: Located + ?Sized> Located for Box<T> {
    fn location(&self) -> [f32; 2] {
        (**self).location()
    }
}

impl<T: Located + ?Sized> Located for Rc<T> {
    fn location(&self) -> [f32; 2] {
        (**self).location()
    }
}

impl<T: Located + ?Sized> Located for Arc<T> {
    fn location(&self) -> [f32; 2] {
        (**self).location()
    }
}

impl<T: Located + ?Sized> Located for RefCell<T> {
    fn location(&self) -> [f32; 2] {
        self.borrow().location()
    }
}

/// Shared host objects are moved through their `RefCell`.
impl<T: Movable + ?Sized> Movable for Rc<RefCell<T>> {
    fn set_location(&mut self, location: [f32; 2]) {
        self.borrow_mut().set_location(location)
    }
}

impl<T: CombatEntity + ?Sized> CombatEntity for &T {
    fn facing(&self) -> f32 {
        (**self).facing()
    }

    fn velocity(&self) -> [f32; 2] {
        (**self).velocity()
    }

    fn collision_radius(&self) -> f32 {
        (**self).collision_radius()
    }
}

impl<T: CombatEntity + ?Sized> CombatEntity for Rc<T> {
    fn facing(&self) -> f32 {
        (**self).facing()
    }

    fn velocity(&self) -> [f32; 2] {
        (**self).velocity()
    }

    fn collision_radius(&self) -> f32 {
        (**self).collision_radius()
    }
}

impl<T: CombatEntity + ?Sized> CombatEntity for Arc<T> {
    fn facing(&self) -> f32 {
        (**self).facing()
    }

    fn velocity(&self) -> [f32; 2] {
        (**self).velocity()
    }

    fn collision_radius(&self) -> f32 {
        (**self).collision_radius()
    }
}

impl<T: CombatEntity + ?Sized> CombatEntity for RefCell<T> {
    fn facing(&self) -> f32 {
        self.borrow().facing()
    }

    fn velocity(&self) -> [f32; 2] {
        self.borrow().velocity()
    }

    fn collision_radius(&self) -> f32 {
        self.borrow().collision_radius()
    }
}
