//! Bodies circling a focus over simulated time.
//!
//! An orbit reads its focus's location on every update and, while bound to
//! a target, writes the computed position into it. Unbound orbits are inert:
//! advancing them does nothing and nothing fails.

mod elliptical;
mod kepler;

pub use elliptical::EllipticalOrbit;
pub use kepler::{
    KeplerOrbit, MAXIMUM_AXIS, MAXIMUM_ECCENTRICITY, MAXIMUM_PERIOD, MINIMUM_AXIS,
    MINIMUM_ECCENTRICITY, MINIMUM_PERIOD,
};
pub use crate::host::{DEFAULT_SECONDS_PER_DAY, FixedClock};

use crate::host::SimClock;

/// The object an orbit is currently moving, if any.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding<T> {
    Unbound,
    Bound(T),
}

impl<T> Binding<T> {
    pub fn is_bound(&self) -> bool {
        matches!(self, Binding::Bound(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Binding::Bound(target) => Some(target),
            Binding::Unbound => None,
        }
    }

    pub fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Binding::Bound(target) => Some(target),
            Binding::Unbound => None,
        }
    }

    /// Replaces the binding, returning the previous target.
    pub fn replace(&mut self, binding: Binding<T>) -> Option<T> {
        std::mem::replace(self, binding).into_option()
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Binding::Bound(target) => Some(target),
            Binding::Unbound => None,
        }
    }
}

impl<T> Default for Binding<T> {
    fn default() -> Self {
        Binding::Unbound
    }
}

impl<T> From<Option<T>> for Binding<T> {
    fn from(target: Option<T>) -> Self {
        target.map_or(Binding::Unbound, Binding::Bound)
    }
}

pub trait Orbit {
    fn focus_location(&self) -> [f32; 2];

    /// Moves the orbit forward by `amount` of raw simulation time, which
    /// `clock` converts to days.
    fn advance(&mut self, clock: &dyn SimClock, amount: f32);

    /// Days needed for one full revolution.
    fn orbital_period(&self) -> f32;

    fn compute_current_location(&self) -> [f32; 2];
}
