use super::{Binding, Orbit};
use crate::ellipse::point_on_ellipse_rotated;
use crate::fast_trig;
use crate::host::{Located, Movable, SimClock};
use crate::math::clamp_angle;

/// Constant angular speed around an ellipse centered on the focus.
///
/// `orbit_width` and `orbit_height` are the ellipse's full extents;
/// `orbit_angle` rotates it, in degrees.
#[derive(Debug, Clone)]
pub struct EllipticalOrbit<F, T> {
    focus: F,
    orbit_width: f32,
    orbit_height: f32,
    orbit_angle: f32,
    offset_sin: f32,
    offset_cos: f32,
    /// Degrees per day
    speed: f32,
    current_angle: f32,
    target: Binding<T>,
}

impl<F: Located, T: Movable> EllipticalOrbit<F, T> {
    /// An unbound orbit. `starting_angle` defaults to 0 degrees.
    pub fn new(
        focus: F,
        orbit_width: f32,
        orbit_height: f32,
        orbit_angle: f32,
        starting_angle: Option<f32>,
        days_per_orbit: f32,
    ) -> EllipticalOrbit<F, T> {
        let offset = orbit_angle.to_radians();
        EllipticalOrbit {
            focus,
            orbit_width,
            orbit_height,
            orbit_angle,
            offset_sin: fast_trig::sin(offset),
            offset_cos: fast_trig::cos(offset),
            speed: 360.0 / days_per_orbit,
            current_angle: starting_angle.unwrap_or(0.0),
            target: Binding::Unbound,
        }
    }

    /// Current angle along the ellipse, in degrees.
    pub fn angle(&self) -> f32 {
        self.current_angle
    }

    /// Stores `angle` and, if bound, moves the target there.
    pub fn set_angle(&mut self, angle: f32) {
        self.current_angle = angle;
        if self.target.is_bound() {
            let location = self.compute_current_location();
            if let Some(target) = self.target.as_mut() {
                target.set_location(location);
            }
        }
    }

    /// Attaches `target` and snaps it onto the orbit. Returns the target
    /// it replaces, if any.
    pub fn bind(&mut self, target: T) -> Option<T> {
        let previous = self.target.replace(Binding::Bound(target));
        log::debug!(
            "bound orbit ({} x {}) at {} degrees",
            self.orbit_width,
            self.orbit_height,
            self.current_angle
        );
        self.set_angle(self.current_angle);
        previous
    }

    pub fn unbind(&mut self) -> Option<T> {
        let previous = self.target.replace(Binding::Unbound);
        if previous.is_some() {
            log::debug!("unbound orbit at {} degrees", self.current_angle);
        }
        previous
    }

    pub fn is_bound(&self) -> bool {
        self.target.is_bound()
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    pub fn target_mut(&mut self) -> Option<&mut T> {
        self.target.as_mut()
    }

    pub fn focus(&self) -> &F {
        &self.focus
    }

    pub fn orbit_width(&self) -> f32 {
        self.orbit_width
    }

    pub fn orbit_height(&self) -> f32 {
        self.orbit_height
    }

    pub fn orbit_angle(&self) -> f32 {
        self.orbit_angle
    }

    /// Same orbit and position, without a target.
    pub fn copy_unbound<U: Movable>(&self) -> EllipticalOrbit<F, U>
    where
        F: Clone,
    {
        EllipticalOrbit {
            focus: self.focus.clone(),
            orbit_width: self.orbit_width,
            orbit_height: self.orbit_height,
            orbit_angle: self.orbit_angle,
            offset_sin: self.offset_sin,
            offset_cos: self.offset_cos,
            speed: self.speed,
            current_angle: self.current_angle,
            target: Binding::Unbound,
        }
    }
}

impl<F: Located, T: Movable> Orbit for EllipticalOrbit<F, T> {
    fn focus_location(&self) -> [f32; 2] {
        self.focus.location()
    }

    fn advance(&mut self, clock: &dyn SimClock, amount: f32) {
        if !self.target.is_bound() {
            return;
        }

        let days = clock.convert_to_days(amount);
        let angle = clamp_angle(self.current_angle + self.speed * days);
        log::trace!("orbit advanced {days} days to {angle} degrees");
        self.set_angle(angle);
    }

    fn orbital_period(&self) -> f32 {
        360.0 / self.speed
    }

    fn compute_current_location(&self) -> [f32; 2] {
        point_on_ellipse_rotated(
            self.focus.location(),
            self.orbit_width,
            self.orbit_height,
            self.offset_sin,
            self.offset_cos,
            self.current_angle,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::FixedClock;
    use crate::math::{distance, shortest_rotation};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn assert_close(a: [f32; 2], b: [f32; 2], tolerance: f32) {
        assert!(
            (a[0] - b[0]).abs() < tolerance && (a[1] - b[1]).abs() < tolerance,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn bind_snaps_target_onto_the_orbit() {
        let mut orbit = EllipticalOrbit::new([100.0, 100.0], 200.0, 100.0, 0.0, Some(90.0), 5.0);
        let mut planet = [0.0, 0.0];
        assert_eq!(orbit.bind(&mut planet), None);
        assert!(orbit.is_bound());
        drop(orbit);
        assert_close(planet, [100.0, 150.0], 1e-3);
    }

    #[test]
    fn unbound_orbit_is_inert() {
        let clock = FixedClock::default();
        let mut orbit: EllipticalOrbit<[f32; 2], [f32; 2]> =
            EllipticalOrbit::new([0.0, 0.0], 10.0, 10.0, 0.0, Some(45.0), 1.0);
        orbit.advance(&clock, 100.0);
        assert_eq!(orbit.angle(), 45.0);
        orbit.set_angle(400.0);
        assert_eq!(orbit.angle(), 400.0);
        assert_eq!(orbit.unbind(), None);
    }

    #[test]
    fn advance_wraps_the_angle() {
        let clock = FixedClock::new(Some(1.0));
        let mut orbit = EllipticalOrbit::new([0.0, 0.0], 10.0, 10.0, 0.0, Some(350.0), 36.0);
        orbit.bind([0.0, 0.0]);
        orbit.advance(&clock, 2.0);
        assert!((orbit.angle() - 10.0).abs() < 1e-3, "{}", orbit.angle());
        assert_eq!(orbit.orbital_period(), 36.0);
    }

    #[test]
    fn full_period_returns_to_the_start() {
        let clock = FixedClock::default();
        let planet = Rc::new(RefCell::new([0.0f32, 0.0]));
        let mut orbit = EllipticalOrbit::new([500.0, -200.0], 300.0, 120.0, 35.0, Some(30.0), 2.0);
        orbit.bind(Rc::clone(&planet));
        let start = *planet.borrow();

        // 2 days at 10 seconds per day
        for _ in 0..200 {
            orbit.advance(&clock, 0.1);
        }

        assert!(shortest_rotation(30.0, orbit.angle()).abs() < 0.05, "{}", orbit.angle());
        assert!(distance(start, *planet.borrow()) < 0.2);
    }

    #[test]
    fn rotated_orbit_follows_its_focus() {
        let focus = RefCell::new([0.0f32, 0.0]);
        let mut orbit = EllipticalOrbit::new(&focus, 40.0, 20.0, 90.0, None, 1.0);
        let mut moon = [0.0, 0.0];
        orbit.bind(&mut moon);
        assert_close(orbit.compute_current_location(), [0.0, 20.0], 1e-3);

        *focus.borrow_mut() = [10.0, 10.0];
        orbit.set_angle(0.0);
        assert_eq!(orbit.focus_location(), [10.0, 10.0]);
        assert_close(orbit.target().map_or([0.0; 2], |moon| **moon), [10.0, 30.0], 1e-3);
    }

    #[test]
    fn rebinding_hands_back_the_old_target() {
        let mut orbit = EllipticalOrbit::new([0.0, 0.0], 10.0, 10.0, 0.0, None, 1.0);
        orbit.bind([1.0, 1.0]);
        let previous = orbit.bind([2.0, 2.0]);
        assert_close(previous.unwrap_or_default(), [5.0, 0.0], 1e-4);

        let copy: EllipticalOrbit<[f32; 2], [f32; 2]> = orbit.copy_unbound();
        assert!(!copy.is_bound());
        assert_eq!(copy.angle(), orbit.angle());
        assert_eq!(copy.orbit_width(), 10.0);
    }
}
