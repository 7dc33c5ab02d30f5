use std::f32::consts::{PI, TAU};

use super::{Binding, Orbit};
use crate::fast_trig;
use crate::host::{Located, Movable, SimClock};

pub const MINIMUM_ECCENTRICITY: f32 = 0.001;
pub const MAXIMUM_ECCENTRICITY: f32 = 0.999;
pub const MINIMUM_AXIS: f32 = 100.0;
pub const MAXIMUM_AXIS: f32 = 1_000_000.0;
/// Orbital period limits, in days.
pub const MINIMUM_PERIOD: f32 = 10.0;
pub const MAXIMUM_PERIOD: f32 = 1_000_000.0;

const MAXIMUM_ERROR: f32 = 0.0001;
/// Above this eccentricity Newton's method starts from pi instead of the
/// mean anomaly.
const ECCENTRICITY_CUTOFF: f32 = 0.8;
const MAXIMUM_ITERATIONS: usize = 100;

/// Keplerian orbit with the focus at one focal point of the ellipse.
///
/// The body moves fast near the focus and slowly far from it. Time starts
/// at pericenter, which lies along `angle` degrees from the focus.
#[derive(Debug, Clone)]
pub struct KeplerOrbit<F, T> {
    focus: F,
    semi_major_axis: f32,
    semi_minor_axis: f32,
    eccentricity: f32,
    angle: f32,
    angle_sin: f32,
    angle_cos: f32,
    period: f32,
    clockwise: bool,
    /// Days since pericenter, kept within one period
    time: f32,
    eccentric_anomaly: f32,
    target: Binding<T>,
}

impl<F: Located, T: Movable> KeplerOrbit<F, T> {
    /// Axes are made positive, ordered, and clamped to
    /// [`MINIMUM_AXIS`]..[`MAXIMUM_AXIS`]; the major axis is then stretched
    /// as needed to keep the eccentricity within
    /// [`MINIMUM_ECCENTRICITY`]..[`MAXIMUM_ECCENTRICITY`]. `period` is
    /// clamped to [`MINIMUM_PERIOD`]..[`MAXIMUM_PERIOD`] days.
    pub fn new(
        focus: F,
        semi_major_axis: f32,
        semi_minor_axis: f32,
        angle: f32,
        period: f32,
        clockwise: bool,
    ) -> KeplerOrbit<F, T> {
        let longer = semi_major_axis.abs().max(semi_minor_axis.abs());
        let shorter = semi_major_axis.abs().min(semi_minor_axis.abs());
        let mut a = longer.clamp(MINIMUM_AXIS, MAXIMUM_AXIS);
        let b = shorter.clamp(MINIMUM_AXIS, MAXIMUM_AXIS);

        let e = eccentricity_of(a, b);
        if e < MINIMUM_ECCENTRICITY {
            a = b / (1.0 - MINIMUM_ECCENTRICITY * MINIMUM_ECCENTRICITY).sqrt();
        } else if e > MAXIMUM_ECCENTRICITY {
            a = b / (1.0 - MAXIMUM_ECCENTRICITY * MAXIMUM_ECCENTRICITY).sqrt();
        }

        let rad = angle.to_radians();
        let mut orbit = KeplerOrbit {
            focus,
            semi_major_axis: a,
            semi_minor_axis: b,
            eccentricity: eccentricity_of(a, b),
            angle,
            angle_sin: fast_trig::sin(rad),
            angle_cos: fast_trig::cos(rad),
            period: period.abs().clamp(MINIMUM_PERIOD, MAXIMUM_PERIOD),
            clockwise,
            time: 0.0,
            eccentric_anomaly: 0.0,
            target: Binding::Unbound,
        };
        orbit.eccentric_anomaly = orbit.solve_eccentric_anomaly();
        orbit
    }

    pub fn semi_major_axis(&self) -> f32 {
        self.semi_major_axis
    }

    pub fn semi_minor_axis(&self) -> f32 {
        self.semi_minor_axis
    }

    pub fn eccentricity(&self) -> f32 {
        self.eccentricity
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    /// Days since the last pericenter passage.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Mean anomaly in radians, in [0, 2pi).
    pub fn mean_anomaly(&self) -> f32 {
        TAU / self.period * self.time
    }

    pub fn eccentric_anomaly(&self) -> f32 {
        self.eccentric_anomaly
    }

    /// Newton's method on Kepler's equation `E - e sin E = M`.
    fn solve_eccentric_anomaly(&self) -> f32 {
        let e = self.eccentricity;
        let mean = self.mean_anomaly();
        let kepler = |ea: f32| ea - e * ea.sin() - mean;

        let mut ea = if e < ECCENTRICITY_CUTOFF { mean } else { PI };
        let mut error = kepler(ea);
        let mut iterations = 0;
        while error.abs() > MAXIMUM_ERROR && iterations < MAXIMUM_ITERATIONS {
            ea -= error / (1.0 - e * ea.cos());
            error = kepler(ea);
            iterations += 1;
        }

        if !ea.is_finite() {
            log::warn!("eccentric anomaly diverged (e = {e}, M = {mean}), using mean anomaly");
            return mean;
        }
        ea
    }

    pub fn bind(&mut self, target: T) -> Option<T> {
        let previous = self.target.replace(Binding::Bound(target));
        log::debug!(
            "bound kepler orbit (a = {}, e = {}) at day {}",
            self.semi_major_axis,
            self.eccentricity,
            self.time
        );
        self.update_location();
        previous
    }

    pub fn unbind(&mut self) -> Option<T> {
        let previous = self.target.replace(Binding::Unbound);
        if previous.is_some() {
            log::debug!("unbound kepler orbit at day {}", self.time);
        }
        previous
    }

    pub fn is_bound(&self) -> bool {
        self.target.is_bound()
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    /// Writes the current position into the bound target, if any.
    pub fn update_location(&mut self) {
        if self.target.is_bound() {
            let location = self.compute_current_location();
            if let Some(target) = self.target.as_mut() {
                target.set_location(location);
            }
        }
    }

    /// Same orbit, restarted at pericenter, without a target.
    pub fn copy_unbound<U: Movable>(&self) -> KeplerOrbit<F, U>
    where
        F: Clone,
    {
        KeplerOrbit::new(
            self.focus.clone(),
            self.semi_major_axis,
            self.semi_minor_axis,
            self.angle,
            self.period,
            self.clockwise,
        )
    }
}

fn eccentricity_of(semi_major_axis: f32, semi_minor_axis: f32) -> f32 {
    let ratio = semi_minor_axis / semi_major_axis;
    (1.0 - ratio * ratio).max(0.0).sqrt()
}

impl<F: Located, T: Movable> Orbit for KeplerOrbit<F, T> {
    fn focus_location(&self) -> [f32; 2] {
        self.focus.location()
    }

    fn advance(&mut self, clock: &dyn SimClock, amount: f32) {
        if !self.target.is_bound() {
            return;
        }

        self.time = (self.time + clock.convert_to_days(amount)).rem_euclid(self.period);
        self.eccentric_anomaly = self.solve_eccentric_anomaly();
        log::trace!("kepler orbit at day {}, E = {}", self.time, self.eccentric_anomaly);
        self.update_location();
    }

    fn orbital_period(&self) -> f32 {
        self.period
    }

    fn compute_current_location(&self) -> [f32; 2] {
        let ea = self.eccentric_anomaly;
        // Relative to the focal point, pericenter on +x
        let x = self.semi_major_axis * (ea.cos() - self.eccentricity);
        let mut y = self.semi_minor_axis * ea.sin();
        if self.clockwise {
            y = -y;
        }

        let focus = self.focus.location();
        [
            x * self.angle_cos - y * self.angle_sin + focus[0],
            x * self.angle_sin + y * self.angle_cos + focus[1],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::FixedClock;
    use crate::math::distance;
    use crate::vector::{cross_product, find_vector};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    type Planet = KeplerOrbit<[f32; 2], [f32; 2]>;

    #[test]
    fn parameters_are_clamped() {
        let orbit = Planet::new([0.0, 0.0], 5.0, -50.0, 0.0, 1.0, false);
        assert!(orbit.semi_minor_axis() >= MINIMUM_AXIS);
        assert!(orbit.semi_major_axis() > orbit.semi_minor_axis());
        assert!(orbit.eccentricity() > 0.0);
        assert_eq!(orbit.orbital_period(), MINIMUM_PERIOD);

        let flat = Planet::new([0.0, 0.0], 500_000.0, 100.0, 0.0, 2e6, false);
        assert!(flat.eccentricity() <= MAXIMUM_ECCENTRICITY + 1e-4);
        assert_eq!(flat.orbital_period(), MAXIMUM_PERIOD);

        let swapped = Planet::new([0.0, 0.0], 300.0, 600.0, 0.0, 20.0, false);
        assert_eq!(swapped.semi_major_axis(), 600.0);
        assert_eq!(swapped.semi_minor_axis(), 300.0);
    }

    #[test]
    fn starts_at_pericenter_and_reaches_apocenter_at_half_period() {
        let focus = [250.0, -40.0];
        let mut orbit = Planet::new(focus, 1000.0, 600.0, 0.0, 20.0, false);
        let e = orbit.eccentricity();
        assert!((e - 0.8).abs() < 1e-4);

        orbit.bind([0.0, 0.0]);
        let pericenter = orbit.target().copied().unwrap_or_default();
        assert!((distance(pericenter, focus) - 1000.0 * (1.0 - e)).abs() < 0.05);
        assert!((pericenter[0] - (focus[0] + 200.0)).abs() < 0.1);

        let clock = FixedClock::new(Some(1.0));
        orbit.advance(&clock, 10.0);
        let apocenter = orbit.target().copied().unwrap_or_default();
        assert!((distance(apocenter, focus) - 1000.0 * (1.0 + e)).abs() < 0.05);
    }

    #[test]
    fn eccentric_anomaly_satisfies_keplers_equation() {
        let mut rng = StdRng::seed_from_u64(17);
        let clock = FixedClock::new(Some(1.0));
        for &minor in &[990.0, 800.0, 600.0, 300.0, 100.0] {
            let mut orbit = Planet::new([0.0, 0.0], 1000.0, minor, 15.0, 50.0, false);
            orbit.bind([0.0, 0.0]);
            for _ in 0..200 {
                orbit.advance(&clock, rng.random_range(0.0..7.0));
                let e = orbit.eccentricity();
                let ea = orbit.eccentric_anomaly();
                let residual = ea - e * ea.sin() - orbit.mean_anomaly();
                assert!(residual.abs() < 1e-3, "e={e} residual={residual}");
                assert!(orbit.time() < orbit.orbital_period());
            }
        }
    }

    #[test]
    fn moves_faster_near_the_focus() {
        let clock = FixedClock::new(Some(1.0));
        let mut orbit = Planet::new([0.0, 0.0], 1000.0, 600.0, 0.0, 100.0, false);
        orbit.bind([0.0, 0.0]);
        let start = orbit.compute_current_location();
        orbit.advance(&clock, 1.0);
        let near = distance(start, orbit.compute_current_location());

        orbit.advance(&clock, 49.0);
        let far_start = orbit.compute_current_location();
        orbit.advance(&clock, 1.0);
        let far = distance(far_start, orbit.compute_current_location());
        assert!(near > far * 5.0, "near {near} far {far}");
    }

    #[test]
    fn direction_follows_the_clockwise_flag() {
        let clock = FixedClock::new(Some(1.0));
        for clockwise in [false, true] {
            let mut orbit = Planet::new([0.0, 0.0], 400.0, 300.0, 60.0, 40.0, clockwise);
            orbit.bind([0.0, 0.0]);
            let before = orbit.compute_current_location();
            orbit.advance(&clock, 1.0);
            let after = orbit.compute_current_location();
            let turn = cross_product(find_vector([0.0, 0.0], before), find_vector([0.0, 0.0], after));
            assert_eq!(turn < 0.0, clockwise);
        }
    }

    #[test]
    fn unbound_orbit_keeps_its_time() {
        let clock = FixedClock::new(Some(1.0));
        let mut orbit = Planet::new([0.0, 0.0], 400.0, 300.0, 0.0, 40.0, false);
        orbit.advance(&clock, 5.0);
        assert_eq!(orbit.time(), 0.0);

        orbit.bind([0.0, 0.0]);
        orbit.advance(&clock, 5.0);
        let copy: Planet = orbit.copy_unbound();
        assert_eq!(copy.time(), 0.0);
        assert!(!copy.is_bound());
        assert!(orbit.unbind().is_some());
    }
}
