//! Cheap trigonometry for hot per-frame paths.
//!
//! `sin`/`cos` only reduce the argument before calling into std, which keeps
//! them exact enough for vertex math. `atan`/`atan2` use a polynomial fit and
//! are off by up to ~0.005 radians; use the std versions when that matters.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

/// Folds any angle into [-PI/2, PI/2] without changing its sine.
fn reduce_sin_angle(radians: f32) -> f32 {
    let mut radians = radians % TAU;
    if radians.abs() > PI {
        radians -= TAU.copysign(radians);
    }
    if radians.abs() > FRAC_PI_2 {
        radians = PI.copysign(radians) - radians;
    }
    radians
}

pub fn sin(radians: f32) -> f32 {
    let radians = reduce_sin_angle(radians);
    if radians.abs() <= FRAC_PI_4 {
        radians.sin()
    } else {
        (FRAC_PI_2.copysign(radians) - radians).cos().copysign(radians)
    }
}

pub fn cos(radians: f32) -> f32 {
    sin(radians + FRAC_PI_2)
}

/// Polynomial arctangent, only valid for `z` in [-1, 1].
pub fn atan(z: f32) -> f32 {
    (0.972_394_1 + -0.191_947_95 * z * z) * z
}

pub fn atan2(y: f32, x: f32) -> f32 {
    let ay = y.abs();
    let ax = x.abs();
    if ax == 0.0 && ay == 0.0 {
        return 0.0;
    }
    let invert = ay > ax;
    let z = if invert { ax / ay } else { ay / ax };
    let mut th = atan(z);
    if invert {
        th = FRAC_PI_2 - th;
    }
    if x < 0.0 {
        th = PI - th;
    }
    th.copysign(y)
}
