//! Geometry, orbit and proxy-entity helpers for 2D space-combat game mods.
//!
//! Points and vectors are plain `[f32; 2]` values. Angles are in degrees
//! with 0 along +x unless a function says otherwise. Host engine objects
//! plug in through the capability traits in [`host`].

pub mod collision;
pub mod color;
#[cfg(feature = "sdl")]
pub mod draw;
pub mod ellipse;
pub mod entities;
pub mod error;
pub mod fast_trig;
pub mod host;
pub mod math;
pub mod orbit;
pub mod reflect;
pub mod shapes;
pub mod vector;

pub use error::{LazyError, Result};
