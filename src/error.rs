//! Error taxonomy for the few operations that can fail.
//!
//! Most of the crate is total over its inputs. A missing segment
//! intersection is reported as `None`, not as an error.

use thiserror::Error;

/// Errors surfaced to callers. None of these are retried internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LazyError {
    /// The host object exposes no accessor with the required name.
    #[error("object of shape `{shape}` has no `{accessor}` accessor")]
    MissingCapability { shape: String, accessor: String },

    /// The accessor exists but takes arguments or returns the wrong kind.
    #[error("accessor `{accessor}` on shape `{shape}` returns {found}, expected {expected}")]
    WrongShape {
        shape: String,
        accessor: String,
        expected: String,
        found: String,
    },

    /// Flat coordinate buffers must hold x/y pairs.
    #[error("coordinates must come in pairs, got {0} values")]
    OddCoordinateCount(usize),

    #[error("space between points must be positive, got {0}")]
    NonPositiveSpacing(f32),
}

pub type Result<T> = std::result::Result<T, LazyError>;
