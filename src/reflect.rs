//! Following host objects whose capabilities are only known at runtime.
//!
//! Statically typed hosts should implement [`Located`] and use
//! [`MimicEntity`] directly. Scripting bridges and other dynamically shaped
//! hosts instead describe their accessors through [`HostObject`]; an
//! [`AccessorCache`] checks once per shape that a usable location accessor
//! exists, and every later mimic of the same shape skips the check.
//!
//! The cache is an ordinary value owned by the caller. Share it behind an
//! `Arc` if proxies are built from several threads.

use std::cell::Cell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::entities::MimicEntity;
use crate::error::{LazyError, Result};
use crate::host::Located;

/// Name of the accessor a followed object must expose.
pub const LOCATION_ACCESSOR: &str = "location";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Float,
    Vector,
    Bool,
    Text,
    Unit,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Float => "float",
            ValueKind::Vector => "vector",
            ValueKind::Bool => "bool",
            ValueKind::Text => "text",
            ValueKind::Unit => "nothing",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    Float(f32),
    Vector([f32; 2]),
    Bool(bool),
    Text(String),
    Unit,
}

impl HostValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            HostValue::Float(_) => ValueKind::Float,
            HostValue::Vector(_) => ValueKind::Vector,
            HostValue::Bool(_) => ValueKind::Bool,
            HostValue::Text(_) => ValueKind::Text,
            HostValue::Unit => ValueKind::Unit,
        }
    }
}

/// Declared signature of one accessor on a host object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorSig {
    pub name: String,
    pub params: usize,
    pub returns: ValueKind,
}

impl AccessorSig {
    pub fn new(name: impl Into<String>, params: usize, returns: ValueKind) -> AccessorSig {
        AccessorSig {
            name: name.into(),
            params,
            returns,
        }
    }
}

/// A host object described at runtime.
///
/// Objects reporting the same `shape` must expose the same accessors.
pub trait HostObject {
    fn shape(&self) -> &str;

    fn accessors(&self) -> Vec<AccessorSig>;

    /// Calls a parameterless accessor. `None` if the call failed.
    fn query(&self, accessor: &str) -> Option<HostValue>;
}

impl<T: HostObject + ?Sized> HostObject for &T {
    fn shape(&self) -> &str {
        (**self).shape()
    }

    fn accessors(&self) -> Vec<AccessorSig> {
        (**self).accessors()
    }

    fn query(&self, accessor: &str) -> Option<HostValue> {
        (**self).query(accessor)
    }
}

impl<T: HostObject + ?Sized> HostObject for Rc<T> {
    fn shape(&self) -> &str {
        (**self).shape()
    }

    fn accessors(&self) -> Vec<AccessorSig> {
        (**self).accessors()
    }

    fn query(&self, accessor: &str) -> Option<HostValue> {
        (**self).query(accessor)
    }
}

impl<T: HostObject + ?Sized> HostObject for Arc<T> {
    fn shape(&self) -> &str {
        (**self).shape()
    }

    fn accessors(&self) -> Vec<AccessorSig> {
        (**self).accessors()
    }

    fn query(&self, accessor: &str) -> Option<HostValue> {
        (**self).query(accessor)
    }
}

fn check_location_accessor<H: HostObject + ?Sized>(object: &H) -> Result<()> {
    let shape = object.shape();
    let Some(sig) = object
        .accessors()
        .into_iter()
        .find(|sig| sig.name == LOCATION_ACCESSOR && sig.params == 0)
    else {
        return Err(LazyError::MissingCapability {
            shape: shape.to_owned(),
            accessor: LOCATION_ACCESSOR.to_owned(),
        });
    };

    if sig.returns != ValueKind::Vector {
        return Err(LazyError::WrongShape {
            shape: shape.to_owned(),
            accessor: LOCATION_ACCESSOR.to_owned(),
            expected: ValueKind::Vector.to_string(),
            found: sig.returns.to_string(),
        });
    }
    Ok(())
}

/// Remembers, per object shape, whether the shape can be followed.
#[derive(Debug, Default)]
pub struct AccessorCache {
    validated: RwLock<HashMap<String, Result<()>>>,
}

impl AccessorCache {
    pub fn new() -> AccessorCache {
        AccessorCache::default()
    }

    /// Checks that `object` has a parameterless location accessor returning
    /// a vector. The outcome, success or failure, is cached by shape.
    pub fn validate<H: HostObject + ?Sized>(&self, object: &H) -> Result<()> {
        let shape = object.shape();
        if let Some(outcome) = self.validated.read().get(shape) {
            return outcome.clone();
        }

        log::debug!("validating location accessor for shape `{shape}`");
        let outcome = check_location_accessor(object);
        if let Err(err) = &outcome {
            log::debug!("shape `{shape}` can't be followed: {err}");
        }

        // Another thread may have validated the same shape meanwhile
        self.validated
            .write()
            .entry(shape.to_owned())
            .or_insert(outcome)
            .clone()
    }

    /// Wraps `object` in a [`MimicEntity`] once its shape has been validated.
    pub fn mimic<H: HostObject>(&self, object: H) -> Result<MimicEntity<HostLocation<H>>> {
        self.validate(&object)?;
        Ok(MimicEntity::new(HostLocation::new(object)))
    }

    /// Number of shapes with a cached outcome.
    pub fn len(&self) -> usize {
        self.validated.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.validated.read().is_empty()
    }

    pub fn clear(&self) {
        self.validated.write().clear();
    }
}

/// [`Located`] adapter over a validated host object.
///
/// If a query fails after validation, the last good location is reported.
#[derive(Debug)]
pub struct HostLocation<H> {
    object: H,
    last_known: Cell<[f32; 2]>,
}

impl<H: HostObject> HostLocation<H> {
    fn new(object: H) -> HostLocation<H> {
        let location = HostLocation {
            object,
            last_known: Cell::new([0.0, 0.0]),
        };
        location.location();
        location
    }

    pub fn object(&self) -> &H {
        &self.object
    }
}

impl<H: HostObject> Located for HostLocation<H> {
    fn location(&self) -> [f32; 2] {
        match self.object.query(LOCATION_ACCESSOR) {
            Some(HostValue::Vector(location)) => {
                self.last_known.set(location);
                location
            }
            other => {
                log::warn!(
                    "location query on shape `{}` failed ({other:?}), using last known location",
                    self.object.shape()
                );
                self.last_known.get()
            }
        }
    }
}
