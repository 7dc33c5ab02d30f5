//! Lightweight entities whose position is derived on every query instead of
//! stored: a fixed point, a point riding on an anchor, or a point read from
//! some other object.
//!
//! None of these own what they follow. Hand them `&Ship`, `Rc<Ship>` or any
//! other handle the host keeps alive.

use crate::host::{CombatEntity, Located};
use crate::math::{clamp_angle, distance, point_on_circumference};
use crate::vector::angle_between_strict;

/// A point that never moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleEntity {
    location: [f32; 2],
}

impl SimpleEntity {
    pub fn new(location: [f32; 2]) -> SimpleEntity {
        SimpleEntity { location }
    }
}

impl Located for SimpleEntity {
    fn location(&self) -> [f32; 2] {
        self.location
    }
}

impl CombatEntity for SimpleEntity {}

/// A point rigidly attached to an anchor.
///
/// The offset from the anchor is captured once, relative to the anchor's
/// facing, so the point follows both the anchor's movement and its rotation.
#[derive(Debug, Clone)]
pub struct AnchoredEntity<A> {
    anchor: A,
    relative_distance: f32,
    relative_angle: f32,
}

impl<A: CombatEntity> AnchoredEntity<A> {
    /// Attaches `location` to `anchor` as it currently stands.
    pub fn new(anchor: A, location: [f32; 2]) -> AnchoredEntity<A> {
        let (relative_distance, relative_angle) = relative_offset(&anchor, location);
        AnchoredEntity {
            anchor,
            relative_distance,
            relative_angle,
        }
    }

    /// Moves the entity onto a new anchor, keeping its current world
    /// position. Returns the old anchor.
    pub fn reanchor(&mut self, anchor: A) -> A {
        let location = self.location();
        let (relative_distance, relative_angle) = relative_offset(&anchor, location);
        self.relative_distance = relative_distance;
        self.relative_angle = relative_angle;
        std::mem::replace(&mut self.anchor, anchor)
    }

    pub fn anchor(&self) -> &A {
        &self.anchor
    }

    pub fn relative_distance(&self) -> f32 {
        self.relative_distance
    }

    /// Angle from the anchor to this point, in degrees, measured from the
    /// anchor's facing.
    pub fn relative_angle(&self) -> f32 {
        self.relative_angle
    }

    pub fn into_anchor(self) -> A {
        self.anchor
    }
}

fn relative_offset<A: CombatEntity>(anchor: &A, location: [f32; 2]) -> (f32, f32) {
    let anchor_location = anchor.location();
    let relative_distance = distance(anchor_location, location);
    let relative_angle =
        clamp_angle(angle_between_strict(anchor_location, location) - anchor.facing());
    (relative_distance, relative_angle)
}

impl<A: CombatEntity> Located for AnchoredEntity<A> {
    fn location(&self) -> [f32; 2] {
        let anchor_location = self.anchor.location();
        if self.relative_distance == 0.0 {
            return anchor_location;
        }
        point_on_circumference(
            anchor_location,
            self.relative_distance,
            self.relative_angle + self.anchor.facing(),
        )
    }
}

impl<A: CombatEntity> CombatEntity for AnchoredEntity<A> {
    fn facing(&self) -> f32 {
        self.anchor.facing()
    }

    fn velocity(&self) -> [f32; 2] {
        self.anchor.velocity()
    }
}

/// Reports whatever location its delegate reports.
#[derive(Debug, Clone)]
pub struct MimicEntity<D> {
    delegate: D,
}

impl<D: Located> MimicEntity<D> {
    pub fn new(delegate: D) -> MimicEntity<D> {
        MimicEntity { delegate }
    }

    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    pub fn into_delegate(self) -> D {
        self.delegate
    }
}

impl<D: Located> Located for MimicEntity<D> {
    fn location(&self) -> [f32; 2] {
        self.delegate.location()
    }
}

impl<D: Located> CombatEntity for MimicEntity<D> {}

/// Any of the proxy variants behind one type.
#[derive(Debug, Clone)]
pub enum ProxyEntity<A, D> {
    FixedPoint(SimpleEntity),
    AnchorRelative(AnchoredEntity<A>),
    Delegate(MimicEntity<D>),
}

impl<A: CombatEntity, D: Located> ProxyEntity<A, D> {
    pub fn fixed(location: [f32; 2]) -> ProxyEntity<A, D> {
        ProxyEntity::FixedPoint(SimpleEntity::new(location))
    }

    pub fn anchored(anchor: A, location: [f32; 2]) -> ProxyEntity<A, D> {
        ProxyEntity::AnchorRelative(AnchoredEntity::new(anchor, location))
    }

    pub fn mimic(delegate: D) -> ProxyEntity<A, D> {
        ProxyEntity::Delegate(MimicEntity::new(delegate))
    }
}

impl<A, D> From<SimpleEntity> for ProxyEntity<A, D> {
    fn from(entity: SimpleEntity) -> Self {
        ProxyEntity::FixedPoint(entity)
    }
}

impl<A, D> From<AnchoredEntity<A>> for ProxyEntity<A, D> {
    fn from(entity: AnchoredEntity<A>) -> Self {
        ProxyEntity::AnchorRelative(entity)
    }
}

impl<A, D> From<MimicEntity<D>> for ProxyEntity<A, D> {
    fn from(entity: MimicEntity<D>) -> Self {
        ProxyEntity::Delegate(entity)
    }
}

impl<A: CombatEntity, D: Located> Located for ProxyEntity<A, D> {
    fn location(&self) -> [f32; 2] {
        match self {
            ProxyEntity::FixedPoint(entity) => entity.location(),
            ProxyEntity::AnchorRelative(entity) => entity.location(),
            ProxyEntity::Delegate(entity) => entity.location(),
        }
    }
}

impl<A: CombatEntity, D: Located> CombatEntity for ProxyEntity<A, D> {
    fn facing(&self) -> f32 {
        match self {
            ProxyEntity::AnchorRelative(entity) => entity.facing(),
            _ => 0.0,
        }
    }

    fn velocity(&self) -> [f32; 2] {
        match self {
            ProxyEntity::AnchorRelative(entity) => entity.velocity(),
            _ => [0.0, 0.0],
        }
    }
}
