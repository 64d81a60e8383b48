//! Fixed octahedral coordination layout.
//!
//! Six slots sit on the signed unit axes around the central metal. Ids are
//! stable and the solution table in `data/levels.json` is keyed to them:
//!
//! ```text
//! 0: +X   1: -X   2: +Y   3: -Y   4: +Z   5: -Z
//! ```
//!
//! Directions are stored as integer axis vectors, so every dot product
//! between two slots is exactly -1, 0 or 1 and no float tolerance is needed.

use std::fmt;

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::SlotError;

/// Number of coordination slots around the center.
pub const SLOT_COUNT: usize = 6;

/// Identity of one coordination slot, always in `0..SLOT_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SlotId(u8);

impl SlotId {
    /// Validate a raw slot index coming from the UI layer.
    pub fn new(index: usize) -> Result<Self, SlotError> {
        if index < SLOT_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(SlotError::InvalidSlot(index))
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// All six slots in id order.
    pub fn all() -> impl Iterator<Item = SlotId> {
        (0..SLOT_COUNT as u8).map(SlotId)
    }
}

impl TryFrom<u8> for SlotId {
    type Error = SlotError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value as usize)
    }
}

impl From<SlotId> for u8 {
    fn from(id: SlotId) -> u8 {
        id.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One vertex of the octahedron.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub id: SlotId,
    /// Signed unit axis pointing from the center to this slot.
    pub axis: IVec3,
}

impl Slot {
    /// Unit position vector, for the renderer.
    pub fn position(&self) -> Vec3 {
        self.axis.as_vec3()
    }
}

/// The six octahedral slots, indexed by id.
pub const SLOTS: [Slot; SLOT_COUNT] = [
    Slot { id: SlotId(0), axis: IVec3::X },
    Slot { id: SlotId(1), axis: IVec3::NEG_X },
    Slot { id: SlotId(2), axis: IVec3::Y },
    Slot { id: SlotId(3), axis: IVec3::NEG_Y },
    Slot { id: SlotId(4), axis: IVec3::Z },
    Slot { id: SlotId(5), axis: IVec3::NEG_Z },
];

/// Look up a validated slot.
#[inline]
pub fn slot(id: SlotId) -> &'static Slot {
    &SLOTS[id.index()]
}

/// Integer axis of a slot.
#[inline]
pub fn slot_axis(id: SlotId) -> IVec3 {
    slot(id).axis
}

/// Unit position of a raw slot index. Out-of-range ids are a caller bug.
pub fn slot_position(index: usize) -> Result<Vec3, SlotError> {
    SlotId::new(index).map(|id| slot(id).position())
}

/// Exact dot product between two slot directions: -1, 0 or 1.
#[inline]
pub fn slot_dot(a: SlotId, b: SlotId) -> i32 {
    slot_axis(a).dot(slot_axis(b))
}

/// True when the two slots sit on opposite ends of one axis (180°).
#[inline]
pub fn are_antipodal(a: SlotId, b: SlotId) -> bool {
    slot_dot(a, b) == -1
}

/// True when the two slots are adjacent vertices (90°).
#[inline]
pub fn are_orthogonal(a: SlotId, b: SlotId) -> bool {
    slot_dot(a, b) == 0
}
