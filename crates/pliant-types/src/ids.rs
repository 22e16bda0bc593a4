//! Strongly-typed identifiers for simulation entities.
//!
//! Newtype wrappers prevent accidental mixing of body handles
//! with material indices.

use serde::{Deserialize, Serialize};

/// Stable handle for a body owned by a world.
///
/// Handles remain valid across removals of other bodies; they are
/// never reused within a world's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

/// Index into the material pair table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialId(pub u16);

impl BodyId {
    /// Returns the raw handle value.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl MaterialId {
    /// Returns the raw index as `usize` for table indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for BodyId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<u16> for MaterialId {
    fn from(val: u16) -> Self {
        Self(val)
    }
}
