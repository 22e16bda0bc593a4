//! Material pair table.
//!
//! Collision response looks up restitution and friction per pair of
//! body materials. The table is symmetric: `(a, b)` and `(b, a)` share
//! one entry.

use serde::{Deserialize, Serialize};

use pliant_types::constants::{DEFAULT_FRICTION, DEFAULT_RESTITUTION};
use pliant_types::MaterialId;

/// Response coefficients for one pair of materials.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MaterialPair {
    /// Bounce coefficient in `[0, 1]`. 0 = perfectly inelastic.
    pub restitution: f32,
    /// Tangential damping coefficient in `[0, 1]`.
    pub friction: f32,
}

impl Default for MaterialPair {
    fn default() -> Self {
        Self {
            restitution: DEFAULT_RESTITUTION,
            friction: DEFAULT_FRICTION,
        }
    }
}

/// Symmetric table of material pair coefficients.
#[derive(Debug, Clone)]
pub struct MaterialTable {
    count: usize,
    pairs: Vec<MaterialPair>,
}

impl MaterialTable {
    /// Creates a table for `count` materials, every pair at defaults.
    pub fn new(count: usize) -> Self {
        let count = count.max(1);
        Self {
            count,
            pairs: vec![MaterialPair::default(); count * count],
        }
    }

    /// Number of materials.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Looks up the coefficients for a material pair. Out-of-range
    /// materials fall back to the defaults.
    pub fn pair(&self, a: MaterialId, b: MaterialId) -> MaterialPair {
        let (ia, ib) = (a.index(), b.index());
        if ia >= self.count || ib >= self.count {
            return MaterialPair::default();
        }
        self.pairs[ia * self.count + ib]
    }

    /// Sets the coefficients for a pair, symmetrically.
    pub fn set_pair(&mut self, a: MaterialId, b: MaterialId, pair: MaterialPair) {
        let (ia, ib) = (a.index(), b.index());
        if ia >= self.count || ib >= self.count {
            return;
        }
        self.pairs[ia * self.count + ib] = pair;
        self.pairs[ib * self.count + ia] = pair;
    }
}

impl Default for MaterialTable {
    fn default() -> Self {
        Self::new(1)
    }
}
