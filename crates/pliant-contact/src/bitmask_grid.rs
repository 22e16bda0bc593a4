//! Bitmask-grid broad phase.
//!
//! The world bounds are divided into a uniform grid of up to 64 cells
//! per axis. Each body marks one bit per grid column its AABB overlaps,
//! separately for X and Y. Two bodies can only collide when both their
//! X masks and their Y masks intersect, which reduces the pair test to
//! two AND operations before the AABB check.
//!
//! Assumes a bounded world: AABBs outside the bounds clamp to the
//! boundary columns, so out-of-bounds bodies still collide correctly
//! with each other.

use pliant_dynamics::Body;
use pliant_math::Aabb;
use pliant_types::constants::{DEFAULT_GRID_CELLS, MAX_GRID_CELLS};
use pliant_types::PliantResult;

use crate::broad::{BroadPhase, CandidatePair};

/// Per-body column occupancy masks.
#[derive(Debug, Clone, Copy, Default)]
struct ColumnMasks {
    x: u64,
    y: u64,
}

/// Bit-column broad phase over bounded world space.
pub struct BitmaskGrid {
    cells: u32,
    marks: Vec<ColumnMasks>,
}

impl BitmaskGrid {
    /// Creates a grid with `cells` columns per axis, clamped to
    /// `[1, 64]`.
    pub fn new(cells: u32) -> Self {
        Self {
            cells: cells.clamp(1, MAX_GRID_CELLS),
            marks: Vec::new(),
        }
    }

    /// Grid resolution per axis.
    #[inline]
    pub fn cells(&self) -> u32 {
        self.cells
    }

    /// Maps a coordinate range onto a contiguous bit span.
    fn span_bits(&self, lo: f32, hi: f32, origin: f32, cell_size: f32) -> u64 {
        let last = self.cells - 1;
        let lo_cell = if cell_size > 0.0 {
            (((lo - origin) / cell_size).floor() as i64).clamp(0, last as i64) as u32
        } else {
            0
        };
        let hi_cell = if cell_size > 0.0 {
            (((hi - origin) / cell_size).floor() as i64).clamp(0, last as i64) as u32
        } else {
            last
        };
        let mut bits = 0_u64;
        for cell in lo_cell..=hi_cell {
            bits |= 1_u64 << cell;
        }
        bits
    }
}

impl Default for BitmaskGrid {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_CELLS)
    }
}

impl BroadPhase for BitmaskGrid {
    fn update(&mut self, bodies: &[Body], bounds: &Aabb) -> PliantResult<()> {
        let size = bounds.size();
        let cell_w = size.x / self.cells as f32;
        let cell_h = size.y / self.cells as f32;

        self.marks.clear();
        self.marks.reserve(bodies.len());
        for body in bodies {
            self.marks.push(ColumnMasks {
                x: self.span_bits(body.aabb.min.x, body.aabb.max.x, bounds.min.x, cell_w),
                y: self.span_bits(body.aabb.min.y, body.aabb.max.y, bounds.min.y, cell_h),
            });
        }
        Ok(())
    }

    fn query_pairs(&self, bodies: &[Body]) -> Vec<CandidatePair> {
        let mut pairs = Vec::new();
        let n = bodies.len().min(self.marks.len());

        for a in 0..n {
            for b in (a + 1)..n {
                if self.marks[a].x & self.marks[b].x == 0 {
                    continue;
                }
                if self.marks[a].y & self.marks[b].y == 0 {
                    continue;
                }
                if bodies[a].collision_mask & bodies[b].collision_mask == 0 {
                    continue;
                }
                if bodies[a].is_static && bodies[b].is_static {
                    continue;
                }
                if !bodies[a].aabb.intersects(&bodies[b].aabb) {
                    continue;
                }
                pairs.push(CandidatePair { a, b });
            }
        }
        pairs
    }

    fn name(&self) -> &str {
        "bitmask_grid"
    }
}
