//! # pliant-contact
//!
//! Collision detection and contact response for soft polygon bodies.
//!
//! The collision pipeline is split into three phases:
//! 1. **Broad phase** — coarse candidate-pair rejection (bitmask grid)
//! 2. **Narrow phase** — exact point-in-body / closest-edge tests
//! 3. **Contact response** — position correction + impulse exchange
//!
//! Each phase is a pluggable trait, enabling different strategies
//! (e.g., a hashing broad phase for unbounded worlds).
//!
//! ## Pipeline
//!
//! The [`CollisionPipeline`] orchestrates all three phases, repeating
//! narrow phase + response for the configured number of penetration
//! iterations.

pub mod bitmask_grid;
pub mod broad;
pub mod contact;
pub mod impulse;
pub mod materials;
pub mod narrow;
pub mod pipeline;
pub mod point_edge;
pub mod response;

pub use bitmask_grid::BitmaskGrid;
pub use broad::{BroadPhase, CandidatePair, NullBroadPhase};
pub use contact::BodyContact;
pub use impulse::ImpulseResponse;
pub use materials::{MaterialPair, MaterialTable};
pub use narrow::{NarrowPhase, NullNarrowPhase};
pub use pipeline::{CollisionPipeline, CollisionStepResult};
pub use point_edge::PointEdgeTest;
pub use response::{ContactResponse, ContactResult, NullContactResponse};
