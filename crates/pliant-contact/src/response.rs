//! Contact response trait.
//!
//! Applies position corrections and velocity impulses to resolve
//! detected contacts.

use pliant_dynamics::Body;
use pliant_types::PliantResult;

use crate::contact::BodyContact;
use crate::materials::MaterialTable;

/// Result of one contact response pass.
#[derive(Debug, Clone, Default)]
pub struct ContactResult {
    /// Number of contacts resolved.
    pub resolved_count: u32,
    /// Contacts skipped because they exceeded the penetration threshold.
    pub deep_count: u32,
    /// Maximum penetration depth seen in the pass.
    pub max_penetration: f32,
}

/// Trait for contact response strategies.
///
/// # Implementations
/// - [`ImpulseResponse`](crate::impulse::ImpulseResponse) — position
///   correction + restitution/friction impulse exchange
pub trait ContactResponse: Send {
    /// Resolves contacts by modifying point positions and velocities.
    ///
    /// Contacts deeper than `penetration_threshold` are counted in
    /// [`ContactResult::deep_count`] and left for later iterations.
    fn resolve(
        &self,
        contacts: &[BodyContact],
        bodies: &mut [Body],
        materials: &MaterialTable,
        penetration_threshold: f32,
    ) -> PliantResult<ContactResult>;

    /// Returns the response strategy name.
    fn name(&self) -> &str;
}

/// No-op contact response for collision-free benchmarks.
pub struct NullContactResponse;

impl ContactResponse for NullContactResponse {
    fn resolve(
        &self,
        _contacts: &[BodyContact],
        _bodies: &mut [Body],
        _materials: &MaterialTable,
        _penetration_threshold: f32,
    ) -> PliantResult<ContactResult> {
        Ok(ContactResult::default())
    }

    fn name(&self) -> &str {
        "null_contact_response"
    }
}
