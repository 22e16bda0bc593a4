//! Integration tests for pliant-types.

use pliant_types::{BodyId, MaterialId, PliantError};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn body_id_raw() {
    let id = BodyId(42);
    assert_eq!(id.raw(), 42);
}

#[test]
fn material_id_index() {
    let id = MaterialId(7);
    assert_eq!(id.index(), 7);
}

#[test]
fn ids_are_not_interchangeable() {
    // Compile-time guarantee — these types are distinct.
    let _b = BodyId(0);
    let _m = MaterialId(0);
}

#[test]
fn ids_are_serializable() {
    let id = BodyId(100);
    let json = serde_json::to_string(&id).unwrap();
    let deserialized: BodyId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn error_display() {
    let err = PliantError::InvalidShape("only 2 vertices".into());
    assert!(err.to_string().contains("only 2 vertices"));
}

#[test]
fn config_error_display() {
    let err = PliantError::InvalidConfig("penetration_iterations must be >= 1".into());
    assert!(err.to_string().contains("penetration_iterations"));
}
