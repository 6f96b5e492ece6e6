//! Identity provider seam.
//!
//! # Responsibility
//! - Produce globally-unique opaque identifiers on demand.
//! - Keep id generation injectable so tests can assign deterministic ids.
//!
//! # Invariants
//! - Ids handed out by one provider are never reused while the process runs.

use crate::model::EntityId;
use uuid::Uuid;

/// Source of unique identifiers, injected into the facade.
pub trait IdProvider {
    /// Returns a fresh identifier, never equal to any previously returned one.
    fn next_id(&mut self) -> EntityId;
}

/// Production provider backed by random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidProvider;

impl IdProvider for UuidProvider {
    fn next_id(&mut self) -> EntityId {
        Uuid::new_v4()
    }
}
