//! Domain model for the account/post/comment graph.
//!
//! # Responsibility
//! - Define the three entity records, their creation inputs and patch shapes.
//! - Keep field-level rules next to the records they constrain.
//!
//! # Invariants
//! - Every entity is identified by a stable `EntityId` assigned at creation.
//! - `id` and foreign-key fields (`Post.author`, `Comment.author`,
//!   `Comment.post`) are never changed after construction; patch structs do
//!   not carry them.

use uuid::Uuid;

pub mod account;
pub mod comment;
pub mod post;

/// Stable identifier for every entity in the store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntityId = Uuid;
