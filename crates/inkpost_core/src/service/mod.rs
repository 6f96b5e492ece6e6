//! Query/mutation facade consumed by the transport layer.
//!
//! # Responsibility
//! - Expose the public operation set and keep every write atomic: all
//!   validation happens before any collection is touched.
//! - Keep transport/serialization concerns out of the core.

pub mod blog_service;
