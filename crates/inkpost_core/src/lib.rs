//! Core domain logic for inkpost.
//! This crate is the single source of truth for business invariants.

pub mod id;
pub mod logging;
pub mod model;
pub mod resolve;
pub mod service;
pub mod store;

pub use id::{IdProvider, UuidProvider};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::account::{Account, AccountPatch, AccountValidationError, NewAccount};
pub use model::comment::{Comment, CommentPatch, NewComment};
pub use model::post::{NewPost, Post, PostPatch};
pub use model::EntityId;
pub use service::blog_service::BlogService;
pub use store::{EntityKind, EntityStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
