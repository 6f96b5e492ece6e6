//! Comment domain model.
//!
//! # Invariants
//! - `author` and `post` are set at creation and immutable; `CommentPatch`
//!   carries only `body`.
//! - Comments are leaves of the ownership graph: nothing cascades off them.

use crate::model::EntityId;
use serde::{Deserialize, Serialize};

/// A comment left by an account on a published post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: EntityId,
    pub body: String,
    /// Foreign key to the authoring account.
    pub author: EntityId,
    /// Foreign key to the commented post.
    pub post: EntityId,
}

/// Creation input for a comment; the facade assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    pub body: String,
    pub author: EntityId,
    pub post: EntityId,
}

/// Partial update for a comment. Only `body` may change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentPatch {
    pub body: Option<String>,
}

impl Comment {
    /// Builds a comment record from creation input.
    pub fn from_new(id: EntityId, data: NewComment) -> Self {
        Self {
            id,
            body: data.body,
            author: data.author,
            post: data.post,
        }
    }

    /// Applies set fields from `patch`; `id`, `author` and `post` stay untouched.
    pub fn apply_patch(&mut self, patch: CommentPatch) {
        if let Some(body) = patch.body {
            self.body = body;
        }
    }
}
