//! Post domain model.
//!
//! # Invariants
//! - `author` is set at creation and immutable; `PostPatch` cannot carry it.
//! - Comments may only be attached while `published` is true (enforced by the
//!   integrity layer at comment creation).

use crate::model::EntityId;
use serde::{Deserialize, Serialize};

/// A post authored by an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: EntityId,
    pub title: String,
    pub body: String,
    pub published: bool,
    /// Foreign key to the authoring account.
    pub author: EntityId,
}

/// Creation input for a post; the facade assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub published: bool,
    pub author: EntityId,
}

/// Partial update for a post. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub body: Option<String>,
    pub published: Option<bool>,
}

impl Post {
    /// Builds a post record from creation input.
    pub fn from_new(id: EntityId, data: NewPost) -> Self {
        Self {
            id,
            title: data.title,
            body: data.body,
            published: data.published,
            author: data.author,
        }
    }

    /// Applies set fields from `patch`; `id` and `author` stay untouched.
    pub fn apply_patch(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
        if let Some(published) = patch.published {
            self.published = published;
        }
    }
}
