//! In-memory entity store and the store-layer error taxonomy.
//!
//! # Responsibility
//! - Own the three entity collections and their lookup/mutate primitives.
//! - Define the semantic errors (`NotFound`, `Conflict`) surfaced to callers.
//!
//! # Invariants
//! - Iteration follows insertion order; no other ordering is promised.
//! - Each collection exclusively owns its records; removal hands the record
//!   back to the caller instead of tombstoning it.
//! - Foreign-key consistency is the integrity layer's job; the store itself
//!   accepts whatever it is given.

use crate::model::account::{Account, AccountValidationError};
use crate::model::comment::Comment;
use crate::model::post::Post;
use crate::model::EntityId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod integrity;

pub type StoreResult<T> = Result<T, StoreError>;

/// Which of the three collections an error payload refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Account,
    Post,
    Comment,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Account => write!(f, "account"),
            Self::Post => write!(f, "post"),
            Self::Comment => write!(f, "comment"),
        }
    }
}

/// Semantic error for store queries and mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A referenced id does not resolve to a live entity.
    NotFound { kind: EntityKind, id: EntityId },
    /// A uniqueness constraint was violated.
    Conflict { field: &'static str, value: String },
    /// Comment creation checks author and published post together and does
    /// not report which reference failed.
    CommentRefNotFound { author: EntityId, post: EntityId },
    /// Field-level rule violation on account data.
    Validation(AccountValidationError),
    /// Internal referential fault; unreachable while invariants hold.
    Inconsistent(&'static str),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::Conflict { field, value } => write!(f, "{field} already taken: `{value}`"),
            Self::CommentRefNotFound { author, post } => write!(
                f,
                "comment author or post not found: author={author} post={post}"
            ),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Inconsistent(details) => write!(f, "inconsistent store state: {details}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AccountValidationError> for StoreError {
    fn from(value: AccountValidationError) -> Self {
        Self::Validation(value)
    }
}

impl StoreError {
    /// Whether this error belongs to the not-found class (either a direct
    /// lookup miss or the merged comment reference check).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::CommentRefNotFound { .. }
        )
    }
}

/// The three entity collections behind the facade.
///
/// Designed for single-threaded, run-to-completion access; a concurrent host
/// must serialize all operations behind one lock because cascades read and
/// write across all three collections.
#[derive(Debug, Default)]
pub struct EntityStore {
    accounts: Vec<Account>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Accounts

    pub fn insert_account(&mut self, account: Account) {
        self.accounts.push(account);
    }

    pub fn account(&self, id: EntityId) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn account_mut(&mut self, id: EntityId) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.id == id)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn remove_account(&mut self, id: EntityId) -> Option<Account> {
        let index = self.accounts.iter().position(|account| account.id == id)?;
        Some(self.accounts.remove(index))
    }

    // Posts

    pub fn insert_post(&mut self, post: Post) {
        self.posts.push(post);
    }

    pub fn post(&self, id: EntityId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    pub fn post_mut(&mut self, id: EntityId) -> Option<&mut Post> {
        self.posts.iter_mut().find(|post| post.id == id)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn remove_post(&mut self, id: EntityId) -> Option<Post> {
        let index = self.posts.iter().position(|post| post.id == id)?;
        Some(self.posts.remove(index))
    }

    /// Removes and returns every post matching `predicate`, preserving the
    /// insertion order of the survivors.
    pub fn remove_posts_where(&mut self, predicate: impl Fn(&Post) -> bool) -> Vec<Post> {
        let (removed, kept) = std::mem::take(&mut self.posts)
            .into_iter()
            .partition(|post| predicate(post));
        self.posts = kept;
        removed
    }

    // Comments

    pub fn insert_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    pub fn comment(&self, id: EntityId) -> Option<&Comment> {
        self.comments.iter().find(|comment| comment.id == id)
    }

    pub fn comment_mut(&mut self, id: EntityId) -> Option<&mut Comment> {
        self.comments.iter_mut().find(|comment| comment.id == id)
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn remove_comment(&mut self, id: EntityId) -> Option<Comment> {
        let index = self.comments.iter().position(|comment| comment.id == id)?;
        Some(self.comments.remove(index))
    }

    /// Removes and returns every comment matching `predicate`, preserving the
    /// insertion order of the survivors.
    pub fn remove_comments_where(&mut self, predicate: impl Fn(&Comment) -> bool) -> Vec<Comment> {
        let (removed, kept) = std::mem::take(&mut self.comments)
            .into_iter()
            .partition(|comment| predicate(comment));
        self.comments = kept;
        removed
    }
}
