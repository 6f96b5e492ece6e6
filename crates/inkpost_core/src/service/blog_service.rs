//! Blog facade: the public query/mutation operation set.
//!
//! # Responsibility
//! - Validate preconditions, delegate to the integrity layer, mutate the
//!   store, and return full records or semantic errors.
//! - Resolve derived relationships on demand for transport field selection.
//!
//! # Invariants
//! - No write partially applies: every check runs before the first mutation.
//! - Foreign keys and ids never change through update operations.
//! - All state is owned by the service instance; there is no global store.

use crate::id::IdProvider;
use crate::model::account::{Account, AccountPatch, NewAccount};
use crate::model::comment::{Comment, CommentPatch, NewComment};
use crate::model::post::{NewPost, Post, PostPatch};
use crate::model::EntityId;
use crate::resolve;
use crate::store::{integrity, EntityKind, EntityStore, StoreError, StoreResult};
use log::{debug, info};

/// Facade over the entity store, generic over the injected id source.
pub struct BlogService<P: IdProvider> {
    store: EntityStore,
    ids: P,
}

impl<P: IdProvider> BlogService<P> {
    /// Creates a facade with an empty store.
    pub fn new(ids: P) -> Self {
        Self {
            store: EntityStore::new(),
            ids,
        }
    }

    /// Creates a facade over an existing store (tests, embedding hosts).
    pub fn with_store(store: EntityStore, ids: P) -> Self {
        Self { store, ids }
    }

    /// Read-only view of the underlying store.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    // Reads

    /// All accounts, or those whose name contains `query` case-insensitively.
    pub fn list_accounts(&self, query: Option<&str>) -> Vec<Account> {
        match query {
            None => self.store.accounts().to_vec(),
            Some(query) => {
                let needle = query.to_lowercase();
                self.store
                    .accounts()
                    .iter()
                    .filter(|account| account.name.to_lowercase().contains(&needle))
                    .cloned()
                    .collect()
            }
        }
    }

    /// All posts, or those whose title or body contains `query`
    /// case-insensitively.
    pub fn list_posts(&self, query: Option<&str>) -> Vec<Post> {
        match query {
            None => self.store.posts().to_vec(),
            Some(query) => {
                let needle = query.to_lowercase();
                self.store
                    .posts()
                    .iter()
                    .filter(|post| {
                        post.title.to_lowercase().contains(&needle)
                            || post.body.to_lowercase().contains(&needle)
                    })
                    .cloned()
                    .collect()
            }
        }
    }

    /// All comments, unfiltered.
    pub fn list_comments(&self) -> Vec<Comment> {
        self.store.comments().to_vec()
    }

    // Account writes

    pub fn create_account(&mut self, data: NewAccount) -> StoreResult<Account> {
        data.validate()?;
        integrity::check_email_unique(&self.store, &data.email, None)?;

        let account = Account::from_new(self.ids.next_id(), data);
        self.store.insert_account(account.clone());
        info!("event=account_created module=service status=ok id={}", account.id);
        Ok(account)
    }

    pub fn update_account(&mut self, id: EntityId, patch: AccountPatch) -> StoreResult<Account> {
        let mut updated = self
            .store
            .account(id)
            .cloned()
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Account,
                id,
            })?;
        if let Some(email) = patch.email.as_deref() {
            integrity::check_email_unique(&self.store, email, Some(id))?;
        }

        updated.apply_patch(patch);
        updated.validate()?;

        let slot = self
            .store
            .account_mut(id)
            .ok_or(StoreError::Inconsistent("account vanished during update"))?;
        *slot = updated.clone();
        debug!("event=account_updated module=service status=ok id={id}");
        Ok(updated)
    }

    pub fn delete_account(&mut self, id: EntityId) -> StoreResult<Account> {
        let removed = self.store.remove_account(id).ok_or(StoreError::NotFound {
            kind: EntityKind::Account,
            id,
        })?;

        let outcome = integrity::cascade_account_delete(&mut self.store, id);
        info!(
            "event=account_deleted module=service status=ok id={id} posts_removed={} comments_removed={}",
            outcome.posts_removed, outcome.comments_removed
        );
        Ok(removed)
    }

    // Post writes

    pub fn create_post(&mut self, data: NewPost) -> StoreResult<Post> {
        integrity::check_post_author(&self.store, data.author)?;

        let post = Post::from_new(self.ids.next_id(), data);
        self.store.insert_post(post.clone());
        info!(
            "event=post_created module=service status=ok id={} author={}",
            post.id, post.author
        );
        Ok(post)
    }

    pub fn update_post(&mut self, id: EntityId, patch: PostPatch) -> StoreResult<Post> {
        let post = self.store.post_mut(id).ok_or(StoreError::NotFound {
            kind: EntityKind::Post,
            id,
        })?;
        post.apply_patch(patch);
        let updated = post.clone();
        debug!("event=post_updated module=service status=ok id={id}");
        Ok(updated)
    }

    pub fn delete_post(&mut self, id: EntityId) -> StoreResult<Post> {
        let removed = self.store.remove_post(id).ok_or(StoreError::NotFound {
            kind: EntityKind::Post,
            id,
        })?;

        let comments_removed = integrity::cascade_post_delete(&mut self.store, id);
        info!(
            "event=post_deleted module=service status=ok id={id} comments_removed={comments_removed}"
        );
        Ok(removed)
    }

    // Comment writes

    pub fn create_comment(&mut self, data: NewComment) -> StoreResult<Comment> {
        integrity::check_comment_refs(&self.store, data.author, data.post)?;

        let comment = Comment::from_new(self.ids.next_id(), data);
        self.store.insert_comment(comment.clone());
        info!(
            "event=comment_created module=service status=ok id={} post={}",
            comment.id, comment.post
        );
        Ok(comment)
    }

    pub fn update_comment(&mut self, id: EntityId, patch: CommentPatch) -> StoreResult<Comment> {
        let comment = self.store.comment_mut(id).ok_or(StoreError::NotFound {
            kind: EntityKind::Comment,
            id,
        })?;
        comment.apply_patch(patch);
        let updated = comment.clone();
        debug!("event=comment_updated module=service status=ok id={id}");
        Ok(updated)
    }

    pub fn delete_comment(&mut self, id: EntityId) -> StoreResult<Comment> {
        // Comments are leaves; nothing cascades.
        let removed = self.store.remove_comment(id).ok_or(StoreError::NotFound {
            kind: EntityKind::Comment,
            id,
        })?;
        info!("event=comment_deleted module=service status=ok id={id}");
        Ok(removed)
    }

    // Derived relationships, resolved on demand for transport field selection.

    pub fn account_posts(&self, id: EntityId) -> StoreResult<Vec<Post>> {
        let account = self.require_account(id)?;
        Ok(resolve::account_posts(&self.store, account.id)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn account_comments(&self, id: EntityId) -> StoreResult<Vec<Comment>> {
        let account = self.require_account(id)?;
        Ok(resolve::account_comments(&self.store, account.id)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn post_author(&self, post_id: EntityId) -> StoreResult<Account> {
        let post = self.require_post(post_id)?;
        resolve::post_author(&self.store, post).cloned()
    }

    pub fn post_comments(&self, post_id: EntityId) -> StoreResult<Vec<Comment>> {
        let post = self.require_post(post_id)?;
        Ok(resolve::post_comments(&self.store, post.id)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn comment_author(&self, comment_id: EntityId) -> StoreResult<Account> {
        let comment = self.require_comment(comment_id)?;
        resolve::comment_author(&self.store, comment).cloned()
    }

    pub fn comment_post(&self, comment_id: EntityId) -> StoreResult<Post> {
        let comment = self.require_comment(comment_id)?;
        resolve::comment_post(&self.store, comment).cloned()
    }

    fn require_account(&self, id: EntityId) -> StoreResult<&Account> {
        self.store.account(id).ok_or(StoreError::NotFound {
            kind: EntityKind::Account,
            id,
        })
    }

    fn require_post(&self, id: EntityId) -> StoreResult<&Post> {
        self.store.post(id).ok_or(StoreError::NotFound {
            kind: EntityKind::Post,
            id,
        })
    }

    fn require_comment(&self, id: EntityId) -> StoreResult<&Comment> {
        self.store.comment(id).ok_or(StoreError::NotFound {
            kind: EntityKind::Comment,
            id,
        })
    }
}
