//! Caching decorator for comment stores
//!
//! Wraps any [`CommentStore`] with read-through caching on lookups,
//! write-through on create/update and invalidation on delete. The wrapped
//! store is never called while the cache lock is held, and the cache is only
//! touched after the store reported success.
//!
//! Every path observes the cache generation before calling the store. A
//! fill whose generation went stale in the meantime is dropped, and an
//! update that raced another invalidation evicts the key instead of
//! writing, so concurrent callers never leave an outdated comment cached.

use async_trait::async_trait;
use tracing::debug;

use crate::cache::{Lookup, SharedCache};
use crate::comments::{
    Comment, CommentId, CommentQuery, CommentStore, CommentUpdate, NewComment, Page, PageRequest,
};
use crate::error::Result;

// == Cached Comment Store ==
/// A [`CommentStore`] that fronts another one with a bounded cache keyed by
/// comment id.
#[derive(Debug)]
pub struct CachedCommentStore<S> {
    inner: S,
    cache: SharedCache<CommentId, Comment>,
}

impl<S> CachedCommentStore<S> {
    pub fn new(inner: S, cache: SharedCache<CommentId, Comment>) -> Self {
        Self { inner, cache }
    }

    /// The cache in front of the store.
    pub fn cache(&self) -> &SharedCache<CommentId, Comment> {
        &self.cache
    }

    /// The wrapped store.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: CommentStore> CommentStore for CachedCommentStore<S> {
    async fn find_by_id(&self, id: CommentId) -> Result<Comment> {
        let generation = match self.cache.lookup(&id) {
            Lookup::Hit(comment) => {
                debug!("Comment cache hit: {}", id);
                return Ok(comment);
            }
            Lookup::Miss { generation } => generation,
        };

        debug!("Comment cache miss: {}", id);
        let comment = self.inner.find_by_id(id).await?;
        if !self.cache.put_if_generation(comment.id, comment.clone(), generation) {
            debug!("Dropped stale fill for comment: {}", id);
        }
        Ok(comment)
    }

    async fn create(&self, input: NewComment) -> Result<Comment> {
        let generation = self.cache.generation();
        let comment = self.inner.create(input).await?;
        debug!("Caching created comment: {}", comment.id);
        self.cache.put_if_generation(comment.id, comment.clone(), generation);
        Ok(comment)
    }

    async fn update(&self, input: CommentUpdate) -> Result<Comment> {
        let id = input.id;
        let generation = self.cache.generation();
        let comment = self.inner.update(input).await?;
        if self.cache.put_or_invalidate(id, comment.clone(), generation) {
            debug!("Caching updated comment: {}", id);
        } else {
            debug!("Invalidating concurrently updated comment: {}", id);
        }
        Ok(comment)
    }

    async fn delete(&self, id: CommentId) -> Result<()> {
        self.inner.delete(id).await?;
        debug!("Invalidating deleted comment: {}", id);
        self.cache.invalidate(&id);
        Ok(())
    }

    async fn find_page(&self, query: CommentQuery, page: PageRequest) -> Result<Page<Comment>> {
        self.inner.find_page(query, page).await
    }
}
