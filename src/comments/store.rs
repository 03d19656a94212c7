//! Comment store contract
//!
//! Implemented by the persistence layer and by the caching decorator that
//! wraps it.

use async_trait::async_trait;

use crate::comments::{
    Comment, CommentId, CommentQuery, CommentUpdate, NewComment, Page, PageRequest,
};
use crate::error::Result;

// == Comment Store ==
/// Backing store for comments.
///
/// Failures (`ServiceError::NotFound` for unknown ids) are part of the
/// contract and are passed through unchanged by decorators.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Looks up one comment.
    async fn find_by_id(&self, id: CommentId) -> Result<Comment>;

    /// Commits a new comment and returns it with its generated id.
    async fn create(&self, input: NewComment) -> Result<Comment>;

    /// Merges `input` into the stored comment and returns the committed result.
    async fn update(&self, input: CommentUpdate) -> Result<Comment>;

    /// Deletes one comment.
    async fn delete(&self, id: CommentId) -> Result<()>;

    /// Lists comments matching `query`, ordered by id.
    async fn find_page(&self, query: CommentQuery, page: PageRequest) -> Result<Page<Comment>>;
}
