//! In-memory comment store
//!
//! Plays the role of the database: assigns ids and creation times and
//! answers paged queries.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use crate::comments::{
    Comment, CommentId, CommentQuery, CommentStore, CommentUpdate, NewComment, Page, PageRequest,
};
use crate::error::{Result, ServiceError};

// == In-Memory Store ==
/// Comment store backed by an ordered map.
#[derive(Debug)]
pub struct InMemoryCommentStore {
    /// Committed comments by id
    rows: RwLock<BTreeMap<CommentId, Comment>>,
    /// Next id to hand out
    next_id: AtomicU64,
}

impl InMemoryCommentStore {
    /// Creates an empty store; the first comment gets id 1.
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Number of committed comments.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

impl Default for InMemoryCommentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommentStore for InMemoryCommentStore {
    async fn find_by_id(&self, id: CommentId) -> Result<Comment> {
        info!("CommentStore: find comment by id: {}", id);
        self.rows
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(ServiceError::NotFound(id))
    }

    async fn create(&self, input: NewComment) -> Result<Comment> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let comment = Comment {
            id,
            news_id: input.news_id,
            time: Utc::now(),
            username: input.username,
            text: input.text,
        };
        info!("CommentStore: create comment: {:?}", comment);

        self.rows.write().await.insert(id, comment.clone());
        Ok(comment)
    }

    async fn update(&self, input: CommentUpdate) -> Result<Comment> {
        info!("CommentStore: update comment: {:?}", input);
        let mut rows = self.rows.write().await;
        let comment = rows.get_mut(&input.id).ok_or(ServiceError::NotFound(input.id))?;
        input.apply_to(comment);
        Ok(comment.clone())
    }

    async fn delete(&self, id: CommentId) -> Result<()> {
        info!("CommentStore: delete comment by id: {}", id);
        self.rows
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(ServiceError::NotFound(id))
    }

    async fn find_page(&self, query: CommentQuery, page: PageRequest) -> Result<Page<Comment>> {
        info!("CommentStore: find comments: {:?}, {:?}", query, page);
        let rows = self.rows.read().await;
        let matching: Vec<&Comment> = rows.values().filter(|c| query.matches(c)).collect();

        let items = matching
            .iter()
            .skip(page.offset())
            .take(page.size)
            .map(|c| (*c).clone())
            .collect();

        Ok(Page {
            items,
            request: page,
            total_elements: matching.len(),
        })
    }
}
