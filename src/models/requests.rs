//! Request DTOs for the comment API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use crate::comments::{CommentId, CommentUpdate, NewComment, PageRequest, DEFAULT_PAGE_SIZE};

/// Request body for creating a comment (POST /api/comments)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommentRequest {
    /// News item the comment belongs to
    pub news_id: u64,
    /// Author of the comment
    pub username: String,
    /// Comment text
    #[serde(default)]
    pub text: String,
}

impl CreateCommentRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.username.trim().is_empty() {
            return Some("Username cannot be empty".to_string());
        }
        None
    }
}

impl From<CreateCommentRequest> for NewComment {
    fn from(req: CreateCommentRequest) -> Self {
        Self {
            news_id: req.news_id,
            username: req.username,
            text: req.text,
        }
    }
}

/// Request body for updating a comment (PUT /api/comments)
///
/// Omitted fields keep their stored values.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCommentRequest {
    /// Comment to update
    pub id: CommentId,
    #[serde(default)]
    pub news_id: Option<u64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl UpdateCommentRequest {
    /// Validates the request data
    pub fn validate(&self) -> Option<String> {
        if matches!(&self.username, Some(username) if username.trim().is_empty()) {
            return Some("Username cannot be empty".to_string());
        }
        if matches!(&self.text, Some(text) if text.trim().is_empty()) {
            return Some("Text cannot be empty".to_string());
        }
        None
    }
}

impl From<UpdateCommentRequest> for CommentUpdate {
    fn from(req: UpdateCommentRequest) -> Self {
        Self {
            id: req.id,
            news_id: req.news_id,
            username: req.username,
            text: req.text,
        }
    }
}

/// Paging query string (`?offset=&limit=`)
///
/// `offset` is the zero-based page index and `limit` the page size.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub offset: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl PageParams {
    /// Validates the request data
    pub fn validate(&self) -> Option<String> {
        if self.limit == Some(0) {
            return Some("Limit must be at least 1".to_string());
        }
        None
    }

    pub fn to_page_request(&self) -> PageRequest {
        PageRequest::new(
            self.offset.unwrap_or(0),
            self.limit.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}
