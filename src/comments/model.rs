//! Comment domain model
//!
//! Records, mutation inputs and paging types shared by every comment store.

use chrono::{DateTime, Utc};

/// Store-generated comment identity.
pub type CommentId = u64;

/// Default page size for listing queries.
pub const DEFAULT_PAGE_SIZE: usize = 15;

// == Comment ==
/// A committed comment on a news item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub news_id: u64,
    /// Creation time, set by the store
    pub time: DateTime<Utc>,
    pub username: String,
    pub text: String,
}

/// Input for creating a comment. The store assigns id and time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub news_id: u64,
    pub username: String,
    pub text: String,
}

/// Partial update of an existing comment; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentUpdate {
    pub id: CommentId,
    pub news_id: Option<u64>,
    pub username: Option<String>,
    pub text: Option<String>,
}

impl CommentUpdate {
    /// Applies the present fields to `comment`.
    pub fn apply_to(self, comment: &mut Comment) {
        if let Some(news_id) = self.news_id {
            comment.news_id = news_id;
        }
        if let Some(username) = self.username {
            comment.username = username;
        }
        if let Some(text) = self.text {
            comment.text = text;
        }
    }
}

// == Query ==
/// Filters for listing comments. Every present filter must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentQuery {
    /// Exact news item
    pub news_id: Option<u64>,
    /// Username substring
    pub username: Option<String>,
    /// Text substring
    pub text: Option<String>,
}

impl CommentQuery {
    pub fn by_news(news_id: u64) -> Self {
        Self {
            news_id: Some(news_id),
            ..Self::default()
        }
    }

    pub fn by_username(fragment: impl Into<String>) -> Self {
        Self {
            username: Some(fragment.into()),
            ..Self::default()
        }
    }

    pub fn by_text(fragment: impl Into<String>) -> Self {
        Self {
            text: Some(fragment.into()),
            ..Self::default()
        }
    }

    pub fn matches(&self, comment: &Comment) -> bool {
        self.news_id.map_or(true, |id| comment.news_id == id)
            && self
                .username
                .as_deref()
                .map_or(true, |fragment| comment.username.contains(fragment))
            && self
                .text
                .as_deref()
                .map_or(true, |fragment| comment.text.contains(fragment))
    }
}

// == Paging ==
/// Zero-based page index and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Self {
        Self { page, size }
    }

    /// Index of the first element of the page.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// One page of results plus the total count across all pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub request: PageRequest,
    pub total_elements: usize,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> usize {
        if self.request.size == 0 {
            0
        } else {
            self.total_elements.div_ceil(self.request.size)
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            request: self.request,
            total_elements: self.total_elements,
        }
    }
}
