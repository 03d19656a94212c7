//! Comments Module
//!
//! Domain model, the backing-store contract, an in-memory store and the
//! caching decorator that fronts it.

mod cached;
mod memory;
mod model;
mod store;

pub use cached::CachedCommentStore;
pub use memory::InMemoryCommentStore;
pub use model::{
    Comment, CommentId, CommentQuery, CommentUpdate, NewComment, Page, PageRequest,
    DEFAULT_PAGE_SIZE,
};
pub use store::CommentStore;

/// The store served over HTTP: the in-memory store behind the cache.
pub type CommentService = CachedCommentStore<InMemoryCommentStore>;
