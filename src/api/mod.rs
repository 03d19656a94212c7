//! API Module
//!
//! HTTP handlers and routing for the comment service REST API.
//!
//! # Endpoints
//! - `GET|POST|PUT /api/comments` - List, create and update comments
//! - `GET|DELETE /api/comments/:id` - Retrieve or delete a comment
//! - `GET /api/comments/news-id/:id` - Comments of a news item
//! - `GET /api/comments/search/text/:text` - Search by text
//! - `GET /api/comments/search/username/:username` - Search by username
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
