//! API Routes
//!
//! Configures the Axum router with all comment service endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    by_news_handler, create_handler, delete_handler, get_handler, health_handler, list_handler,
    search_text_handler, search_username_handler, stats_handler, update_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/comments` - Page through all comments
/// - `POST /api/comments` - Create a comment
/// - `PUT /api/comments` - Update a comment
/// - `GET /api/comments/:id` - Retrieve a comment (cached)
/// - `DELETE /api/comments/:id` - Delete a comment
/// - `GET /api/comments/news-id/:id` - Page through comments of a news item
/// - `GET /api/comments/search/text/:text` - Search by text fragment
/// - `GET /api/comments/search/username/:username` - Search by username fragment
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/comments",
            get(list_handler).post(create_handler).put(update_handler),
        )
        .route("/api/comments/:id", get(get_handler).delete(delete_handler))
        .route("/api/comments/news-id/:id", get(by_news_handler))
        .route("/api/comments/search/text/:text", get(search_text_handler))
        .route(
            "/api/comments/search/username/:username",
            get(search_username_handler),
        )
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
