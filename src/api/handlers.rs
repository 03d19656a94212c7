//! API Handlers
//!
//! HTTP request handlers for each comment service endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::cache::{build_cache_with, SharedCache};
use crate::comments::{
    Comment, CommentId, CommentQuery, CommentService, CommentStore, InMemoryCommentStore,
};
use crate::config::Config;
use crate::error::{ConfigError, Result, ServiceError};
use crate::models::{
    CommentResponse, CreateCommentRequest, HealthResponse, PageParams, PageResponse,
    StatsResponse, UpdateCommentRequest,
};

/// Application state shared across all handlers.
///
/// Holds the cached comment store; the cache handle is shared with it.
#[derive(Clone)]
pub struct AppState {
    /// Comment store fronted by the cache
    pub comments: Arc<CommentService>,
}

impl AppState {
    /// Creates a new AppState over `store`, cached by `cache`.
    pub fn new(store: InMemoryCommentStore, cache: SharedCache<CommentId, Comment>) -> Self {
        Self {
            comments: Arc::new(CommentService::new(store, cache)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails when the configured cache cannot be built.
    pub fn from_config(config: &Config) -> std::result::Result<Self, ConfigError> {
        let cache = build_cache_with(config.cache_algorithm, config.cache_capacity)?;
        Ok(Self::new(InMemoryCommentStore::new(), cache))
    }

    /// The cache in front of the comment store.
    pub fn cache(&self) -> &SharedCache<CommentId, Comment> {
        self.comments.cache()
    }
}

async fn list(
    state: &AppState,
    query: CommentQuery,
    params: PageParams,
) -> Result<Json<PageResponse<CommentResponse>>> {
    if let Some(error_msg) = params.validate() {
        return Err(ServiceError::InvalidRequest(error_msg));
    }

    let page = state
        .comments
        .find_page(query, params.to_page_request())
        .await?;
    Ok(Json(PageResponse::from_page(page)))
}

/// Handler for GET /api/comments
pub async fn list_handler(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<PageResponse<CommentResponse>>> {
    list(&state, CommentQuery::default(), params).await
}

/// Handler for GET /api/comments/:id
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<CommentId>,
) -> Result<Json<CommentResponse>> {
    let comment = state.comments.find_by_id(id).await?;
    Ok(Json(comment.into()))
}

/// Handler for GET /api/comments/news-id/:id
pub async fn by_news_handler(
    State(state): State<AppState>,
    Path(news_id): Path<u64>,
    Query(params): Query<PageParams>,
) -> Result<Json<PageResponse<CommentResponse>>> {
    list(&state, CommentQuery::by_news(news_id), params).await
}

/// Handler for GET /api/comments/search/text/:text
pub async fn search_text_handler(
    State(state): State<AppState>,
    Path(fragment): Path<String>,
    Query(params): Query<PageParams>,
) -> Result<Json<PageResponse<CommentResponse>>> {
    list(&state, CommentQuery::by_text(fragment), params).await
}

/// Handler for GET /api/comments/search/username/:username
pub async fn search_username_handler(
    State(state): State<AppState>,
    Path(fragment): Path<String>,
    Query(params): Query<PageParams>,
) -> Result<Json<PageResponse<CommentResponse>>> {
    list(&state, CommentQuery::by_username(fragment), params).await
}

/// Handler for POST /api/comments
pub async fn create_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>)> {
    if let Some(error_msg) = req.validate() {
        return Err(ServiceError::InvalidRequest(error_msg));
    }

    let comment = state.comments.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(comment.into())))
}

/// Handler for PUT /api/comments
pub async fn update_handler(
    State(state): State<AppState>,
    Json(req): Json<UpdateCommentRequest>,
) -> Result<Json<CommentResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ServiceError::InvalidRequest(error_msg));
    }

    let comment = state.comments.update(req.into()).await?;
    Ok(Json(comment.into()))
}

/// Handler for DELETE /api/comments/:id
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<CommentId>,
) -> Result<StatusCode> {
    state.comments.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache();
    Json(StatsResponse::new(
        cache.algorithm(),
        cache.capacity(),
        &cache.stats(),
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
