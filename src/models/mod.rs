//! Request and Response models for the comment API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CreateCommentRequest, PageParams, UpdateCommentRequest};
pub use responses::{CommentResponse, HealthResponse, PageResponse, StatsResponse};
