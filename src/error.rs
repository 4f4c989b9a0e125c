//! Application error types and HTTP response mapping.
//!
//! Defines `AppError` enum for all listing failures and implements Axum's
//! `IntoResponse` so handlers can return them directly. Every variant keeps
//! the path the client asked for, because the 404/500 bodies echo it back
//! alongside an empty item list.
//!
//! Error mappings:
//! - `AccessDenied` → 403
//! - `RootNotFound`, `PathNotFound` → 404
//! - `ListingFailed` → 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Access denied: {path}")]
    AccessDenied { path: String },

    #[error("Archive directory not found: {root}")]
    RootNotFound { root: String, path: String },

    #[error("Path not found: {path}")]
    PathNotFound { path: String },

    #[error("Error reading directory {path}: {message}")]
    ListingFailed { path: String, message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::AccessDenied { .. } => {
                (StatusCode::FORBIDDEN, json!({ "error": "Access denied" }))
            }
            AppError::RootNotFound { root, path } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "Archive directory not found",
                    "path": root,
                    "items": [],
                    "currentPath": path,
                }),
            ),
            AppError::PathNotFound { path } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "Path not found",
                    "items": [],
                    "currentPath": path,
                }),
            ),
            AppError::ListingFailed { path, message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Error reading directory",
                    "message": message,
                    "items": [],
                    "currentPath": path,
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
