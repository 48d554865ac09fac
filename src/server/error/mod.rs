//! Error types and HTTP response handling.
//!
//! This module provides the application's error taxonomy and the conversion that turns
//! errors into HTTP responses. Repositories translate `sea_orm::DbErr` into `AppError`
//! variants, services pass them through unchanged, and controllers return them directly
//! so axum renders them through `IntoResponse`. Nothing in the stack retries.

pub mod config;
pub mod identifier;

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, identifier::IdentifierError},
};

/// Top-level application error type.
///
/// Every failure that can reach a client is one of these variants. The message of the
/// underlying error is always exposed in the `{error}` response body.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// A client-supplied identifier is not a valid 24 character hex string.
    ///
    /// Raised before any store access, so no state has been touched.
    #[error(transparent)]
    InvalidIdentifier(#[from] IdentifierError),

    /// No document matched the requested identifier or alias.
    #[error("{0}")]
    NotFound(String),

    /// The store could not be reached or rejected the operation.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[source] DbErr),

    /// A stored row could not be mapped onto the domain model.
    #[error("Failed to decode stored document: {0}")]
    DecodeError(String),

    /// The per-request deadline elapsed before the store answered.
    #[error("Operation timed out after {} ms", .0.as_millis())]
    Timeout(Duration),

    /// Socket error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Translates SeaORM errors into the application taxonomy.
///
/// - `RecordNotFound` → `NotFound`
/// - `Type`, `Json`, `TryIntoErr` → `DecodeError`
/// - anything else → `StoreUnavailable`
impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(msg) => AppError::NotFound(msg),
            DbErr::Type(msg) | DbErr::Json(msg) => AppError::DecodeError(msg),
            err @ DbErr::TryIntoErr { .. } => AppError::DecodeError(err.to_string()),
            err => AppError::StoreUnavailable(err),
        }
    }
}

impl AppError {
    /// HTTP status code the error is reported with.
    ///
    /// # Returns
    /// - 400 Bad Request - For `InvalidIdentifier`
    /// - 404 Not Found - For `NotFound`
    /// - 504 Gateway Timeout - For `Timeout`
    /// - 500 Internal Server Error - For store, decode, configuration and I/O failures
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::ConfigErr(_) | Self::StoreUnavailable(_) | Self::DecodeError(_) | Self::IoErr(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Converts application errors into `{error: <message>}` JSON responses.
///
/// Server-side failures are logged at error level, client-caused ones at debug level.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("Request failed with {}: {}", status, self);
        }

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
