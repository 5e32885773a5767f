//! Kakeibo API is a small REST service for recording household budget
//! entries (income and expenses) against a fixed set of categories.
//!
//! A budget entry is stored as two rows: a budget base holding the monetary
//! fact (amount, memo, category) and a budget holding its calendar placement
//! and owner. This library provides the validation layer, the domain service
//! and the SQLite-backed stores behind the HTTP surface.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
pub mod config;
mod db;
mod endpoints;
mod logging;
pub mod models;
mod routes;
pub mod services;
pub mod stores;
pub mod validation;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routes::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request failed a validation rule.
    ///
    /// The message names the offending field and is safe to show to the
    /// client.
    #[error("{0}")]
    Validation(String),

    /// The category referenced when creating a budget entry does not exist.
    #[error("Category not found")]
    CategoryNotFound,

    /// An unhandled/unexpected SQL error.
    ///
    /// Includes constraint violations, e.g., a category deleted between the
    /// existence check and the insert that references it.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

/// Machine-readable codes for expected business-rule failures.
///
/// Infrastructure errors carry no code and are reported to the client as
/// opaque internal errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The input violated a domain invariant.
    ValidationError,
    /// A referenced resource does not exist.
    NotFound,
}

impl Error {
    /// The machine-readable code for this error, or `None` for
    /// infrastructure errors.
    ///
    /// Callers branching on the kind of failure should match on the code
    /// rather than on the variant, so that new infrastructure variants do
    /// not change their behaviour.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Error::Validation(_) => Some(ErrorCode::ValidationError),
            Error::CategoryNotFound => Some(ErrorCode::NotFound),
            Error::SqlError(_) => None,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        Error::SqlError(error)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self.code() {
            Some(ErrorCode::ValidationError) => StatusCode::BAD_REQUEST,
            Some(ErrorCode::NotFound) => StatusCode::NOT_FOUND,
            None => {
                tracing::error!("An unexpected error occurred: {}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
