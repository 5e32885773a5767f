//! The health check route.

use axum::Json;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The response payload for the health check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "ok" whenever the server is able to respond.
    pub status: String,

    /// A human-readable description of the server state.
    pub message: String,

    /// The server time the health check ran at.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// A route handler that reports whether the server is running.
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Server is running".to_string(),
        timestamp: OffsetDateTime::now_utc(),
    })
}

#[cfg(test)]
mod health_route_tests {
    use super::get_health;

    #[tokio::test]
    async fn health_reports_ok() {
        let response = get_health().await.0;

        assert_eq!(response.status, "ok");
        assert_eq!(response.message, "Server is running");
    }
}
