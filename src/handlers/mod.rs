//! # API Handlers
//!
//! HTTP endpoints of the presentation layer. Each handler validates its
//! input and calls exactly the Directory Store operations its view needs.

use axum::{extract::State, response::Json};

use crate::db;
use crate::error::{ApiError, ErrorType};
use crate::models::ServiceInfo;
use crate::server::AppState;

pub mod analytics;
pub mod departments;
pub mod employees;
pub mod jobs;
pub mod types;
pub mod validation;

/// Root handler that returns basic service information
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = ServiceInfo)
    ),
    tag = "root"
)]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::default())
}

/// Reports whether the database answers queries
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Database reachable", body = ServiceInfo),
        (status = 503, description = "Database unreachable", body = ApiError)
    ),
    tag = "root"
)]
pub async fn healthz(State(state): State<AppState>) -> Result<Json<ServiceInfo>, ApiError> {
    db::health_check(state.store.connection())
        .await
        .map_err(|err| {
            tracing::warn!(error = %err, "Health check failed");
            ApiError::from(ErrorType::ServiceUnavailable)
        })?;
    Ok(Json(ServiceInfo::default()))
}
