//! Export Routes
//!
//! - GET /api/v1/export?table=... - Download one generated table as CSV

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use std::sync::Arc;

use crate::api::dto::ExportParams;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dashboard;
use crate::render::{to_csv, TableKind};

/// GET /api/v1/export
pub async fn export_table(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExportParams>,
) -> ApiResult<Response> {
    let kind: TableKind = params.table.parse().map_err(ApiError::Validation)?;

    let dataset = dashboard::generate(&state.dashboard);
    let body = to_csv(&dataset, kind)?;

    let filename = format!(
        "datatech_{}_{}.csv",
        kind,
        Utc::now().format("%Y%m%d_%H%M%S")
    );

    tracing::info!(table = %kind, "Exported table");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        Body::from(body),
    )
        .into_response())
}
