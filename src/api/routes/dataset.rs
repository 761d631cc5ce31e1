//! Dataset Route
//!
//! - GET /api/v1/dataset - Generated tables as JSON

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::api::dto::DatasetResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dashboard;
use crate::prefs::{RawPreferences, UserPreferences};

/// GET /api/v1/dataset
///
/// Returns the three tables for the configured seed along with the
/// validated preferences. Year and month are echoed but do not filter.
pub async fn get_dataset(
    State(state): State<Arc<AppState>>,
    Query(raw): Query<RawPreferences>,
) -> ApiResult<Json<DatasetResponse>> {
    let preferences = UserPreferences::from_params(&raw)?;
    let dataset = dashboard::generate(&state.dashboard);
    let summary = dataset.summary();

    Ok(Json(DatasetResponse {
        preferences,
        seed: state.dashboard.seed,
        generated_at: Utc::now(),
        sales: dataset.sales,
        performance: dataset.performance,
        customers: dataset.customers,
        summary,
    }))
}
