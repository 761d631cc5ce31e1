//! Dashboard Route
//!
//! - GET / - Render the full dashboard page for the submitted sidebar values

use axum::{
    extract::{Query, State},
    response::Html,
};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dashboard;
use crate::prefs::{RawPreferences, UserPreferences};

/// GET /
///
/// Each request is one complete run: fresh generator, fresh tables,
/// fresh charts and map.
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(raw): Query<RawPreferences>,
) -> ApiResult<Html<String>> {
    let prefs = UserPreferences::from_params(&raw)?;
    let rendered = dashboard::run(&state.dashboard, &prefs)?;

    tracing::info!(
        year = %prefs.year(),
        month = %prefs.month(),
        color = %prefs.chart_color(),
        "Dashboard rendered"
    );

    Ok(Html(rendered.page))
}
