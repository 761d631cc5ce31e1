//! Chart Routes
//!
//! - GET /api/v1/charts/sales.svg - Monthly sales line chart
//! - GET /api/v1/charts/performance.svg - Department performance bar chart

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::api::dto::ChartParams;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dashboard;
use crate::prefs::ChartColor;
use crate::render::{bar_chart, line_chart, ChartLayout};

const SVG_CONTENT_TYPE: &str = "image/svg+xml";

fn chart_color(params: &ChartParams) -> ApiResult<ChartColor> {
    match params.color.as_deref().filter(|c| !c.trim().is_empty()) {
        Some(c) => Ok(ChartColor::parse(c)?),
        None => Ok(ChartColor::default()),
    }
}

/// GET /api/v1/charts/sales.svg
pub async fn sales_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChartParams>,
) -> ApiResult<impl IntoResponse> {
    let color = chart_color(&params)?;
    let dataset = dashboard::generate(&state.dashboard);
    let svg = line_chart(&dataset.sales, &color, &ChartLayout::default());

    Ok(([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], svg))
}

/// GET /api/v1/charts/performance.svg
pub async fn performance_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChartParams>,
) -> ApiResult<impl IntoResponse> {
    let color = chart_color(&params)?;
    let dataset = dashboard::generate(&state.dashboard);
    let svg = bar_chart(&dataset.performance, &color, &ChartLayout::default());

    Ok(([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], svg))
}
