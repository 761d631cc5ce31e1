//! Dashboard pipeline
//!
//! One run of the dashboard: seed a fresh generator, draw the tables,
//! render both charts and the map, then assemble the page. Every user
//! interaction executes a complete run; nothing is retained between runs.

use serde::Serialize;

use crate::config::DashboardConfig;
use crate::data::{DataGenerator, Dataset};
use crate::prefs::UserPreferences;
use crate::render::{self, ChartLayout, PageContext, RenderResult};

/// All artifacts produced by one run
#[derive(Debug, Clone, Serialize)]
pub struct RenderedDashboard {
    pub prefs: UserPreferences,
    pub dataset: Dataset,
    #[serde(skip)]
    pub sales_chart: String,
    #[serde(skip)]
    pub performance_chart: String,
    #[serde(skip)]
    pub map_html: String,
    #[serde(skip)]
    pub page: String,
}

/// Generate the tables for the configured seed
pub fn generate(config: &DashboardConfig) -> Dataset {
    DataGenerator::new(config.seed).generate()
}

/// Execute a complete run for the given preferences
pub fn run(config: &DashboardConfig, prefs: &UserPreferences) -> RenderResult<RenderedDashboard> {
    tracing::debug!(
        seed = config.seed,
        name = %prefs.display_name(),
        year = %prefs.year(),
        month = %prefs.month(),
        color = %prefs.chart_color(),
        "Running dashboard"
    );

    let dataset = generate(config);
    let layout = ChartLayout::default();

    let sales_chart = render::line_chart(&dataset.sales, prefs.chart_color(), &layout);
    let performance_chart = render::bar_chart(&dataset.performance, prefs.chart_color(), &layout);
    let map_html = render::render_map(&dataset.customers, &config.map_options())?;

    let page = render::render_page(&PageContext {
        prefs,
        dataset: &dataset,
        sales_chart: &sales_chart,
        performance_chart: &performance_chart,
        map_html: &map_html,
    });

    Ok(RenderedDashboard {
        prefs: prefs.clone(),
        dataset,
        sales_chart,
        performance_chart,
        map_html,
        page,
    })
}
