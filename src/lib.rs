//! # DataTech Dashboard
//!
//! Interactive single-page dashboard for DataTech Solutions. Renders
//! fabricated monthly sales, department performance and customer locations
//! as a line chart, a bar chart and an interactive map, personalised with
//! the visitor's name and chart color.
//!
//! ## Modules
//!
//! - [`prefs`]: The four sidebar inputs (name, year, month, chart color)
//! - [`data`]: Seeded synthetic data generator and record types
//! - [`render`]: SVG charts, Leaflet map, page assembly, CSV tables
//! - [`dashboard`]: One complete run from preferences to page
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use datatech_dashboard::config::DashboardConfig;
//! use datatech_dashboard::dashboard;
//! use datatech_dashboard::prefs::UserPreferences;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let rendered = dashboard::run(&DashboardConfig::default(), &UserPreferences::default())?;
//!
//!     println!("Best month: {:?}", rendered.dataset.summary().best_month);
//!     std::fs::write("dashboard.html", rendered.page)?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod logging;
pub mod prefs;
pub mod render;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, DashboardConfig, LoggingConfig, ServerConfig};

pub use dashboard::RenderedDashboard;

pub use data::{
    CustomerRecord, DataGenerator, Dataset, DatasetSummary, PerformanceRecord, SalesRecord,
};

pub use prefs::{ChartColor, Month, PrefsError, RawPreferences, UserPreferences, Year};

pub use render::{RenderError, TableKind};
