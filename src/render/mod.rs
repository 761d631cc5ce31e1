//! Dashboard Rendering
//!
//! Turns a [`Dataset`](crate::data::Dataset) and the active
//! [`UserPreferences`](crate::prefs::UserPreferences) into output artifacts:
//!
//! - [`chart`]: SVG line chart (monthly sales) and bar chart (department
//!   performance), drawn in the user's chart color
//! - [`map`]: Leaflet map with one marker per customer
//! - [`page`]: the full HTML page with sidebar form and messages
//! - [`table`]: CSV and plain-text renditions of the raw tables

pub mod chart;
pub mod error;
pub mod map;
pub mod page;
pub mod table;

pub use chart::{bar_chart, line_chart, ChartLayout};
pub use error::{RenderError, RenderResult};
pub use map::{popup_html, render_map, MapOptions, MAP_TOOLTIP};
pub use page::{active_user_line, render_page, welcome_message, PageContext};
pub use table::{to_csv, to_text, TableKind};
