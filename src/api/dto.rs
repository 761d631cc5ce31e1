//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::data::{CustomerRecord, DatasetSummary, PerformanceRecord, SalesRecord};
use crate::prefs::UserPreferences;

// ============================================
// DATASET DTOs
// ============================================

/// Generated tables for one run, with the preferences that produced it
#[derive(Debug, Serialize)]
pub struct DatasetResponse {
    /// Echo of the active preferences
    pub preferences: UserPreferences,
    /// Generator seed
    pub seed: u64,
    /// When this run was executed
    pub generated_at: DateTime<Utc>,
    pub sales: Vec<SalesRecord>,
    pub performance: Vec<PerformanceRecord>,
    pub customers: Vec<CustomerRecord>,
    pub summary: DatasetSummary,
}

// ============================================
// CHART DTOs
// ============================================

/// Chart query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ChartParams {
    /// Series color, `#rrggbb`
    #[serde(default)]
    pub color: Option<String>,
}

// ============================================
// EXPORT DTOs
// ============================================

/// Export query parameters
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    /// Table to export: sales, performance, customers
    pub table: String,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, unhealthy
    pub status: String,
    /// Data generator status
    pub generator: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
