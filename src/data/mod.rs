//! Synthetic Data
//!
//! Fabricated demonstration tables for the dashboard:
//! - [`SalesRecord`]: monthly sales, one row per calendar month
//! - [`PerformanceRecord`]: performance score per department
//! - [`CustomerRecord`]: customer locations with a city label
//!
//! Everything is generated from an explicitly owned, seeded random source
//! ([`DataGenerator`]) and lives only for the duration of a single run.

pub mod generator;
pub mod types;

pub use generator::{DataGenerator, DEFAULT_SEED};
pub use types::{
    CustomerRecord, Dataset, DatasetSummary, PerformanceRecord, SalesRecord, CITIES,
    CUSTOMER_COUNT, DEPARTMENTS, LATITUDE_RANGE, LONGITUDE_RANGE, MONTHS, SALES_RANGE,
    SCORE_RANGE,
};
