//! Core record types for the synthetic dashboard data
//!
//! Labels and value ranges are fixed; only the drawn values vary with the
//! seed.

use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::Range;

/// Month labels in calendar order
pub const MONTHS: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Department labels in display order
pub const DEPARTMENTS: [&str; 4] = ["Ventas", "Soporte", "Desarrollo", "Marketing"];

/// Cities a customer can be assigned to
pub const CITIES: [&str; 4] = ["Madrid", "Barcelona", "Valencia", "Sevilla"];

/// Number of customers generated per run
pub const CUSTOMER_COUNT: usize = 10;

/// Half-open range of monthly sales amounts
pub const SALES_RANGE: Range<u32> = 1000..5000;

/// Half-open range of department performance scores
pub const SCORE_RANGE: Range<u32> = 50..100;

/// Half-open range of customer latitudes
pub const LATITUDE_RANGE: Range<f64> = -10.0..50.0;

/// Half-open range of customer longitudes
pub const LONGITUDE_RANGE: Range<f64> = -80.0..20.0;

/// Sales total for one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesRecord {
    pub month: &'static str,
    pub sales: u32,
}

/// Performance score for one department
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceRecord {
    pub department: &'static str,
    pub score: u32,
}

/// A fabricated customer location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerRecord {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub city: &'static str,
}

impl CustomerRecord {
    /// Synthetic customer name, numbered from 1
    pub fn synthetic_name(index: usize) -> String {
        format!("Cliente {}", index + 1)
    }
}

/// The three tables produced by one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub sales: Vec<SalesRecord>,
    pub performance: Vec<PerformanceRecord>,
    pub customers: Vec<CustomerRecord>,
}

impl Dataset {
    /// Total sales over the year
    pub fn total_sales(&self) -> u64 {
        self.sales.iter().map(|r| r.sales as u64).sum()
    }

    /// Month with the highest sales; the earliest month wins ties
    pub fn best_month(&self) -> Option<&SalesRecord> {
        self.sales
            .iter()
            .fold(None, |best: Option<&SalesRecord>, r| match best {
                Some(b) if b.sales >= r.sales => Some(b),
                _ => Some(r),
            })
    }

    /// Mean department score
    pub fn average_score(&self) -> f64 {
        if self.performance.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.performance.iter().map(|r| r.score).sum();
        sum as f64 / self.performance.len() as f64
    }

    /// Number of customers in each city, cities with no customers included
    pub fn customers_per_city(&self) -> BTreeMap<&'static str, usize> {
        let mut counts: BTreeMap<&'static str, usize> =
            CITIES.iter().map(|c| (*c, 0)).collect();
        for customer in &self.customers {
            *counts.entry(customer.city).or_insert(0) += 1;
        }
        counts
    }

    pub fn summary(&self) -> DatasetSummary {
        let best = self.best_month();
        DatasetSummary {
            total_sales: self.total_sales(),
            best_month: best.map(|r| r.month),
            best_month_sales: best.map(|r| r.sales),
            average_score: self.average_score(),
            customers_per_city: self.customers_per_city(),
        }
    }
}

/// Headline figures derived from a [`Dataset`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub total_sales: u64,
    pub best_month: Option<&'static str>,
    pub best_month_sales: Option<u32>,
    pub average_score: f64,
    pub customers_per_city: BTreeMap<&'static str, usize>,
}
