//! Seeded synthetic data generator
//!
//! Draw order is fixed so a given seed always yields the same tables:
//! 12 sales values, 4 performance scores, then the customer columns
//! (all latitudes, all longitudes, all cities).

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::types::*;

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 42;

/// Generates the dashboard tables from a locally owned random source
pub struct DataGenerator {
    rng: StdRng,
    seed: u64,
}

impl DataGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw all three tables
    pub fn generate(&mut self) -> Dataset {
        let sales = self.monthly_sales();
        let performance = self.department_performance();
        let customers = self.customers();

        tracing::debug!(
            seed = self.seed,
            sales_rows = sales.len(),
            performance_rows = performance.len(),
            customer_rows = customers.len(),
            "Generated synthetic dataset"
        );

        Dataset {
            sales,
            performance,
            customers,
        }
    }

    fn monthly_sales(&mut self) -> Vec<SalesRecord> {
        MONTHS
            .iter()
            .map(|&month| SalesRecord {
                month,
                sales: self.rng.gen_range(SALES_RANGE),
            })
            .collect()
    }

    fn department_performance(&mut self) -> Vec<PerformanceRecord> {
        DEPARTMENTS
            .iter()
            .map(|&department| PerformanceRecord {
                department,
                score: self.rng.gen_range(SCORE_RANGE),
            })
            .collect()
    }

    fn customers(&mut self) -> Vec<CustomerRecord> {
        // Column-wise: each coordinate is drawn exactly once per customer.
        let latitudes: Vec<f64> = (0..CUSTOMER_COUNT)
            .map(|_| self.rng.gen_range(LATITUDE_RANGE))
            .collect();
        let longitudes: Vec<f64> = (0..CUSTOMER_COUNT)
            .map(|_| self.rng.gen_range(LONGITUDE_RANGE))
            .collect();
        let cities: Vec<&'static str> = (0..CUSTOMER_COUNT)
            .map(|_| *CITIES.choose(&mut self.rng).unwrap_or(&CITIES[0]))
            .collect();

        latitudes
            .into_iter()
            .zip(longitudes)
            .zip(cities)
            .enumerate()
            .map(|(i, ((latitude, longitude), city))| CustomerRecord {
                latitude,
                longitude,
                name: CustomerRecord::synthetic_name(i),
                city,
            })
            .collect()
    }
}

impl Default for DataGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
