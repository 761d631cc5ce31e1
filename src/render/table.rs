//! Table output
//!
//! CSV export and a plain-text layout of the generated tables.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::error::{RenderError, RenderResult};
use crate::data::Dataset;

/// Which generated table to output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Sales,
    Performance,
    Customers,
}

impl TableKind {
    pub const ALL: [TableKind; 3] = [TableKind::Sales, TableKind::Performance, TableKind::Customers];

    pub fn as_str(self) -> &'static str {
        match self {
            TableKind::Sales => "sales",
            TableKind::Performance => "performance",
            TableKind::Customers => "customers",
        }
    }
}

impl FromStr for TableKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sales" | "ventas" => Ok(TableKind::Sales),
            "performance" | "rendimiento" => Ok(TableKind::Performance),
            "customers" | "clientes" => Ok(TableKind::Customers),
            other => Err(format!("Unknown table: {}", other)),
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialize one table as CSV with a header row
pub fn to_csv(dataset: &Dataset, kind: TableKind) -> RenderResult<String> {
    match kind {
        TableKind::Sales => write_csv(&dataset.sales),
        TableKind::Performance => write_csv(&dataset.performance),
        TableKind::Customers => write_csv(&dataset.customers),
    }
}

fn write_csv<T: Serialize>(rows: &[T]) -> RenderResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| RenderError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| RenderError::Csv(e.to_string()))
}

/// Fixed-width text rendition for terminal output
pub fn to_text(dataset: &Dataset, kind: TableKind) -> String {
    let mut out = String::new();

    match kind {
        TableKind::Sales => {
            out.push_str(&format!("{:<12} {:>8}\n", "Mes", "Ventas"));
            out.push_str(&format!("{}\n", "-".repeat(21)));
            for r in &dataset.sales {
                out.push_str(&format!("{:<12} {:>8}\n", r.month, r.sales));
            }
        }
        TableKind::Performance => {
            out.push_str(&format!("{:<12} {:>11}\n", "Departamento", "Rendimiento"));
            out.push_str(&format!("{}\n", "-".repeat(24)));
            for r in &dataset.performance {
                out.push_str(&format!("{:<12} {:>11}\n", r.department, r.score));
            }
        }
        TableKind::Customers => {
            out.push_str(&format!(
                "{:<10} {:<10} {:>9} {:>9}\n",
                "Nombre", "Ciudad", "Latitud", "Longitud"
            ));
            out.push_str(&format!("{}\n", "-".repeat(41)));
            for c in &dataset.customers {
                out.push_str(&format!(
                    "{:<10} {:<10} {:>9.2} {:>9.2}\n",
                    c.name, c.city, c.latitude, c.longitude
                ));
            }
        }
    }

    out
}
