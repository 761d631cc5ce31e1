//! DataTech Dashboard CLI
//!
//! Offline access to the dashboard pipeline:
//! - Render the full page to a file
//! - Print the generated tables
//! - Write a single chart as SVG
//! - Print the default config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use datatech_dashboard::config::{generate_default_config, Config};
use datatech_dashboard::dashboard;
use datatech_dashboard::logging::init_logging;
use datatech_dashboard::prefs::{ChartColor, RawPreferences, UserPreferences};
use datatech_dashboard::render::{self, ChartLayout, TableKind};

#[derive(Parser)]
#[command(name = "dashboard-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "DataTech Solutions dashboard renderer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the generator seed
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the dashboard page as HTML
    Render {
        /// Display name
        #[arg(long)]
        name: Option<String>,
        /// Year (2021, 2022, 2023)
        #[arg(long)]
        year: Option<String>,
        /// Month (1-12)
        #[arg(long)]
        month: Option<String>,
        /// Chart color (#rrggbb)
        #[arg(long)]
        color: Option<String>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the generated tables
    Data {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = DataFormat::Table)]
        format: DataFormat,
        /// Only this table (sales, performance, customers)
        #[arg(short, long)]
        table: Option<String>,
    },

    /// Write one chart as SVG
    Chart {
        /// Which chart
        #[arg(value_enum)]
        kind: ChartKind,
        /// Chart color (#rrggbb)
        #[arg(long)]
        color: Option<String>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the default config file
    InitConfig {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DataFormat {
    Table,
    Json,
    Csv,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ChartKind {
    Sales,
    Performance,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        config.dashboard.seed = seed;
    }

    init_logging(&config.logging);

    match cli.command {
        Commands::Render {
            name,
            year,
            month,
            color,
            output,
        } => {
            let prefs = UserPreferences::from_params(&RawPreferences {
                name,
                year,
                month,
                color,
            })?;

            let rendered = dashboard::run(&config.dashboard, &prefs)?;
            write_output(output.as_deref(), &rendered.page)?;
        }

        Commands::Data { format, table } => {
            let kinds = match table {
                Some(t) => vec![t.parse::<TableKind>().map_err(anyhow::Error::msg)?],
                None => TableKind::ALL.to_vec(),
            };

            let dataset = dashboard::generate(&config.dashboard);

            match format {
                DataFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&dataset)?);
                }
                DataFormat::Csv => {
                    for kind in kinds {
                        print!("{}", render::to_csv(&dataset, kind)?);
                    }
                }
                DataFormat::Table => {
                    for kind in kinds {
                        println!("{}", render::to_text(&dataset, kind));
                    }
                }
            }
        }

        Commands::Chart {
            kind,
            color,
            output,
        } => {
            let color = match color {
                Some(c) => ChartColor::parse(&c)?,
                None => ChartColor::default(),
            };

            let dataset = dashboard::generate(&config.dashboard);
            let layout = ChartLayout::default();

            let svg = match kind {
                ChartKind::Sales => render::line_chart(&dataset.sales, &color, &layout),
                ChartKind::Performance => {
                    render::bar_chart(&dataset.performance, &color, &layout)
                }
            };

            write_output(output.as_deref(), &svg)?;
        }

        Commands::InitConfig { output } => {
            write_output(output.as_deref(), &generate_default_config())?;
        }
    }

    Ok(())
}

fn write_output(path: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content).with_context(|| format!("Failed to write {:?}", p))?;
            tracing::info!("Wrote {} bytes to {:?}", content.len(), p);
        }
        None => print!("{}", content),
    }
    Ok(())
}
