//! zoning-check
//!
//! Checks a proposed building's gross floor area against every zoning
//! district overlapping a parcel and prints one verdict per district.
//!
//! Districts are read from a JSON array; each district may carry the
//! constraint rows recorded for it under `constraints`. A district without
//! that field has no recorded requirements and allows the building.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{info, warn, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use zoning_compliance::{
    single_floor_area, DistrictTableResolver, EvaluatorConfig, FloorAreaEvaluator,
};
use zoning_types::EvaluationReport;

mod error;
mod input;
mod render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

/// Command-line arguments for zoning-check
#[derive(Parser, Debug)]
#[command(name = "zoning-check")]
#[command(about = "Check a building's floor area against zoning district constraints")]
struct Args {
    /// Building JSON: one object, or an array holding exactly one row
    #[arg(short, long)]
    building: PathBuf,

    /// Zoning districts JSON array
    #[arg(short, long)]
    districts: PathBuf,

    /// Optional parcel context JSON, forwarded to the requirement resolver
    #[arg(short, long)]
    parcel: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Lower bound assumed when a constraint has no usable minimum
    #[arg(long)]
    default_min: Option<f64>,

    /// Upper bound assumed when a constraint has no usable maximum
    #[arg(long)]
    default_max: Option<f64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn evaluator_config(&self) -> EvaluatorConfig {
        let mut config = EvaluatorConfig::default();
        if let Some(min) = self.default_min {
            config = config.with_default_min(min);
        }
        if let Some(max) = self.default_max {
            config = config.with_default_max(max);
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so the report on stdout stays machine-readable
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let buildings = input::load_buildings(&args.building)?;
    let districts = input::load_districts(&args.districts)?;
    let parcel = args.parcel.as_deref().map(input::load_parcel).transpose()?;

    info!(
        buildings = buildings.len(),
        districts = districts.len(),
        parcel = ?parcel.as_ref().and_then(|p| p.parcel_id.as_deref()),
        "Evaluating floor area"
    );

    let evaluator = FloorAreaEvaluator::with_config(args.evaluator_config());
    let results = evaluator.evaluate(
        &DistrictTableResolver,
        &buildings,
        &districts,
        parcel.as_ref(),
    );

    if results.is_empty() && !districts.is_empty() {
        warn!("Evaluation could not proceed for this building");
    }

    let report = EvaluationReport::new(
        parcel.and_then(|p| p.parcel_id),
        single_floor_area(&buildings),
        results,
    );

    info!(
        allowed = report.summary.allowed,
        denied = report.summary.denied,
        indeterminate = report.summary.indeterminate,
        permitted_somewhere = report.is_permitted_somewhere(),
        "Evaluation complete"
    );

    let output = match args.format {
        OutputFormat::Json => render::render_json(&report)?,
        OutputFormat::Table => render::render_table(&report),
    };
    println!("{}", output);

    Ok(())
}
