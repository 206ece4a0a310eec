//! FoodData Central Import
//!
//! Refreshes the local food database from the Foundation and SR Legacy
//! JSON downloads.

use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use fdc_import::build_info;
use fdc_import::config::{prompt_for_dataset, ImportConfig};
use fdc_import::db::Database;
use fdc_import::import::{import_dataset, DatasetLocation, ImportReport, RunSummary};
use fdc_import::models::Source;
use fdc_import::nutrition::NutrientTable;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fdc_import=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = ImportConfig::from_env();
    eprintln!("Database path: {}", config.database_path.display());

    let database = Database::open_migrated(&config.database_path)?;
    eprintln!("Database schema version: {}", database.schema_version()?);

    eprintln!("Dataset downloads: https://fdc.nal.usda.gov/download-datasets.html");
    eprintln!("Use the JSON archives (.zip with '_json_' in the name), not the CSV ones.");

    let table = NutrientTable::fdc();
    let stdin = io::stdin();
    let mut reports: Vec<ImportReport> = Vec::new();
    let mut failed = false;

    for source in Source::ALL {
        let input = match config.dataset_input(source) {
            Some(input) => Some(input.to_string()),
            None => prompt_for_dataset(source, &mut stdin.lock(), &mut io::stderr())?,
        };

        let Some(location) = input.and_then(|i| DatasetLocation::resolve(&i, &config.base_url)) else {
            tracing::warn!("{}: no dataset given, skipping", source);
            continue;
        };

        match import_dataset(&database, &table, source, &location) {
            Ok(report) => {
                tracing::info!(
                    "{}: stored {} foods ({} new, {} updated), {} portions",
                    source,
                    report.upsert.foods_written,
                    report.upsert.inserted,
                    report.upsert.updated,
                    report.upsert.portions_written
                );
                reports.push(report);
            }
            Err(e) => {
                tracing::error!("{}: import from {} failed: {}", source, location, e);
                failed = true;
            }
        }
    }

    println!("{}", serde_json::to_string_pretty(&RunSummary::new(reports))?);
    eprintln!("Done. Normalized foods stored in {}", config.database_path.display());

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
