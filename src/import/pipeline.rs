//! Dataset import pipeline
//!
//! fetch -> extract -> normalize -> upsert, one dataset at a time.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::build_info::BuildInfo;
use crate::db::Database;
use crate::models::{NormalizedFood, Source};
use crate::nutrition::{Normalizer, NutrientTable, Rejection};
use super::archive::read_json_entry;
use super::error::ImportResult;
use super::extract::extract_records;
use super::fetch::DatasetLocation;
use super::reconcile::{upsert_batch, UpsertSummary};

/// Outcome of importing one dataset
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub source: Source,
    pub records_seen: usize,
    pub accepted: usize,
    pub rejected: BTreeMap<&'static str, usize>,
    pub upsert: UpsertSummary,
}

impl ImportReport {
    pub fn rejected_total(&self) -> usize {
        self.rejected.values().sum()
    }
}

/// What `fdc-import` prints when a run finishes
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub build: BuildInfo,
    pub reports: Vec<ImportReport>,
}

impl RunSummary {
    pub fn new(reports: Vec<ImportReport>) -> Self {
        Self {
            build: BuildInfo::current(),
            reports,
        }
    }
}

/// Foods that passed normalization, plus what was dropped
#[derive(Debug, Default)]
pub struct NormalizedBatch {
    pub foods: Vec<NormalizedFood>,
    pub records_seen: usize,
    pub rejected: BTreeMap<Rejection, usize>,
}

/// Normalize every record, keeping the accepted foods in input order
pub fn normalize_batch(records: &[Value], source: Source, normalizer: &Normalizer) -> NormalizedBatch {
    let mut batch = NormalizedBatch {
        records_seen: records.len(),
        ..Default::default()
    };

    for raw in records {
        match normalizer.normalize(raw, source) {
            Ok(food) => batch.foods.push(food),
            Err(reason) => {
                tracing::trace!(fdc_id = ?raw.get("fdcId"), %reason, "Rejected record");
                *batch.rejected.entry(reason).or_insert(0) += 1;
            }
        }
    }

    batch
}

/// Import a dataset whose JSON text is already in memory
pub fn import_text(
    db: &Database,
    table: &NutrientTable,
    source: Source,
    text: &str,
) -> ImportResult<ImportReport> {
    let extraction = extract_records(text);
    tracing::info!(
        "{}: found {} records ({})",
        source,
        extraction.records.len(),
        extraction.shape
    );

    let batch = normalize_batch(&extraction.records, source, &Normalizer::new(table));
    drop(extraction);

    tracing::info!(
        "{}: parsed {} of {} foods",
        source,
        batch.foods.len(),
        batch.records_seen
    );
    for (reason, count) in &batch.rejected {
        tracing::debug!("{}: rejected {} records ({})", source, count, reason);
    }

    let upsert = db.with_conn_mut(|conn| upsert_batch(conn, &batch.foods))?;

    Ok(ImportReport {
        source,
        records_seen: batch.records_seen,
        accepted: batch.foods.len(),
        rejected: batch
            .rejected
            .iter()
            .map(|(reason, count)| (reason.as_str(), *count))
            .collect(),
        upsert,
    })
}

/// Fetch, unpack and import one dataset
pub fn import_dataset(
    db: &Database,
    table: &NutrientTable,
    source: Source,
    location: &DatasetLocation,
) -> ImportResult<ImportReport> {
    let bytes = location.fetch()?;
    let text = read_json_entry(bytes)?;
    import_text(db, table, source, &text)
}
