//! Dataset import module
//!
//! Retrieval, extraction and reconciliation around the normalizer.

pub mod archive;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod reconcile;

pub use error::{ImportError, ImportResult};
pub use extract::{extract_records, Extraction, RecordShape};
pub use fetch::{DatasetLocation, FDC_DATASETS_BASE_URL};
pub use pipeline::{import_dataset, import_text, normalize_batch, ImportReport, NormalizedBatch, RunSummary};
pub use reconcile::{upsert_batch, UpsertSummary};
