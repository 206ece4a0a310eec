//! Import error types

use thiserror::Error;

use crate::db::DbError;

/// Failures that abort the import of a dataset.
///
/// Bad individual records are never errors; they are counted as rejections.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Download of {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Archive contains no JSON file")]
    NoJsonEntry,

    #[error("Dataset is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Database error: {0}")]
    Db(#[from] DbError),
}

pub type ImportResult<T> = Result<T, ImportError>;
