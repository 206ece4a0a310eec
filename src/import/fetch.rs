//! Dataset retrieval
//!
//! Resolves what the operator typed into a URL or a local file and loads it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::error::{ImportError, ImportResult};

/// Download directory for FoodData Central dataset archives
pub const FDC_DATASETS_BASE_URL: &str = "https://fdc.nal.usda.gov/fdc-datasets/";

/// Full datasets run to hundreds of megabytes
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Where a dataset archive lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetLocation {
    Url(String),
    File(PathBuf),
}

impl DatasetLocation {
    /// Interpret operator input.
    ///
    /// - `http://` / `https://` input is used as-is
    /// - an existing local path is read from disk
    /// - anything else is treated as a file name under `base_url`
    ///
    /// Blank input resolves to None.
    pub fn resolve(input: &str, base_url: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if input.starts_with("http://") || input.starts_with("https://") {
            return Some(DatasetLocation::Url(input.to_string()));
        }

        if Path::new(input).is_file() {
            return Some(DatasetLocation::File(PathBuf::from(input)));
        }

        let base = base_url.trim_end_matches('/');
        let name = input.trim_start_matches('/');
        Some(DatasetLocation::Url(format!("{}/{}", base, name)))
    }

    /// Load the raw archive bytes
    pub fn fetch(&self) -> ImportResult<Vec<u8>> {
        match self {
            DatasetLocation::Url(url) => download(url),
            DatasetLocation::File(path) => {
                tracing::info!("Reading {}", path.display());
                Ok(std::fs::read(path)?)
            }
        }
    }
}

impl fmt::Display for DatasetLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetLocation::Url(url) => f.write_str(url),
            DatasetLocation::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn download(url: &str) -> ImportResult<Vec<u8>> {
    tracing::info!("Downloading {}", url);

    let client = reqwest::blocking::Client::builder()
        .timeout(DOWNLOAD_TIMEOUT)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(ImportError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes()?;
    tracing::info!("Downloaded {} bytes", bytes.len());
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_urls_verbatim() {
        assert_eq!(
            DatasetLocation::resolve(" https://example.org/a.zip ", FDC_DATASETS_BASE_URL),
            Some(DatasetLocation::Url("https://example.org/a.zip".to_string()))
        );
    }

    #[test]
    fn test_resolve_bare_file_name_against_base() {
        assert_eq!(
            DatasetLocation::resolve("FoodData_Central_sr_legacy_food_json_2018-04.zip", FDC_DATASETS_BASE_URL),
            Some(DatasetLocation::Url(
                "https://fdc.nal.usda.gov/fdc-datasets/FoodData_Central_sr_legacy_food_json_2018-04.zip"
                    .to_string()
            ))
        );
    }

    #[test]
    fn test_resolve_blank_is_none() {
        assert_eq!(DatasetLocation::resolve("   ", FDC_DATASETS_BASE_URL), None);
    }

    #[test]
    fn test_resolve_and_fetch_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("foods.json");
        std::fs::write(&path, "[]").unwrap();

        let location = DatasetLocation::resolve(path.to_str().unwrap(), FDC_DATASETS_BASE_URL).unwrap();
        assert_eq!(location, DatasetLocation::File(path.clone()));
        assert_eq!(location.fetch().unwrap(), b"[]".to_vec());
    }
}
