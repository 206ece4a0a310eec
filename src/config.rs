//! Runtime configuration
//!
//! Read from the environment; dataset locations that are not set there are
//! asked for on stdin.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::import::FDC_DATASETS_BASE_URL;
use crate::models::Source;

/// Overrides the database location
pub const DATABASE_PATH_VAR: &str = "FDC_DATABASE_PATH";
/// Overrides the base URL bare file names are resolved against
pub const BASE_URL_VAR: &str = "FDC_BASE_URL";

#[derive(Debug, Clone)]
pub struct ImportConfig {
    pub database_path: PathBuf,
    pub base_url: String,
    dataset_inputs: HashMap<Source, String>,
}

impl ImportConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, so tests need not touch the process env
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = lookup(DATABASE_PATH_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_database_path);

        let base_url = lookup(BASE_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| FDC_DATASETS_BASE_URL.to_string());

        let dataset_inputs = Source::ALL
            .iter()
            .filter_map(|source| {
                lookup(source.url_env_var())
                    .filter(|v| !v.trim().is_empty())
                    .map(|v| (*source, v))
            })
            .collect();

        Self {
            database_path,
            base_url,
            dataset_inputs,
        }
    }

    /// Dataset location given in the environment, if any
    pub fn dataset_input(&self, source: Source) -> Option<&str> {
        self.dataset_inputs.get(&source).map(String::as_str)
    }
}

/// `<project>/data/foods.db`, next to the build output's project root
pub fn default_database_path() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    // Go up from target/release or target/debug to project root
    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(parent) = path.parent() {
            if let Some(grandparent) = parent.parent() {
                path = grandparent.to_path_buf();
            }
        }
    }

    path.push("data");
    path.push("foods.db");
    path
}

/// Ask the operator for a dataset location. Blank input skips the dataset.
pub fn prompt_for_dataset<R, W>(source: Source, input: &mut R, output: &mut W) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "Enter the {} dataset URL (blank to skip): ", source.label())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let line = line.trim();

    Ok((!line.is_empty()).then(|| line.to_string()))
}
