//! Catalog Loader — parses the bundled faculty dataset into a `FacultyCatalog`.
//!
//! Any failure here is fatal to startup: the service never runs with a
//! partially loaded catalog.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::catalog::{FacultyCatalog, FacultyRecord};

#[derive(Debug, Error)]
pub enum DatasetLoadError {
    #[error("failed to read faculty dataset at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("faculty dataset at {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("faculty dataset at {path} contains no records")]
    Empty { path: PathBuf },

    #[error("faculty record #{index} is invalid: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

/// Reads and validates the dataset at `path`.
pub fn load_catalog(path: &Path) -> Result<FacultyCatalog, DatasetLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DatasetLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_records(&raw).map_err(|e| match e {
        ParseFailure::Json(source) => DatasetLoadError::Parse {
            path: path.to_path_buf(),
            source,
        },
        ParseFailure::Empty => DatasetLoadError::Empty {
            path: path.to_path_buf(),
        },
        ParseFailure::Invalid { index, reason } => {
            DatasetLoadError::InvalidRecord { index, reason }
        }
    })?;

    info!("Loaded {} faculty records from {}", records.len(), path.display());
    Ok(FacultyCatalog::new(records))
}

enum ParseFailure {
    Json(serde_json::Error),
    Empty,
    Invalid { index: usize, reason: String },
}

fn parse_records(raw: &str) -> Result<Vec<FacultyRecord>, ParseFailure> {
    let records: Vec<FacultyRecord> = serde_json::from_str(raw).map_err(ParseFailure::Json)?;

    if records.is_empty() {
        return Err(ParseFailure::Empty);
    }

    for (index, record) in records.iter().enumerate() {
        if record.name.trim().is_empty() {
            return Err(ParseFailure::Invalid {
                index,
                reason: "name is blank".to_string(),
            });
        }
        if record.profile_url.trim().is_empty() {
            return Err(ParseFailure::Invalid {
                index,
                reason: format!("profile_url is blank for '{}'", record.name),
            });
        }
    }

    Ok(records)
}
