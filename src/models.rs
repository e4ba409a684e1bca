use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure reading or writing one of the JSON files.
#[derive(Debug, Error)]
pub enum JsonFileError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads the ordered list of blog post URLs from a JSON array of strings.
///
/// Order is kept and duplicates are allowed.
pub fn load_urls(path: &Path) -> Result<Vec<String>, JsonFileError> {
    let raw = fs::read_to_string(path).map_err(|source| JsonFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| JsonFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
