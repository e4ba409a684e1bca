use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::models::JsonFileError;

/// Saved PDF path → source URL.
///
/// Keys are kept sorted so that writing the same table twice produces the
/// same bytes.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mapping(BTreeMap<String, String>);

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads an existing mapping file, or an empty mapping if there is none.
    pub fn load_or_default(path: &Path) -> Result<Self, JsonFileError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::new()),
            Err(source) => {
                return Err(JsonFileError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&raw).map_err(|source| JsonFileError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overwrites `path` with the whole table, indented by four spaces.
    pub fn save(&self, path: &Path) -> Result<(), JsonFileError> {
        let write_error = |source| JsonFileError::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(write_error)?;
        let mut writer = BufWriter::new(file);
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
        self.serialize(&mut ser).map_err(|e| write_error(e.into()))?;
        writer.flush().map_err(write_error)
    }

    /// Records `path` as saved from `url`, returning the URL it replaced.
    pub fn insert(&mut self, path: impl Into<String>, url: impl Into<String>) -> Option<String> {
        self.0.insert(path.into(), url.into())
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
