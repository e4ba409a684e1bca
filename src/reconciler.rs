//! Rebuilds the path → URL mapping from PDFs already on disk.
//!
//! Each file name, minus `.pdf`, is looked up as a substring of the URL list
//! and the first URL containing it wins. This is a heuristic: a short slug
//! can match an unrelated URL that happens to contain it, and the result
//! then depends on URL order. Entries are only ever added or replaced, never
//! removed, so running twice on the same inputs is a no-op the second time.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::mapping::Mapping;
use crate::slug;

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("failed to list {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Paths given a URL by this run, in file name order.
    pub matched: Vec<String>,
    /// File names that no URL contains.
    pub unmatched: Vec<String>,
}

/// Matches every file in `pdf_dir` against `urls` and merges the result into
/// `mapping`.
pub fn reconcile(
    pdf_dir: &Path,
    urls: &[String],
    mapping: &mut Mapping,
) -> Result<ReconcileReport, ReconcileError> {
    let mut report = ReconcileReport::default();

    for file_name in list_file_names(pdf_dir)? {
        let file_slug = slug::slug_from_file_name(&file_name);

        match slug::find_url_for_slug(file_slug, urls) {
            Some(url) => {
                let path = pdf_dir.join(&file_name).to_string_lossy().into_owned();
                debug!(%path, %url, "matched");
                mapping.insert(path.clone(), url);
                report.matched.push(path);
            }
            None => {
                debug!(%file_name, "no URL contains this slug");
                report.unmatched.push(file_name);
            }
        }
    }

    Ok(report)
}

/// Names of the files in `dir` (or links to files), sorted.
fn list_file_names(dir: &Path) -> Result<Vec<String>, ReconcileError> {
    let read_dir_error = |source| ReconcileError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        // Follows symlinks, so linked PDFs count as files.
        if !entry.path().is_file() {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => warn!(?name, "skipping file with non-UTF-8 name"),
        }
    }

    names.sort();
    Ok(names)
}
