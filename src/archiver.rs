use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{error, info};

use crate::fetcher::{FetchError, PageFetcher};
use crate::mapping::Mapping;
use crate::parser;
use crate::renderer::{PdfRenderer, RenderError};
use crate::slug;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("cannot derive a file name from {url}")]
    NoSlug { url: String },
    #[error("failed to render {url} to {}", path.display())]
    Render {
        url: String,
        path: PathBuf,
        #[source]
        source: RenderError,
    },
}

/// What to do with the rest of the batch after a URL fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first error; nothing is returned for the batch.
    #[default]
    Abort,
    /// Log the error, remember the URL and move on.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlOutcome {
    Saved(PathBuf),
    /// The page had no `<article>` element.
    NoArticle,
}

#[derive(Debug, Default)]
pub struct ArchiveReport {
    pub mapping: Mapping,
    pub saved: Vec<PathBuf>,
    pub not_found: Vec<String>,
    /// Only filled under [`FailurePolicy::Skip`]; each error wraps an
    /// [`ArchiveError`].
    pub failed: Vec<(String, anyhow::Error)>,
}

/// Fetches blog posts and stores each article as `<pdf_dir>/<slug>.pdf`.
pub struct Archiver<F, R> {
    fetcher: F,
    renderer: R,
    pdf_dir: PathBuf,
    policy: FailurePolicy,
}

impl<F: PageFetcher, R: PdfRenderer> Archiver<F, R> {
    pub fn new(fetcher: F, renderer: R, pdf_dir: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            renderer,
            pdf_dir: pdf_dir.into(),
            policy: FailurePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Path the PDF for `url` is written to, or `None` if the URL has fewer
    /// than two `/`-separated segments. An empty slug gives `<pdf_dir>/.pdf`.
    pub fn pdf_path_for(&self, url: &str) -> Option<PathBuf> {
        let slug = slug::slug_from_url(url)?;
        Some(self.pdf_dir.join(slug::pdf_file_name(&slug)))
    }

    /// Fetches one URL and renders its article. Expects the output directory
    /// to exist.
    pub fn archive_url(&self, url: &str) -> Result<UrlOutcome, ArchiveError> {
        let html = self.fetcher.fetch_html(url)?;

        let Some(article) = parser::find_article(&html) else {
            return Ok(UrlOutcome::NoArticle);
        };

        let path = self
            .pdf_path_for(url)
            .ok_or_else(|| ArchiveError::NoSlug {
                url: url.to_string(),
            })?;

        self.renderer
            .render(&article, &path)
            .map_err(|source| ArchiveError::Render {
                url: url.to_string(),
                path: path.clone(),
                source,
            })?;

        Ok(UrlOutcome::Saved(path))
    }

    /// Processes every URL in order and returns the mapping built along the
    /// way. The caller decides where to persist it.
    pub fn run(&self, urls: &[String]) -> Result<ArchiveReport, ArchiveError> {
        fs::create_dir_all(&self.pdf_dir).map_err(|source| ArchiveError::CreateDir {
            path: self.pdf_dir.clone(),
            source,
        })?;

        let mut report = ArchiveReport::default();

        for url in urls {
            match self.archive_url(url) {
                Ok(UrlOutcome::Saved(path)) => {
                    info!("Saved blog post as PDF: {}", path.display());
                    report
                        .mapping
                        .insert(path.to_string_lossy().into_owned(), url.as_str());
                    report.saved.push(path);
                }
                Ok(UrlOutcome::NoArticle) => {
                    info!("Article tag not found in {}", url);
                    report.not_found.push(url.clone());
                }
                Err(e) => match self.policy {
                    FailurePolicy::Abort => return Err(e),
                    FailurePolicy::Skip => {
                        let e = anyhow::Error::new(e);
                        error!(%url, "skipping: {e:#}");
                        report.failed.push((url.clone(), e));
                    }
                },
            }
        }

        Ok(report)
    }
}
