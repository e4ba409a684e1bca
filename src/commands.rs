use anyhow::{Context, Result};
use tracing::info;

use crate::archiver::{ArchiveReport, Archiver, FailurePolicy};
use crate::config::Paths;
use crate::fetcher::PageFetcher;
use crate::mapping::Mapping;
use crate::models;
use crate::reconciler::{self, ReconcileReport};
use crate::renderer::PdfRenderer;

/// Downloads every post in the URL list and writes a fresh mapping file.
///
/// The mapping file is only written once the whole batch has gone through;
/// an aborted run leaves any previous file untouched.
pub fn fetch<F: PageFetcher, R: PdfRenderer>(
    paths: &Paths,
    fetcher: F,
    renderer: R,
    policy: FailurePolicy,
) -> Result<ArchiveReport> {
    let urls = models::load_urls(&paths.urls)?;
    info!(count = urls.len(), urls = %paths.urls.display(), "loaded URL list");

    let report = Archiver::new(fetcher, renderer, &paths.pdf_dir)
        .with_policy(policy)
        .run(&urls)
        .context("archiving stopped")?;

    report.mapping.save(&paths.mapping)?;
    info!(
        saved = report.saved.len(),
        not_found = report.not_found.len(),
        failed = report.failed.len(),
        mapping = %paths.mapping.display(),
        "fetch finished"
    );

    Ok(report)
}

/// Merges matches for the PDFs on disk into the mapping file.
pub fn reconcile(paths: &Paths) -> Result<(Mapping, ReconcileReport)> {
    let urls = models::load_urls(&paths.urls)?;
    let mut mapping = Mapping::load_or_default(&paths.mapping)?;
    let existing = mapping.len();

    let report = reconciler::reconcile(&paths.pdf_dir, &urls, &mut mapping)?;
    mapping.save(&paths.mapping)?;

    info!(
        existing,
        matched = report.matched.len(),
        unmatched = report.unmatched.len(),
        total = mapping.len(),
        mapping = %paths.mapping.display(),
        "reconcile finished"
    );

    Ok((mapping, report))
}
