use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::archiver::FailurePolicy;
use crate::commands;
use crate::config::{DEFAULT_MAPPING_PATH, DEFAULT_PDF_DIR, DEFAULT_URLS_PATH, Paths};
use crate::fetcher::{DEFAULT_USER_AGENT, HttpFetcher};
use crate::renderer::{DEFAULT_WKHTMLTOPDF, Wkhtmltopdf};

/// Save blog posts as PDFs and keep track of where each one came from.
#[derive(Debug, Parser)]
#[command(name = "blog-pdf-archiver", version)]
pub struct Cli {
    /// JSON array of blog post URLs.
    #[arg(long, global = true, env = "BLOG_PDF_URLS", default_value = DEFAULT_URLS_PATH)]
    pub urls: PathBuf,

    /// Directory the PDFs are written to (fetch) or read from (reconcile).
    #[arg(long, global = true, env = "BLOG_PDF_DIR", default_value = DEFAULT_PDF_DIR)]
    pub pdf_dir: PathBuf,

    /// JSON file mapping each PDF path to its source URL.
    #[arg(long, global = true, env = "BLOG_PDF_MAPPING", default_value = DEFAULT_MAPPING_PATH)]
    pub mapping: PathBuf,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every URL, save its <article> as a PDF and write a new mapping file.
    Fetch(FetchArgs),
    /// Match PDFs already on disk to URLs by file name and merge into the mapping file.
    Reconcile,
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// wkhtmltopdf executable used to render the PDFs.
    #[arg(long, env = "WKHTMLTOPDF", default_value = DEFAULT_WKHTMLTOPDF)]
    pub wkhtmltopdf: PathBuf,

    /// User-Agent header sent with every request.
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log a failing URL and carry on instead of stopping the run.
    #[arg(long)]
    pub keep_going: bool,
}

impl Cli {
    pub fn paths(&self) -> Paths {
        Paths {
            urls: self.urls.clone(),
            pdf_dir: self.pdf_dir.clone(),
            mapping: self.mapping.clone(),
        }
    }

    pub fn run_from_args() -> Result<()> {
        Self::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let paths = self.paths();

        match self.command {
            CliCommand::Fetch(args) => {
                let policy = if args.keep_going {
                    FailurePolicy::Skip
                } else {
                    FailurePolicy::Abort
                };
                let fetcher = HttpFetcher::with_user_agent(&args.user_agent)?;
                let renderer = Wkhtmltopdf::new(args.wkhtmltopdf);

                let report = commands::fetch(&paths, fetcher, renderer, policy)?;
                if report.failed.is_empty() {
                    println!("All available blog posts have been saved as PDFs.");
                } else {
                    println!(
                        "Saved {} blog posts as PDFs; {} failed.",
                        report.saved.len(),
                        report.failed.len()
                    );
                }
            }
            CliCommand::Reconcile => {
                commands::reconcile(&paths)?;
                println!("Mapping complete");
            }
        }

        Ok(())
    }
}
