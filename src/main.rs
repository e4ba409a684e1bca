use anyhow::Result;
use blog_pdf_archiver::cli::Cli;
use blog_pdf_archiver::logging;

fn main() -> Result<()> {
    logging::init_logging()?;

    Cli::run_from_args()
}
