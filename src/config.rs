use std::path::PathBuf;

pub const DEFAULT_URLS_PATH: &str = "urls.json";
pub const DEFAULT_PDF_DIR: &str = "blog_pdfs";
pub const DEFAULT_MAPPING_PATH: &str = "downloaded_pdfs.json";

/// Files shared by the fetch and reconcile commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// JSON array of blog post URLs.
    pub urls: PathBuf,
    /// Directory holding one `<slug>.pdf` per saved post.
    pub pdf_dir: PathBuf,
    /// JSON object of PDF path → source URL.
    pub mapping: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            urls: PathBuf::from(DEFAULT_URLS_PATH),
            pdf_dir: PathBuf::from(DEFAULT_PDF_DIR),
            mapping: PathBuf::from(DEFAULT_MAPPING_PATH),
        }
    }
}

impl Paths {
    /// Default file names resolved against `root`.
    pub fn under(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            urls: root.join(DEFAULT_URLS_PATH),
            pdf_dir: root.join(DEFAULT_PDF_DIR),
            mapping: root.join(DEFAULT_MAPPING_PATH),
        }
    }
}
