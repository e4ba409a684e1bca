#![allow(dead_code)]

pub mod page_server;

use std::path::Path;
use std::fs;

use blog_pdf_archiver::renderer::{PdfRenderer, RenderError};

/// Stands in for wkhtmltopdf: writes the article HTML to the output path.
pub struct HtmlDumpRenderer;

impl PdfRenderer for HtmlDumpRenderer {
    fn render(&self, html: &str, output: &Path) -> Result<(), RenderError> {
        fs::write(output, html).expect("write fake pdf");
        Ok(())
    }
}

pub fn write_urls(path: &Path, urls: &[String]) {
    fs::write(path, serde_json::to_string(urls).unwrap()).unwrap();
}
