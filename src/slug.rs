//! Join keys between PDF files and their source URLs.
//!
//! The two directions differ: the archiver derives a
//! file name from a URL, the reconciler searches URLs for a file name. A
//! slug is only a best-effort key and collisions resolve to the first match.

pub const PDF_EXTENSION: &str = ".pdf";

/// Slug of a blog post URL: the second-to-last `/`-separated segment, with
/// `%20` and spaces turned into underscores.
///
/// Blog post URLs conventionally end in a slash, so for
/// `https://ex.com/a/my%20post/` this yields `my_post`. An empty segment
/// gives an empty slug. Returns `None` only when the URL has fewer than two
/// segments.
pub fn slug_from_url(url: &str) -> Option<String> {
    let segments: Vec<&str> = url.split('/').collect();
    if segments.len() < 2 {
        return None;
    }

    Some(
        segments[segments.len() - 2]
            .replace("%20", "_")
            .replace(' ', "_"),
    )
}

pub fn pdf_file_name(slug: &str) -> String {
    format!("{slug}{PDF_EXTENSION}")
}

/// Slug of a file in the PDF directory: the name minus a trailing `.pdf`.
pub fn slug_from_file_name(file_name: &str) -> &str {
    file_name.strip_suffix(PDF_EXTENSION).unwrap_or(file_name)
}

/// First URL, in list order, that contains `slug` as a substring.
pub fn find_url_for_slug<'a>(slug: &str, urls: &'a [String]) -> Option<&'a str> {
    urls.iter().map(String::as_str).find(|url| url.contains(slug))
}
