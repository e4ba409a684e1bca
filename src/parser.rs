use scraper::{Html, Selector};

/// Returns the outer HTML of the first `<article>` element, if any.
pub fn find_article(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let article_selector = Selector::parse("article").ok()?;

    doc.select(&article_selector).next().map(|e| e.html())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_first_article() {
        let html = r#"<html><body>
            <nav>menu</nav>
            <article id="one"><h1>First</h1><p>Body</p></article>
            <article id="two"><h1>Second</h1></article>
        </body></html>"#;

        let article = find_article(html).unwrap();
        assert!(article.starts_with("<article id=\"one\">"));
        assert!(article.contains("<h1>First</h1>"));
        assert!(!article.contains("Second"));
    }

    #[test]
    fn nested_article_is_found() {
        let html = "<div><main><article><p>deep</p></article></main></div>";
        assert_eq!(
            find_article(html).as_deref(),
            Some("<article><p>deep</p></article>")
        );
    }

    #[test]
    fn missing_article() {
        assert_eq!(find_article("<html><body><p>No post here</p></body></html>"), None);
        assert_eq!(find_article(""), None);
    }
}
