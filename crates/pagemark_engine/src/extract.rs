use scraper::{ElementRef, Html, Selector};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedContent {
    pub title: Option<String>,
    pub content_html: String,
}

pub trait Extractor: Send + Sync {
    fn extract(&self, html: &str) -> ExtractedContent;
}

/// Readable-region extraction without full readability scoring:
/// - `<title>` text, if present and non-empty
/// - the first `<article>` inner HTML, else `<body>` inner HTML
/// - last resort, the full document markup.
#[derive(Debug, Default)]
pub struct ReadabilityLikeExtractor;

impl Extractor for ReadabilityLikeExtractor {
    fn extract(&self, html: &str) -> ExtractedContent {
        let doc = Html::parse_document(html);

        let title = select_first(&doc, "title")
            .map(|node| node.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty());

        let content_html = select_first(&doc, "article")
            .or_else(|| select_first(&doc, "body"))
            .map(|node| node.inner_html())
            .unwrap_or_else(|| doc.root_element().html());

        ExtractedContent {
            title,
            content_html,
        }
    }
}

fn select_first<'a>(doc: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    doc.select(&selector).next()
}
