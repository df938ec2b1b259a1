/// Assemble the final Markdown document. With metadata enabled the body
/// is preceded by a frontmatter block recording where and when the page
/// was fetched; otherwise the body is the document.
pub fn build_markdown_document(
    url: &str,
    title: Option<&str>,
    encoding: &str,
    fetched_utc: &str,
    body_markdown: &str,
    with_metadata: bool,
) -> String {
    if !with_metadata {
        return body_markdown.to_string();
    }
    let title = title.unwrap_or("untitled");
    format!(
        "---\nurl: {url}\ntitle: {title}\nfetched_utc: {fetched_utc}\nencoding: {encoding}\n---\n\n{body_markdown}"
    )
}
