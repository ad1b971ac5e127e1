/// URL suffixes that mark a page as raw Markdown.
pub const MARKDOWN_URL_SUFFIXES: [&str; 2] = [".md", ".markdown"];

/// Content types served for raw Markdown.
pub const MARKDOWN_CONTENT_TYPES: [&str; 2] = ["text/markdown", "text/x-markdown"];

/// Decides whether a page should be rendered by the viewer.
///
/// Content type parameters such as `; charset=utf-8` are ignored.
pub fn is_markdown_source(url: &str, content_type: Option<&str>) -> bool {
    if MARKDOWN_URL_SUFFIXES
        .iter()
        .any(|suffix| url.ends_with(suffix))
    {
        return true;
    }

    content_type
        .and_then(|ct| ct.split(';').next())
        .map(str::trim)
        .is_some_and(|ct| MARKDOWN_CONTENT_TYPES.contains(&ct))
}
