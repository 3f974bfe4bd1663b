//! Open Graph image metadata scanning.

use scraper::{Html, Selector};
use std::sync::LazyLock;

/// CSS selector for social-preview image tags.
const OG_IMAGE_SELECTOR_STR: &str = r#"meta[property="og:image"]"#;

static OG_IMAGE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(OG_IMAGE_SELECTOR_STR)
        .expect("Failed to parse og:image selector - this is a bug")
});

/// Collect `og:image` URLs from an HTML document, in document order.
///
/// Tags whose `content` attribute is absent or empty are skipped. The
/// underlying HTML5 parser is error-recovering, so malformed markup yields
/// a best-effort document rather than a failure.
pub fn collect_og_images(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(&OG_IMAGE_SELECTOR)
        .filter_map(|element| element.value().attr("content"))
        .filter(|content| !content.is_empty())
        .map(|content| content.to_string())
        .collect()
}
