use regex::Regex;

static TITLE: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(?is)<title>(.*?)</title>").unwrap());

/// Extract the first `<title>` of a page, trimmed.
///
/// Entities are left as-is. Returns an empty string when there is no title.
#[must_use]
pub fn extract_title(html: &str) -> String {
    TITLE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}
