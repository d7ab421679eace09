use regex::Regex;

use super::count_from_digits;
use super::traits::{ExtractError, PostStrategy};
use crate::models::PostInfo;

static VIEWS_PHRASE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"(?i)(\d[\d.,]*\s*[KMB]?)\s+views\b").unwrap()
});

/// Looks for a visible "N views" phrase anywhere in the page.
///
/// The count is the phrase's digits only, so "2.1M views" counts as 21.
pub struct FreeTextViews;

impl FreeTextViews {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for FreeTextViews {
    fn default() -> Self {
        Self::new()
    }
}

impl PostStrategy for FreeTextViews {
    fn name(&self) -> &'static str {
        "free_text_views"
    }

    fn attempt(&self, html: &str, _base: &str) -> Result<Option<PostInfo>, ExtractError> {
        let Some(caps) = VIEWS_PHRASE.captures(html) else {
            return Ok(None);
        };
        let (Some(phrase), Some(number)) = (caps.get(0), caps.get(1)) else {
            return Ok(None);
        };

        Ok(Some(PostInfo {
            id: None,
            link: None,
            play_count: count_from_digits(number.as_str()),
            text: Some(phrase.as_str().to_string()),
        }))
    }
}
