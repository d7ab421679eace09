use regex::Regex;

use super::traits::{ExtractError, PostStrategy};
use super::{count_from_digits, video_id_from_link};
use crate::models::PostInfo;

static PLAY_COUNT: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r#""playCount"\s*:\s*"?([\d,]+)"?"#).unwrap());

static POST_LINK: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"https?://(?:www\.)?tiktok\.com/@[\w.-]+/video/\d+").unwrap()
});

/// Searches the raw HTML for the first `"playCount"` field and post link.
pub struct LooseCount;

impl LooseCount {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for LooseCount {
    fn default() -> Self {
        Self::new()
    }
}

impl PostStrategy for LooseCount {
    fn name(&self) -> &'static str {
        "loose_count"
    }

    fn attempt(&self, html: &str, _base: &str) -> Result<Option<PostInfo>, ExtractError> {
        let Some(count) = PLAY_COUNT.captures(html).and_then(|c| c.get(1)) else {
            return Ok(None);
        };

        let link = POST_LINK.find(html).map(|m| m.as_str().to_string());

        Ok(Some(PostInfo {
            id: link.as_deref().and_then(video_id_from_link),
            link,
            play_count: count_from_digits(count.as_str()),
            text: None,
        }))
    }
}
