//! Latest-post extraction for social profile pages.
//!
//! Profile pages are scraped with three tiers of decreasing confidence:
//!
//! 1. [`StructuredState`] reads the JSON bootstrap payload embedded in the page.
//! 2. [`LooseCount`] regex-searches the raw HTML for a play count and a post link.
//! 3. [`FreeTextViews`] looks for a visible "N views" phrase.
//!
//! The "latest" post in tier 1 is whichever entry the page lists first. Pages
//! usually list newest first, but nothing guarantees it.

mod chain;
mod free_text;
mod loose;
mod structured;
mod traits;

pub use chain::StrategyChain;
pub use free_text::FreeTextViews;
pub use loose::LooseCount;
pub use structured::StructuredState;
pub use traits::{ExtractError, PostStrategy};

use crate::models::PostInfo;

/// Global fallback chain, in tier order.
pub static STRATEGIES: std::sync::LazyLock<StrategyChain> = std::sync::LazyLock::new(|| {
    let mut chain = StrategyChain::new();
    chain.register(Box::new(StructuredState::new()));
    chain.register(Box::new(LooseCount::new()));
    chain.register(Box::new(FreeTextViews::new()));
    chain
});

/// Find the latest post on a profile page.
///
/// `Ok(None)` means no tier could find a post, which is not the same as a
/// post with zero views.
///
/// # Errors
///
/// Returns an error only if the final tier fails outright.
pub fn extract_latest_post(html: &str, base: &str) -> Result<Option<PostInfo>, ExtractError> {
    STRATEGIES.extract(html, base)
}

/// Parse a count by dropping every non-digit character.
///
/// `"1,234"` becomes 1234 and `"2.1M"` becomes 21. Returns `None` when no
/// digits remain or the number overflows.
#[must_use]
pub fn count_from_digits(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Extract the post id from a `/video/<digits>` link.
#[must_use]
pub fn video_id_from_link(link: &str) -> Option<String> {
    let idx = link.find("/video/")?;
    let rest = &link[idx + "/video/".len()..];
    let video_id: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if video_id.is_empty() {
        None
    } else {
        Some(video_id)
    }
}
