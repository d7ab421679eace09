use scraper::{Html, Selector};
use serde_json::Value;

use super::count_from_digits;
use super::traits::{ExtractError, PostStrategy};
use crate::models::PostInfo;

/// Top-level keys that map post ids to post metadata.
const ITEM_KEYS: [&str; 2] = ["ItemModule", "itemModule"];
const COUNT_KEYS: [&str; 2] = ["playCount", "play_count"];
const TEXT_KEYS: [&str; 2] = ["desc", "description"];

/// Reads the `SIGI_STATE` bootstrap payload embedded in profile pages.
pub struct StructuredState;

impl StructuredState {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StructuredState {
    fn default() -> Self {
        Self::new()
    }
}

impl PostStrategy for StructuredState {
    fn name(&self) -> &'static str {
        "structured_state"
    }

    fn attempt(&self, html: &str, base: &str) -> Result<Option<PostInfo>, ExtractError> {
        let Some(payload) = state_payload(html)? else {
            return Ok(None);
        };
        let state: Value = serde_json::from_str(&payload)?;
        Ok(latest_from_state(&state, base))
    }
}

fn state_payload(html: &str) -> Result<Option<String>, ExtractError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("script#SIGI_STATE")
        .map_err(|e| ExtractError::Selector(format!("{e:?}")))?;

    Ok(document
        .select(&selector)
        .next()
        .map(|script| script.text().collect::<String>())
        .filter(|text| !text.trim().is_empty()))
}

fn latest_from_state(state: &Value, base: &str) -> Option<PostInfo> {
    let items = ITEM_KEYS
        .iter()
        .filter_map(|key| state.get(key).and_then(Value::as_object))
        .find(|items| !items.is_empty())?;

    // First entry in document order
    let (id, item) = items.iter().next()?;

    let stats = item.get("stats").unwrap_or(item);
    let play_count = COUNT_KEYS
        .iter()
        .filter_map(|key| stats.get(key))
        .find_map(count_from_value);

    let text = TEXT_KEYS
        .iter()
        .filter_map(|key| item.get(key).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .map(String::from);

    Some(PostInfo {
        id: Some(id.clone()),
        link: post_link(item, id, base),
        play_count,
        text,
    })
}

fn count_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => count_from_digits(s),
        _ => None,
    }
}

fn post_link(item: &Value, id: &str, base: &str) -> Option<String> {
    let direct = item
        .get("video")
        .and_then(|v| v.get("playAddr"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty());
    if let Some(addr) = direct {
        return Some(addr.to_string());
    }

    let author = match item.get("author") {
        Some(Value::String(name)) => Some(name.as_str()),
        Some(Value::Object(author)) => author.get("uniqueId").and_then(Value::as_str),
        _ => None,
    }
    .filter(|name| !name.is_empty())?;

    Some(format!(
        "{}/@{author}/video/{id}",
        base.trim_end_matches('/')
    ))
}
