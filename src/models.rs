use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one page check, written to the status file.
///
/// Optional fields that were never populated are left out of the JSON
/// entirely, so a missing field, an empty string and a zero all stay distinct
/// after a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub url: String,
    pub checked_at: DateTime<Utc>,
    /// True only if the fetch succeeded and, for profile pages, a post was found.
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_post: Option<PostInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckResult {
    /// Start a result for `url`, stamped with the current UTC time.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            checked_at: Utc::now(),
            ok: false,
            status_code: None,
            title: None,
            latest_post: None,
            error: None,
        }
    }

    /// Record a failure. Clears `ok`.
    pub fn fail(&mut self, error: impl Into<String>) {
        self.ok = false;
        self.error = Some(error.into());
    }

    /// One-line human readable summary for the console.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut line = format!(
            "{} ok={} status={}",
            self.url,
            self.ok,
            self.status_code
                .map_or_else(|| "-".to_string(), |s| s.to_string())
        );
        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            line.push_str(&format!(" title={title:?}"));
        }
        if let Some(post) = &self.latest_post {
            let views = post
                .play_count
                .map_or_else(|| "unknown".to_string(), |c| c.to_string());
            line.push_str(&format!(" latest_post_views={views}"));
        }
        if let Some(error) = &self.error {
            line.push_str(&format!(" error={error:?}"));
        }
        line
    }
}

/// Metadata for the most recent post on a profile page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_result_is_not_ok() {
        let result = CheckResult::new("https://example.com");
        assert_eq!(result.url, "https://example.com");
        assert!(!result.ok);
        assert!(result.status_code.is_none());
        assert!(result.error.is_none());
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let result = CheckResult::new("https://example.com");
        let json = serde_json::to_value(&result).unwrap();
        let obj = json.as_object().unwrap();

        assert!(obj.contains_key("url"));
        assert!(obj.contains_key("checked_at"));
        assert!(obj.contains_key("ok"));
        assert!(!obj.contains_key("status_code"));
        assert!(!obj.contains_key("title"));
        assert!(!obj.contains_key("latest_post"));
        assert!(!obj.contains_key("error"));
    }

    #[test]
    fn test_empty_title_and_zero_count_are_kept() {
        let mut result = CheckResult::new("https://www.tiktok.com/@user");
        result.title = Some(String::new());
        result.latest_post = Some(PostInfo {
            play_count: Some(0),
            ..Default::default()
        });

        let json = serde_json::to_string(&result).unwrap();
        let back: CheckResult = serde_json::from_str(&json).unwrap();

        assert_eq!(back.title, Some(String::new()));
        assert_eq!(back.latest_post.unwrap().play_count, Some(0));
    }

    #[test]
    fn test_checked_at_is_utc_iso8601() {
        let result = CheckResult::new("https://example.com");
        let json = serde_json::to_value(&result).unwrap();
        let stamp = json["checked_at"].as_str().unwrap();
        assert!(stamp.ends_with('Z'), "expected Z suffix: {stamp}");
        assert!(stamp.contains('T'));
    }

    #[test]
    fn test_fail_clears_ok() {
        let mut result = CheckResult::new("https://example.com");
        result.ok = true;
        result.fail("boom");
        assert!(!result.ok);
        assert_eq!(result.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_summary() {
        let mut result = CheckResult::new("https://example.com");
        result.ok = true;
        result.status_code = Some(200);
        result.title = Some("Example Domain".to_string());
        assert_eq!(
            result.summary(),
            r#"https://example.com ok=true status=200 title="Example Domain""#
        );

        let mut failed = CheckResult::new("https://example.com");
        failed.fail("timed out");
        assert_eq!(
            failed.summary(),
            r#"https://example.com ok=false status=- error="timed out""#
        );
    }
}
