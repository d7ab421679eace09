//! Integration tests for writing and reading the status file.

use site_check::models::{CheckResult, PostInfo};
use site_check::report::{read_report, write_report};
use tempfile::TempDir;

fn sample_result() -> CheckResult {
    let mut result = CheckResult::new("https://www.tiktok.com/@someone");
    result.ok = true;
    result.status_code = Some(200);
    result.title = Some("Café — someone | TikTok".to_string());
    result.latest_post = Some(PostInfo {
        id: Some("7300000000000000001".to_string()),
        link: Some("https://www.tiktok.com/@someone/video/7300000000000000001".to_string()),
        play_count: Some(0),
        text: Some(String::new()),
    });
    result
}

#[tokio::test]
async fn test_round_trip_preserves_fields() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("status.json");
    let result = sample_result();

    write_report(&path, &result).await.expect("Failed to write");
    let back = read_report(&path).await.expect("Failed to read");

    assert_eq!(back, result);
    // Zero and empty string survive as values, not absences
    let post = back.latest_post.unwrap();
    assert_eq!(post.play_count, Some(0));
    assert_eq!(post.text, Some(String::new()));
}

#[tokio::test]
async fn test_round_trip_keeps_absent_fields_absent() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("status.json");
    let mut result = CheckResult::new("https://example.com");
    result.fail("request to https://example.com/ timed out after 10s");

    write_report(&path, &result).await.expect("Failed to write");
    let back = read_report(&path).await.expect("Failed to read");

    assert_eq!(back, result);
    assert!(back.status_code.is_none());
    assert!(back.title.is_none());
    assert!(back.latest_post.is_none());
}

#[tokio::test]
async fn test_creates_parent_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nested").join("deeper").join("status.json");

    write_report(&path, &sample_result())
        .await
        .expect("Failed to write");

    assert!(path.exists());
}

#[tokio::test]
async fn test_output_is_indented_with_literal_unicode() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("status.json");

    write_report(&path, &sample_result())
        .await
        .expect("Failed to write");
    let raw = std::fs::read_to_string(&path).unwrap();

    assert!(raw.starts_with("{\n  \"url\": "), "unexpected layout: {raw}");
    assert!(raw.contains("Café — someone"));
    assert!(!raw.contains("\\u"));
    assert!(!raw.contains("\"error\""));
}

#[tokio::test]
async fn test_overwrites_previous_report() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("status.json");

    write_report(&path, &sample_result())
        .await
        .expect("Failed to write");

    let mut second = CheckResult::new("https://example.com");
    second.fail("unreachable");
    write_report(&path, &second).await.expect("Failed to write");

    let back = read_report(&path).await.expect("Failed to read");
    assert_eq!(back.url, "https://example.com");
    assert!(back.latest_post.is_none());
}
