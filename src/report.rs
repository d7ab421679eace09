//! Runs a check end to end and persists the result.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};
use url::Url;

use crate::config::Config;
use crate::constants::POST_NOT_FOUND_ERROR;
use crate::extract::{extract_latest_post, extract_title};
use crate::fetch::{build_client, fetch_page};
use crate::models::CheckResult;

/// Check the configured target and build its result.
///
/// Never fails: every problem is recorded in the returned result's `error`.
pub async fn run_check(config: &Config) -> CheckResult {
    let mut result = CheckResult::new(config.target_url.clone());

    let target = match Url::parse(&config.target_url) {
        Ok(url) => url,
        Err(e) => {
            warn!(url = %config.target_url, error = %e, "Invalid target URL");
            result.fail(format!("invalid target URL: {e}"));
            return result;
        }
    };

    let client = match build_client(config) {
        Ok(client) => client,
        Err(e) => {
            result.fail(format!("{e:#}"));
            return result;
        }
    };

    let page = match fetch_page(&client, target.as_str(), config.timeout).await {
        Ok(page) => page,
        Err(e) => {
            let e = anyhow::Error::new(e);
            warn!(url = %target, error = %format!("{e:#}"), "Fetch failed");
            result.fail(format!("{e:#}"));
            return result;
        }
    };

    info!(url = %target, status = page.status, final_url = %page.final_url, "Page fetched");

    result.status_code = Some(page.status);
    result.ok = page.ok;
    result.title = Some(extract_title(&page.body));

    let host = target.host_str().unwrap_or_default();
    if is_profile_host(host, &config.profile_hosts) {
        let base = target.origin().ascii_serialization();
        match extract_latest_post(&page.body, &base) {
            Ok(Some(post)) => {
                info!(
                    url = %target,
                    post_id = post.id.as_deref().unwrap_or("-"),
                    play_count = ?post.play_count,
                    "Latest post found"
                );
                result.latest_post = Some(post);
            }
            Ok(None) => {
                warn!(url = %target, "No latest post found on profile page");
                result.fail(POST_NOT_FOUND_ERROR);
            }
            Err(e) => {
                warn!(url = %target, error = %e, "Latest post extraction failed");
                result.fail(format!("could not parse latest post: {e}"));
            }
        }
    }

    result
}

/// Load configuration, run the check and write the status file.
///
/// Configuration problems are recorded in the status file like any other
/// failed check, so a file is written on every path.
///
/// # Errors
///
/// Returns an error only if the status file cannot be written.
pub async fn run_from_env() -> Result<(PathBuf, CheckResult)> {
    let output_path = Config::output_path_from_env();

    let result = match Config::load() {
        Ok(config) => {
            info!(
                url = %config.target_url,
                timeout = ?config.timeout,
                output = %output_path.display(),
                "Checking site"
            );
            run_check(&config).await
        }
        Err(e) => {
            let e = anyhow::Error::new(e);
            warn!(error = %format!("{e:#}"), "Invalid configuration, skipping check");
            config_failure(Config::target_url_from_env(), &e)
        }
    };

    write_report(&output_path, &result).await?;

    Ok((output_path, result))
}

/// Result recorded when the configuration cannot be used.
#[must_use]
pub fn config_failure(target_url: impl Into<String>, error: &anyhow::Error) -> CheckResult {
    let mut result = CheckResult::new(target_url);
    result.fail(format!("invalid configuration: {error:#}"));
    result
}

/// Whether `host` belongs to one of the configured profile platforms.
///
/// Case-insensitive substring match, so `www.TikTok.com` matches `tiktok.com`.
#[must_use]
pub fn is_profile_host(host: &str, profile_hosts: &[String]) -> bool {
    let host = host.to_lowercase();
    profile_hosts
        .iter()
        .any(|p| !p.is_empty() && host.contains(&p.to_lowercase()))
}

/// Write a result as pretty JSON, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub async fn write_report(path: &Path, result: &CheckResult) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.with_context(|| {
            format!("Failed to create output directory: {}", parent.display())
        })?;
    }

    let json = serde_json::to_string_pretty(result).context("Failed to serialize result")?;

    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write status file: {}", path.display()))?;

    Ok(())
}

/// Read a previously written result.
///
/// # Errors
///
/// Returns an error if the file is missing or not a valid result.
pub async fn read_report(path: &Path) -> Result<CheckResult> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read status file: {}", path.display()))?;

    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse status file: {}", path.display()))
}
