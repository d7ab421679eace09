//! Shared constants used across the application.

/// User agent sent with page checks unless `USER_AGENT` overrides it.
///
/// Profile pages serve a stripped-down shell to obvious bots, so this mimics
/// a desktop browser.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Language preference sent as `Accept-Language`.
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Page checked when `TARGET_URL` is unset.
pub const DEFAULT_TARGET_URL: &str = "https://example.com";

/// Where the status file is written when `OUTPUT_PATH` is unset.
pub const DEFAULT_OUTPUT_PATH: &str = "data/status.json";

/// Request timeout in seconds when `TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Hosts whose pages are treated as profile pages by default.
pub const DEFAULT_PROFILE_HOSTS: &str = "tiktok.com";

/// Error recorded when a profile page loads but no tier finds a post.
pub const POST_NOT_FOUND_ERROR: &str = "could not parse latest post from profile page";
