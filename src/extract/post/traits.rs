use thiserror::Error;

use crate::models::PostInfo;

/// Failure inside a single extraction tier.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("embedded state is not valid JSON: {0}")]
    StateJson(#[from] serde_json::Error),
    #[error("invalid selector: {0}")]
    Selector(String),
}

/// One way of finding the latest post on a profile page.
pub trait PostStrategy: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Try to find the latest post.
    ///
    /// # Arguments
    ///
    /// * `html` - The raw page body
    /// * `base` - Scheme and host of the page, used to build post links
    ///
    /// Returns `Ok(None)` when this strategy finds nothing to work with.
    ///
    /// # Errors
    ///
    /// Returns an error if the page contains what this strategy looks for but
    /// it cannot be read.
    fn attempt(&self, html: &str, base: &str) -> Result<Option<PostInfo>, ExtractError>;
}
