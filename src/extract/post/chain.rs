use tracing::debug;

use super::traits::{ExtractError, PostStrategy};
use crate::models::PostInfo;

/// Ordered fallback chain of post strategies.
///
/// Strategies run in registration order and the first one that finds a post
/// wins. Failures in any tier but the last are treated like "nothing found".
pub struct StrategyChain {
    strategies: Vec<Box<dyn PostStrategy>>,
}

impl StrategyChain {
    /// Create a new empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Append a strategy after the ones already registered.
    pub fn register(&mut self, strategy: Box<dyn PostStrategy>) {
        self.strategies.push(strategy);
    }

    /// Get all registered strategies.
    #[must_use]
    pub fn strategies(&self) -> &[Box<dyn PostStrategy>] {
        &self.strategies
    }

    /// Run the chain.
    ///
    /// # Errors
    ///
    /// Returns an error only if the last strategy fails.
    pub fn extract(&self, html: &str, base: &str) -> Result<Option<PostInfo>, ExtractError> {
        let last = self.strategies.len().saturating_sub(1);

        for (i, strategy) in self.strategies.iter().enumerate() {
            match strategy.attempt(html, base) {
                Ok(Some(post)) => {
                    debug!(tier = strategy.name(), "Found latest post");
                    return Ok(Some(post));
                }
                Ok(None) => {
                    debug!(tier = strategy.name(), "No post found");
                }
                Err(e) if i < last => {
                    debug!(tier = strategy.name(), error = %e, "Tier failed, falling through");
                }
                Err(e) => return Err(e),
            }
        }

        Ok(None)
    }
}

impl Default for StrategyChain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Option<&'static str>);

    impl PostStrategy for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn attempt(&self, _html: &str, _base: &str) -> Result<Option<PostInfo>, ExtractError> {
            Ok(self.0.map(|id| PostInfo {
                id: Some(id.to_string()),
                ..Default::default()
            }))
        }
    }

    struct Broken;

    impl PostStrategy for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn attempt(&self, _html: &str, _base: &str) -> Result<Option<PostInfo>, ExtractError> {
            Err(ExtractError::Selector("broken".to_string()))
        }
    }

    fn id_of(result: Result<Option<PostInfo>, ExtractError>) -> Option<String> {
        result.unwrap().and_then(|p| p.id)
    }

    #[test]
    fn test_empty_chain_finds_nothing() {
        let chain = StrategyChain::new();
        assert!(chain.extract("", "").unwrap().is_none());
    }

    #[test]
    fn test_first_success_wins() {
        let mut chain = StrategyChain::new();
        chain.register(Box::new(Fixed(None)));
        chain.register(Box::new(Fixed(Some("second"))));
        chain.register(Box::new(Fixed(Some("third"))));

        assert_eq!(id_of(chain.extract("", "")), Some("second".to_string()));
    }

    #[test]
    fn test_intermediate_error_falls_through() {
        let mut chain = StrategyChain::new();
        chain.register(Box::new(Broken));
        chain.register(Box::new(Fixed(Some("fallback"))));

        assert_eq!(id_of(chain.extract("", "")), Some("fallback".to_string()));
    }

    #[test]
    fn test_last_error_propagates() {
        let mut chain = StrategyChain::new();
        chain.register(Box::new(Fixed(None)));
        chain.register(Box::new(Broken));

        assert!(chain.extract("", "").is_err());
    }

    #[test]
    fn test_all_absent_is_none() {
        let mut chain = StrategyChain::default();
        chain.register(Box::new(Fixed(None)));
        chain.register(Box::new(Fixed(None)));

        assert!(chain.extract("", "").unwrap().is_none());
        assert_eq!(chain.strategies().len(), 2);
    }
}
