//! Text extraction from fetched HTML.

pub mod post;
mod title;

pub use post::{extract_latest_post, ExtractError, PostStrategy, StrategyChain, STRATEGIES};
pub use title::extract_title;
