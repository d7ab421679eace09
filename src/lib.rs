//! Site check library.
//!
//! Fetches a single web page, pulls out its title and, for social profile
//! pages, the most recent post's view count, then records the outcome as a
//! JSON status file.

// Allow raw string hashes for safety - they're harmless and prevent issues if content changes
#![allow(clippy::needless_raw_string_hashes)]

pub mod config;
pub mod constants;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod report;
