//! HTML parsers for Bing
//!
//! Contains modules for parsing different page types.

pub mod search;

pub use search::parse_search_results;
