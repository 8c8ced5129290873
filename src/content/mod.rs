//! Content module - converts content files to HTML and retrieves them

pub mod converter;
pub mod fetcher;

pub use converter::{convert, rule, Rule, Substitution, RULES};
pub use fetcher::{fetch_and_convert, ContentSource, FetchError, FsSource, HttpSource, MemorySource};
