//! Full-article text extraction for the summary flow
//!
//! Fetches a result page and pulls out the article text so the chunked
//! summarizer sees prose instead of markup.
//!
//! ## Architecture
//!
//! ```text
//! Resolved URL → fetch (10s timeout) → structured article parse
//!                                          ↓ (empty or < 20 words)
//!                                      boilerplate-removal fallback
//! ```
//!
//! Every failure in here is soft: the caller receives `None` and degrades
//! to a placeholder, the request never crashes on a bad page.

pub mod extractor;
pub mod fetcher;

pub use extractor::{extract_article, strip_boilerplate};
pub use fetcher::FullTextExtractor;
