// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text normalization shared by the scrape and summarization stages

use regex::Regex;
use std::sync::OnceLock;

fn control_chars() -> &'static Regex {
    static CONTROL_CHARS: OnceLock<Regex> = OnceLock::new();
    CONTROL_CHARS.get_or_init(|| {
        Regex::new(r"[\u{00}-\u{1F}\u{7F}-\u{9F}]").expect("control char pattern is valid")
    })
}

/// Normalize scraped text: collapse whitespace runs to a single space,
/// strip C0/C1 control characters, trim the ends.
///
/// Whitespace is collapsed before the strip so that tabs and newlines
/// (which sit inside the stripped ranges) become word separators instead
/// of being deleted outright. Stripping can itself leave a fresh double
/// space behind, so the collapse runs once more afterwards.
pub fn clean_text(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let stripped = control_chars().replace_all(&collapsed, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whitespace-delimited word count, the unit every length policy uses.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
