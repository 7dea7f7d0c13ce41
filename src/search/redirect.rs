// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Redirect-link unwrapping for engine result URLs

use url::Url;

const REDIRECT_PREFIX: &str = "//duckduckgo.com/l/?";

/// Resolve a possibly redirect-wrapped result link to its real destination.
///
/// DuckDuckGo wraps result links as `//duckduckgo.com/l/?uddg=<encoded>`.
/// The `uddg` query parameter carries the percent-encoded destination.
/// Anything that is not such a link, or that fails to parse, is returned
/// unchanged; this function never fails.
pub fn resolve_real_url(link: &str) -> String {
    if !link.starts_with(REDIRECT_PREFIX) {
        return link.to_string();
    }

    // Protocol-relative, so give it a scheme before parsing
    let absolute = format!("https:{link}");
    let parsed = match Url::parse(&absolute) {
        Ok(url) => url,
        Err(_) => return link.to_string(),
    };

    parsed
        .query_pairs()
        .find(|(key, _)| key == "uddg")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_else(|| link.to_string())
}
