//! Exact lowercase tokenization shared by the keyword and query indexes.
//!
//! No stemming, no stop words: a token is a maximal run of Unicode
//! letters, combining marks, digits, `_` or `-`, starting with a letter or
//! digit, lowercased.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}][\p{L}\p{M}\p{N}_\-]*").expect("token regex is valid"));

/// Split `text` into lowercase tokens, in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().trim_end_matches('-').to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Unique lowercase tokens of `text`.
pub fn token_set(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}

/// Jaccard index `|a ∩ b| / |a ∪ b|`. Two empty sets score `0.0`.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}
