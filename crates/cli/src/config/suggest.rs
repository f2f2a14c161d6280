// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Name suggestions for config validation.

use std::path::Path;

/// Suggest a known name for a typo.
///
/// Prefers a small edit distance, then falls back to prefix matching.
pub fn suggest_name<'a>(unknown: &str, known: &[&'a str]) -> Option<&'a str> {
    // Empty strings can't be typos
    if unknown.is_empty() {
        return None;
    }

    let closest = known
        .iter()
        .map(|&name| (name, edit_distance(unknown, name)))
        .filter(|&(_, d)| d <= 2)
        .min_by_key(|&(_, d)| d)
        .map(|(name, _)| name);
    if closest.is_some() {
        return closest;
    }

    // Require at least 2 chars to avoid false positives
    if unknown.len() >= 2 {
        for &name in known {
            if name.starts_with(unknown) || unknown.starts_with(name) {
                return Some(name);
            }
        }
    }

    None
}

/// Levenshtein distance over chars.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut curr = vec![i + 1; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        prev = curr;
    }
    prev[b.len()]
}

/// Warn about an unknown top-level key.
pub fn warn_unknown_key(path: &Path, key: &str, known: &[&str]) {
    tracing::warn!("unknown config key `{}` in {}", key, path.display());
    match suggest_name(key, known) {
        Some(suggested) => eprintln!(
            "sluice: warning: {}: unrecognized field `{}`. Did you mean `{}`?",
            path.display(),
            key,
            suggested
        ),
        None => eprintln!(
            "sluice: warning: {}: unrecognized field `{}`, ignoring",
            path.display(),
            key
        ),
    }
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
