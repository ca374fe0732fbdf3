// ABOUTME: Slug derivation for heading anchors.
// ABOUTME: slugify maps text to [a-z0-9-]; SlugRegistry applies the collision policy per document.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::options::IdCollisionPolicy;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Fallback id for headings whose text has no slug-safe characters.
pub const EMPTY_SLUG_FALLBACK: &str = "section";

/// Derive an anchor slug from visible heading text.
///
/// Lowercases, drops everything outside `[a-z0-9\s-]`, trims, and collapses
/// whitespace runs into a single hyphen. May return an empty string.
pub fn slugify(text: &str) -> String {
    let kept: String = text
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();

    WHITESPACE_RUN.replace_all(kept.trim(), "-").into_owned()
}

/// Hands out heading ids for a single document.
#[derive(Debug, Clone)]
pub struct SlugRegistry {
    policy: IdCollisionPolicy,
    used: HashSet<String>,
}

impl SlugRegistry {
    pub fn new(policy: IdCollisionPolicy) -> Self {
        Self {
            policy,
            used: HashSet::new(),
        }
    }

    /// Returns the id for the next heading with this text.
    pub fn claim(&mut self, text: &str) -> String {
        let mut base = slugify(text);
        if base.is_empty() {
            base = EMPTY_SLUG_FALLBACK.to_string();
        }

        if self.policy == IdCollisionPolicy::Keep || !self.used.contains(&base) {
            self.used.insert(base.clone());
            return base;
        }

        let mut n = 2;
        loop {
            let candidate = format!("{}-{}", base, n);
            if !self.used.contains(&candidate) {
                self.used.insert(candidate.clone());
                return candidate;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("Early Game Priorities!"), "early-game-priorities");
    }

    #[test]
    fn test_slugify_collapses_whitespace() {
        assert_eq!(slugify("  Gear \t and\n Flasks "), "gear-and-flasks");
    }

    #[test]
    fn test_slugify_keeps_hyphens_and_digits() {
        assert_eq!(slugify("Patch 3.27 - Keepers"), "patch-327---keepers");
    }

    #[test]
    fn test_slugify_drops_non_ascii() {
        assert_eq!(slugify("Größe Über"), "gre-ber");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_registry_suffixes_duplicates() {
        let mut registry = SlugRegistry::new(IdCollisionPolicy::Suffix);

        assert_eq!(registry.claim("Summary"), "summary");
        assert_eq!(registry.claim("Summary"), "summary-2");
        assert_eq!(registry.claim("Summary 2"), "summary-2-2");
        assert_eq!(registry.claim("Summary"), "summary-3");
    }

    #[test]
    fn test_registry_keep_policy() {
        let mut registry = SlugRegistry::new(IdCollisionPolicy::Keep);

        assert_eq!(registry.claim("Summary"), "summary");
        assert_eq!(registry.claim("Summary"), "summary");
    }

    #[test]
    fn test_registry_empty_fallback() {
        let mut registry = SlugRegistry::new(IdCollisionPolicy::Suffix);

        assert_eq!(registry.claim("???"), "section");
        assert_eq!(registry.claim(""), "section-2");
    }
}
