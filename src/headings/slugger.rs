/// GitHub-style slug generation with per-file deduplication.
use std::collections::HashSet;

/// Generates unique anchor slugs within one document.
///
/// Repeated headings get `-1`, `-2`, ... suffixes. Explicit anchors can be
/// pre-registered so generated slugs never collide with them.
#[derive(Debug, Default)]
pub struct Slugger {
    used: HashSet<String>,
}

impl Slugger {
    /// Fresh slugger with no reserved slugs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve an existing id so [`Slugger::slug`] never emits it.
    pub fn register(&mut self, id: &str) {
        self.used.insert(id.to_owned());
    }

    /// Produce a unique slug for the given heading text, or `None` when the
    /// text normalizes to nothing (symbols-only headings).
    pub fn slug(&mut self, text: &str, maintain_case: bool) -> Option<String> {
        let base = normalize(text, maintain_case);
        if base.is_empty() {
            return None;
        }
        let mut candidate = base.clone();
        let mut n = 1;
        while !self.used.insert(candidate.clone()) {
            candidate = format!("{base}-{n}");
            n += 1;
        }
        Some(candidate)
    }
}

/// Lowercase (unless `maintain_case`), keep alphanumerics, `-`, and `_`,
/// map whitespace to `-`, and drop everything else.
fn normalize(text: &str, maintain_case: bool) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.trim().chars() {
        if ch.is_alphanumeric() || ch == '-' || ch == '_' {
            if maintain_case {
                slug.push(ch);
            } else {
                slug.extend(ch.to_lowercase());
            }
        } else if ch.is_whitespace() {
            slug.push('-');
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slug() {
        let mut slugger = Slugger::new();
        assert_eq!(
            slugger.slug("Getting Started", false).as_deref(),
            Some("getting-started")
        );
    }

    #[test]
    fn test_punctuation_stripped() {
        let mut slugger = Slugger::new();
        assert_eq!(
            slugger.slug("What's new? (v2)", false).as_deref(),
            Some("whats-new-v2")
        );
    }

    #[test]
    fn test_maintain_case() {
        let mut slugger = Slugger::new();
        assert_eq!(
            slugger.slug("Getting Started", true).as_deref(),
            Some("Getting-Started")
        );
    }

    #[test]
    fn test_duplicates_get_suffixes() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Install", false).as_deref(), Some("install"));
        assert_eq!(slugger.slug("Install", false).as_deref(), Some("install-1"));
        assert_eq!(slugger.slug("Install", false).as_deref(), Some("install-2"));
    }

    #[test]
    fn test_registered_ids_are_reserved() {
        let mut slugger = Slugger::new();
        slugger.register("install");
        assert_eq!(slugger.slug("Install", false).as_deref(), Some("install-1"));
    }

    #[test]
    fn test_symbols_only_text_has_no_slug() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("!!!", false), None);
        assert_eq!(slugger.slug("???", false), None);
    }

    #[test]
    fn test_unicode_letters_kept() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Déjà Vu", false).as_deref(), Some("déjà-vu"));
    }

    #[test]
    fn test_underscores_kept() {
        let mut slugger = Slugger::new();
        assert_eq!(
            slugger.slug("snake_case heading", false).as_deref(),
            Some("snake_case-heading")
        );
    }
}
