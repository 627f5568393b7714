//! Cleaner that drops a trailing dash-delimited annotation.
//!
//! Models often append commentary such as `Primer - a low budget classic`.
//! Hyphenated titles are cut as well; the lookup service still tends to
//! resolve the remaining prefix.

use crate::traits::Cleaner;

/// Truncates a title at the first `-`.
pub struct TruncateAnnotation;

impl Cleaner for TruncateAnnotation {
    fn name(&self) -> &str {
        "TruncateAnnotation"
    }

    fn clean<'a>(&self, title: &'a str) -> &'a str {
        match title.split_once('-') {
            Some((head, _)) => head.trim(),
            None => title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_annotation() {
        let cleaner = TruncateAnnotation;
        assert_eq!(cleaner.clean("Primer - a low budget classic"), "Primer");
        assert_eq!(cleaner.clean("Predestination"), "Predestination");
        assert_eq!(cleaner.clean("Spider-Man"), "Spider");
    }
}
