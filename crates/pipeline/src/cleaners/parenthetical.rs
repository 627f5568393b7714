//! Cleaner that drops parenthetical content such as release years.

use crate::traits::Cleaner;

/// Truncates a title at the first `(`.
///
/// `"Looper (2012)"` becomes `"Looper"`.
pub struct TruncateParenthetical;

impl Cleaner for TruncateParenthetical {
    fn name(&self) -> &str {
        "TruncateParenthetical"
    }

    fn clean<'a>(&self, title: &'a str) -> &'a str {
        match title.split_once('(') {
            Some((head, _)) => head.trim(),
            None => title,
        }
    }
}
