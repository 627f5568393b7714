//! Cleaner that removes a leading enumeration marker.
//!
//! Generated lists usually look like `1. Title` or `- Title`; the marker is
//! noise once the line has been recognised as a list entry.

use crate::traits::Cleaner;

/// Markers recognised by default, checked in this order.
pub const DEFAULT_MARKERS: &[&str] = &["1. ", "2. ", "3. ", "4. ", "5. ", "• ", "- ", "* "];

/// Strips the first matching marker from the start of a line.
///
/// ## Algorithm
/// Markers are tried in order and only the first match is removed, so
/// `"1. 2. Title"` becomes `"2. Title"`.
pub struct StripMarker {
    markers: Vec<&'static str>,
}

impl StripMarker {
    /// Create a StripMarker with a custom marker list.
    pub fn new(markers: Vec<&'static str>) -> Self {
        Self { markers }
    }
}

impl Default for StripMarker {
    fn default() -> Self {
        Self::new(DEFAULT_MARKERS.to_vec())
    }
}

impl Cleaner for StripMarker {
    fn name(&self) -> &str {
        "StripMarker"
    }

    fn clean<'a>(&self, title: &'a str) -> &'a str {
        self.markers
            .iter()
            .find_map(|marker| title.strip_prefix(marker))
            .map(str::trim)
            .unwrap_or(title)
    }
}
