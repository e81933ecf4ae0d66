//! Parsing of the operator's comma-separated element list.

use saaty_types::Element;
use tracing::warn;

/// Splits on commas, trims, and drops empty segments.
///
/// An input with no usable label yields a single placeholder element, so the
/// run degrades to the 1×1 case instead of failing.
#[must_use]
pub fn parse_elements(raw: &str) -> Vec<Element> {
    let elements: Vec<Element> = raw
        .split(',')
        .filter_map(|segment| Element::new(segment).ok())
        .collect();

    if elements.is_empty() {
        warn!("Element list is empty; using a single placeholder element");
        return vec![Element::positional(0)];
    }
    elements
}
