//! Regex selection over enumerated components

use regex::Regex;

use crate::cli::OperationMode;
use crate::registry::component::{ImageComponent, RawComponent};

/// Drop items missing any required key. Order is preserved.
pub fn eligible_components(items: Vec<RawComponent>) -> Vec<ImageComponent> {
    items
        .into_iter()
        .filter_map(RawComponent::into_component)
        .collect()
}

/// Components selected by `mode` for `pattern`. Matching is an unanchored
/// search anywhere in the version string, never a full match.
pub fn select<'a>(
    components: &'a [ImageComponent],
    pattern: &Regex,
    mode: OperationMode,
) -> Vec<&'a ImageComponent> {
    components
        .iter()
        .filter(|component| mode.selects(pattern.is_match(&component.version)))
        .collect()
}
