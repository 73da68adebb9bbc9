//! Link resolution
//!
//! Zero candidates: nothing to do. One: use it. Several: ask the picker.

use crate::domain::ports::LinkPicker;
use crate::domain::services::extract_links;
use crate::domain::value_objects::ResolvedLink;

/// Placeholder shown by the picker
pub const PICKER_PLACEHOLDER: &str = "Choose an url:";

/// Information message for documents without links
pub const NO_LINK_FOUND: &str = "No link is found in current file.";

/// Information message when the picker is dismissed
pub const NO_LINK_CHOSEN: &str = "No link chosen.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkResolution {
    Resolved(ResolvedLink),
    NoLinkFound,
    /// The picker was dismissed
    NoLinkChosen,
}

pub fn resolve_link(text: &str, picker: &dyn LinkPicker, limit: usize) -> LinkResolution {
    let mut links = extract_links(text, limit).links;

    match links.len() {
        0 => LinkResolution::NoLinkFound,
        1 => LinkResolution::Resolved(links.remove(0)),
        _ => {
            let labels: Vec<String> = links.iter().map(ResolvedLink::label).collect();
            match picker.pick(&labels, PICKER_PLACEHOLDER) {
                Some(index) if index < links.len() => {
                    LinkResolution::Resolved(links.swap_remove(index))
                }
                Some(index) => {
                    tracing::warn!(index, options = links.len(), "picker returned out-of-range index");
                    LinkResolution::NoLinkChosen
                }
                None => LinkResolution::NoLinkChosen,
            }
        }
    }
}
