//! Domain Services
//!
//! Stateless functions over domain types:
//!
//! - `link_extractor` - finds tagged and bare links in selector text
//! - `diagnostic_mapper` - grammar locations to editor diagnostics

pub mod diagnostic_mapper;
pub mod link_extractor;

pub use diagnostic_mapper::{line_diagnostic, to_diagnostic};
pub use link_extractor::{extract_links, tagged_link, LinkScan, DEFAULT_SCAN_LIMIT};
