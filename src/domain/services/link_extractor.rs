//! Link Extractor Service
//!
//! Finds the HTML sources a selector document refers to. Two shapes are
//! recognized, line by line:
//!
//! - tagged: `<list> https://example.com/list` (tag kept, target trimmed)
//! - bare: `http(s)://...`, `file://...`, or a path ending in `.html`/`.htm`
//!
//! Tagged links win: bare links are only collected from documents that
//! carry no tagged link at all. A bare path directly followed by `{`, `[`,
//! `@` or `|` is a selector (`div.html{text}`) and is skipped.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::value_objects::ResolvedLink;

/// Default cap on regex matches per scan
pub const DEFAULT_SCAN_LIMIT: usize = 100;

static TAGGED_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(<[^<>]*>)\s*(\S.*)$").expect("valid regex"));

static BARE_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:https?|file)://[^\s<>"'`)]+|[\w./\\:~-]+\.html?\b"#).expect("valid regex")
});

/// Characters that turn a preceding `name.html` into selector syntax
const SELECTOR_CONTINUATION: &[char] = &['{', '[', '@', '|'];

/// Result of scanning a document for links
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkScan {
    /// Links in document order, duplicates kept
    pub links: Vec<ResolvedLink>,
    /// More matches existed past the cap
    pub truncated: bool,
}

/// Tagged link on a single line, e.g. `<list> https://example.com`
pub fn tagged_link(line: &str) -> Option<ResolvedLink> {
    let cap = TAGGED_LINK.captures(line)?;
    let target = cap[2].trim();
    if target.is_empty() {
        return None;
    }
    Some(ResolvedLink::tagged(&cap[1], target))
}

/// Scan `text` for links, stopping once `limit` matches have been taken
pub fn extract_links(text: &str, limit: usize) -> LinkScan {
    let tagged = take_capped(text.lines().filter_map(tagged_link), limit);
    let scan = if tagged.links.is_empty() && !tagged.truncated {
        take_capped(text.lines().flat_map(bare_links), limit)
    } else {
        tagged
    };

    if scan.truncated {
        tracing::warn!(limit, "link scan stopped at iteration cap");
    }
    scan
}

fn bare_links(line: &str) -> impl Iterator<Item = ResolvedLink> + '_ {
    BARE_LINK
        .find_iter(line)
        .filter(move |m| !line[m.end()..].starts_with(SELECTOR_CONTINUATION))
        .map(|m| ResolvedLink::bare(m.as_str()))
}

fn take_capped(links: impl Iterator<Item = ResolvedLink>, limit: usize) -> LinkScan {
    let mut scan = LinkScan::default();
    for link in links {
        if scan.links.len() >= limit {
            scan.truncated = true;
            break;
        }
        scan.links.push(link);
    }
    scan
}
