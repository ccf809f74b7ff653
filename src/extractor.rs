/// Account extraction: classification, dedup and avatar lookup over a page

use std::collections::HashSet;

use crate::account::ExtractedAccount;
use crate::handle::parse_handle;

/// A link element in the scanned page
pub trait PageAnchor {
    /// The fully-resolved href of the link
    fn resolved_href(&self) -> String;

    /// `src` of the first image nested inside the link
    fn first_inner_image(&self) -> Option<String>;

    /// `src` of the first image inside the closest enclosing div, span or li
    fn first_container_image(&self) -> Option<String>;
}

/// The page being scanned; yields every link carrying an href, in document order
pub trait PageDocument {
    type Anchor: PageAnchor;

    fn anchors(&self) -> Vec<Self::Anchor>;
}

/// Scan a page once and return one entry per unique handle, in first-seen order
pub fn extract_accounts<D: PageDocument>(document: &D) -> Vec<ExtractedAccount> {
    let mut seen_usernames = HashSet::new();
    let mut results = Vec::new();

    for anchor in document.anchors() {
        let href = anchor.resolved_href();
        let Some(username) = parse_handle(&href) else {
            continue;
        };

        if !seen_usernames.insert(username.to_lowercase()) {
            continue;
        }

        results.push(ExtractedAccount {
            username: username.to_string(),
            avatar: resolve_avatar(&anchor),
        });
    }

    results
}

/// Image inside the link first, then the first image of its container
pub fn resolve_avatar<A: PageAnchor>(anchor: &A) -> Option<String> {
    anchor
        .first_inner_image()
        .filter(|src| is_usable_avatar(src))
        .or_else(|| anchor.first_container_image().filter(|src| is_usable_avatar(src)))
}

/// Inline SVG placeholders and empty sources are not avatars
pub fn is_usable_avatar(src: &str) -> bool {
    !src.is_empty() && !src.contains("data:image/svg")
}
