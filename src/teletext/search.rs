//! Literal, case-sensitive search over every page and subpage.

use crate::data_fetcher::document::Teletext;
use crate::teletext::resolver::{ResolvedPage, resolve_page};
use tracing::{info, warn};

/// Scans all pages in navigation order and returns the screens whose
/// content contains `term`.
///
/// Each subpage is resolved and tested exactly once; pages without
/// subpages count as a single screen.
pub fn search_teletext(teletext: &Teletext, term: &str) -> Vec<ResolvedPage> {
    let mut hits = Vec::new();

    for (page, record) in teletext.iter() {
        let screens: Vec<Option<&str>> = if record.subpages.is_empty() {
            vec![None]
        } else {
            record.subpages.iter().map(|s| Some(s.as_str())).collect()
        };

        for subpage in screens {
            match resolve_page(teletext, page, subpage) {
                Ok(resolved) if resolved.content.contains(term) => {
                    info!(
                        "A word \"{term}\" was found in {page}{}, formatting and printing that page...",
                        resolved.subpage.as_deref().unwrap_or_default()
                    );
                    hits.push(resolved);
                }
                Ok(_) => {}
                Err(e) => warn!("Skipping screen during search: {e}"),
            }
        }
    }

    hits
}
