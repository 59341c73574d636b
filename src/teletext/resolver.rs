//! Page and subpage lookup.

use crate::constants::envelope;
use crate::data_fetcher::document::Teletext;
use crate::error::LookupError;
use tracing::{info, warn};

/// Content of one page screen, envelope already removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPage {
    pub page: String,
    /// Subpage actually displayed. `None` for single-screen pages.
    pub subpage: Option<String>,
    /// All subpages of the page, for the navigation menu.
    pub subpages: Vec<String>,
    pub content: String,
}

/// Removes the fixed `<pre>`/`</pre>` envelope.
///
/// Counts characters, not bytes. Text shorter than the envelope yields an
/// empty string.
pub fn strip_envelope(raw: &str) -> String {
    let len = raw.chars().count();
    if len < envelope::MIN_LEN {
        warn!("Page text shorter than its envelope ({len} characters)");
        return String::new();
    }
    raw.chars()
        .skip(envelope::PREFIX_LEN)
        .take(len - envelope::MIN_LEN)
        .collect()
}

/// Subpage letters are stored uppercase in the document.
pub fn normalize_subpage(subpage: &str) -> String {
    subpage.trim().to_uppercase()
}

/// Looks up a page screen.
///
/// Without a subpage the first listed one is used, or the page id alone
/// for pages that have no subpages.
pub fn resolve_page(
    teletext: &Teletext,
    page: &str,
    subpage: Option<&str>,
) -> Result<ResolvedPage, LookupError> {
    info!("Parsing teletext page content...");

    let record = teletext.page(page).ok_or_else(|| LookupError::MissingPage {
        page: page.to_string(),
    })?;

    let effective_subpage = match subpage.map(normalize_subpage) {
        Some(requested) if !requested.is_empty() => Some(requested),
        _ => {
            let first = record.first_subpage().map(str::to_string);
            if let Some(first) = &first {
                info!("No subpage provided, printing default {first} subpage.");
            }
            first
        }
    };

    let key = format!("{page}{}", effective_subpage.as_deref().unwrap_or_default());
    let raw = record
        .raw_text(&key)
        .ok_or_else(|| LookupError::MissingSubpage {
            page: page.to_string(),
            subpage: effective_subpage.clone().unwrap_or_default(),
        })?;

    Ok(ResolvedPage {
        page: page.to_string(),
        subpage: effective_subpage,
        subpages: record.subpages.clone(),
        content: strip_envelope(raw),
    })
}
