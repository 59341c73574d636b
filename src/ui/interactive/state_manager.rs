//! Navigation state for the interactive UI
//!
//! The state is owned by the interactive loop and passed around explicitly,
//! so every transition can be tested without a terminal.

use crate::constants::DEFAULT_PAGE;
use crate::data_fetcher::document::Teletext;
use crate::error::LookupError;
use crate::teletext::resolver::{ResolvedPage, normalize_subpage, resolve_page};
use crate::ui::interactive::input_handler::InputAction;

/// Which page and subpage the user is looking at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current_page: String,
    /// Empty means "first available subpage or the page's only content".
    current_subpage: String,
    /// Subpages of the current page, for the menu.
    current_subpages: Vec<String>,
}

impl NavigationState {
    /// Starts on the default page.
    pub fn new() -> Self {
        Self::with_page(DEFAULT_PAGE)
    }

    pub fn with_page(page: impl Into<String>) -> Self {
        Self {
            current_page: page.into(),
            current_subpage: String::new(),
            current_subpages: Vec::new(),
        }
    }

    pub fn current_page(&self) -> &str {
        &self.current_page
    }

    pub fn current_subpage(&self) -> &str {
        &self.current_subpage
    }

    pub fn current_subpages(&self) -> &[String] {
        &self.current_subpages
    }

    /// Resolves the current page and records which subpage is shown.
    ///
    /// On a missing page the subpage list is cleared; on a missing subpage
    /// the page's subpages stay listed so the user can pick another one.
    pub fn resolve(&mut self, teletext: &Teletext) -> Result<ResolvedPage, LookupError> {
        let requested = self.current_subpage.clone();
        let requested = (!requested.is_empty()).then_some(requested.as_str());

        match resolve_page(teletext, &self.current_page, requested) {
            Ok(resolved) => {
                self.current_subpages = resolved.subpages.clone();
                self.current_subpage = resolved.subpage.clone().unwrap_or_default();
                Ok(resolved)
            }
            Err(error) => {
                self.current_subpages = teletext
                    .page(&self.current_page)
                    .map(|record| record.subpages.clone())
                    .unwrap_or_default();
                Err(error)
            }
        }
    }

    /// Applies a navigation command. Invalid input leaves the state untouched.
    pub fn apply(&mut self, action: &InputAction) {
        match action {
            InputAction::GoToPage(page) => {
                self.current_page = page.clone();
                self.current_subpage.clear();
            }
            InputAction::GoToSubpage(subpage) => {
                self.current_subpage = normalize_subpage(subpage);
            }
            InputAction::Invalid => {}
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
