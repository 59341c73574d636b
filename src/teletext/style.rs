//! Output styling.
//!
//! The formatter and menu only know about [`StyleRole`]s. Which escape
//! sequences (if any) a role turns into is decided once at startup by
//! picking a [`Styler`].

use crossterm::style::{Color, Stylize};

/// What a piece of text means on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleRole {
    /// Middle line of a title block
    Title,
    /// Horizontal rule replacing the blank lines around a title
    Rule,
    /// Page number reference inside page content
    Reference,
    /// Current page or subpage in the navigation menu
    Current,
    /// Occurrence of the search term
    SearchMatch,
}

pub trait Styler {
    /// Wraps `text` in whatever markup `role` maps to.
    fn paint(&self, text: &str, role: StyleRole) -> String;

    /// True when painting never changes the text.
    fn is_plain(&self) -> bool {
        false
    }
}

/// Leaves text untouched. Used for `--no-color`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn paint(&self, text: &str, _role: StyleRole) -> String {
        text.to_string()
    }

    fn is_plain(&self) -> bool {
        true
    }
}

/// ANSI colors through crossterm.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyler;

pub fn title_fg() -> Color {
    Color::DarkCyan
}
pub fn rule_fg() -> Color {
    Color::DarkBlue
}
// Light cyan
pub fn reference_fg() -> Color {
    Color::Cyan
}
pub fn current_fg() -> Color {
    Color::DarkGrey
}
pub fn search_match_fg() -> Color {
    Color::DarkRed
}

impl AnsiStyler {
    fn color_for(role: StyleRole) -> Color {
        match role {
            StyleRole::Title => title_fg(),
            StyleRole::Rule => rule_fg(),
            StyleRole::Reference => reference_fg(),
            StyleRole::Current => current_fg(),
            StyleRole::SearchMatch => search_match_fg(),
        }
    }
}

impl Styler for AnsiStyler {
    fn paint(&self, text: &str, role: StyleRole) -> String {
        format!("{}", text.with(Self::color_for(role)))
    }
}

/// Picks the styler for the whole run.
pub fn styler_for(no_color: bool) -> Box<dyn Styler> {
    if no_color {
        Box::new(PlainStyler)
    } else {
        Box::new(AnsiStyler)
    }
}
