//! Teletext page handling: lookup, formatting, menu and search.

pub mod formatter;
pub mod menu;
pub mod resolver;
pub mod search;
pub mod style;

pub use formatter::{Emphasis, format_page};
pub use menu::{neighborhood, render_menu};
pub use resolver::{ResolvedPage, resolve_page, strip_envelope};
pub use search::search_teletext;
pub use style::{AnsiStyler, PlainStyler, StyleRole, Styler, styler_for};
