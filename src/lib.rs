//! Czech Television Teletext Viewer Library
//!
//! This library provides functionality for fetching the teletext JSON document,
//! resolving pages and subpages, and rendering them with ANSI colors in a terminal.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ct_teletext::config::Config;
//! use ct_teletext::data_fetcher::{DocumentSource, fetch_teletext};
//! use ct_teletext::error::AppError;
//! use ct_teletext::teletext::{Emphasis, format_page, resolve_page, styler_for};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::default();
//!     let source = DocumentSource::from_input(None, &config);
//!     let teletext = fetch_teletext(&source, config.http_timeout_seconds, None).await?;
//!
//!     if let Ok(page) = resolve_page(&teletext, "100", None) {
//!         let styler = styler_for(false);
//!         println!("{}", format_page(&page.content, styler.as_ref(), Emphasis::PageReferences));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod teletext;
pub mod ui;
pub mod version;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{DocumentSource, PageRecord, Teletext, fetch_teletext};
pub use error::{AppError, LookupError};
pub use teletext::{Emphasis, ResolvedPage, format_page, render_menu, resolve_page, search_teletext};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
