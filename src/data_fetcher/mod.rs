pub mod api;
pub mod document;
pub mod source;

pub use document::{PageRecord, Teletext};
pub use source::{DocumentSource, fetch_teletext, read_raw_document, save_raw_document};
