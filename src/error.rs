use crate::constants::DEFAULT_PAGE;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch teletext: {0}")]
    HttpFetch(#[from] reqwest::Error),

    #[error("Teletext request to \"{url}\" failed with status {status} ({reason})")]
    HttpStatus {
        status: u16,
        reason: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while accessing \"{url}\"")]
    NetworkTimeout { url: String },

    #[error("There was an error accessing \"{url}\"! More info:\n{message}")]
    NetworkConnection { url: String, message: String },

    // Local file errors
    #[error("Cannot read teletext file \"{path}\": {message}")]
    FileRead { path: String, message: String },

    #[error("Cannot write teletext file \"{path}\": {message}")]
    FileWrite { path: String, message: String },

    // Document errors
    #[error("Teletext from \"{source_name}\" is not in valid JSON format! More info:\n{message}")]
    MalformedJson {
        source_name: String,
        message: String,
    },

    #[error("Teletext from \"{source_name}\" has an unexpected structure: {message}")]
    UnexpectedStructure {
        source_name: String,
        message: String,
    },

    #[error(
        "The program requires a terminal for interactive mode. Use instead arguments --page and --subpage (optional)"
    )]
    NotATerminal,

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an invalid arguments error
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create an HTTP status error (any non-2xx response)
    pub fn http_status(status: u16, reason: impl Into<String>, url: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            reason: reason.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a file read error
    pub fn file_read(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FileRead {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a file write error
    pub fn file_write(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FileWrite {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn malformed_json(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedJson {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create an unexpected structure error
    pub fn unexpected_structure(
        source_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::UnexpectedStructure {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Check if error comes from obtaining or parsing the teletext document
    pub fn is_fatal_fetch(&self) -> bool {
        matches!(
            self,
            AppError::HttpFetch(_)
                | AppError::HttpStatus { .. }
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::FileRead { .. }
                | AppError::MalformedJson { .. }
                | AppError::UnexpectedStructure { .. }
        )
    }
}

/// Non-fatal page resolution failures.
///
/// The display text is shown to the user as is while navigation continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Page {page} doesn't exist. Try going to page {default_page}.", default_page = DEFAULT_PAGE)]
    MissingPage { page: String },

    #[error("Subpage {subpage} doesn't exist for page {page}.")]
    MissingSubpage { page: String, subpage: String },
}
