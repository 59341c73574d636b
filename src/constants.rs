//! Application-wide constants and configuration values
//!
//! This module centralizes the magic numbers of the teletext document format
//! and the display conventions used by the viewer.

/// Default endpoint serving the whole teletext as a single JSON document
pub const DEFAULT_TELETEXT_URL: &str = "https://www.ceskatelevize.cz/teletext-api/v2/text/";

/// Page shown on startup and suggested when a page lookup fails
pub const DEFAULT_PAGE: &str = "100";

/// Title shown in the terminal window while the viewer runs
pub const TERMINAL_TITLE: &str = "CT TELETEXT";

/// Human readable program name used in version output
pub const PROGRAM_NAME: &str = "CT Teletext Viewer";

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "ct_teletext.log";

/// Raw page text is wrapped in a `<pre>` envelope
pub mod envelope {
    /// Characters stripped from the start of raw page text (`<pre>`)
    pub const PREFIX_LEN: usize = 5;

    /// Characters stripped from the end of raw page text (`</pre>`)
    pub const SUFFIX_LEN: usize = 6;

    /// Shortest raw text that survives stripping
    pub const MIN_LEN: usize = PREFIX_LEN + SUFFIX_LEN;
}

/// Display constants
pub mod display {
    /// Width of the horizontal rule replacing the blank lines around a title
    pub const RULE_WIDTH: usize = 40;

    /// Character the horizontal rule is drawn with
    pub const RULE_CHAR: char = '─';

    /// Number of page identifiers in the navigation menu window
    pub const NEIGHBORHOOD_SIZE: usize = 7;

    /// Pages shown on each side of the current page in the window
    pub const NEIGHBORHOOD_RADIUS: usize = NEIGHBORHOOD_SIZE / 2;

    /// Content shown in place of a missing page or subpage
    pub const PLACEHOLDER: &str = " ";

    /// Prompt shown while waiting for navigation input
    pub const INPUT_PROMPT: &str = "Page or Subpage: ";
}

/// Environment variables overriding the config file
pub mod env_vars {
    pub const URL: &str = "CT_TELETEXT_URL";
    pub const LOG_FILE: &str = "CT_TELETEXT_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "CT_TELETEXT_HTTP_TIMEOUT";
}
