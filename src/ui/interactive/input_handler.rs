//! Line input handling for the interactive UI.
//!
//! This module handles:
//! - Classifying a typed line as a page, a subpage, or invalid input
//! - Reading stdin lines on a dedicated thread so the async loop can race
//!   them against Ctrl+C

use std::io::{self, BufRead};
use std::thread;
use tokio::sync::mpsc;
use tracing::debug;

/// What a line of user input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Entirely numeric input
    GoToPage(String),
    /// Entirely alphabetic input
    GoToSubpage(String),
    /// Empty or mixed input
    Invalid,
}

/// Classifies a line typed at the prompt. Surrounding whitespace is ignored.
pub fn classify_input(line: &str) -> InputAction {
    let input = line.trim();

    if input.is_empty() {
        InputAction::Invalid
    } else if input.chars().all(char::is_numeric) {
        InputAction::GoToPage(input.to_string())
    } else if input.chars().all(char::is_alphabetic) {
        InputAction::GoToSubpage(input.to_uppercase())
    } else {
        InputAction::Invalid
    }
}

/// Spawns a thread forwarding stdin lines.
///
/// The receiver yields `None` once stdin is closed. A plain thread is used
/// instead of `tokio::io::stdin` so a pending read never keeps the runtime
/// from shutting down.
pub fn spawn_line_reader() -> mpsc::UnboundedReceiver<io::Result<String>> {
    let (tx, rx) = mpsc::unbounded_channel();

    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            if tx.send(line).is_err() {
                break;
            }
        }
        debug!("Input reader finished");
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_input_is_page() {
        assert_eq!(
            classify_input("200"),
            InputAction::GoToPage("200".to_string())
        );
        assert_eq!(
            classify_input(" 101 \r"),
            InputAction::GoToPage("101".to_string())
        );
    }

    #[test]
    fn test_alphabetic_input_is_subpage() {
        assert_eq!(
            classify_input("b"),
            InputAction::GoToSubpage("B".to_string())
        );
        assert_eq!(
            classify_input("C"),
            InputAction::GoToSubpage("C".to_string())
        );
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(classify_input(""), InputAction::Invalid);
        assert_eq!(classify_input("   "), InputAction::Invalid);
        assert_eq!(classify_input("100A"), InputAction::Invalid);
        assert_eq!(classify_input("1-2"), InputAction::Invalid);
        assert_eq!(classify_input("?"), InputAction::Invalid);
    }
}
