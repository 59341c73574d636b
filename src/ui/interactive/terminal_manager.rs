//! Terminal management for interactive UI
//!
//! This module handles terminal checks and screen operations:
//! - Refusing to run the interactive loop without a terminal
//! - Setting the window title
//! - Clearing the screen before each page

use crate::constants::TERMINAL_TITLE;
use crate::error::AppError;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType, SetTitle},
    tty::IsTty,
};
use std::io::{Write, stdout};

/// Configuration for terminal management operations
#[derive(Debug, Clone)]
pub struct TerminalConfig {
    /// Clear the screen before every page. Disabled for debugging so
    /// previous output stays visible.
    pub clear_screen: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self { clear_screen: true }
    }
}

/// Terminal manager responsible for setup and per-page screen operations
pub struct TerminalManager {
    config: TerminalConfig,
}

impl TerminalManager {
    pub fn new() -> Self {
        Self {
            config: TerminalConfig::default(),
        }
    }

    pub fn with_config(config: TerminalConfig) -> Self {
        Self { config }
    }

    /// Fails with `AppError::NotATerminal` when stdout is redirected.
    pub fn ensure_terminal() -> Result<(), AppError> {
        if stdout().is_tty() {
            Ok(())
        } else {
            Err(AppError::NotATerminal)
        }
    }

    /// Setup terminal for interactive mode
    pub fn setup_terminal(&self, out: &mut impl Write) -> Result<(), AppError> {
        execute!(out, SetTitle(TERMINAL_TITLE))?;
        Ok(())
    }

    /// Clears the screen and moves the cursor home
    pub fn clear_screen(&self, out: &mut impl Write) -> Result<(), AppError> {
        if self.config.clear_screen {
            execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}

impl Default for TerminalManager {
    fn default() -> Self {
        Self::new()
    }
}
