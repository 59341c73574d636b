//! Interactive UI module for the teletext viewer
//!
//! This module is organized into focused submodules:
//! - `state_manager`: current page, subpage and subpage list
//! - `input_handler`: line classification and the stdin reader thread
//! - `terminal_manager`: TTY check, title and screen clearing
//! - `core`: the display/prompt loop

pub mod core;
pub mod input_handler;
pub mod state_manager;
pub mod terminal_manager;

pub use self::core::{INVALID_INPUT_MESSAGE, render_screen, run_interactive_ui, run_session};
pub use input_handler::{InputAction, classify_input};
pub use state_manager::NavigationState;
pub use terminal_manager::TerminalManager;
