//! Interactive UI loop
//!
//! Displays the current page with its menu, then waits for a page or subpage
//! to be typed. The loop ends on Ctrl+C or when stdin is closed.

use super::input_handler::{InputAction, classify_input, spawn_line_reader};
use super::state_manager::NavigationState;
use super::terminal_manager::{TerminalConfig, TerminalManager};
use crate::constants::display::{INPUT_PROMPT, PLACEHOLDER};
use crate::data_fetcher::document::Teletext;
use crate::error::AppError;
use crate::teletext::{Emphasis, Styler, format_page, render_menu};
use std::io::{self, Write, stdout};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, warn};

/// Shown when a line is neither a page number nor a subpage letter.
pub const INVALID_INPUT_MESSAGE: &str = "Input is not alphanumeric. Please try again.";

/// Builds everything printed for one screen: the page (or the lookup
/// message and a placeholder) followed by the menu rows.
pub fn render_screen(
    state: &mut NavigationState,
    teletext: &Teletext,
    styler: &dyn Styler,
) -> String {
    let body = match state.resolve(teletext) {
        Ok(resolved) => format_page(&resolved.content, styler, Emphasis::PageReferences),
        Err(e) => {
            warn!("{e}");
            format!("{e}\n{PLACEHOLDER}")
        }
    };

    info!("Displaying navigation menu...");
    let menu = render_menu(
        teletext.page_ids(),
        state.current_page(),
        state.current_subpages(),
        state.current_subpage(),
        styler,
    );

    format!("{body}\n{menu}")
}

enum Prompted {
    Line(String),
    Unreadable,
    Closed,
    Interrupted,
}

async fn next_line(
    lines: &mut UnboundedReceiver<io::Result<String>>,
    out: &mut impl Write,
) -> Result<Prompted, AppError> {
    write!(out, "{INPUT_PROMPT}")?;
    out.flush()?;

    tokio::select! {
        line = lines.recv() => match line {
            Some(Ok(line)) => Ok(Prompted::Line(line)),
            Some(Err(e)) => {
                debug!("Unreadable input line: {e}");
                Ok(Prompted::Unreadable)
            }
            None => Ok(Prompted::Closed),
        },
        signal = tokio::signal::ctrl_c() => {
            signal?;
            Ok(Prompted::Interrupted)
        }
    }
}

/// Runs the page/prompt loop until interrupted or stdin ends.
///
/// In debug mode the screen is not cleared between pages.
pub async fn run_interactive_ui(
    teletext: &Teletext,
    styler: &dyn Styler,
    debug_mode: bool,
) -> Result<(), AppError> {
    let terminal = TerminalManager::with_config(TerminalConfig {
        clear_screen: !debug_mode,
    });
    let mut out = stdout();
    terminal.setup_terminal(&mut out)?;

    let mut lines = spawn_line_reader();
    run_session(teletext, styler, &terminal, &mut lines, &mut out).await
}

/// Drives navigation from `lines`, writing every screen, prompt and message
/// to `out`.
///
/// Lines that are not a page or subpage, including lines that could not be
/// read as text, print [`INVALID_INPUT_MESSAGE`] and prompt again without
/// redrawing the page. Returns `Ok(())` once `lines` is closed or Ctrl+C
/// is pressed.
pub async fn run_session(
    teletext: &Teletext,
    styler: &dyn Styler,
    terminal: &TerminalManager,
    lines: &mut UnboundedReceiver<io::Result<String>>,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let mut state = NavigationState::new();

    loop {
        terminal.clear_screen(out)?;
        let screen = render_screen(&mut state, teletext, styler);
        writeln!(out, "{screen}")?;

        let action = loop {
            info!("Waiting for user input...");
            match next_line(lines, out).await? {
                Prompted::Line(line) => match classify_input(&line) {
                    InputAction::Invalid => {
                        debug!("Rejected input {line:?}");
                        writeln!(out, "{INVALID_INPUT_MESSAGE}")?;
                    }
                    action => break action,
                },
                Prompted::Unreadable => writeln!(out, "{INVALID_INPUT_MESSAGE}")?,
                Prompted::Closed => {
                    writeln!(out)?;
                    info!("Input closed, exiting");
                    return Ok(());
                }
                Prompted::Interrupted => {
                    writeln!(out)?;
                    info!("Interrupted, exiting");
                    return Ok(());
                }
            }
        };

        debug!("Navigating: {action:?}");
        state.apply(&action);
    }
}
