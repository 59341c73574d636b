use crate::cli::Args;
use crate::commands::load_teletext;
use crate::config::Config;
use crate::error::AppError;
use crate::teletext::Styler;
use crate::ui;
use crate::ui::interactive::TerminalManager;

/// Run the interactive application flow.
///
/// - Refuses to start when stdout is not a terminal, before anything is fetched
/// - Loads the document once
/// - Runs the page/prompt loop until Ctrl+C or end of input
pub async fn run_interactive(
    args: &Args,
    config: &Config,
    styler: &dyn Styler,
) -> Result<(), AppError> {
    TerminalManager::ensure_terminal()?;

    let teletext = load_teletext(args, config).await?;

    ui::run_interactive_ui(&teletext, styler, args.debug).await
}
