use crate::cli::Args;
use crate::config::Config;
use crate::data_fetcher::{DocumentSource, Teletext, fetch_teletext};
use crate::error::AppError;
use crate::teletext::{Emphasis, Styler, format_page, resolve_page, search_teletext};
use crate::version;
use std::path::Path;
use tracing::{info, warn};

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::invalid_arguments(
            "Cannot use both --set-log-file and --clear-log-file",
        ));
    }
    if let Some(page) = &args.page
        && page.trim().is_empty()
    {
        return Err(AppError::invalid_arguments("Page must not be empty"));
    }
    if let Some(search) = &args.search
        && search.is_empty()
    {
        return Err(AppError::invalid_arguments("Search word must not be empty"));
    }
    Ok(())
}

/// Handles the --version command.
pub fn handle_version_command() {
    version::print_version();
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Applies `--set-url`, `--set-log-file` and `--clear-log-file` to a loaded
/// configuration and validates the result.
pub fn apply_config_updates(config: &mut Config, args: &Args) -> Result<(), AppError> {
    if let Some(new_url) = &args.new_api_url {
        config.api_url = new_url.trim().to_string();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
    }

    config.validate()
}

/// Handles configuration update commands (--set-url, --set-log-file, --clear-log-file).
///
/// An existing config file is updated in place; without one the defaults are
/// saved with the requested changes. Invalid values are rejected before
/// anything is written.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    apply_config_updates(&mut config, args)?;
    config.save().await?;

    if args.clear_log_file_path {
        println!("Custom log file path cleared. Using default location.");
    }
    println!("Config updated successfully!");

    Ok(())
}

/// Loads the document from `--input` or the configured endpoint, persisting
/// it to `--output` when requested.
pub async fn load_teletext(args: &Args, config: &Config) -> Result<Teletext, AppError> {
    let source = DocumentSource::from_input(args.input.as_deref(), config);
    info!("Loading teletext from {source}");
    fetch_teletext(&source, config.http_timeout_seconds, args.output.as_deref()).await
}

/// Formatted text of one page, or the lookup message when it is missing.
pub fn render_single_page(
    teletext: &Teletext,
    page: &str,
    subpage: Option<&str>,
    styler: &dyn Styler,
) -> String {
    match resolve_page(teletext, page, subpage) {
        Ok(resolved) => format_page(&resolved.content, styler, Emphasis::PageReferences),
        Err(e) => {
            warn!("{e}");
            e.to_string()
        }
    }
}

/// Handles `--page` (and `--subpage`): prints one screen and exits.
///
/// A missing page or subpage is reported on stdout without failing the run.
pub async fn handle_page_command(
    args: &Args,
    config: &Config,
    page: &str,
    subpage: Option<&str>,
    styler: &dyn Styler,
) -> Result<(), AppError> {
    let teletext = load_teletext(args, config).await?;
    println!("{}", render_single_page(&teletext, page, subpage, styler));
    Ok(())
}

/// Handles `--output` on its own: the document is fetched, validated and saved.
pub async fn handle_output_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let teletext = load_teletext(args, config).await?;
    info!("Saved {} pages", teletext.len());
    Ok(())
}

/// Every screen containing `term`, formatted with the term emphasized.
pub fn render_search_results(
    teletext: &Teletext,
    term: &str,
    styler: &dyn Styler,
) -> Vec<String> {
    search_teletext(teletext, term)
        .into_iter()
        .map(|hit| format_page(&hit.content, styler, Emphasis::SearchMatches(term)))
        .collect()
}

/// Handles `--search`: prints every matching screen in page order.
pub async fn handle_search_command(
    args: &Args,
    config: &Config,
    term: &str,
    styler: &dyn Styler,
) -> Result<(), AppError> {
    let teletext = load_teletext(args, config).await?;
    let results = render_search_results(&teletext, term, styler);
    if results.is_empty() {
        info!("No page contains \"{term}\"");
    }
    for screen in results {
        println!("{screen}");
    }
    Ok(())
}
