// src/main.rs
use clap::Parser;
use ct_teletext::app::run_interactive;
use ct_teletext::cli::{Args, RunMode, is_noninteractive_mode};
use ct_teletext::commands::{
    handle_config_update_command, handle_list_config_command, handle_output_command,
    handle_page_command, handle_search_command, handle_version_command, validate_args,
};
use ct_teletext::config::Config;
use ct_teletext::error::AppError;
use ct_teletext::logging::setup_logging;
use ct_teletext::teletext::styler_for;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let args = Args::parse();
    validate_args(&args)?;

    // Handle version flag first
    if args.version {
        handle_version_command();
        return Ok(());
    }

    // Configuration commands run before the config is validated for use
    if args.is_config_update() {
        return handle_config_update_command(&args).await;
    }

    if args.list_config {
        return handle_list_config_command().await;
    }

    let config = Config::load().await?;

    // The guard must outlive every log call below
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    info!("Logs are being written to: {log_file_path}");

    let result = dispatch(&args, &config).await;
    match &result {
        Err(e) if e.is_fatal_fetch() => error!("Could not load teletext document: {e}"),
        Err(e) => error!("{e}"),
        Ok(()) => {}
    }
    result
}

async fn dispatch(args: &Args, config: &Config) -> Result<(), AppError> {
    let styler = styler_for(args.no_color);

    if is_noninteractive_mode(args) {
        info!("Running once: {:?}", args.run_mode());
    }

    match args.run_mode() {
        RunMode::Page { page, subpage } => {
            handle_page_command(args, config, &page, subpage.as_deref(), styler.as_ref()).await
        }
        RunMode::Output(_) => handle_output_command(args, config).await,
        RunMode::Search(term) => handle_search_command(args, config, &term, styler.as_ref()).await,
        RunMode::Interactive => run_interactive(args, config, styler.as_ref()).await,
    }
}
