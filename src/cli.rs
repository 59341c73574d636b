use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use std::path::PathBuf;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// What a single invocation does once configuration and logging are set up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Print one page (optionally one subpage) and exit
    Page {
        page: String,
        subpage: Option<String>,
    },
    /// Fetch the document, save it and exit
    Output(PathBuf),
    /// Print every screen containing the word and exit
    Search(String),
    /// Page/prompt loop
    Interactive,
}

/// Determines if the application should run in non-interactive mode
/// Non-interactive mode is used when any of these conditions are met:
/// - a page, output file or search word is given
/// - config operations are requested
/// - --version flag is set
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.is_config_command() || args.version || args.run_mode() != RunMode::Interactive
}

/// Czech Television Teletext Viewer
///
/// Displays pages of the public teletext service in the terminal.
///
/// In interactive mode (default):
/// - Type a page number (e.g. 200) and press Enter to open that page
/// - Type a subpage letter (e.g. B) and press Enter to switch subpage
/// - Press Ctrl+C to quit
///
/// With --page, --output or --search the viewer runs once and exits.
/// When several are given, --page wins over --output, which wins over --search.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Print this page and exit.
    #[arg(short, long, value_name = "PAGE")]
    pub page: Option<String>,

    /// Subpage letter of --page. Defaults to the first subpage.
    #[arg(short, long, value_name = "SUBPAGE", requires = "page")]
    pub subpage: Option<String>,

    /// Save the downloaded teletext JSON to this file. On its own, exits after saving.
    #[arg(short, long, value_name = "FILENAME")]
    pub output: Option<PathBuf>,

    /// Read the teletext JSON from this file instead of downloading it.
    #[arg(short, long, value_name = "FILENAME")]
    pub input: Option<PathBuf>,

    /// Print every page containing this word (case-sensitive) and exit.
    #[arg(short = 'g', long, value_name = "WORD")]
    pub search: Option<String>,

    /// Print pages without colors.
    #[arg(short, long = "no-color", help_heading = "Display Options")]
    pub no_color: bool,

    /// Enable debug mode which doesn't clear the terminal before drawing a page.
    #[arg(long = "debug", help_heading = "Display Options")]
    pub debug: bool,

    /// Print progress messages to standard output.
    #[arg(short = 'V', long, help_heading = "Debug")]
    pub verbose: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,

    /// Update the teletext API URL in config.
    #[arg(long = "set-url", value_name = "URL", help_heading = "Configuration")]
    pub new_api_url: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", value_name = "PATH", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'v', long = "version", help_heading = "Info")]
    pub version: bool,
}

impl Args {
    /// Config updates are applied before anything is fetched.
    pub fn is_config_update(&self) -> bool {
        self.new_api_url.is_some()
            || self.new_log_file_path.is_some()
            || self.clear_log_file_path
    }

    pub fn is_config_command(&self) -> bool {
        self.is_config_update() || self.list_config
    }

    /// Picks the mode from the batch flags, page first, then output, then search.
    pub fn run_mode(&self) -> RunMode {
        if let Some(page) = &self.page {
            RunMode::Page {
                page: page.clone(),
                subpage: self.subpage.clone(),
            }
        } else if let Some(output) = &self.output {
            RunMode::Output(output.clone())
        } else if let Some(search) = &self.search {
            RunMode::Search(search.clone())
        } else {
            RunMode::Interactive
        }
    }
}
