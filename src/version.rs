use crate::constants::PROGRAM_NAME;

const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Text printed by `--version`.
pub fn version_string() -> String {
    format!("{PROGRAM_NAME} {CURRENT_VERSION}")
}

pub fn print_version() {
    println!("{}", version_string());
}
