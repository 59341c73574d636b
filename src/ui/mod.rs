pub mod interactive;

pub use interactive::run_interactive_ui;
