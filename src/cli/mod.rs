//! CLI module - argument parsing, prompts and the interactive shell

pub mod args;
pub mod converter;
pub mod menu;
pub mod prompts;
pub mod trainer;

pub use args::{Cli, Commands, Settings};
pub use menu::{run_menu, MenuChoice};
