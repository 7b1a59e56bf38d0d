//! Romanum: Roman Numeral Converter CLI
//!
//! An interactive console program for converting between Arabic numbers
//! and Roman numerals, with practice questions and a short test.

use anyhow::Result;
use chrono::{Datelike, Local};
use clap::Parser;

use romanum::cli::converter::run_convert;
use romanum::cli::{run_menu, Cli, Commands};
use romanum::report::display_info;
use romanum::utils::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Handle subcommands
    if let Some(command) = &cli.command {
        return match command {
            Commands::Convert { values } => run_convert(values),
            Commands::Chart => {
                display_info(Local::now().year());
                Ok(())
            }
        };
    }

    let settings = cli.settings();
    tracing::debug!(?settings, "starting interactive shell");
    run_menu(&settings)
}
