//! Main menu loop

use std::fmt;

use anyhow::Result;
use chrono::{Datelike, Local};

use crate::cli::args::Settings;
use crate::cli::converter::run_converter;
use crate::cli::prompts::choose;
use crate::cli::trainer::{run_exam, run_practice};
use crate::report::display_info;
use crate::utils::{print_banner, print_farewell};

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Learn,
    Convert,
    Practice,
    Test,
    Quit,
}

impl MenuChoice {
    /// Menu entries in display order
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Learn,
        MenuChoice::Convert,
        MenuChoice::Practice,
        MenuChoice::Test,
        MenuChoice::Quit,
    ];
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuChoice::Learn => "1) Learn more about Roman numerals",
            MenuChoice::Convert => "2) Use the converter",
            MenuChoice::Practice => "3) Practice conversion skills",
            MenuChoice::Test => "4) Take the test",
            MenuChoice::Quit => "5) Quit",
        };
        write!(f, "{}", label)
    }
}

/// Run the interactive menu until the user quits
pub fn run_menu(settings: &Settings) -> Result<()> {
    print_banner(env!("CARGO_PKG_VERSION"));

    loop {
        println!();
        let index = choose("What would you like to do?", &MenuChoice::ALL)?;
        let choice = MenuChoice::ALL[index];
        tracing::debug!(?choice, "menu selection");

        match choice {
            MenuChoice::Learn => display_info(Local::now().year()),
            MenuChoice::Convert => run_converter()?,
            MenuChoice::Practice => run_practice(settings)?,
            MenuChoice::Test => {
                run_exam(settings)?;
            }
            MenuChoice::Quit => {
                print_farewell();
                return Ok(());
            }
        }
    }
}
