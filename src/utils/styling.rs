//! Terminal styling utilities for the interactive shell

use console::{style, Emoji};

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static SCROLL: Emoji<'_, '_> = Emoji("📜 ", "");
pub static WAVE: Emoji<'_, '_> = Emoji("👋 ", ">> ");
pub static TROPHY: Emoji<'_, '_> = Emoji("🏆 ", "");

/// Print the welcome banner
pub fn print_banner(version: &str) {
    let banner = r#"
    ____
   / __ \____  ____ ___  ____ _____  __  ______ ___
  / /_/ / __ \/ __ `__ \/ __ `/ __ \/ / / / __ `__ \
 / _, _/ /_/ / / / / / / /_/ / / / / /_/ / / / / / /
/_/ |_|\____/_/ /_/ /_/\__,_/_/ /_/\__,_/_/ /_/ /_/
    "#;

    println!();
    println!("{}", style(banner).yellow().bold());
    println!(
        "    {}{}",
        SCROLL,
        style("Welcome to the Roman Numeral Converter!").white().bold()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
}

/// Print a section header
pub fn print_section_header(title: &str) {
    println!();
    println!("    {}", style(title).cyan().bold());
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print a failure message the user can recover from
pub fn print_failure(message: &str) {
    println!("    {} {}", style("✗").red().bold(), style(message).red());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a test result line
pub fn print_score(message: &str) {
    println!();
    println!("    {}{}", TROPHY, style(message).yellow().bold());
}

/// Print the farewell message
pub fn print_farewell() {
    println!();
    println!(
        "    {}{}",
        WAVE,
        style("Thank you for using the Roman Numeral Converter! We hope you learnt something new!")
            .green()
            .bold()
    );
    println!();
}
