//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

/// Interpret a continuation answer.
///
/// `yes`/`y` continue, `no`/`n`/`q` stop; anything else is not an answer.
pub fn parse_yes_no(response: &str) -> Option<bool> {
    match response.trim().to_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" | "q" => Some(false),
        _ => None,
    }
}

/// Ask a yes/no question, re-prompting until the answer is understood
pub fn ask_yes_no(message: &str) -> Result<bool> {
    let response: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{} (yes/no)", message))
        .validate_with(|input: &String| -> Result<(), &str> {
            parse_yes_no(input)
                .map(|_| ())
                .ok_or("Please enter either yes or no.")
        })
        .interact_text()?;

    // Validated above
    Ok(parse_yes_no(&response).unwrap_or(false))
}

/// Ask for a line of free text
pub fn ask_text(message: &str) -> Result<String> {
    let response: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .interact_text()?;
    Ok(response)
}

/// Ask for an answer, accepting an empty line
pub fn ask_answer(message: &str) -> Result<String> {
    let response: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .allow_empty(true)
        .interact_text()?;
    Ok(response)
}

/// Let the user pick one item, returning its index
pub fn choose<T: ToString>(message: &str, items: &[T]) -> Result<usize> {
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .items(items)
        .default(0)
        .interact()?;
    Ok(selection)
}
