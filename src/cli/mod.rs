//! Handles Command Line Interface (CLI) related functionalities.
//!
//! Includes defining commands, parsing arguments, handling user interaction
//! (prompts, menus, spinners) and rendering reports as terminal tables.

mod commands;
mod display;

pub use commands::*;
pub use display::*;

use crate::error::Result;
use dialoguer::{theme::ColorfulTheme, Input};

/// Prompts for a city or area name. Blank answers are re-prompted.
pub fn prompt_city() -> Result<String> {
    let city: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("City or area name")
        .validate_with(|input: &String| -> std::result::Result<(), &'static str> {
            if input.trim().is_empty() {
                Err("Please enter a location")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(city)
}
