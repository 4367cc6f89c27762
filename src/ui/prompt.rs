//! Interactive prompts, all rendered with `dialoguer`'s colorful theme.

use crate::error::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use tracing::debug;

/// Asks a yes/no question. The preselected answer is "no" unless `default_yes`.
pub fn confirm(message: &str, default_yes: bool) -> Result<bool> {
    let answer = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .default(default_yes)
        .interact()?;
    debug!("Confirm '{}' answered {}", message, answer);
    Ok(answer)
}

/// Asks for a line of free text, offering `default` when given.
pub fn prompt(message: &str, default: Option<&str>) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt(message);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    Ok(input.interact_text()?)
}

/// Shows a menu and returns the chosen index, or `None` if the user cancelled (Esc / q).
pub fn select<T: ToString>(message: &str, items: &[T], default: usize) -> Result<Option<usize>> {
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .items(items)
        .default(default)
        .interact_opt()?;
    debug!("Select '{}' answered {:?}", message, choice);
    Ok(choice)
}
