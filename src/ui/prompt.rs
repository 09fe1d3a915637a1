use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::io::{self, Write};

/// Ask a yes/no question on the terminal. Anything but y/yes is a no.
pub fn confirm(prompt: &str) -> AppResult<bool> {
    warning(prompt);
    print!("Confirm [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
