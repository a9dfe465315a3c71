//! Blocking confirmation prompt for destructive actions.

use std::io::{BufRead, Write};

use common::AppResult;

/// Ask the user to confirm; anything but `y`/`yes` declines.
pub fn confirm(message: &str) -> AppResult<bool> {
    print!("{} [y/N]: ", message);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;

    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Confirm unless the `--yes` flag was passed.
pub fn confirm_unless(yes: bool, message: &str) -> AppResult<bool> {
    if yes {
        return Ok(true);
    }
    confirm(message)
}
