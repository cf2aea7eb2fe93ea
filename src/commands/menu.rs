//! Start-up menu shown when no subcommand is given

use super::assisted::read_line;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Mode picked from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Computer picks a secret and solves it
    Auto,
    /// Player picks a secret and reports feedback
    Assisted,
    Quit,
}

/// Show the menu and read one choice
///
/// Anything other than `1` or `2` (including end of input) quits.
///
/// # Errors
/// Returns an I/O error if reading input or writing output fails.
pub fn prompt_menu<R: BufRead, W: Write>(mut input: R, out: &mut W) -> io::Result<MenuChoice> {
    writeln!(out, "{}", "=== Mastermind (Knuth minimax) ===".bright_cyan().bold())?;
    writeln!(out, "1. Automatic mode (the computer picks and cracks a secret)")?;
    writeln!(out, "2. Assisted mode (you pick the secret and give feedback)")?;
    writeln!(out, "0. Quit")?;

    let choice = match read_line(&mut input, out, "Choose a mode")?.as_deref() {
        Some("1") => MenuChoice::Auto,
        Some("2") => MenuChoice::Assisted,
        _ => MenuChoice::Quit,
    };
    Ok(choice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn choose(script: &str) -> MenuChoice {
        let mut out = Vec::new();
        prompt_menu(Cursor::new(script), &mut out).unwrap()
    }

    #[test]
    fn menu_choices() {
        assert_eq!(choose("1\n"), MenuChoice::Auto);
        assert_eq!(choose(" 2 \n"), MenuChoice::Assisted);
        assert_eq!(choose("0\n"), MenuChoice::Quit);
        assert_eq!(choose("banana\n"), MenuChoice::Quit);
        assert_eq!(choose(""), MenuChoice::Quit);
    }
}
