use crate::cli::ColorChoice;
use std::io::IsTerminal;

/// Decide whether stdout gets ANSI colors and apply it globally
pub fn init(choice: ColorChoice) {
    let enabled = match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        // NO_COLOR wins over terminal detection (https://no-color.org/)
        ColorChoice::Auto => std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal(),
    };

    colored::control::set_override(enabled);
}
