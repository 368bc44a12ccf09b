//! General message formatting functions for the command line.
//!
//! - Highlight Text (make the text survey blue but not bold)
//! - System message formatting functions that produce the same
//! format messages.

use colored::Colorize;

use crate::cli::colors::SURVEY_BLUE;

pub fn highlight_argument(argument: &str) -> String {
    //! Highlight a piece of text in the survey blue color.

    format!("{}", argument.color(SURVEY_BLUE))
}

pub fn system_message(source_name: &str, message: String) -> String {
    //! Format a message as `[source] message`, with the source name
    //! padded and bold.

    let source_formatted = format!("{:6}", source_name.color(SURVEY_BLUE).bold());

    format!("[{}] {}", source_formatted, message)
}
