//! Error message formatting and display functionality

use anstream::eprintln;
use measura::shared::error::{Context, MeasuraError};
use owo_colors::{OwoColorize, Style};

use crate::stylesheet;

/// Prints a formatted error message to stderr
pub fn print(error: &MeasuraError, print_debug: bool) {
    if print_debug {
        eprintln!("{error:?}");
    } else {
        let error_string = error_to_string(error);
        eprintln!("{error_string}");
    }
}

/// Converts an error to a formatted string representation
fn error_to_string(error: &MeasuraError) -> String {
    // error: <message>
    //   = note: <note>
    //   = help: <help>
    let message_line = get_message_line("error", stylesheet::ERROR_COLOR, error.message());

    let context_lines = error.context().iter().map(|context| {
        let (kind, color, message) = match context {
            Context::Note(message) => ("note", stylesheet::NOTE_COLOR, message),
            Context::Help(message) => ("help", stylesheet::HELP_COLOR, message),
        };
        let equals = color.bold().style("=");
        format!("  {equals} {}", get_message_line(kind, color, message))
    });

    let mut lines = vec![message_line];
    lines.extend(context_lines);

    lines.join("\n")
}

/// Formats a message line with a colored prefix
fn get_message_line(kind: &str, kind_color: Style, message: &str) -> String {
    // <kind>: <message>
    let kind_str = kind_color.style(kind);
    let message_line = format!("{kind_str}: {message}");

    message_line.bold().to_string()
}
