//! Workflow command output.
//!
//! The host parses `::<command>::<data>` lines on stdout. Data and
//! properties are percent-encoded so a multi-line message still arrives as a
//! single command.

/// Escape command data: `%`, CR, LF.
pub fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a command property: data escapes plus `:` and `,`.
pub fn escape_property(property: &str) -> String {
    escape_data(property).replace(':', "%3A").replace(',', "%2C")
}

fn format_command(command: &str, data: &str) -> String {
    format!("::{command}::{}", escape_data(data))
}

fn issue(command: &str, data: &str) {
    println!("{}", format_command(command, data));
}

/// Emit an error annotation the host surfaces on the run.
pub fn error(message: &str) {
    issue("error", message);
}

/// Emit a debug message, shown when the host runs with debug logging on.
pub fn debug(message: &str) {
    issue("debug", message);
}

/// Report failure to the host.
///
/// Emits the error annotation; the caller pairs it with
/// [`crate::exit_codes::FAILED`].
pub fn set_failed(message: &str) {
    error(message);
}
