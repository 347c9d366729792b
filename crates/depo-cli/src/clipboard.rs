//! Clipboard writes through the terminal.

use base64::Engine;
use std::io::{self, Write};

/// Build the OSC 52 sequence that asks the terminal to set the clipboard.
pub fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{}\x07", encoded)
}

/// Copy text to the system clipboard via OSC 52.
///
/// The sequence goes to stderr so redirected stdout stays clean data. Works in
/// most modern terminals; others silently ignore it.
pub fn copy_to_clipboard(text: &str) -> io::Result<()> {
    write_osc52(&mut io::stderr().lock(), text)
}

/// Write the OSC 52 sequence for `text` and flush.
pub fn write_osc52<W: Write>(writer: &mut W, text: &str) -> io::Result<()> {
    writer.write_all(osc52_sequence(text).as_bytes())?;
    writer.flush()
}
