//! Line input from stdin for the login prompt and confirmations.

use std::io::{self, BufRead, Write};

/// Print `prompt` on stderr and read one line. `None` on end of input.
///
/// Only the line terminator is removed: credentials are compared verbatim,
/// so surrounding spaces are part of the answer.
pub fn read_line(prompt: &str) -> io::Result<Option<String>> {
    let stdin = io::stdin();
    read_line_from(&mut stdin.lock(), prompt)
}

pub fn read_line_from<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<Option<String>> {
    eprint!("{prompt}");
    io::stderr().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}
