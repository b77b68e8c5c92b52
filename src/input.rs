use std::io::{BufRead, Write};

use crate::error::ToolError;

pub const PROMPT: &str = "Enter password to hash: ";

/// Returns `arg` when given, otherwise writes [`PROMPT`] to `prompt` and
/// reads a single line from `input`.
///
/// The line terminator is stripped; everything else, including an empty
/// line, is kept as the password.
pub fn read_password<R, W>(
    arg: Option<String>,
    mut input: R,
    mut prompt: W,
) -> Result<String, ToolError>
where
    R: BufRead,
    W: Write,
{
    if let Some(password) = arg {
        tracing::debug!("password taken from command line");
        return Ok(password);
    }

    prompt
        .write_all(PROMPT.as_bytes())
        .and_then(|()| prompt.flush())
        .map_err(ToolError::Output)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(ToolError::InputRead)?;
    if read == 0 {
        return Err(ToolError::InputClosed);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}
