//! Line prompts read before the menus take over the terminal.

use std::io::{BufRead, Write};

use saaty_types::SaatyError;

/// Writes `prompt`, then reads one line with its line ending and outer
/// whitespace removed. End of input is an error: the run cannot continue.
pub fn read_line<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<String, SaatyError>
where
    R: BufRead,
    W: Write,
{
    output
        .write_all(prompt.as_bytes())
        .and_then(|()| output.flush())
        .map_err(|err| SaatyError::input_unavailable(err.to_string()))?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|err| SaatyError::input_unavailable(err.to_string()))?;
    if read == 0 {
        return Err(SaatyError::input_unavailable("standard input closed"));
    }
    Ok(line.trim().to_owned())
}
