use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Error};

/// The question asked on the console when the input folder is not given on the command line.
pub const PROMPT: &str = "Pasta: ";

/// Ask for the input folder writing the prompt on `output`, then read one line from `input`.
///
/// Leading and trailing whitespace (including the newline) is removed from the answer.
pub fn prompt_input_dir<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<PathBuf, Error> {
    write!(output, "{PROMPT}").context("Failed to write the prompt")?;
    let _ = output.flush();

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read stdin")?;
    if read == 0 {
        bail!("No folder provided");
    }
    let folder = line.trim();
    debug!("Input folder from the console: {:?}", folder);
    Ok(PathBuf::from(folder))
}
