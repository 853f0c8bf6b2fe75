use std::io::{self, BufRead, Write};

const PROMPT_SUFFIX: &str = ": ";

/// Show a prompt and flush it so it is visible before the read blocks.
pub fn write_prompt<W: Write>(output: &mut W, prompt: &str) -> io::Result<()> {
    write!(output, "{}{}", prompt, PROMPT_SUFFIX)?;
    output.flush()
}

/// Read one response line with its trailing line feed removed.
///
/// Hitting end of input is not an error: whatever was read before it,
/// possibly nothing, is the response.
pub fn read_response<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    if line.ends_with('\n') {
        line.pop();
    }
    Ok(line)
}
