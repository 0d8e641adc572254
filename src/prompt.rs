use std::io::{BufRead, Write};

use anyhow::Result;

/// Print a label line and a `> ` marker, then read one answer with the
/// line terminator stripped. EOF reads as an empty answer.
pub fn read_raw<R, W>(input: &mut R, out: &mut W, label: &str) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "{label}")?;
    write!(out, "> ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// Same prompt shape, with surrounding whitespace trimmed off the answer.
pub fn read_trimmed<R, W>(input: &mut R, out: &mut W, label: &str) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    let line = read_raw(input, out, label)?;
    Ok(line.trim().to_string())
}
