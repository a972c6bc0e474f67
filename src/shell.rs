use std::io::{BufRead, Write};

use crate::{OutputFormat, Result, TermRequest, render, respond};

pub const PROMPT: &str = "Input Term: ";

/// Prompt for terms until `input` runs dry, answering each non-empty one.
///
/// Returns how many terms were answered.
pub fn run_interactive<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    format: OutputFormat,
) -> Result<usize> {
    let mut answered = 0;
    let mut line = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let request = TermRequest::new(line.trim_end_matches(['\n', '\r']));
        match respond(&request) {
            Some(response) => {
                tracing::info!(term = %request.term, "answering term");
                output.write_all(render(&response, format)?.as_bytes())?;
                answered += 1;
            }
            None => tracing::debug!("skipping empty submission"),
        }
    }

    Ok(answered)
}
