//! Interactive gate in front of deletion

use std::io::{self, BufRead, Write};

use crate::error::Result;

/// Interpretation of one prompt answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Unrecognized,
}

/// An answer starting with y/Y confirms, one starting with n/N or an empty
/// line aborts, anything else re-prompts.
pub fn parse_answer(input: &str) -> Answer {
    let trimmed = input.trim();
    match trimmed.chars().next() {
        None => Answer::No,
        Some('y') | Some('Y') => Answer::Yes,
        Some('n') | Some('N') => Answer::No,
        Some(_) => Answer::Unrecognized,
    }
}

/// Prompt on stdin until the answer is recognized. Closed stdin counts as
/// an abort, so a non-interactive run without `--yes` never deletes.
pub fn gate_deletion(total_to_delete: usize) -> Result<bool> {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!(
            "Would you like to delete all {} images listed above? [y/N]: ",
            total_to_delete
        );
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(false);
        }

        match parse_answer(&line) {
            Answer::Yes => return Ok(true),
            Answer::No => return Ok(false),
            Answer::Unrecognized => continue,
        }
    }
}
