//! Yes/no confirmation.

use std::io::{self, BufRead, Write};

/// Asks the user a yes/no question.
pub trait Confirm {
    /// Returns true if the user agreed.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read.
    fn confirm(&self, message: &str) -> io::Result<bool>;
}

/// Returns true for an empty answer or one starting with `y`/`Y`.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    answer
        .trim()
        .chars()
        .next()
        .is_none_or(|c| c.eq_ignore_ascii_case(&'y'))
}

/// Prompts on stdout and reads one line from stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, message: &str) -> io::Result<bool> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{message} (Y/n) ")?;
        stdout.flush()?;
        drop(stdout);

        read_answer(&mut io::stdin().lock())
    }
}

/// Reads one answer line; end of input counts as a refusal.
fn read_answer(input: &mut impl BufRead) -> io::Result<bool> {
    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(false);
    }
    Ok(is_affirmative(&answer))
}
