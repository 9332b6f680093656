//! Operator confirmation
//!
//! The overwrite guard needs a yes/no answer from the operator before it
//! clobbers an existing file. The question travels through the
//! [`Confirmation`] trait so the interactive prompt stays at the edge of
//! the program: production code talks to the terminal via
//! [`StdinConfirmation`], tests supply canned answers.

use std::io::{self, BufRead, Write};

/// A yes/no question put to the operator
pub trait Confirmation {
    /// Present `prompt` and return the operator's answer.
    ///
    /// # Errors
    ///
    /// Returns an error when the answer cannot be read.
    fn confirm(&mut self, prompt: &str) -> io::Result<bool>;
}

/// Interactive confirmation over stdin/stdout
///
/// Prints the prompt without a trailing newline, flushes, and reads one
/// line. Only `y` or `yes` (any letter case) counts as an affirmative;
/// everything else, including an empty line or a closed stdin, declines.
pub struct StdinConfirmation;

impl Confirmation for StdinConfirmation {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}

/// Decide whether a raw answer line means "yes".
///
/// The line terminator is stripped; nothing else is trimmed, so `" y"`
/// declines just like `"n"` does.
///
/// # Example
///
/// ```
/// use fq2fa::confirm::is_affirmative;
///
/// assert!(is_affirmative("y\n"));
/// assert!(is_affirmative("YES"));
/// assert!(!is_affirmative("yep"));
/// assert!(!is_affirmative(""));
/// ```
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim_end_matches(['\r', '\n']);
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
