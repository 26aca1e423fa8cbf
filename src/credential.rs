//! Token acquisition, polymorphic over {argument, prompt}.
//!
//! A single abstract "obtain credential" operation: when the CLI carried a
//! token argument the value is used verbatim, otherwise the user is prompted
//! on standard input. Selection happens once, in [`source_for`].

use std::io::{BufRead, Write};

use crate::error::CredentialError;

/// Text shown when prompting for the token interactively.
pub const TOKEN_PROMPT: &str = "Paste your Digital Ocean API token: ";

/// A source the API token can be obtained from.
pub trait TokenSource {
    /// Obtain the token value.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot produce a value (e.g. stdin is
    /// closed while prompting).
    fn obtain(&self) -> Result<String, CredentialError>;
}

/// Token supplied as the single positional command-line argument.
#[derive(Debug)]
pub struct ArgSource(pub String);

impl TokenSource for ArgSource {
    fn obtain(&self) -> Result<String, CredentialError> {
        Ok(self.0.clone())
    }
}

/// Token read interactively from standard input.
///
/// The entered value is preserved exactly, including leading and trailing
/// whitespace; only the line terminator is removed.
#[derive(Debug, Default)]
pub struct PromptSource;

impl TokenSource for PromptSource {
    fn obtain(&self) -> Result<String, CredentialError> {
        print!("{TOKEN_PROMPT}");
        std::io::stdout().flush().map_err(CredentialError::Prompt)?;
        let stdin = std::io::stdin();
        read_token_line(&mut stdin.lock())
    }
}

/// Read one line from `input` and strip the line terminator.
fn read_token_line(input: &mut dyn BufRead) -> Result<String, CredentialError> {
    let mut line = String::new();
    input.read_line(&mut line).map_err(CredentialError::Prompt)?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Select the token source for this run: the argument when present,
/// the interactive prompt otherwise.
#[must_use]
pub fn source_for(token_arg: Option<String>) -> Box<dyn TokenSource> {
    match token_arg {
        Some(token) => Box::new(ArgSource(token)),
        None => Box::new(PromptSource),
    }
}
