//! Line tokenizer.
//!
//! Splits on spaces, collapsing runs; trailing spaces produce no empty
//! token. A line holding more words than the cap is refused whole.

use heapless::Vec;

use crate::config::MAX_CMD_TOKENS;
use crate::diag::Channel;
use crate::error::ShellError;

/// Words of one input line, borrowed from it.
pub type TokenList<'a> = Vec<&'a str, MAX_CMD_TOKENS>;

/// Split a line into words.
pub fn tokenize(line: &str) -> Result<TokenList<'_>, ShellError> {
    let mut tokens = TokenList::new();
    for word in line.split(' ').filter(|w| !w.is_empty()) {
        if tokens.push(word).is_err() {
            crate::diag!(
                Channel::Tokenizer,
                "word limit reached ({} per line)",
                MAX_CMD_TOKENS
            );
            return Err(ShellError::TokenLimit);
        }
    }
    Ok(tokens)
}
