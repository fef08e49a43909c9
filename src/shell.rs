//! Shell façade: a command tree wired to the line editor.

use core::fmt::Write;

use crate::diag::Channel;
use crate::editor::{EditorHooks, LineEditor};
use crate::strutil;
use crate::tree::{complete, execute, tokenize, CommandTree};
use crate::{NAME, VERSION};

/// Interactive shell over one byte stream and one command tree.
///
/// The tree must be fully registered before the first byte is fed; the
/// shell only ever reads it.
pub struct Shell<'t> {
    tree: &'t CommandTree,
    editor: LineEditor,
}

impl<'t> Shell<'t> {
    /// Bind a registered tree to a fresh editor.
    pub fn new(tree: &'t CommandTree) -> Self {
        Self {
            tree,
            editor: LineEditor::new(),
        }
    }

    /// Print the banner and the first prompt.
    pub fn start(&self, out: &mut dyn Write) {
        let _ = write!(out, "\r\n{} - v{}\r\n", NAME, VERSION);
        self.editor.redraw(out);
    }

    /// Feed one byte from the host stream.
    ///
    /// Returns the dispatched command's status when this byte completed a
    /// line: the callback's return value, 0 for an empty line, -1 after a
    /// reported failure.
    pub fn process_byte(&mut self, byte: u8, out: &mut dyn Write) -> Option<i32> {
        let mut hooks = Dispatch { tree: self.tree };
        self.editor.process_byte(byte, &mut hooks, out)
    }

    /// The underlying editor, for hosts that need cursor or line state.
    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }
}

/// Editor hooks backed by the command tree.
struct Dispatch<'t> {
    tree: &'t CommandTree,
}

impl EditorHooks for Dispatch<'_> {
    fn line_submitted(&mut self, line: &str, out: &mut dyn Write) -> i32 {
        let tokens = match tokenize(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                crate::diag!(Channel::Error, "cannot parse line: {}", err);
                return -1;
            }
        };
        if tokens.is_empty() {
            return 0;
        }
        match execute(self.tree, &tokens, out) {
            Ok(status) => status,
            Err(_) => -1, // usage already printed
        }
    }

    fn completion_requested(
        &mut self,
        line: &str,
        delta: &mut [u8],
        out: &mut dyn Write,
    ) -> usize {
        let tokens = match tokenize(line) {
            Ok(tokens) => tokens,
            Err(_) => return 0,
        };
        let suggestion = match complete(self.tree, &tokens, out) {
            Some(s) => s,
            None => return 0,
        };

        let rest = &suggestion.text.as_bytes()[suggestion.prefix_len..];
        // A fresh word after a completed path needs its own separator.
        let lead = suggestion.prefix_len == 0 && !line.is_empty() && !line.ends_with(' ');
        let needed = rest.len() + usize::from(lead);
        if needed > delta.len() {
            return 0; // never splice a truncated completion
        }

        let mut written = 0;
        if lead {
            delta[0] = b' ';
            written = 1;
        }
        written += strutil::copy_bytes(&mut delta[written..], rest);
        if written < delta.len() {
            // Trailing separator so the next word can start right away.
            delta[written] = b' ';
            written += 1;
        }
        written
    }
}
