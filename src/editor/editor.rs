//! Line editor state machine.
//!
//! Feeds on raw bytes one at a time, owns the cursor and history, redraws
//! the terminal line after every byte, and raises the two host hooks: a
//! committed line in, an optional completion delta out.

use core::fmt::Write;

use crate::config::{LINE_SIZE, PROMPT};
use crate::diag::Channel;
use crate::error::ShellError;
use crate::strutil;

use super::escape::{Arrow, Decoded, EscapeDecoder};
use super::history::{Direction, History};

/// Host side of the editor.
pub trait EditorHooks {
    /// Called once per committed line with the raw, untokenized text.
    /// The returned status is handed back to the caller of
    /// [`LineEditor::process_byte`] untouched.
    fn line_submitted(&mut self, line: &str, out: &mut dyn Write) -> i32;

    /// Called on the completion trigger. Writes only the bytes to append
    /// into `delta` and returns how many were written; 0 means nothing
    /// applies, including when the delta would not fit whole.
    fn completion_requested(&mut self, line: &str, delta: &mut [u8], out: &mut dyn Write)
        -> usize;
}

const KEY_BACKSPACE_SERIAL: u8 = 0x08;
const KEY_BACKSPACE_TTY: u8 = 0x7F;
const KEY_TAB: u8 = b'\t';
const KEY_CR: u8 = b'\r';
const KEY_LF: u8 = b'\n';

/// Byte-at-a-time line editor with history and completion.
pub struct LineEditor {
    history: History,
    cursor: usize,
    decoder: EscapeDecoder,
    /// Line-ending byte that just committed; its counterpart is absorbed.
    eol_seen: Option<u8>,
}

impl LineEditor {
    /// Create an editor with an empty line and empty history.
    pub const fn new() -> Self {
        Self {
            history: History::new(),
            cursor: 0,
            decoder: EscapeDecoder::new(),
            eol_seen: None,
        }
    }

    /// Current line content.
    pub fn line(&self) -> &str {
        self.history.active().as_str()
    }

    /// Cursor offset into the line, `0..=line().len()`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Process one input byte.
    ///
    /// Returns the submitted line's status when this byte completed a
    /// line. The visible line is redrawn on every call.
    pub fn process_byte(
        &mut self,
        byte: u8,
        hooks: &mut dyn EditorHooks,
        out: &mut dyn Write,
    ) -> Option<i32> {
        let status = match self.decoder.feed(byte) {
            Decoded::Consumed => None,
            Decoded::Arrow(arrow) => {
                self.eol_seen = None;
                self.handle_arrow(arrow);
                None
            }
            Decoded::Unsupported(code) => {
                crate::diag!(
                    Channel::Editor,
                    "{} 0x{:02X}",
                    ShellError::UnsupportedEscape,
                    code
                );
                None
            }
            Decoded::Literal(b) => self.handle_literal(b, hooks, out),
        };
        self.redraw(out);
        status
    }

    /// Redraw prompt, line and cursor. Also used once at startup.
    pub fn redraw(&self, out: &mut dyn Write) {
        // Column 0, kill line, prompt + line, column 0, cursor column.
        let _ = write!(
            out,
            "\x1b[1000D\x1b[K{}{}\x1b[1000D\x1b[{}C",
            PROMPT,
            self.line(),
            PROMPT.len() + self.cursor
        );
    }

    fn handle_literal(
        &mut self,
        byte: u8,
        hooks: &mut dyn EditorHooks,
        out: &mut dyn Write,
    ) -> Option<i32> {
        if byte == KEY_CR || byte == KEY_LF {
            if self.eol_seen.take().map_or(false, |seen| seen != byte) {
                // Other half of a CRLF / LFCR pair, already committed.
                return None;
            }
            let status = self.commit(hooks, out);
            self.eol_seen = Some(byte);
            return Some(status);
        }
        self.eol_seen = None;

        match byte {
            KEY_BACKSPACE_SERIAL | KEY_BACKSPACE_TTY => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.history.active_mut().remove(self.cursor);
                }
            }
            KEY_TAB => self.request_completion(hooks, out),
            0x20..=0x7E => {
                let at = self.cursor;
                match self.history.active_mut().insert(at, byte) {
                    Ok(()) => self.cursor += 1,
                    Err(err) => {
                        crate::diag!(Channel::Editor, "{} ({} bytes)", err, LINE_SIZE - 1)
                    }
                }
            }
            _ => {} // unhandled control byte
        }
        None
    }

    fn commit(&mut self, hooks: &mut dyn EditorHooks, out: &mut dyn Write) -> i32 {
        // Keep the echoed line where it is; command output starts below.
        let _ = write!(out, "\r\n");

        let mut snap = [0u8; LINE_SIZE];
        let len = strutil::copy_bytes(&mut snap, self.history.active().as_bytes());
        let line = core::str::from_utf8(&snap[..len]).unwrap_or("");

        let status = hooks.line_submitted(line, out);
        self.history.commit();
        self.cursor = 0;
        status
    }

    fn request_completion(&mut self, hooks: &mut dyn EditorHooks, out: &mut dyn Write) {
        let mut snap = [0u8; LINE_SIZE];
        let len = strutil::copy_bytes(&mut snap, self.history.active().as_bytes());
        let line = core::str::from_utf8(&snap[..len]).unwrap_or("");

        let mut delta = [0u8; LINE_SIZE];
        let written = hooks.completion_requested(line, &mut delta, out);

        let active = self.history.active_mut();
        for &b in &delta[..written] {
            let end = active.len();
            if active.insert(end, b).is_err() {
                break; // remaining capacity exhausted
            }
        }
        self.cursor = self.history.active().len();
    }

    fn handle_arrow(&mut self, arrow: Arrow) {
        match arrow {
            Arrow::Up => {
                if self.history.navigate(Direction::Previous) {
                    self.cursor = self.history.active().len();
                }
            }
            Arrow::Down => {
                if self.history.navigate(Direction::Next) {
                    self.cursor = self.history.active().len();
                }
            }
            Arrow::Right => {
                if self.cursor < self.history.active().len() {
                    self.cursor += 1;
                }
            }
            Arrow::Left => {
                self.cursor = self.cursor.saturating_sub(1);
            }
        }
    }
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new()
    }
}
