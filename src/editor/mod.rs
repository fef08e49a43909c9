//! Line editor: buffer, cursor, history, escape decoding.

pub mod editor;
pub mod escape;
pub mod history;
pub mod line_buffer;

pub use editor::{EditorHooks, LineEditor};
pub use escape::{Arrow, Decoded, EscapeDecoder};
pub use history::{Direction, History};
pub use line_buffer::LineBuffer;
