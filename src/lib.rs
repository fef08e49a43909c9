//! # uartshell
//!
//! Interactive command shell for devices driven over a raw byte stream
//! (UART, telnet, pty).
//!
//! ## Architecture
//!
//! Two subsystems, joined only by a narrow hook contract:
//! - [`CommandTree`] holds the grammar in one fixed pool; nodes reference
//!   each other by [`NodeId`] index, never by pointer. Resolution, dispatch
//!   and completion walk the pool read-only.
//! - [`LineEditor`] owns the editable line, cursor, history ring and escape
//!   decoder. It talks to the host through [`EditorHooks`]: a committed
//!   line in, an optional completion delta out.
//!
//! [`Shell`] wires the two together for the common case.
//!
//! Zero heap allocation - all buffers are sized at compile time.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod diag;
pub mod editor;
pub mod error;
pub mod shell;
pub mod strutil;
pub mod tree;

pub use editor::{EditorHooks, LineEditor};
pub use error::ShellError;
pub use shell::Shell;
pub use tree::{
    complete, execute, print_tree, print_usage, resolve, tokenize, CommandFn, CommandTree, NodeId,
    Resolution, Suggestion,
};

/// Crate name, as reported by the banner.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Crate version, as reported by the banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
