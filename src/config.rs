//! Compile-time capacities.
//!
//! Every bound in the crate lives here. Storage is sized by these constants
//! at build time; hitting one at runtime is a refused operation, never a
//! reallocation.

/// Maximum number of children per tree node.
pub const MAX_CHILDREN: usize = 8;

/// Maximum byte length of a node's text.
pub const MAX_TEXT_LEN: usize = 16;

/// Maximum byte length of a node's description.
pub const MAX_DESC_LEN: usize = 48;

/// Maximum number of nodes in the command tree, root included.
pub const MAX_TOKEN_COUNT: usize = 32;

/// Maximum number of words per line, path tokens and arguments included.
pub const MAX_CMD_TOKENS: usize = 8;

/// Line buffer size. One byte is held back, so the longest editable line
/// is `LINE_SIZE - 1` bytes.
pub const LINE_SIZE: usize = 64;

/// Number of slots in the history ring.
pub const HISTORY_COUNT: usize = 8;

/// Prompt printed at the start of every redraw.
pub const PROMPT: &str = "> ";

/// Name of the command tree's root node.
pub const ROOT_TOKEN_NAME: &str = ".";
