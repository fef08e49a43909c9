//! Grammar node storage

use heapless::{String, Vec};

use crate::config::{MAX_CHILDREN, MAX_DESC_LEN, MAX_TEXT_LEN};
use crate::strutil::bounded_string;

/// Index of a node inside its tree's pool.
///
/// Stable for the tree's lifetime; meaningless across trees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(pub(crate) u16);

/// Command callback.
///
/// `args` holds the words beyond the matched path. The returned status is
/// passed through to the host untouched - the dispatcher does not
/// interpret it.
pub type CommandFn = fn(args: &[&str], out: &mut dyn core::fmt::Write) -> i32;

/// One word of the command grammar.
///
/// A node is a leaf while it has no children; only leaves may carry an
/// argument contract and a callback. [`CommandTree`](super::CommandTree)
/// enforces the invariant on every mutation.
pub struct TokenNode {
    pub(crate) text: String<MAX_TEXT_LEN>,
    pub(crate) desc: String<MAX_DESC_LEN>,
    pub(crate) children: Vec<NodeId, MAX_CHILDREN>,
    pub(crate) mandatory_args: u8,
    pub(crate) optional_args: u8,
    pub(crate) callback: Option<CommandFn>,
    pub(crate) attached: bool,
}

impl TokenNode {
    pub(crate) fn new(text: &str, desc: &str) -> Self {
        Self {
            text: bounded_string(text),
            desc: bounded_string(desc),
            children: Vec::new(),
            mandatory_args: 0,
            optional_args: 0,
            callback: None,
            attached: false,
        }
    }

    /// The word this node matches.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Help string shown in usage output.
    pub fn description(&self) -> &str {
        self.desc.as_str()
    }

    /// A leaf is a node with no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Child references, in registration order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Number of arguments the leaf requires.
    pub fn mandatory_args(&self) -> u8 {
        self.mandatory_args
    }

    /// Number of extra arguments the leaf accepts.
    pub fn optional_args(&self) -> u8 {
        self.optional_args
    }

    /// Largest argument count the leaf accepts.
    pub fn total_args(&self) -> usize {
        self.mandatory_args as usize + self.optional_args as usize
    }

    /// Attached callback, if any.
    pub fn callback(&self) -> Option<CommandFn> {
        self.callback
    }
}
