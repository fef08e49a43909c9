//! Node pool and registration API.
//!
//! Nodes are allocated once from a fixed pool during the registration
//! phase and reference each other by index. Every call fails closed: an
//! error leaves the tree exactly as it was.

use heapless::Vec;

use crate::config::{MAX_CHILDREN, MAX_CMD_TOKENS, MAX_TOKEN_COUNT, ROOT_TOKEN_NAME};
use crate::diag::Channel;
use crate::error::ShellError;

use super::node::{CommandFn, NodeId, TokenNode};

/// Fixed-capacity command grammar with one distinguished root.
///
/// Built by the host at startup, then shared read-only with the resolver
/// and the completion engine. Construct several independent trees freely;
/// nothing here is global.
pub struct CommandTree {
    nodes: Vec<TokenNode, MAX_TOKEN_COUNT>,
}

impl CommandTree {
    /// Create a tree holding only the root node.
    pub fn new() -> Self {
        let mut nodes: Vec<TokenNode, MAX_TOKEN_COUNT> = Vec::new();
        let mut root = TokenNode::new(ROOT_TOKEN_NAME, "");
        // The root is never a child of anything.
        root.attached = true;
        let _ = nodes.push(root);
        Self { nodes }
    }

    /// The fixed root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Look up a node, `None` for a foreign or stale id.
    pub fn get(&self, id: NodeId) -> Option<&TokenNode> {
        self.nodes.get(id.0 as usize)
    }

    /// Number of allocated nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn node(&self, id: NodeId) -> &TokenNode {
        &self.nodes[id.0 as usize]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut TokenNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node from the pool.
    ///
    /// The node starts as a detached leaf with zero arity and no callback.
    /// Over-long `text` or `desc` is clamped on a character boundary.
    pub fn add_token(&mut self, text: &str, desc: &str) -> Result<NodeId, ShellError> {
        if text.is_empty() {
            return Err(ShellError::InvalidArgument);
        }
        if self.nodes.is_full() {
            crate::diag!(
                Channel::Error,
                "cannot add \"{}\": pool holds {} nodes",
                text,
                MAX_TOKEN_COUNT
            );
            return Err(ShellError::CapacityExceeded);
        }
        let id = NodeId(self.nodes.len() as u16);
        let _ = self.nodes.push(TokenNode::new(text, desc));
        Ok(id)
    }

    /// Attach `child` under `parent`, turning the parent into a branch.
    ///
    /// Refused when the parent already carries an argument contract or a
    /// callback (`InvalidState`), when its child slots are full
    /// (`CapacityExceeded`), or when the child is the root, already
    /// attached, or duplicates a sibling's text (`InvalidArgument`).
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), ShellError> {
        let p = self.get(parent).ok_or(ShellError::InvalidArgument)?;
        let c = self.get(child).ok_or(ShellError::InvalidArgument)?;

        if parent == child || child == self.root() || c.attached {
            return Err(ShellError::InvalidArgument);
        }
        if p.total_args() > 0 || p.callback.is_some() {
            crate::diag!(
                Channel::Error,
                "\"{}\" is a command leaf, it cannot take children",
                p.text()
            );
            return Err(ShellError::InvalidState);
        }
        if p.children.is_full() {
            crate::diag!(
                Channel::Error,
                "\"{}\" already has {} children",
                p.text(),
                MAX_CHILDREN
            );
            return Err(ShellError::CapacityExceeded);
        }
        if p.children.iter().any(|&s| self.node(s).text() == c.text()) {
            return Err(ShellError::InvalidArgument);
        }

        let _ = self.node_mut(parent).children.push(child);
        self.node_mut(child).attached = true;
        Ok(())
    }

    /// Attach the action to run when the leaf is dispatched.
    pub fn set_callback(&mut self, id: NodeId, callback: CommandFn) -> Result<(), ShellError> {
        let n = self.get(id).ok_or(ShellError::InvalidArgument)?;
        if !n.is_leaf() {
            crate::diag!(
                Channel::Error,
                "\"{}\" is a branch, it cannot take a callback",
                n.text()
            );
            return Err(ShellError::InvalidState);
        }
        self.node_mut(id).callback = Some(callback);
        Ok(())
    }

    /// Declare the leaf's argument contract.
    ///
    /// A total that can never fit on one line next to at least the leaf's
    /// own word is refused with `InvalidArgument`.
    pub fn set_arity(&mut self, id: NodeId, mandatory: u8, optional: u8) -> Result<(), ShellError> {
        let n = self.get(id).ok_or(ShellError::InvalidArgument)?;
        if !n.is_leaf() {
            crate::diag!(
                Channel::Error,
                "\"{}\" is a branch, it cannot take arguments",
                n.text()
            );
            return Err(ShellError::InvalidState);
        }
        if mandatory as usize + optional as usize > MAX_CMD_TOKENS - 1 {
            return Err(ShellError::InvalidArgument);
        }
        let n = self.node_mut(id);
        n.mandatory_args = mandatory;
        n.optional_args = optional;
        Ok(())
    }
}

impl Default for CommandTree {
    fn default() -> Self {
        Self::new()
    }
}
