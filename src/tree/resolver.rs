//! Path resolution and dispatch.

use core::fmt::Write;

use crate::diag::Channel;
use crate::error::ShellError;

use super::node::NodeId;
use super::tree::CommandTree;

/// Width of the name column in usage and tree output.
const NAME_COL: usize = 14;

/// Outcome of walking a token list against the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Every scanned token matched; `node` is the last match (the root
    /// when `depth` is 0). Tokens past `depth` are arguments.
    Matched {
        /// Deepest matched node.
        node: NodeId,
        /// Count of tokens matched.
        depth: usize,
    },
    /// Token `matched` is the first invalid one.
    Failed {
        /// Deepest node reached before the mismatch.
        node: NodeId,
        /// Count of valid tokens, which is also the failing index.
        matched: usize,
    },
}

/// Walk `tokens` from the root, one child level per token.
///
/// Children are scanned linearly for an exact text match. Once a matched
/// node declares arguments, scanning stops - the remaining tokens belong
/// to the command, not the path.
pub fn resolve(tree: &CommandTree, tokens: &[&str]) -> Resolution {
    let mut cur = tree.root();
    let mut depth = 0usize;

    for &word in tokens {
        let next = tree
            .node(cur)
            .children()
            .iter()
            .copied()
            .find(|&c| tree.node(c).text() == word);

        match next {
            Some(child) => {
                cur = child;
                depth += 1;
                crate::diag!(Channel::Resolver, "matched \"{}\" at depth {}", word, depth);
                if tree.node(cur).total_args() > 0 {
                    break;
                }
            }
            None => {
                crate::diag!(Channel::Resolver, "no match for \"{}\" at index {}", word, depth);
                return Resolution::Failed { node: cur, matched: depth };
            }
        }
    }

    Resolution::Matched { node: cur, depth }
}

/// Resolve and run one tokenized command.
///
/// Every failure before the callback prints usage for the deepest node
/// reached (except a missing callback, which is diagnostic-only) and
/// leaves the tree untouched. On success the callback's status is
/// returned verbatim.
pub fn execute(
    tree: &CommandTree,
    tokens: &[&str],
    out: &mut dyn Write,
) -> Result<i32, ShellError> {
    let (node, depth) = match resolve(tree, tokens) {
        Resolution::Matched { node, depth } if depth > 0 => (node, depth),
        Resolution::Matched { node, .. } | Resolution::Failed { node, .. } => {
            print_usage(tree, node, out);
            return Err(ShellError::UnknownCommand);
        }
    };

    let n = tree.node(node);
    if !n.is_leaf() {
        print_usage(tree, node, out);
        return Err(ShellError::IncompleteCommand);
    }

    let argc = tokens.len() - depth;
    if argc < n.mandatory_args() as usize {
        crate::diag!(
            Channel::Error,
            "\"{}\" takes at least {} argument(s)",
            n.text(),
            n.mandatory_args()
        );
        print_usage(tree, node, out);
        return Err(ShellError::TooFewArguments);
    }
    if argc > n.total_args() {
        crate::diag!(
            Channel::Error,
            "\"{}\" takes at most {} argument(s)",
            n.text(),
            n.total_args()
        );
        print_usage(tree, node, out);
        return Err(ShellError::TooManyArguments);
    }

    let callback = match n.callback() {
        Some(cb) => cb,
        None => {
            crate::diag!(Channel::Error, "no callback defined for \"{}\"", n.text());
            return Err(ShellError::NoCallback);
        }
    };

    Ok(callback(&tokens[depth..], out))
}

/// Print what can be typed at `node`.
///
/// A leaf shows its own name and description; a branch shows every
/// immediate child.
pub fn print_usage(tree: &CommandTree, node: NodeId, out: &mut dyn Write) {
    let n = match tree.get(node) {
        Some(n) => n,
        None => return,
    };

    if node == tree.root() {
        let _ = writeln!(out, "Usage:");
    } else {
        let _ = writeln!(out, "Usage for \"{}\":", n.text());
    }

    if n.is_leaf() {
        print_entry(tree, node, out);
    } else {
        for &child in n.children() {
            print_entry(tree, child, out);
        }
    }
}

/// One `name description` line, name column padded.
pub(crate) fn print_entry(tree: &CommandTree, id: NodeId, out: &mut dyn Write) {
    let n = tree.node(id);
    let _ = writeln!(out, "  {:<width$} {}", n.text(), n.description(), width = NAME_COL);
}

/// Render the whole grammar as an indented tree, one node per line.
pub fn print_tree(tree: &CommandTree, out: &mut dyn Write) {
    if tree.get(tree.root()).is_some() {
        print_subtree(tree, tree.root(), 0, out);
    }
}

fn print_subtree(tree: &CommandTree, id: NodeId, indent: usize, out: &mut dyn Write) {
    let n = tree.node(id);

    for _ in 0..indent {
        let _ = write!(out, " | ");
    }
    let width = NAME_COL.saturating_sub(3 * indent);
    let _ = writeln!(out, "{:<width$} {}", n.text(), n.description(), width = width);

    for &child in n.children() {
        print_subtree(tree, child, indent + 1, out);
    }
}
