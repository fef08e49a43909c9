//! Prefix autocompletion against the command tree.

use core::fmt::Write;

use crate::diag::Channel;

use super::resolver::{print_entry, print_usage, resolve, Resolution};
use super::tree::CommandTree;

/// A unique completion for the line's last word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion<'t> {
    /// Full text of the only matching child.
    pub text: &'t str,
    /// Bytes of the last word already typed; 0 when completing into a
    /// resolved node's children.
    pub prefix_len: usize,
}

/// Complete the last word of a tokenized line.
///
/// A fully resolved leaf prints its own usage and completes nothing -
/// arguments are never autocompleted. Otherwise the resolved node's
/// children are prefix-matched: a unique match is returned for the caller
/// to splice, an ambiguous one prints the candidate set, no match stays
/// silent.
pub fn complete<'t>(
    tree: &'t CommandTree,
    tokens: &[&str],
    out: &mut dyn Write,
) -> Option<Suggestion<'t>> {
    let (node, prefix) = match resolve(tree, tokens) {
        Resolution::Matched { node, depth } if depth == tokens.len() => {
            if tree.node(node).is_leaf() {
                print_usage(tree, node, out);
                return None;
            }
            // The last word is itself a complete path segment; offer the
            // resolved node's children.
            (node, "")
        }
        Resolution::Matched { node, .. } | Resolution::Failed { node, .. } => {
            (node, *tokens.last().unwrap_or(&""))
        }
    };

    let children = tree.node(node).children();
    let mut matches = children
        .iter()
        .copied()
        .filter(|&c| tree.node(c).text().starts_with(prefix));

    let first = matches.next()?;
    match matches.next() {
        None => {
            let text = tree.node(first).text();
            crate::diag!(Channel::Resolver, "unique completion \"{}\"", text);
            Some(Suggestion {
                text,
                prefix_len: prefix.len(),
            })
        }
        Some(second) => {
            print_entry(tree, first, out);
            print_entry(tree, second, out);
            for &c in children {
                if c != first && c != second && tree.node(c).text().starts_with(prefix) {
                    print_entry(tree, c, out);
                }
            }
            None
        }
    }
}
