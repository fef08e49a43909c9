//! Static command tree: registration, resolution, dispatch, completion.
//!
//! All nodes live in one fixed pool owned by [`CommandTree`]; everything
//! else in this module walks the pool read-only.

pub mod completion;
pub mod node;
pub mod parser;
pub mod resolver;
pub mod tree;

pub use completion::{complete, Suggestion};
pub use node::{CommandFn, NodeId, TokenNode};
pub use parser::{tokenize, TokenList};
pub use resolver::{execute, print_tree, print_usage, resolve, Resolution};
pub use tree::CommandTree;
