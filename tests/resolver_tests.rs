//! Resolution and dispatch tests

use core::fmt::Write;

use uartshell::{execute, print_tree, resolve, CommandTree, NodeId, Resolution, ShellError};

fn cb_echo(args: &[&str], out: &mut dyn Write) -> i32 {
    let _ = write!(out, "cb:{}", args.join(","));
    args.len() as i32
}

/// Tree with the path a/b/c, c a leaf taking one mandatory argument.
fn abc_tree() -> (CommandTree, NodeId, NodeId, NodeId) {
    let mut tree = CommandTree::new();
    let a = tree.add_token("a", "level one").unwrap();
    let b = tree.add_token("b", "level two").unwrap();
    let c = tree.add_token("c", "level three").unwrap();
    tree.add_child(tree.root(), a).unwrap();
    tree.add_child(a, b).unwrap();
    tree.add_child(b, c).unwrap();
    tree.set_arity(c, 1, 0).unwrap();
    tree.set_callback(c, cb_echo).unwrap();
    (tree, a, b, c)
}

#[test]
fn test_resolve_full_path() {
    let (tree, _, _, c) = abc_tree();

    let res = resolve(&tree, &["a", "b", "c", "x"]);
    assert_eq!(res, Resolution::Matched { node: c, depth: 3 });
}

#[test]
fn test_resolve_reports_first_invalid_index() {
    let (tree, a, _, _) = abc_tree();

    let res = resolve(&tree, &["a", "z"]);
    assert_eq!(res, Resolution::Failed { node: a, matched: 1 });
}

#[test]
fn test_resolve_empty_tokens() {
    let (tree, _, _, _) = abc_tree();

    let res = resolve(&tree, &[]);
    assert_eq!(
        res,
        Resolution::Matched {
            node: tree.root(),
            depth: 0
        }
    );
}

#[test]
fn test_execute_passes_remaining_tokens_as_args() {
    let (tree, _, _, _) = abc_tree();
    let mut out = String::new();

    let status = execute(&tree, &["a", "b", "c", "x"], &mut out).unwrap();

    assert_eq!(status, 1); // cb_echo returns argc
    assert_eq!(out, "cb:x");
}

#[test]
fn test_execute_unknown_prints_root_usage() {
    let (tree, _, _, _) = abc_tree();
    let mut out = String::new();

    let err = execute(&tree, &["q"], &mut out).unwrap_err();

    assert_eq!(err, ShellError::UnknownCommand);
    assert!(out.starts_with("Usage:"));
    assert!(out.contains("a"));
    assert!(out.contains("level one"));
}

#[test]
fn test_execute_mid_path_failure_prints_deepest_usage() {
    let (tree, _, _, _) = abc_tree();
    let mut out = String::new();

    let err = execute(&tree, &["a", "z"], &mut out).unwrap_err();

    assert_eq!(err, ShellError::UnknownCommand);
    assert!(out.starts_with("Usage for \"a\":"));
    assert!(out.contains("b"));
}

#[test]
fn test_execute_branch_is_incomplete() {
    let (tree, _, _, _) = abc_tree();
    let mut out = String::new();

    let err = execute(&tree, &["a"], &mut out).unwrap_err();

    assert_eq!(err, ShellError::IncompleteCommand);
    assert!(out.starts_with("Usage for \"a\":"));
    assert!(out.contains("level two"));
}

#[test]
fn test_execute_empty_tokens_is_unknown() {
    let (tree, _, _, _) = abc_tree();
    let mut out = String::new();

    let err = execute(&tree, &[], &mut out).unwrap_err();

    assert_eq!(err, ShellError::UnknownCommand);
    assert!(out.starts_with("Usage:"));
}

#[test]
fn test_arity_boundaries() {
    let mut tree = CommandTree::new();
    let get = tree.add_token("get", "read value").unwrap();
    tree.add_child(tree.root(), get).unwrap();
    tree.set_arity(get, 1, 1).unwrap();
    tree.set_callback(get, cb_echo).unwrap();

    let mut out = String::new();
    assert_eq!(
        execute(&tree, &["get"], &mut out),
        Err(ShellError::TooFewArguments)
    );
    assert!(out.contains("Usage for \"get\":"));

    assert_eq!(execute(&tree, &["get", "x"], &mut String::new()), Ok(1));
    assert_eq!(execute(&tree, &["get", "x", "y"], &mut String::new()), Ok(2));

    let mut out = String::new();
    assert_eq!(
        execute(&tree, &["get", "x", "y", "z"], &mut out),
        Err(ShellError::TooManyArguments)
    );
    assert!(out.contains("Usage for \"get\":"));
}

#[test]
fn test_extra_token_after_zero_arity_leaf_is_unknown() {
    let mut tree = CommandTree::new();
    let ver = tree.add_token("version", "print version").unwrap();
    tree.add_child(tree.root(), ver).unwrap();
    tree.set_callback(ver, cb_echo).unwrap();

    let mut out = String::new();
    let err = execute(&tree, &["version", "extra"], &mut out).unwrap_err();

    // A zero-arity leaf has no children, so the extra word fails the walk.
    assert_eq!(err, ShellError::UnknownCommand);
}

#[test]
fn test_missing_callback() {
    let mut tree = CommandTree::new();
    let stub = tree.add_token("stub", "not wired up").unwrap();
    tree.add_child(tree.root(), stub).unwrap();

    let mut out = String::new();
    let err = execute(&tree, &["stub"], &mut out).unwrap_err();

    assert_eq!(err, ShellError::NoCallback);
    // Reported through diagnostics, not usage output.
    assert!(out.is_empty());
}

#[test]
fn test_callback_status_is_opaque() {
    fn cb_fails(_args: &[&str], _out: &mut dyn Write) -> i32 {
        -42
    }

    let mut tree = CommandTree::new();
    let boom = tree.add_token("boom", "").unwrap();
    tree.add_child(tree.root(), boom).unwrap();
    tree.set_callback(boom, cb_fails).unwrap();

    assert_eq!(execute(&tree, &["boom"], &mut String::new()), Ok(-42));
}

#[test]
fn test_print_tree_renders_every_node() {
    let (tree, _, _, _) = abc_tree();
    let mut out = String::new();

    print_tree(&tree, &mut out);

    assert!(out.contains('.'));
    assert!(out.contains("a"));
    assert!(out.contains("level one"));
    assert!(out.contains("level two"));
    assert!(out.contains("level three"));
    assert!(out.contains(" | ")); // indent rails
    assert_eq!(out.lines().count(), 4);
}
