//! Sideways rendering of a tree for the terminal.
//!
//! The right subtree is drawn above its parent and the left subtree below,
//! so reading the output top to bottom gives the values in descending order.
//!
//! ```text
//! │       ┌── 7
//! │   ┌── 6
//! │   │   └── 5
//! └── 4
//!     │   ┌── 3
//!     └── 2
//!         └── 1
//! ```

use std::fmt::{self, Display, Write};

use balanced_bst::{Node, Tree};

/// Renders the whole tree, one node per line. An empty tree renders as an
/// empty string.
pub fn render<T: Display>(tree: &Tree<T>) -> String {
    let mut out = String::new();
    if let Some(root) = tree.root() {
        // Writing into a `String` can't fail.
        let _ = write_node(&mut out, root, "", true);
    }
    out
}

fn write_node<T: Display>(
    out: &mut String,
    node: &Node<T>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result {
    if let Some(right) = node.right() {
        let prefix = format!("{prefix}{}", if is_left { "│   " } else { "    " });
        write_node(out, right, &prefix, false)?;
    }

    let branch = if is_left { "└── " } else { "┌── " };
    writeln!(out, "{prefix}{branch}{}", node.value())?;

    if let Some(left) = node.left() {
        let prefix = format!("{prefix}{}", if is_left { "    " } else { "│   " });
        write_node(out, left, &prefix, true)?;
    }

    Ok(())
}
