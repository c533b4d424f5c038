//! Renders a tree as a Graphviz digraph: one HTML-table node per tree
//! node, a cell per key, a port per child slot, and one edge per child
//! pointer. Read-only; the tree is never touched.

use std::fmt::{self, Display, Write};

use crate::btree::{BTree, Node};

pub fn to_dot<K: Ord + Display>(tree: &BTree<K>) -> String {
    let mut out = String::new();
    write_dot(tree, &mut out).expect("writing to a String cannot fail");
    out
}

pub fn write_dot<K: Ord + Display, W: Write>(tree: &BTree<K>, out: &mut W) -> fmt::Result {
    writeln!(out, "digraph btree {{")?;
    writeln!(out, "  splines=false;")?;
    writeln!(out, "  node [shape=none, fontname=\"helvetica\"];")?;
    let mut counter = 0;
    write_subtree(tree.root(), &mut counter, out)?;
    writeln!(out, "}}")
}

/// Emits the subtree rooted at `node`, handing out ids in preorder.
/// Returns the id assigned to `node` so the caller can draw the edge.
fn write_subtree<K: Ord + Display, W: Write>(
    node: &Node<K>,
    counter: &mut usize,
    out: &mut W,
) -> Result<usize, fmt::Error> {
    let id = *counter;
    *counter += 1;

    write!(
        out,
        "  n{id} [label=<<table style=\"rounded\" border=\"0\" cellborder=\"1\" cellspacing=\"4\"><tr>"
    )?;
    for (slot, key) in node.keys().iter().enumerate() {
        write!(out, "<td port=\"c{slot}\"> </td><td port=\"k{slot}\">{key}</td>")?;
    }
    writeln!(out, "<td port=\"c{}\"> </td></tr></table>>];", node.keys().len())?;

    for (slot, child) in node.children().iter().enumerate() {
        let child_id = write_subtree(child, counter, out)?;
        writeln!(out, "  n{id}:c{slot} -> n{child_id};")?;
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::to_dot;
    use crate::BTree;

    #[test]
    fn single_leaf_renders_one_node_and_no_edges() {
        let mut tree = BTree::new(2);
        for key in [1, 2, 3] {
            tree.insert(key);
        }
        let rendered = to_dot(&tree);
        assert_eq!(rendered.matches("[label=").count(), 1);
        assert_eq!(rendered.matches(" -> ").count(), 0);
        for key in [">1<", ">2<", ">3<"] {
            assert!(rendered.contains(key));
        }
    }

    #[test]
    fn split_tree_renders_an_edge_per_child() {
        let mut tree = BTree::new(2);
        for key in [1, 2, 3, 4] {
            tree.insert(key);
        }
        // {2} over {1} and {3, 4}
        let rendered = to_dot(&tree);
        assert_eq!(rendered.matches("[label=").count(), 3);
        assert_eq!(rendered.matches(" -> ").count(), 2);
        assert!(rendered.contains("n0:c0 -> n1;"));
        assert!(rendered.contains("n0:c1 -> n2;"));
    }
}
