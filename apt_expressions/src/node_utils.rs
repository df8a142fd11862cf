use core::fmt;

use crate::node::NodeId;
use crate::tree::Tree;

/// Pre-order walk of the subtree rooted at a node: the node itself, then each filled child slot
/// left to right, recursively. Open slots are skipped.
pub struct Preorder<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl Iterator for Preorder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let tree = self.tree;
        let id = self.stack.pop()?;
        self.stack.extend(tree.node(id).children().iter().rev().flatten());
        Some(id)
    }
}

pub fn preorder(tree: &Tree, id: NodeId) -> Preorder<'_> {
    Preorder { tree, stack: vec![id] }
}

/// Size of the subtree rooted at `id`, counting `id` itself.
pub fn count_nodes(tree: &Tree, id: NodeId) -> usize {
    preorder(tree, id).count()
}

/// The `n`-th node of the subtree rooted at `id` in pre-order (`id` itself is index 0).
///
/// Every node of a subtree of size `count_nodes(tree, id)` is reachable by exactly one
/// `n < count_nodes(tree, id)`.
pub fn nth_node(tree: &Tree, id: NodeId, n: usize) -> Option<NodeId> {
    preorder(tree, id).nth(n)
}

/// Depth of the subtree rooted at `id`; a lone leaf has depth 1.
pub fn count_depth(tree: &Tree, id: NodeId) -> usize {
    1 + tree
        .node(id)
        .children()
        .iter()
        .flatten()
        .map(|&c| count_depth(tree, c))
        .max()
        .unwrap_or(0)
}

/// Every open `(node, slot)` reachable from the root, in pre-order.
pub fn open_slots(tree: &Tree) -> Vec<(NodeId, usize)> {
    let mut out = Vec::new();
    for id in preorder(tree, tree.root()) {
        for (slot, child) in tree.node(id).children().iter().enumerate() {
            if child.is_none() {
                out.push((id, slot));
            }
        }
    }
    out
}

pub fn first_open_slot(tree: &Tree) -> Option<(NodeId, usize)> {
    preorder(tree, tree.root()).find_map(|id| {
        let slot = tree.node(id).children().iter().position(Option::is_none)?;
        Some((id, slot))
    })
}

/// True when no reachable node has an open slot.
pub fn is_complete(tree: &Tree) -> bool {
    first_open_slot(tree).is_none()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    RootHasParent { root: NodeId },
    OpenSlot { node: NodeId, slot: usize },
    WrongParent { child: NodeId, expected: NodeId, found: Option<NodeId> },
    Shared { node: NodeId },
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::RootHasParent { root } => write!(f, "root {root} has a parent link"),
            LinkError::OpenSlot { node, slot } => write!(f, "node {node} has an open slot {slot}"),
            LinkError::WrongParent { child, expected, found } => match found {
                Some(found) => write!(f, "node {child} is a child of {expected} but points at {found}"),
                None => write!(f, "node {child} is a child of {expected} but has no parent link"),
            },
            LinkError::Shared { node } => write!(f, "node {node} is reachable through more than one slot"),
        }
    }
}

impl std::error::Error for LinkError {}

/// Check the structural invariants of a fully grown tree: the root has no parent, every slot
/// is filled, every child points back at the node holding it, and no node is shared.
pub fn check_links(tree: &Tree) -> Result<(), LinkError> {
    let root = tree.root();
    if tree.parent(root).is_some() {
        return Err(LinkError::RootHasParent { root });
    }
    let mut seen = vec![false; tree.arena_len()];
    let mut stack = vec![root];
    seen[root.index()] = true;
    while let Some(id) = stack.pop() {
        for (slot, child) in tree.node(id).children().iter().enumerate() {
            let Some(child) = *child else {
                return Err(LinkError::OpenSlot { node: id, slot });
            };
            if seen[child.index()] {
                return Err(LinkError::Shared { node: child });
            }
            seen[child.index()] = true;
            let found = tree.parent(child);
            if found != Some(id) {
                return Err(LinkError::WrongParent {
                    child,
                    expected: id,
                    found,
                });
            }
            stack.push(child);
        }
    }
    Ok(())
}
