use crate::node::{Node, NodeId, Op};

/// A single expression tree stored in an arena.
///
/// Nodes refer to each other by [`NodeId`]. Splicing a subtree out (via [`Tree::replace`]) leaves
/// the old nodes in the arena, unreachable from the root, until [`Tree::compact`] rebuilds it.
///
/// Structural edits take `&mut self`; evaluation and printing take `&self`, so a tree that is
/// being grown or mutated cannot be read concurrently.
#[derive(Clone, Debug, PartialEq)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    /// A tree holding a single root node with all of its slots open.
    pub fn new(root: Op) -> Self {
        Self {
            nodes: vec![Node::new(root, None)],
            root: NodeId(0),
        }
    }

    pub(crate) fn from_parts(nodes: Vec<Node>, root: NodeId) -> Self {
        debug_assert!(root.index() < nodes.len());
        Self { nodes, root }
    }

    fn empty_with_capacity(cap: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(cap),
            root: NodeId(0),
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Make `id` the root and drop its parent link.
    pub fn set_root(&mut self, id: NodeId) {
        self.node_mut(id).parent = None;
        self.root = id;
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    #[inline]
    pub fn op(&self, id: NodeId) -> Op {
        self.node(id).op
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Number of arena slots, reachable or not.
    #[inline]
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    /// Allocate a node that is not linked into any slot yet.
    pub fn push(&mut self, op: Op, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).unwrap_or_else(|_| panic!("tree arena exceeds u32 ids")));
        self.nodes.push(Node::new(op, parent));
        id
    }

    /// Allocate `op` and link it into `parent`'s `slot`.
    pub fn add_child(&mut self, parent: NodeId, slot: usize, op: Op) -> NodeId {
        let id = self.push(op, Some(parent));
        self.node_mut(parent).children_mut()[slot] = Some(id);
        id
    }

    /// Link an existing node into `parent`'s `slot` and point it back at `parent`.
    pub fn set_child(&mut self, parent: NodeId, slot: usize, child: NodeId) {
        self.node_mut(parent).children_mut()[slot] = Some(child);
        self.node_mut(child).parent = Some(parent);
    }

    /// Deep-copy the subtree of `src` rooted at `src_id` into this arena.
    ///
    /// The copy's root gets `new_parent` as its parent link (it is not linked into any slot);
    /// every copied child points at its copied parent. Open slots stay open.
    pub fn copy_subtree(&mut self, src: &Tree, src_id: NodeId, new_parent: Option<NodeId>) -> NodeId {
        let src_node = src.node(src_id);
        let id = self.push(src_node.op, new_parent);
        for (slot, child) in src_node.children().iter().enumerate() {
            if let Some(child) = *child {
                let copy = self.copy_subtree(src, child, Some(id));
                self.node_mut(id).children_mut()[slot] = Some(copy);
            }
        }
        id
    }

    /// Deep-copy the subtree rooted at `id` into a fresh, compact tree.
    pub fn extract(&self, id: NodeId) -> Tree {
        let mut out = Tree::empty_with_capacity(crate::node_utils::count_nodes(self, id));
        out.root = out.copy_subtree(self, id, None);
        out
    }

    /// Splice `new` into the slot of `old`'s parent (found by identity) and give `new` that
    /// parent. When `old` is the root, `new` becomes the root instead.
    ///
    /// `old` and anything only reachable through it become garbage.
    pub fn replace(&mut self, old: NodeId, new: NodeId) {
        let parent = self.parent(old);
        match parent {
            Some(p) => {
                if let Some(slot) = self.node(p).slot_of(old) {
                    self.node_mut(p).children_mut()[slot] = Some(new);
                }
            }
            None if old == self.root => self.root = new,
            None => {}
        }
        self.node_mut(new).parent = parent;
    }

    /// Drop unreachable nodes, renumbering the rest in pre-order (root becomes `#0`).
    pub fn compact(&mut self) {
        if crate::node_utils::count_nodes(self, self.root) != self.nodes.len() || self.root != NodeId(0) {
            *self = self.extract(self.root);
        }
    }
}
