use apt_expressions::node_utils::{count_nodes, nth_node, open_slots};
use apt_expressions::{NodeId, OPERATORS, Op, Scalar, Tree};
use rand::Rng;
use tracing::trace;

use crate::individual::Individual;
use crate::options::Options;
use crate::random::{usize_range, weighted_coin};

/// Uniform over the sixteen operator variants (everything except terminals and `picture`).
pub fn random_operator_node<R: Rng + ?Sized>(rng: &mut R) -> Op {
    OPERATORS[rng.random_range(0..OPERATORS.len())]
}

/// Uniform over `x`, `y` and a constant in `[-1, 1)`.
pub fn random_leaf_node<R: Rng + ?Sized>(rng: &mut R) -> Op {
    match rng.random_range(0..3) {
        0 => Op::X,
        1 => Op::Y,
        _ => Op::Const(rng.random::<Scalar>() * 2.0 - 1.0),
    }
}

/// Walk down from the root through uniformly chosen child slots and put `op` into the first
/// open one reached.
///
/// Returns `false`, leaving the tree untouched, if the walk ends on a terminal.
pub fn insert_random_op<R: Rng + ?Sized>(tree: &mut Tree, rng: &mut R, op: Op) -> bool {
    let mut cur = tree.root();
    loop {
        let arity = tree.node(cur).arity();
        if arity == 0 {
            return false;
        }
        let slot = rng.random_range(0..arity);
        match tree.node(cur).child(slot) {
            Some(child) => cur = child,
            None => {
                tree.add_child(cur, slot, op);
                return true;
            }
        }
    }
}

/// Insert up to `extra_ops` random operators, stopping at the first failed insertion.
/// Returns how many were inserted.
pub fn grow<R: Rng + ?Sized>(tree: &mut Tree, rng: &mut R, extra_ops: usize) -> usize {
    let mut inserted = 0;
    while inserted < extra_ops {
        let op = random_operator_node(rng);
        if !insert_random_op(tree, rng, op) {
            break;
        }
        inserted += 1;
    }
    inserted
}

/// Put a random leaf into every open slot, in pre-order.
pub fn fill_leaves<R: Rng + ?Sized>(tree: &mut Tree, rng: &mut R) {
    // Leaves open no new slots, so one snapshot covers everything.
    for (node, slot) in open_slots(tree) {
        let leaf = random_leaf_node(rng);
        tree.add_child(node, slot, leaf);
    }
}

/// A complete random channel: operator root, `options.grow_range()` growth steps, then leaves.
pub fn random_tree<R: Rng + ?Sized>(rng: &mut R, options: &Options) -> Tree {
    let mut tree = Tree::new(random_operator_node(rng));
    let extra = usize_range(rng, options.grow_range());
    let grown = grow(&mut tree, rng, extra);
    fill_leaves(&mut tree, rng);
    trace!(requested = extra, grown, nodes = tree.arena_len(), "random tree");
    tree
}

/// Uniformly chosen node of `tree` by pre-order index.
pub fn random_node<R: Rng + ?Sized>(tree: &Tree, rng: &mut R) -> NodeId {
    let root = tree.root();
    let n = count_nodes(tree, root);
    nth_node(tree, root, rng.random_range(0..n)).unwrap_or(root)
}

/// Replace `node` with a fresh random node and return the replacement.
///
/// The replacement is an operator with odds `operator_weight / (operator_weight + leaf_weight)`,
/// otherwise a leaf. It adopts `node`'s children slot by slot as far as its own arity allows and
/// gets random leaves for the remaining slots, then takes `node`'s place under its parent (or as
/// the root).
pub fn mutate_node<R: Rng + ?Sized>(tree: &mut Tree, rng: &mut R, node: NodeId, options: &Options) -> NodeId {
    let op = if weighted_coin(rng, options.operator_weight, options.leaf_weight) {
        random_operator_node(rng)
    } else {
        random_leaf_node(rng)
    };

    let old_children: Vec<Option<NodeId>> = tree.node(node).children().to_vec();
    let new = tree.push(op, tree.parent(node));
    for slot in 0..op.arity() {
        match old_children.get(slot).copied().flatten() {
            Some(child) => tree.set_child(new, slot, child),
            None => {
                let leaf = random_leaf_node(rng);
                tree.add_child(new, slot, leaf);
            }
        }
    }
    tree.replace(node, new);
    trace!(old = %node, new = %new, ?op, "mutated node");
    new
}

/// Deep copy of `a` with one random subtree replaced by a deep copy of a random subtree of `b`.
///
/// The channel and node on each side are drawn independently. `b` is only read.
pub fn crossover<R: Rng + ?Sized>(a: &Individual, b: &Individual, rng: &mut R) -> Individual {
    let mut child = a.clone();
    let target_channel = rng.random_range(0..3);
    let donor_channel = rng.random_range(0..3);

    let target_tree = child.channel_mut(target_channel);
    let target = random_node(target_tree, rng);
    let donor_tree = b.channel(donor_channel);
    let donor = random_node(donor_tree, rng);

    let copy = target_tree.copy_subtree(donor_tree, donor, None);
    target_tree.replace(target, copy);
    target_tree.compact();
    trace!(target_channel, %target, donor_channel, %donor, "crossover");
    child
}

#[cfg(test)]
mod tests {
    use apt_expressions::{check_links, is_complete, string_tree};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn leaves_are_terminals_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let op = random_leaf_node(&mut rng);
            assert!(op.is_terminal());
            if let Op::Const(v) = op {
                assert!((-1.0..1.0).contains(&v));
            }
            assert!(!random_operator_node(&mut rng).is_terminal());
        }
    }

    #[test]
    fn insertion_into_a_leaf_root_fails() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut t = Tree::new(Op::X);
        assert!(!insert_random_op(&mut t, &mut rng, Op::Sin));
        assert_eq!(grow(&mut t, &mut rng, 5), 0);
        assert_eq!(t.arena_len(), 1);
    }

    #[test]
    fn grow_only_adds_operators() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut t = Tree::new(Op::Add);
        assert_eq!(grow(&mut t, &mut rng, 25), 25);
        assert_eq!(count_nodes(&t, t.root()), 26);
        fill_leaves(&mut t, &mut rng);
        assert!(is_complete(&t));
        check_links(&t).unwrap();
    }

    #[test]
    fn mutating_the_root_makes_a_new_root() {
        let mut rng = StdRng::seed_from_u64(5);
        let opts = Options::default();
        let mut t: Tree = "( + x ( sin y ) )".parse().unwrap();
        for _ in 0..20 {
            let root = t.root();
            let new = mutate_node(&mut t, &mut rng, root, &opts);
            assert_eq!(t.root(), new);
            check_links(&t).unwrap();
        }
    }

    #[test]
    fn forced_leaf_mutation_drops_children() {
        let mut rng = StdRng::seed_from_u64(9);
        let opts = Options {
            operator_weight: 0,
            ..Options::default()
        };
        let mut t: Tree = "( + x ( sin y ) )".parse().unwrap();
        let sin = t.node(t.root()).child(1).unwrap();
        let new = mutate_node(&mut t, &mut rng, sin, &opts);
        assert!(t.op(new).is_terminal());
        assert_eq!(t.node(t.root()).child(1), Some(new));
        assert_eq!(count_nodes(&t, t.root()), 3);
        check_links(&t).unwrap();
    }

    #[test]
    fn crossover_leaves_donor_alone() {
        let mut rng = StdRng::seed_from_u64(21);
        let opts = Options::default();
        let a = Individual::new_random(&mut rng, &opts);
        let b = Individual::new_random(&mut rng, &opts);
        let before = b.to_string();
        for _ in 0..10 {
            let c = crossover(&a, &b, &mut rng);
            for ch in c.channels() {
                check_links(ch).unwrap();
                assert_eq!(ch.arena_len(), count_nodes(ch, ch.root()));
            }
        }
        assert_eq!(b.to_string(), before);
        assert!(!string_tree(&a.r).is_empty());
    }
}
