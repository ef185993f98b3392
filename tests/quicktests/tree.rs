use balanced_bst::{Node, Order, Tree};
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts,
/// deletes and rebalances we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                assert_eq!(tree.insert(x.clone()), set.insert(x.clone()));
            }
            Op::Delete(x) => {
                assert_eq!(tree.delete(x), set.take(x));
            }
            Op::Rebalance => {
                tree.rebalance();
                assert!(tree.is_balanced());
            }
        }
    }
}

/// Ceiling of `log2(n + 1)`, the most levels a balanced tree of `n` nodes needs.
fn balanced_levels(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);

    tree.len() == set.len() && tree.in_order().into_iter().eq(set.iter())
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i16>, ops: Vec<Op<i16>>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let mut set: BTreeSet<_> = xs.into_iter().collect();

    do_ops(&ops, &mut tree, &mut set);

    tree.in_order().windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn collected_tree_is_balanced(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let levels = tree.root().map_or(0, Node::height);

    tree.is_balanced() && levels <= balanced_levels(tree.len())
}

#[quickcheck]
fn rebalance_keeps_values(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let before: Vec<i8> = tree.in_order().into_iter().copied().collect();

    tree.rebalance();
    let levels = tree.root().map_or(0, Node::height);

    tree.is_balanced()
        && levels <= balanced_levels(tree.len())
        && tree.in_order().into_iter().copied().eq(before)
}

#[quickcheck]
fn insert_existing_is_idempotent(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let before = tree.clone();

    xs.iter().all(|x| !tree.insert(*x)) && tree == before
}

#[quickcheck]
fn delete_present_removes_only_that_value(xs: Vec<i8>, pick: usize) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let values: Vec<i8> = tree.in_order().into_iter().copied().collect();
    if values.is_empty() {
        return true;
    }
    let target = values[pick % values.len()];

    let removed = tree.delete(&target);
    let mut expected = values;
    expected.retain(|x| *x != target);

    removed == Some(target)
        && tree.len() == expected.len()
        && tree.in_order().into_iter().copied().eq(expected)
}

#[quickcheck]
fn delete_absent_leaves_tree_unchanged(xs: Vec<i8>, absent: i8) -> bool {
    let mut tree = Tree::new();
    for x in xs.iter().filter(|x| **x != absent) {
        tree.insert(*x);
    }
    let before = tree.clone();

    tree.delete(&absent).is_none() && tree == before
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x).map(Node::value) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none() && tree.depth(x).is_none() && tree.height(x).is_none())
}

#[quickcheck]
fn depth_counts_levels_from_root(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    // Walk level by level and check every node reports the level it's on.
    let mut level = vec![];
    level.extend(tree.root());
    let mut depth = 1;
    while !level.is_empty() {
        if !level.iter().all(|n| tree.depth(n.value()) == Some(depth)) {
            return false;
        }
        level = level
            .into_iter()
            .flat_map(|n| n.left().into_iter().chain(n.right()))
            .collect();
        depth += 1;
    }

    true
}

#[quickcheck]
fn traversals_visit_every_value_once(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let expected: Vec<i8> = tree.in_order().into_iter().copied().collect();

    Order::ALL.into_iter().all(|order| {
        let mut visited: Vec<i8> = tree.traverse(order).into_iter().copied().collect();
        visited.sort();
        visited == expected
    })
}
