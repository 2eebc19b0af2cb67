use datastructs::tree::{Order, Tree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                bst.insert(v.clone());
                set.insert(v.clone());
            }
            Op::Remove(v) => {
                bst.remove(v);
                set.remove(v);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    set.iter().all(|v| tree.search(v) == Some(v)) && tree.iter().eq(set.iter())
}

#[quickcheck]
fn in_order_is_sorted_and_unique(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();

    tree.len() == expected.len() && tree.traverse(Order::InOrder).eq(expected.iter())
}

#[quickcheck]
fn min_and_max(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.min() == xs.iter().min() && tree.max() == xs.iter().max()
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn remove_excises_exactly_one_value(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let before: Vec<_> = tree.iter().copied().collect();

    let removed = tree.remove(&x);
    let after: Vec<_> = tree.traverse(Order::InOrder).copied().collect();

    // Removing an absent value leaves the tree alone.
    let expected: Vec<_> = before.iter().copied().filter(|v| *v != x).collect();
    tree.search(&x).is_none() && after == expected && removed == before.contains(&x).then(|| x)
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let deleted: HashSet<_> = deletes.iter().collect();
    let mut still_present = xs.iter().filter(|x| !deleted.contains(x));

    deletes.iter().all(|x| tree.search(x).is_none())
        && still_present.all(|x| tree.search(x).is_some())
}
