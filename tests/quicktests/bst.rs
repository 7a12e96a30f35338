use ordset::order::Reversed;
use ordset::BinarySearchTree;
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

#[quickcheck]
fn in_order_is_sorted_and_deduplicated(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let model: BTreeSet<_> = xs.into_iter().collect();

    tree.iter().eq(model.iter())
}

#[quickcheck]
fn size_matches_iteration(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.into_iter().collect();

    tree.size() == tree.iter().count() && tree.iter().len() == tree.size()
}

#[quickcheck]
fn get_matches_iteration(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.into_iter().collect();
    let size = tree.size();

    tree.iter()
        .enumerate()
        .all(|(i, x)| tree.get(i) == Ok(x))
        && tree.get(size).is_err()
        && tree.get(usize::MAX).is_err()
}

#[quickcheck]
fn inserting_duplicates_keeps_size(xs: Vec<i8>) -> bool {
    let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let size = tree.size();
    tree.extend(xs);

    tree.size() == size
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find_item(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find_item(x).is_none())
}

#[quickcheck]
fn old_versions_are_untouched(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let snapshot = tree.clone();
    let before: Vec<_> = snapshot.iter().copied().collect();

    tree.extend(ys);

    snapshot.iter().copied().eq(before)
}

#[quickcheck]
fn reversed_order_iterates_backwards(xs: Vec<i8>) -> bool {
    let mut tree = BinarySearchTree::with_order(Reversed(ordset::order::Natural));
    tree.extend(xs.iter().copied());
    let model: BTreeSet<_> = xs.into_iter().collect();

    tree.iter().eq(model.iter().rev())
}
