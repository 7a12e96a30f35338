use ordset::Multiset;
use quickcheck_macros::quickcheck;

use std::collections::BTreeMap;

use crate::Op;

/// Applies a set of operations to a multiset and a map of counts.
/// This way we can ensure that after a random smattering of adds
/// the two always agree.
fn do_ops<T>(ops: &[Op<T>], set: &mut Multiset<T>, map: &mut BTreeMap<T, usize>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        let agrees = match op {
            Op::Add(x) => {
                set.add(x.clone());
                *map.entry(x.clone()).or_insert(0) += 1;
                set.size() == map.len()
            }
            Op::Count(x) => set.item_count(x) == map.get(x).copied().unwrap_or(0),
            Op::Iter => set.iter().eq(map.iter().map(|(x, count)| (x, *count))),
        };
        if !agrees {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut set = Multiset::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut set, &mut map)
}

#[quickcheck]
fn count_matches_adds(x: i8, n: u8) -> bool {
    let mut set = Multiset::new();
    for _ in 0..n {
        set.add(x);
    }

    set.item_count(&x) == usize::from(n)
}

#[quickcheck]
#[allow(clippy::eq_op)]
fn subset_is_reflexive(xs: Vec<i8>) -> bool {
    let set: Multiset<_> = xs.into_iter().collect();

    set.has_subset(&set) && set == set
}

#[quickcheck]
fn insertion_order_does_not_matter(xs: Vec<i8>) -> bool {
    let forwards: Multiset<_> = xs.iter().copied().collect();
    let backwards: Multiset<_> = xs.iter().rev().copied().collect();
    let mut sorted = xs;
    sorted.sort_unstable();
    let sorted: Multiset<_> = sorted.into_iter().collect();

    forwards == backwards
        && backwards == forwards
        && forwards == sorted
        && forwards.hash_code() == backwards.hash_code()
        && forwards.hash_code() == sorted.hash_code()
}

#[quickcheck]
fn adding_more_keeps_the_original_a_subset(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let original: Multiset<_> = xs.iter().copied().collect();
    let mut bigger: Multiset<_> = xs.into_iter().collect();
    let grew = !ys.is_empty();
    bigger.extend(ys);

    bigger.has_subset(&original) && (original.has_subset(&bigger) != grew)
}
