use datastructs::list::LinkedList;

use std::collections::VecDeque;

use crate::Op;

/// Inserts push to the back and removes pop whatever sits at the front, checking the list
/// against a `VecDeque` doing the same.
#[quickcheck]
fn behaves_like_a_deque(ops: Vec<Op<i8>>) -> bool {
    let mut list = LinkedList::new();
    let mut deque = VecDeque::new();

    for op in ops {
        match op {
            Op::Insert(v) => {
                list.push_back(v);
                deque.push_back(v);
            }
            Op::Remove(_) => {
                if list.pop_front() != deque.pop_front() {
                    return false;
                }
            }
        }
    }

    list.len() == deque.len() && list.into_iter().eq(deque)
}

#[quickcheck]
fn reverse_matches_rev(xs: Vec<i8>) -> bool {
    let mut list: LinkedList<_> = xs.iter().copied().collect();
    list.reverse();

    list.iter().eq(xs.iter().rev()) && list.first() == xs.last() && list.last() == xs.first()
}

#[quickcheck]
fn append_concatenates(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let mut list: LinkedList<_> = xs.iter().copied().collect();
    let mut other: LinkedList<_> = ys.iter().copied().collect();

    list.append(&mut other);
    other.is_empty() && list.iter().eq(xs.iter().chain(ys.iter()))
}

#[quickcheck]
fn insert_all_splices(xs: Vec<i8>, ys: Vec<i8>, at: usize) -> bool {
    let mut list: LinkedList<_> = xs.iter().copied().collect();
    let at = at % (xs.len() + 1);

    let mut expected = xs;
    expected.splice(at..at, ys.iter().copied());

    list.insert_all(at, ys).is_ok() && list.iter().eq(expected.iter())
}
