use crate::list::tests::{check_links, list_eq};
use crate::{Error, List};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use std::collections::VecDeque;
use std::iter::FromIterator;

#[quickcheck]
fn insert_then_get(seed: Vec<i32>, index: usize, value: i32) {
    let index = index % (seed.len() + 1);
    let mut list = List::from(seed.clone());
    let mut model = seed;

    list.insert(index, value).unwrap();
    model.insert(index, value);

    assert_eq!(list.get(index), Ok(&value));
    assert_eq!(list.len(), model.len());
    list_eq(&list, model);
}

#[quickcheck]
fn remove_shifts_following_elements(seed: Vec<i32>, index: usize) {
    if seed.is_empty() {
        return;
    }
    let index = index % seed.len();
    let mut list = List::from(seed.clone());
    let mut model = seed;

    assert_eq!(list.remove(index), Ok(model.remove(index)));
    assert_eq!(list.len(), model.len());
    for i in index.saturating_sub(1)..model.len() {
        assert_eq!(list.get(i), Ok(&model[i]));
    }
    list_eq(&list, model);
}

#[quickcheck]
fn fifo_and_lifo_drain(seed: Vec<i32>) {
    let mut queue = List::new();
    let mut stack = List::new();
    for &x in &seed {
        queue.add_last(x);
        stack.add_first(x);
    }
    let fifo: Vec<_> = (0..seed.len()).map(|_| queue.remove_first().unwrap()).collect();
    let lifo: Vec<_> = (0..seed.len()).map(|_| stack.remove_first().unwrap()).collect();
    assert_eq!(fifo, seed);
    assert_eq!(lifo, seed.iter().rev().copied().collect::<Vec<_>>());
    assert!(queue.is_empty());
    assert!(stack.is_empty());
    assert_eq!(queue.remove_first(), Err(Error::EmptyCollection));
}

#[quickcheck]
fn clear_is_idempotent(seed: Vec<i32>) {
    let mut list = List::from(seed);
    list.clear();
    assert_eq!(list.len(), 0);
    list.clear();
    assert_eq!(list.len(), 0);
    check_links(&list);
}

#[quickcheck]
fn index_boundaries(seed: Vec<i32>) {
    let len = seed.len();
    let mut list = List::from(seed);
    let out_of_range = |index| Error::OutOfRange { index, len };

    assert_eq!(list.get(len), Err(out_of_range(len)));
    assert_eq!(list.get(usize::MAX), Err(out_of_range(usize::MAX)));
    assert_eq!(list.remove(len), Err(out_of_range(len)));
    assert_eq!(list.remove(usize::MAX), Err(out_of_range(usize::MAX)));
    assert_eq!(list.insert(len + 1, 0), Err(out_of_range(len + 1)));
    assert_eq!(list.len(), len);

    assert_eq!(list.insert(len, 0), Ok(()));
    assert_eq!(list.back(), Some(&0));
}

#[quickcheck]
fn search_matches_model(seed: Vec<u8>, value: u8) {
    let value = value % 8;
    let seed: Vec<_> = seed.into_iter().map(|x| x % 8).collect();
    let list = List::from(seed.clone());
    assert_eq!(list.index_of(&value), seed.iter().position(|x| *x == value));
    assert_eq!(
        list.last_index_of(&value),
        seed.iter().rposition(|x| *x == value)
    );
    assert_eq!(list.contains(&value), seed.contains(&value));
}

#[quickcheck]
fn iterators_agree(seed: Vec<i32>) {
    let mut list = List::from(seed.clone());
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), seed);

    let mut forward = Vec::new();
    let mut iter = list.forward_iter();
    while let Some(x) = iter.next() {
        forward.push(*x);
    }
    assert_eq!(forward, seed);

    let mut descending = Vec::new();
    let mut iter = list.descending_iter();
    while let Some(x) = iter.next() {
        descending.push(*x);
    }
    assert_eq!(descending, seed.iter().rev().copied().collect::<Vec<_>>());
}

#[quickcheck]
fn forward_remove_matches_retain(seed: Vec<u8>) {
    let mut list = List::from(seed.clone());
    let mut iter = list.forward_iter();
    while let Some(x) = iter.next() {
        if x % 3 == 0 {
            iter.remove().unwrap();
        }
    }
    let expected: Vec<_> = seed.into_iter().filter(|x| x % 3 != 0).collect();
    list_eq(&list, expected);
}

#[quickcheck]
fn list_iter_add_at_position(seed: Vec<i32>, index: usize, value: i32) {
    let index = index % (seed.len() + 1);
    let mut list = List::from(seed.clone());
    let mut iter = list.list_iter_at(index).unwrap();
    iter.add(value);
    assert_eq!(iter.next_index(), index + 1);
    assert_eq!(iter.next(), seed.get(index));

    let mut model = seed;
    model.insert(index, value);
    list_eq(&list, model);
}

#[quickcheck]
fn split_off_and_append(seed: Vec<i32>, at: usize) {
    let at = at % (seed.len() + 1);
    let mut list = List::from(seed.clone());
    let mut tail = list.split_off(at).unwrap();
    list_eq(&list, seed[..at].iter().copied());
    list_eq(&tail, seed[at..].iter().copied());
    list.append(&mut tail);
    list_eq(&list, seed);
    list_eq(&tail, None);
}

/// A single operation on both the list and a `VecDeque` model.
#[derive(Debug, Clone)]
enum Op {
    PushFront(i32),
    PushBack(i32),
    PopFront,
    PopBack,
    Insert(usize, i32),
    Remove(usize),
    Set(usize, i32),
    RemoveItem(i32),
    Clear,
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        // small values so that value based operations hit existing elements
        let value = i32::arbitrary(g) % 16;
        let index = usize::arbitrary(g) % 32;
        match u8::arbitrary(g) % 17 {
            0..=2 => Op::PushFront(value),
            3..=5 => Op::PushBack(value),
            6 | 7 => Op::PopFront,
            8 | 9 => Op::PopBack,
            10 | 11 => Op::Insert(index, value),
            12 | 13 => Op::Remove(index),
            14 => Op::Set(index, value),
            15 => Op::RemoveItem(value),
            _ => Op::Clear,
        }
    }
}

#[quickcheck]
fn operations_match_vec_deque(ops: Vec<Op>) {
    let mut list = List::new();
    let mut model = VecDeque::new();
    for op in ops {
        match op {
            Op::PushFront(x) => {
                list.push_front(x);
                model.push_front(x);
            }
            Op::PushBack(x) => {
                list.push_back(x);
                model.push_back(x);
            }
            Op::PopFront => assert_eq!(list.pop_front(), model.pop_front()),
            Op::PopBack => assert_eq!(list.pop_back(), model.pop_back()),
            Op::Insert(i, x) => {
                if i <= model.len() {
                    assert_eq!(list.insert(i, x), Ok(()));
                    model.insert(i, x);
                } else {
                    assert!(list.insert(i, x).is_err());
                }
            }
            Op::Remove(i) => match model.remove(i) {
                Some(x) => assert_eq!(list.remove(i), Ok(x)),
                None => assert!(list.remove(i).is_err()),
            },
            Op::Set(i, x) => match model.get_mut(i) {
                Some(slot) => assert_eq!(list.set(i, x), Ok(std::mem::replace(slot, x))),
                None => assert!(list.set(i, x).is_err()),
            },
            Op::RemoveItem(x) => {
                let position = model.iter().position(|y| *y == x);
                assert_eq!(list.remove_item(&x), position.is_some());
                if let Some(i) = position {
                    model.remove(i);
                }
            }
            Op::Clear => {
                list.clear();
                model.clear();
            }
        }
        assert_eq!(list.len(), model.len());
        assert_eq!(list.front(), model.front());
        assert_eq!(list.back(), model.back());
    }
    list_eq(&list, Vec::from_iter(model));
}
