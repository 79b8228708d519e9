#![cfg(test)]

// Property tests for Vector and RawVector kept inside the crate so they can
// build containers with arbitrary growth policies.

use crate::config::{Growth, VectorConfig};
use crate::raw_vector::{RawRelease, RawVector};
use crate::vector::{Release, Vector};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

// Indices are raw and reduced modulo the valid range when applied, so every
// generated op is valid and shrinking stays meaningful.
#[derive(Clone, Debug)]
enum Op {
    Append(i32),
    Insert(usize, i32),
    Replace(usize, i32),
    Delete(usize),
    Sort,
    Search(i32, usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    let small = -8i32..8;
    prop_oneof![
        3 => small.clone().prop_map(Op::Append),
        2 => (any::<usize>(), small.clone()).prop_map(|(i, v)| Op::Insert(i, v)),
        1 => (any::<usize>(), small.clone()).prop_map(|(i, v)| Op::Replace(i, v)),
        2 => any::<usize>().prop_map(Op::Delete),
        1 => Just(Op::Sort),
        1 => (small, any::<usize>()).prop_map(|(k, s)| Op::Search(k, s)),
    ]
}

fn arb_config() -> impl Strategy<Value = VectorConfig> {
    (
        0usize..5,
        prop_oneof![Just(Growth::Double), (1.1f32..3.0).prop_map(Growth::Factor)],
    )
        .prop_map(|(initial_capacity, growth)| VectorConfig {
            initial_capacity,
            growth,
        })
}

fn cmp(a: &i32, b: &i32) -> core::cmp::Ordering {
    a.cmp(b)
}

fn raw_cmp(a: &[u8], b: &[u8]) -> core::cmp::Ordering {
    decode(a).cmp(&decode(b))
}

fn decode(b: &[u8]) -> i32 {
    i32::from_le_bytes(b.try_into().unwrap())
}

// Property: state-machine equivalence against std Vec.
// Invariants exercised across random operation sequences:
// - `len` equals the net number of inserts minus deletes.
// - `nth(i)` is the element last written at logical position `i`.
// - `len <= capacity`; capacity never shrinks and grows only when full.
// - Every element leaving via replace/delete/drop is released exactly once.
// - search results agree with the model (linear: first match at or after
//   start; sorted: some equal element in range).
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_vector_matches_model(config in arb_config(), ops in proptest::collection::vec(arb_op(), 1..80)) {
        let released = Rc::new(RefCell::new(Vec::new()));
        let sink = released.clone();
        let release: Release<i32> = Rc::new(move |x: i32| sink.borrow_mut().push(x));
        let mut sut = Vector::with_config(config, Some(release)).unwrap();
        let mut model: Vec<i32> = Vec::new();
        let mut expect_released: Vec<i32> = Vec::new();
        let mut sorted = false;

        for op in ops {
            let cap_before = sut.capacity();
            let len_before = sut.len();
            match op {
                Op::Append(v) => {
                    sut.append(v);
                    model.push(v);
                    sorted = false;
                }
                Op::Insert(i, v) => {
                    let i = i % (model.len() + 1);
                    sut.insert(i, v);
                    model.insert(i, v);
                    sorted = false;
                }
                Op::Replace(i, v) => {
                    if model.is_empty() { continue; }
                    let i = i % model.len();
                    sut.replace(i, v);
                    expect_released.push(std::mem::replace(&mut model[i], v));
                    sorted = false;
                }
                Op::Delete(i) => {
                    if model.is_empty() { continue; }
                    let i = i % model.len();
                    sut.delete(i);
                    expect_released.push(model.remove(i));
                }
                Op::Sort => {
                    sut.sort(cmp);
                    model.sort();
                    sorted = true;
                }
                Op::Search(k, s) => {
                    let s = s % (model.len() + 1);
                    let linear = sut.search(&k, cmp, s, false);
                    let expected = model[s..].iter().position(|x| *x == k).map(|i| s + i);
                    prop_assert_eq!(linear, expected);
                    if sorted {
                        let binary = sut.search(&k, cmp, s, true);
                        prop_assert_eq!(binary.is_some(), expected.is_some());
                        if let Some(i) = binary {
                            prop_assert!(i >= s);
                            prop_assert_eq!(*sut.nth(i), k);
                        }
                    }
                }
            }

            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.as_slice(), &model[..]);
            prop_assert!(sut.len() <= sut.capacity());
            prop_assert!(sut.capacity() >= cap_before);
            if sut.capacity() != cap_before {
                prop_assert_eq!(len_before, cap_before, "growth only when full");
                prop_assert_eq!(sut.capacity(), config.growth.next_capacity(cap_before));
            }
            prop_assert_eq!(&*released.borrow(), &expect_released);
        }

        expect_released.extend(model.iter().copied());
        drop(sut);
        prop_assert_eq!(&*released.borrow(), &expect_released);
    }
}

// Property: RawVector over 4-byte little-endian ints tracks the same model.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_raw_vector_matches_model(config in arb_config(), ops in proptest::collection::vec(arb_op(), 1..80)) {
        let released = Rc::new(RefCell::new(Vec::new()));
        let sink = released.clone();
        let release: RawRelease = Box::new(move |b: &[u8]| sink.borrow_mut().push(decode(b)));
        let mut sut = RawVector::with_config(4, config, Some(release)).unwrap();
        let mut model: Vec<i32> = Vec::new();
        let mut expect_released: Vec<i32> = Vec::new();
        let mut sorted = false;

        for op in ops {
            match op {
                Op::Append(v) => {
                    sut.append(&v.to_le_bytes());
                    model.push(v);
                    sorted = false;
                }
                Op::Insert(i, v) => {
                    let i = i % (model.len() + 1);
                    sut.insert(i, &v.to_le_bytes());
                    model.insert(i, v);
                    sorted = false;
                }
                Op::Replace(i, v) => {
                    if model.is_empty() { continue; }
                    let i = i % model.len();
                    sut.replace(i, &v.to_le_bytes());
                    expect_released.push(std::mem::replace(&mut model[i], v));
                    sorted = false;
                }
                Op::Delete(i) => {
                    if model.is_empty() { continue; }
                    let i = i % model.len();
                    sut.delete(i);
                    expect_released.push(model.remove(i));
                }
                Op::Sort => {
                    sut.sort(raw_cmp);
                    model.sort();
                    sorted = true;
                }
                Op::Search(k, s) => {
                    let s = s % (model.len() + 1);
                    let key = k.to_le_bytes();
                    let expected = model[s..].iter().position(|x| *x == k).map(|i| s + i);
                    prop_assert_eq!(sut.search(&key, raw_cmp, s, false), expected);
                    if sorted {
                        let binary = sut.search(&key, raw_cmp, s, true);
                        prop_assert_eq!(binary.is_some(), expected.is_some());
                        if let Some(i) = binary {
                            prop_assert_eq!(decode(sut.nth(i)), k);
                        }
                    }
                }
            }

            prop_assert_eq!(sut.len(), model.len());
            let decoded: Vec<i32> = sut.iter().map(decode).collect();
            prop_assert_eq!(&decoded, &model);
            prop_assert!(sut.len() <= sut.capacity());
            prop_assert_eq!(&*released.borrow(), &expect_released);
        }

        expect_released.extend(model.iter().copied());
        drop(sut);
        prop_assert_eq!(&*released.borrow(), &expect_released);
    }
}

// Property: insert at i followed by delete at i leaves the sequence unchanged.
proptest! {
    #[test]
    fn prop_insert_then_delete_is_identity(init in proptest::collection::vec(any::<i32>(), 0..32), i in any::<usize>(), v in any::<i32>()) {
        let mut sut: Vector<i32> = Vector::with_capacity(1);
        for x in &init {
            sut.append(*x);
        }
        let i = i % (init.len() + 1);
        sut.insert(i, v);
        sut.delete(i);
        prop_assert_eq!(sut.as_slice(), &init[..]);
    }
}
