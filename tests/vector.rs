// Vector and RawVector integration tests through the public surface.
//
// Invariants exercised:
// - Growth: appends past capacity grow it; deletes never shrink it.
// - Order: insert/delete shift the tail; `nth` sees the last write.
// - Release: every discarded element is released exactly once, and only
//   when a hook was supplied.
// - Search: a miss is `None`, never confused with a hit at index zero.
use chainset::{ConfigError, Growth, RawVector, Vector, VectorConfig, DEFAULT_CAPACITY};
use std::cell::Cell;
use std::rc::Rc;

// Test: the 4-byte integer scenario.
// Assumes: initial capacity 2.
// Verifies: growth after the third append; order 1,2,3; delete(1) leaves 1,3.
#[test]
fn int_vector_grow_then_delete() {
    let mut v: Vector<i32> = Vector::with_capacity(2);
    v.append(1);
    v.append(2);
    v.append(3);
    assert!(v.capacity() > 2);
    assert_eq!(v.len(), 3);
    assert_eq!((*v.nth(0), *v.nth(1), *v.nth(2)), (1, 2, 3));

    v.delete(1);
    assert_eq!(v.len(), 2);
    assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
}

// Test: same scenario through the byte-width erased array.
#[test]
fn raw_int_vector_grow_then_delete() {
    let mut v = RawVector::new(std::mem::size_of::<i32>(), 2);
    for x in 1i32..=3 {
        v.append(&x.to_ne_bytes());
    }
    assert!(v.capacity() > 2);
    assert_eq!(v.len(), 3);
    v.delete(1);
    let got: Vec<i32> = v
        .iter()
        .map(|b| i32::from_ne_bytes(b.try_into().unwrap()))
        .collect();
    assert_eq!(got, vec![1, 3]);
}

// Test: owned elements with a custom release hook.
// Assumes: hook counts invocations.
// Verifies: replace/delete/drop each release once; total equals elements ever stored.
#[test]
fn release_count_matches_elements_stored() {
    let calls = Rc::new(Cell::new(0usize));
    let c = calls.clone();
    let mut v = Vector::with_release(0, move |s: String| {
        assert!(!s.is_empty());
        c.set(c.get() + 1);
    });
    for w in ["a", "bb", "ccc", "dddd"] {
        v.append(w.to_string());
    }
    v.replace(0, "A".to_string());
    v.delete(3);
    assert_eq!(calls.get(), 2);
    drop(v);
    assert_eq!(calls.get(), 5);
}

// Test: an exchanged element is the caller's; the vector does not release it.
#[test]
fn exchange_returns_ownership() {
    let calls = Rc::new(Cell::new(0usize));
    let c = calls.clone();
    let mut v = Vector::with_release(4, move |_: Box<u32>| c.set(c.get() + 1));
    v.append(Box::new(1));
    let old = v.exchange(0, Box::new(2));
    assert_eq!(*old, 1);
    assert_eq!(calls.get(), 0);
    v.dispose();
    assert_eq!(calls.get(), 1);
}

// Test: linear search on the unsorted array and binary search on the sorted
// array agree on which value they find.
#[test]
fn linear_and_binary_search_agree() {
    let data = [42, 7, 19, 7, 100, -3, 55, 19, 0];
    let mut v: Vector<i32> = Vector::new();
    for x in data {
        v.append(x);
    }
    let unsorted: Vec<Option<i32>> = (-5..110)
        .map(|k| v.search(&k, |a, b| a.cmp(b), 0, false).map(|i| v[i]))
        .collect();

    v.sort(|a, b| a.cmp(b));
    for w in v.as_slice().windows(2) {
        assert!(w[0] <= w[1]);
    }
    let sorted: Vec<Option<i32>> = (-5..110)
        .map(|k| v.search(&k, |a, b| a.cmp(b), 0, true).map(|i| v[i]))
        .collect();
    assert_eq!(unsorted, sorted);
}

// Test: sort by a key projection with a caller comparator.
#[test]
fn sort_by_projected_key() {
    let mut v: Vector<(u8, &str)> = Vector::new();
    for p in [(3, "c"), (1, "a"), (2, "b")] {
        v.append(p);
    }
    v.sort(|a, b| a.0.cmp(&b.0));
    assert_eq!(v.as_slice(), &[(1, "a"), (2, "b"), (3, "c")]);
    assert_eq!(v.search(&(2, ""), |a, b| a.0.cmp(&b.0), 0, true), Some(1));
}

#[test]
fn config_validation() {
    assert_eq!(Vector::<u32>::new().capacity(), DEFAULT_CAPACITY);

    let bad = VectorConfig {
        initial_capacity: 4,
        growth: Growth::Factor(1.0),
    };
    assert_eq!(
        Vector::<u32>::with_config(bad, None).err(),
        Some(ConfigError::InvalidGrowthFactor(1.0))
    );
    assert_eq!(
        RawVector::with_config(0, VectorConfig::default(), None).err(),
        Some(ConfigError::ZeroElementSize)
    );
    assert_eq!(
        ConfigError::ZeroElementSize.to_string(),
        "element size must be greater than zero"
    );
}

#[test]
#[should_panic(expected = "element size must be greater than zero")]
fn zero_width_raw_vector_panics() {
    let _ = RawVector::new(0, 4);
}

#[test]
#[should_panic(expected = "index 0 out of range for length 0")]
fn replace_on_empty_panics() {
    let mut v: Vector<i32> = Vector::new();
    v.replace(0, 1);
}
