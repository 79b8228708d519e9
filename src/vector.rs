//! Vector: contiguous growable sequence with an explicit, policy-driven
//! capacity and an optional release hook.

use crate::config::{Growth, VectorConfig};
use crate::error::ConfigError;
use core::cmp::Ordering;
use core::fmt;
use core::ops::Index;
use std::rc::Rc;

/// Release hook invoked with ownership of each element the container
/// discards. Shared so that every bucket of a `HashSet` can run the same
/// hook.
pub type Release<T> = Rc<dyn Fn(T)>;

/// Growable array of `T`.
///
/// `capacity()` is the number of slots the growth policy has committed to;
/// it changes only when an insert finds the array full and never shrinks.
///
/// `replace`, `delete` and disposal run the release hook on the elements
/// they discard; disposal visits live elements in index order. `exchange`
/// and `remove` hand the element back to the caller instead. Without a hook,
/// discarded elements are dropped.
pub struct Vector<T> {
    items: Vec<T>,
    capacity: usize,
    growth: Growth,
    release: Option<Release<T>>,
}

impl<T> Vector<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// `capacity == 0` selects [`crate::DEFAULT_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(VectorConfig::with_capacity(capacity), None)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn with_release<F>(capacity: usize, release: F) -> Self
    where
        F: Fn(T) + 'static,
    {
        let release: Release<T> = Rc::new(release);
        Self::with_config(VectorConfig::with_capacity(capacity), Some(release))
            .unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn with_config(
        config: VectorConfig,
        release: Option<Release<T>>,
    ) -> Result<Self, ConfigError> {
        if core::mem::size_of::<T>() == 0 {
            return Err(ConfigError::ZeroElementSize);
        }
        config.validate()?;
        let capacity = config.resolved_capacity();
        Ok(Self {
            items: Vec::with_capacity(capacity),
            capacity,
            growth: config.growth,
            release,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn growth(&self) -> Growth {
        self.growth
    }

    /// Element at `index`. Panics unless `index < len()`.
    pub fn nth(&self, index: usize) -> &T {
        self.check_index(index);
        &self.items[index]
    }

    pub fn nth_mut(&mut self, index: usize) -> &mut T {
        self.check_index(index);
        &mut self.items[index]
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Insert `element` at `index`, shifting `[index, len)` one slot right.
    /// Panics unless `index <= len()`.
    pub fn insert(&mut self, index: usize, element: T) {
        assert!(
            index <= self.items.len(),
            "insert index {} out of range for length {}",
            index,
            self.items.len()
        );
        self.reserve_one();
        self.items.insert(index, element);
    }

    pub fn append(&mut self, element: T) {
        self.insert(self.items.len(), element);
    }

    /// Overwrite the element at `index`, releasing the old one.
    pub fn replace(&mut self, index: usize, element: T) {
        let old = self.exchange(index, element);
        self.release_one(old);
    }

    /// Overwrite the element at `index` and return the old one unreleased.
    pub fn exchange(&mut self, index: usize, element: T) -> T {
        self.check_index(index);
        core::mem::replace(&mut self.items[index], element)
    }

    /// Remove and release the element at `index`, shifting the tail left.
    pub fn delete(&mut self, index: usize) {
        let old = self.remove(index);
        self.release_one(old);
    }

    /// Remove the element at `index` and return it unreleased.
    pub fn remove(&mut self, index: usize) -> T {
        self.check_index(index);
        self.items.remove(index)
    }

    pub fn sort<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.items.sort_by(|a, b| compare(a, b));
    }

    /// Find an element comparing `Equal` to `key` within `[start, len)`.
    ///
    /// With `sorted == true` this is a binary search and the range must be
    /// ascending under `compare`; otherwise it is a linear scan returning the
    /// first match. The returned index is absolute. Panics unless
    /// `start <= len()`.
    pub fn search<F>(&self, key: &T, mut compare: F, start: usize, sorted: bool) -> Option<usize>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        assert!(
            start <= self.items.len(),
            "search start {} out of range for length {}",
            start,
            self.items.len()
        );
        let tail = &self.items[start..];
        let found = if sorted {
            tail.binary_search_by(|probe| compare(probe, key)).ok()
        } else {
            tail.iter()
                .position(|probe| compare(probe, key) == Ordering::Equal)
        };
        found.map(|i| start + i)
    }

    pub fn visit<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        for item in &self.items {
            visit(item);
        }
    }

    pub fn visit_mut<F>(&mut self, mut visit: F)
    where
        F: FnMut(&mut T),
    {
        for item in &mut self.items {
            visit(item);
        }
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Release every element and free the buffer.
    pub fn dispose(self) {
        drop(self);
    }

    fn check_index(&self, index: usize) {
        assert!(
            index < self.items.len(),
            "index {} out of range for length {}",
            index,
            self.items.len()
        );
    }

    fn reserve_one(&mut self) {
        if self.items.len() < self.capacity {
            return;
        }
        let from = self.capacity;
        let to = self.growth.next_capacity(from);
        self.items.reserve_exact(to - self.items.len());
        self.capacity = to;
        tracing::trace!(from, to, "vector grew");
    }

    fn release_one(&self, item: T) {
        match &self.release {
            Some(release) => release(item),
            None => drop(item),
        }
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            let released = self.items.len();
            for item in self.items.drain(..) {
                release(item);
            }
            tracing::trace!(released, "vector disposed");
        }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        self.nth(index)
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
