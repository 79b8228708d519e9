//! RawVector: byte-width erased growable array.
//!
//! Elements are opaque `&[u8]` slices of a width fixed at construction. The
//! buffer holds exactly `len * elem_size` live bytes; capacity is tracked in
//! elements and backed by a reservation of `capacity * elem_size` bytes.
//! Positional insert and delete shift the tail in place with
//! `copy_within`, moving exactly `(len - index) * elem_size` bytes.

use crate::config::{Growth, VectorConfig};
use crate::error::ConfigError;
use core::cmp::Ordering;
use core::fmt;
use core::ops::Range;

/// Release hook for raw elements; sees each discarded element's bytes once.
pub type RawRelease = Box<dyn FnMut(&[u8])>;

pub struct RawVector {
    buf: Vec<u8>,
    elem_size: usize,
    capacity: usize,
    growth: Growth,
    release: Option<RawRelease>,
}

impl RawVector {
    /// Panics if `elem_size == 0`. `capacity == 0` selects the default.
    pub fn new(elem_size: usize, capacity: usize) -> Self {
        Self::with_config(elem_size, VectorConfig::with_capacity(capacity), None)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn with_release<F>(elem_size: usize, capacity: usize, release: F) -> Self
    where
        F: FnMut(&[u8]) + 'static,
    {
        let release: RawRelease = Box::new(release);
        Self::with_config(elem_size, VectorConfig::with_capacity(capacity), Some(release))
            .unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn with_config(
        elem_size: usize,
        config: VectorConfig,
        release: Option<RawRelease>,
    ) -> Result<Self, ConfigError> {
        if elem_size == 0 {
            return Err(ConfigError::ZeroElementSize);
        }
        config.validate()?;
        let capacity = config.resolved_capacity();
        Ok(Self {
            buf: Vec::with_capacity(byte_len(capacity, elem_size)),
            elem_size,
            capacity,
            growth: config.growth,
            release,
        })
    }

    pub fn elem_size(&self) -> usize {
        self.elem_size
    }
    pub fn len(&self) -> usize {
        self.buf.len() / self.elem_size
    }
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn nth(&self, index: usize) -> &[u8] {
        self.check_index(index);
        &self.buf[self.slot(index)]
    }

    pub fn nth_mut(&mut self, index: usize) -> &mut [u8] {
        self.check_index(index);
        let slot = self.slot(index);
        &mut self.buf[slot]
    }

    pub fn get(&self, index: usize) -> Option<&[u8]> {
        (index < self.len()).then(|| &self.buf[self.slot(index)])
    }

    /// All live elements, back to back.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Panics unless `index <= len()` and `element.len() == elem_size()`.
    pub fn insert(&mut self, index: usize, element: &[u8]) {
        self.check_width(element);
        let len = self.len();
        assert!(
            index <= len,
            "insert index {} out of range for length {}",
            index,
            len
        );
        self.reserve_one();

        let w = self.elem_size;
        let end = self.buf.len();
        self.buf.resize(end + w, 0);
        self.buf.copy_within(index * w..end, (index + 1) * w);
        self.buf[index * w..(index + 1) * w].copy_from_slice(element);
    }

    pub fn append(&mut self, element: &[u8]) {
        self.insert(self.len(), element);
    }

    /// Overwrite the element at `index`; the old bytes are released first.
    pub fn replace(&mut self, index: usize, element: &[u8]) {
        self.check_width(element);
        self.check_index(index);
        let slot = self.slot(index);
        if let Some(release) = self.release.as_mut() {
            release(&self.buf[slot.clone()]);
        }
        self.buf[slot].copy_from_slice(element);
    }

    /// Release the element at `index` and close the gap.
    pub fn delete(&mut self, index: usize) {
        self.check_index(index);
        let slot = self.slot(index);
        if let Some(release) = self.release.as_mut() {
            release(&self.buf[slot.clone()]);
        }
        let end = self.buf.len();
        self.buf.copy_within(slot.end..end, slot.start);
        self.buf.truncate(end - self.elem_size);
    }

    /// Reorder elements by `compare`. Capacity is preserved.
    pub fn sort<F>(&mut self, mut compare: F)
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        let w = self.elem_size;
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by(|&a, &b| compare(&self.buf[a * w..(a + 1) * w], &self.buf[b * w..(b + 1) * w]));

        let mut sorted = Vec::with_capacity(self.buf.capacity());
        for i in order {
            sorted.extend_from_slice(&self.buf[i * w..(i + 1) * w]);
        }
        self.buf = sorted;
    }

    /// Same contract as `Vector::search`, over raw elements.
    pub fn search<F>(&self, key: &[u8], mut compare: F, start: usize, sorted: bool) -> Option<usize>
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        self.check_width(key);
        let len = self.len();
        assert!(
            start <= len,
            "search start {} out of range for length {}",
            start,
            len
        );
        if !sorted {
            return (start..len).find(|&i| compare(&self.buf[self.slot(i)], key) == Ordering::Equal);
        }

        let (mut lo, mut hi) = (start, len);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match compare(&self.buf[self.slot(mid)], key) {
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid,
                Ordering::Equal => return Some(mid),
            }
        }
        None
    }

    pub fn visit<F>(&self, mut visit: F)
    where
        F: FnMut(&[u8]),
    {
        for element in self.iter() {
            visit(element);
        }
    }

    pub fn iter(&self) -> core::slice::ChunksExact<'_, u8> {
        self.buf.chunks_exact(self.elem_size)
    }

    pub fn dispose(self) {
        drop(self);
    }

    #[inline]
    fn slot(&self, index: usize) -> Range<usize> {
        index * self.elem_size..(index + 1) * self.elem_size
    }

    fn check_index(&self, index: usize) {
        let len = self.len();
        assert!(index < len, "index {} out of range for length {}", index, len);
    }

    fn check_width(&self, element: &[u8]) {
        assert_eq!(
            element.len(),
            self.elem_size,
            "element is {} bytes wide, expected {}",
            element.len(),
            self.elem_size
        );
    }

    fn reserve_one(&mut self) {
        if self.len() < self.capacity {
            return;
        }
        let from = self.capacity;
        let to = self.growth.next_capacity(from);
        self.buf
            .reserve_exact(byte_len(to, self.elem_size) - self.buf.len());
        self.capacity = to;
        tracing::trace!(from, to, elem_size = self.elem_size, "raw vector grew");
    }
}

fn byte_len(elements: usize, elem_size: usize) -> usize {
    elements
        .checked_mul(elem_size)
        .unwrap_or_else(|| panic!("capacity overflow: {elements} x {elem_size} bytes"))
}

impl Drop for RawVector {
    fn drop(&mut self) {
        if let Some(release) = self.release.as_mut() {
            for element in self.buf.chunks_exact(self.elem_size) {
                release(element);
            }
            tracing::trace!(released = self.buf.len() / self.elem_size, "raw vector disposed");
        }
    }
}

impl fmt::Debug for RawVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawVector")
            .field("elem_size", &self.elem_size)
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
