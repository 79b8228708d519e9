//! HashSet: fixed bucket count, each bucket a `Vector` chaining the
//! elements whose hash lands on it.
//!
//! The set adds only dispatch on top of `Vector`: a bucket index from the
//! caller's hasher, then a linear scan of that one bucket with the caller's
//! comparator. Elements in different buckets are never compared, so a
//! hasher that splits two elements the comparator calls equal will store
//! both.

use crate::config::{HashSetConfig, DEFAULT_BUCKETS};
use crate::error::ConfigError;
use crate::vector::{Release, Vector};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use hashbrown::hash_map::DefaultHashBuilder;
use std::rc::Rc;

/// Maps an element to a bucket in `[0, buckets)`.
pub trait BucketHasher<T: ?Sized> {
    fn bucket(&self, element: &T, buckets: usize) -> usize;
}

impl<T: ?Sized, F> BucketHasher<T> for F
where
    F: Fn(&T, usize) -> usize,
{
    #[inline]
    fn bucket(&self, element: &T, buckets: usize) -> usize {
        self(element, buckets)
    }
}

/// Hashes `T: Hash` with a `BuildHasher` and reduces modulo the bucket count.
#[derive(Clone, Debug, Default)]
pub struct DefaultBucketHasher<S = DefaultHashBuilder> {
    build: S,
}

impl<S> DefaultBucketHasher<S> {
    pub fn with_hasher(build: S) -> Self {
        Self { build }
    }
}

impl<T, S> BucketHasher<T> for DefaultBucketHasher<S>
where
    T: ?Sized + Hash,
    S: BuildHasher,
{
    #[inline]
    fn bucket(&self, element: &T, buckets: usize) -> usize {
        (self.build.hash_one(element) % buckets as u64) as usize
    }
}

/// Three-way comparison; `Equal` means "same key".
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Compares with `T: Ord`.
#[derive(Copy, Clone, Debug, Default)]
pub struct NaturalOrder;

impl<T: ?Sized + Ord> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

pub struct HashSet<T, H = DefaultBucketHasher, C = NaturalOrder> {
    buckets: Box<[Vector<T>]>,
    len: usize,
    hasher: H,
    compare: C,
}

impl<T> HashSet<T>
where
    T: Hash + Ord,
{
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS, DefaultBucketHasher::default(), NaturalOrder)
    }
}

impl<T> Default for HashSet<T>
where
    T: Hash + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, H, C> HashSet<T, H, C>
where
    H: BucketHasher<T>,
    C: Comparator<T>,
{
    /// Panics if `buckets == 0`.
    pub fn with_buckets(buckets: usize, hasher: H, compare: C) -> Self {
        Self::with_config(HashSetConfig::with_buckets(buckets), hasher, compare, None)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    /// Like `with_buckets`, with a release hook shared by every bucket.
    pub fn with_release<F>(buckets: usize, hasher: H, compare: C, release: F) -> Self
    where
        F: Fn(T) + 'static,
    {
        let release: Release<T> = Rc::new(release);
        Self::with_config(
            HashSetConfig::with_buckets(buckets),
            hasher,
            compare,
            Some(release),
        )
        .unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn with_config(
        config: HashSetConfig,
        hasher: H,
        compare: C,
        release: Option<Release<T>>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let buckets = (0..config.buckets)
            .map(|_| Vector::with_config(config.bucket, release.clone()))
            .collect::<Result<Box<[_]>, _>>()?;
        tracing::debug!(buckets = config.buckets, "hash set created");
        Ok(Self {
            buckets,
            len: 0,
            hasher,
            compare,
        })
    }

    /// Total elements across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Elements chained in bucket `index`. Panics if out of range.
    pub fn bucket(&self, index: usize) -> &[T] {
        self.buckets[index].as_slice()
    }

    pub fn bucket_lens(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.iter().map(Vector::len)
    }

    /// Insert `element`, or replace the element it compares equal to.
    ///
    /// A replaced element goes through the release hook. Returns `true` when
    /// the element was new and the count grew.
    pub fn enter(&mut self, element: T) -> bool {
        let b = self.bucket_index(&element);
        let compare = &self.compare;
        let bucket = &mut self.buckets[b];
        match bucket.search(&element, |probe, key| compare.compare(probe, key), 0, false) {
            Some(i) => {
                bucket.replace(i, element);
                false
            }
            None => {
                bucket.append(element);
                self.len += 1;
                true
            }
        }
    }

    pub fn lookup(&self, key: &T) -> Option<&T> {
        let bucket = &self.buckets[self.bucket_index(key)];
        bucket
            .search(key, |probe, key| self.compare.compare(probe, key), 0, false)
            .map(|i| bucket.nth(i))
    }

    pub fn contains(&self, key: &T) -> bool {
        self.lookup(key).is_some()
    }

    /// Visit every element: buckets in increasing index, each bucket's
    /// elements contiguously in insertion order.
    pub fn visit<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        for bucket in self.buckets.iter() {
            bucket.visit(&mut visit);
        }
    }

    /// Iterates in the same order as `visit`.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.buckets.iter().flat_map(|b| b.iter())
    }

    /// Dispose every bucket, releasing all contained elements.
    pub fn dispose(self) {
        drop(self);
    }

    fn bucket_index(&self, element: &T) -> usize {
        let n = self.buckets.len();
        let b = self.hasher.bucket(element, n);
        assert!(b < n, "bucket hasher returned {} for {} buckets", b, n);
        b
    }
}

impl<T: fmt::Debug, H, C> fmt::Debug for HashSet<T, H, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.buckets.iter().flat_map(|b| b.iter()))
            .finish()
    }
}
