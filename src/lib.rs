//! chainset: a growable vector and a fixed-bucket hash set that chains
//! colliding elements through per-bucket vectors.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: two reusable low-level containers configured at construction by
//!   element type (or byte width) and caller-supplied behavior: bucket
//!   hashing, three-way comparison, release.
//! - Layers:
//!   - Vector<T>: contiguous growable array with an explicit capacity that
//!     grows by a configurable policy (doubling by default) exactly when an
//!     insert finds it full, and never shrinks. Positional insert/delete
//!     shift the tail by one slot.
//!   - RawVector: the same array over opaque fixed-width byte elements, for
//!     callers that only know an element's size. Shifting is done on the
//!     raw buffer with `copy_within`.
//!   - HashSet<T, H, C>: a fixed number of `Vector<T>` buckets. `enter`
//!     dispatches by `H`, scans one bucket with `C`, then either replaces or
//!     appends. It adds no storage mechanics of its own.
//!
//! Constraints
//! - Single-threaded: containers holding a release hook share it through
//!   `Rc`, so they are `!Send`/`!Sync`.
//! - Unique keys per bucket under `C`; duplicate `enter` replaces.
//! - The bucket count is fixed at construction; there is no rehashing.
//! - `H` must agree with `C`: elements `C` calls equal must land in the same
//!   bucket. The set cannot check this.
//!
//! Release semantics
//! - A release hook runs exactly once per element the container discards:
//!   on `replace`, `delete`, `HashSet::enter` replacement, and at disposal
//!   (drop) for every live element in index order. Without a hook, discarded
//!   elements are dropped normally.
//! - `Vector::exchange` and `Vector::remove` hand the element back instead.
//!
//! Error model
//! - Contract violations (index or hash result out of range, wrong element
//!   width) panic at the call site.
//! - Lookups and searches report misses as `None`.
//! - Bad construction parameters are a `ConfigError` from the `with_config`
//!   constructors; the convenience constructors panic with the same message.
//!
//! Borrowing
//! - `nth`, `lookup` and iterators borrow the container, so holding a
//!   reference across a structural mutation does not compile.

mod config;
mod error;
mod hash_set;
mod raw_vector;
mod vector;
mod vector_proptest;

// Public surface
pub use config::{Growth, HashSetConfig, VectorConfig, DEFAULT_BUCKETS, DEFAULT_CAPACITY};
pub use error::ConfigError;
pub use hash_set::{BucketHasher, Comparator, DefaultBucketHasher, HashSet, NaturalOrder};
pub use raw_vector::{RawRelease, RawVector};
pub use vector::{Release, Vector};
