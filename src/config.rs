//! Growth policy and construction parameters shared by the containers.

use crate::error::ConfigError;

/// Slots allocated when the caller asks for a capacity of zero.
pub const DEFAULT_CAPACITY: usize = 10;

/// Buckets used by `HashSet::new`.
pub const DEFAULT_BUCKETS: usize = 64;

/// How a full buffer is enlarged.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum Growth {
    /// Multiply capacity by two.
    #[default]
    Double,
    /// Multiply capacity by the given factor, rounding up.
    Factor(f32),
}

impl Growth {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Growth::Double => Ok(()),
            Growth::Factor(k) if k.is_finite() && k > 1.0 => Ok(()),
            Growth::Factor(k) => Err(ConfigError::InvalidGrowthFactor(k)),
        }
    }

    /// Capacity after one growth step from `current`. Always makes room for
    /// at least one more element.
    pub fn next_capacity(&self, current: usize) -> usize {
        let grown = match *self {
            Growth::Double => current.saturating_mul(2),
            Growth::Factor(k) => {
                let scaled = (current as f64 * k as f64).ceil();
                if scaled >= usize::MAX as f64 {
                    usize::MAX
                } else {
                    scaled as usize
                }
            }
        };
        grown.max(current.saturating_add(1))
    }
}

/// Construction parameters for `Vector` and `RawVector`.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct VectorConfig {
    /// Initial slot count; zero selects [`DEFAULT_CAPACITY`].
    pub initial_capacity: usize,
    pub growth: Growth,
}

impl VectorConfig {
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.growth.validate()
    }

    pub(crate) fn resolved_capacity(&self) -> usize {
        if self.initial_capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            self.initial_capacity
        }
    }
}

/// Construction parameters for `HashSet`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HashSetConfig {
    /// Fixed number of buckets; must be positive.
    pub buckets: usize,
    /// Configuration applied to every bucket.
    pub bucket: VectorConfig,
}

impl Default for HashSetConfig {
    fn default() -> Self {
        Self {
            buckets: DEFAULT_BUCKETS,
            bucket: VectorConfig::default(),
        }
    }
}

impl HashSetConfig {
    pub fn with_buckets(buckets: usize) -> Self {
        Self {
            buckets,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buckets == 0 {
            return Err(ConfigError::ZeroBuckets);
        }
        self.bucket.validate()
    }
}
