//! Construction-time configuration

use crate::{
    error::{Error, Result},
    prime::next_prime,
};

/// Requested capacity used by `OpenMap::new`
pub const DEFAULT_CAPACITY: usize = 27;

/// Largest initial capacity accepted at construction
///
/// Growth is allowed to go past this value.
pub const MAX_CAPACITY: usize = 10_000;

/// Fraction of the table that may be live before the table grows
pub const DEFAULT_LOAD_FACTOR: f64 = 0.5;

/// How `get` and `contains` find a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lookup {
    /// Only the key's hash bucket is inspected.
    ///
    /// A key that was displaced along its probe sequence by a collision is
    /// still stored (and removable), but `get` does not see it.
    #[default]
    DirectBucket,

    /// The probe sequence is walked the same way `put` and `remove` walk it
    Probed,
}

/// Options for building an `OpenMap`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    /// Requested number of slots, rounded up to a prime
    pub(crate) initial_capacity: usize,

    /// Growth threshold in (0, 1]
    pub(crate) load_factor: f64,

    /// Lookup mode for `get` and `contains`
    pub(crate) lookup: Lookup,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
            lookup: Lookup::DirectBucket,
        }
    }
}

impl MapConfig {
    /// Creates a configuration with the default capacity, load factor and lookup mode
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the requested initial capacity.
    ///
    /// The table is sized to the smallest prime that is at least this large.
    ///
    /// Defaults to 27 (a table of 29 slots).
    #[must_use]
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the load factor.
    ///
    /// The table grows as soon as the number of live entries is strictly greater
    /// than `capacity * load_factor`.
    ///
    /// Defaults to 0.5.
    #[must_use]
    pub fn load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Sets how `get` and `contains` resolve keys.
    ///
    /// Defaults to [`Lookup::DirectBucket`].
    #[must_use]
    pub fn lookup(mut self, lookup: Lookup) -> Self {
        self.lookup = lookup;
        self
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the capacity is zero or the load factor
    /// is not in (0, 1], and [`Error::CapacityExceeded`] if the capacity is above
    /// [`MAX_CAPACITY`].
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(Error::InvalidConfiguration("initial capacity must be greater than 0"));
        }

        // also rejects NaN
        if !(self.load_factor > 0.0 && self.load_factor <= 1.0) {
            return Err(Error::InvalidConfiguration("load factor must be in (0, 1]"));
        }

        if self.initial_capacity > MAX_CAPACITY {
            return Err(Error::capacity_exceeded(self.initial_capacity));
        }

        Ok(())
    }

    /// Number of slots the table starts with.
    ///
    /// # Errors
    ///
    /// Same as [`MapConfig::validate`].
    pub fn table_size(&self) -> Result<usize> {
        self.validate()?;
        Ok(next_prime(self.initial_capacity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_size() {
        assert_eq!(MapConfig::default().table_size(), Ok(29));
    }

    #[test]
    fn test_prime_capacity_is_kept() {
        assert_eq!(MapConfig::new().initial_capacity(31).table_size(), Ok(31));
    }

    #[test]
    fn test_zero_capacity() {
        assert!(matches!(
            MapConfig::new().initial_capacity(0).validate(),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_bad_load_factor() {
        for load_factor in [0.0, -0.5, 1.5, f64::NAN] {
            assert!(
                matches!(
                    MapConfig::new().load_factor(load_factor).validate(),
                    Err(Error::InvalidConfiguration(_))
                ),
                "load factor {load_factor} should be rejected"
            );
        }

        assert_eq!(MapConfig::new().load_factor(1.0).validate(), Ok(()));
    }

    #[test]
    fn test_capacity_ceiling() {
        assert_eq!(MapConfig::new().initial_capacity(MAX_CAPACITY).validate(), Ok(()));
        assert_eq!(
            MapConfig::new().initial_capacity(MAX_CAPACITY + 1).validate(),
            Err(Error::CapacityExceeded { requested: 10_001, max: 10_000 })
        );
    }

    #[test]
    fn test_non_positive_checked_before_ceiling() {
        assert!(matches!(
            MapConfig::new().initial_capacity(20_000).load_factor(0.0).validate(),
            Err(Error::InvalidConfiguration(_))
        ));
    }
}
