use crate::{
    config::{Lookup, MapConfig},
    error::{Error, Result},
    iter::{Iter, Keys, Values},
    prime::next_prime,
    probe::{Linear, Probe, Quadratic, Resolved},
    table::{Slot, SlotTable, hash_bucket},
};
use std::{
    borrow::Borrow,
    collections::hash_map::DefaultHasher,
    fmt,
    hash::{BuildHasher, BuildHasherDefault, Hash},
    marker::PhantomData,
    mem,
};

/// Hasher used when none is given; deterministic across runs
pub type DefaultHashBuilder = BuildHasherDefault<DefaultHasher>;

/// `OpenMap` resolving collisions with linear probing
pub type LinearProbingMap<K, V> = OpenMap<K, V, Linear>;

/// `OpenMap` resolving collisions with quadratic probing
pub type QuadraticProbingMap<K, V> = OpenMap<K, V, Quadratic>;

/// A hash map storing every entry directly in one flat slot array.
///
/// Collisions are resolved by walking the probe sequence of `P`. Removed entries
/// leave tombstones that are only cleared when the table grows. The table grows to
/// the next prime after twice its size as soon as the number of live entries is
/// strictly greater than `capacity * load_factor`.
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct OpenMap<K, V, P = Linear, S = DefaultHashBuilder> {
    /// The slot array
    table: SlotTable<K, V>,
    /// Number of occupied slots
    len: usize,
    /// Settings the map was built with
    config: MapConfig,
    /// Builds the hasher for each key
    hash_builder: S,
    /// The probing strategy is a type-level choice
    _probe: PhantomData<P>,
}

impl<K, V, P> Default for OpenMap<K, V, P, DefaultHashBuilder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, P> OpenMap<K, V, P, DefaultHashBuilder> {
    /// Creates an empty map with room for 29 slots and a load factor of 0.5
    #[must_use]
    pub fn new() -> Self {
        let config = MapConfig::default();
        let table_size = next_prime(config.initial_capacity);
        Self::from_parts(config, table_size, DefaultHashBuilder::default())
    }

    /// Creates an empty map from `config`.
    ///
    /// # Errors
    ///
    /// Fails if the configuration does not validate, see [`MapConfig::validate`].
    pub fn with_config(config: MapConfig) -> Result<Self> {
        Self::with_config_and_hasher(config, DefaultHashBuilder::default())
    }

    /// Creates an empty map whose table holds at least `capacity` slots.
    ///
    /// # Errors
    ///
    /// Fails if `capacity` is zero or larger than [`crate::MAX_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_config(MapConfig::new().initial_capacity(capacity))
    }
}

impl<K, V, P, S> OpenMap<K, V, P, S> {
    /// Creates an empty map from `config` that hashes keys with `hash_builder`.
    ///
    /// # Errors
    ///
    /// Fails if the configuration does not validate, see [`MapConfig::validate`].
    pub fn with_config_and_hasher(config: MapConfig, hash_builder: S) -> Result<Self> {
        let table_size = config.table_size()?;
        Ok(Self::from_parts(config, table_size, hash_builder))
    }

    /// Assembles a map around a fresh table
    fn from_parts(config: MapConfig, table_size: usize, hash_builder: S) -> Self {
        Self {
            table: SlotTable::new(table_size),
            len: 0,
            config,
            hash_builder,
            _probe: PhantomData,
        }
    }

    /// Returns the number of live entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map holds no live entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the number of live entries is above `capacity * load_factor`
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn is_full(&self) -> bool {
        self.len as f64 > self.capacity() as f64 * self.config.load_factor
    }

    /// Returns the number of slots in the table
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns the growth threshold
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.config.load_factor
    }

    /// Returns how `get` and `contains` resolve keys
    #[must_use]
    pub fn lookup(&self) -> Lookup {
        self.config.lookup
    }

    /// Removes every entry, keeping the current capacity
    pub fn clear(&mut self) {
        log::trace!("Clearing map with {} entries over {} slots", self.len, self.capacity());
        self.table = SlotTable::new(self.capacity());
        self.len = 0;
    }

    /// Iterates over the raw slots in index order
    pub fn slots(&self) -> std::slice::Iter<'_, Slot<K, V>> {
        self.table.slots().iter()
    }

    /// Returns an iterator over the live key-value pairs
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.table.slots(), self.len)
    }

    /// Returns an iterator over the keys of the live entries
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.table.slots(), self.len)
    }

    /// Returns an iterator over the values of the live entries
    #[must_use]
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.table.slots(), self.len)
    }
}

impl<K, V, P, S> OpenMap<K, V, P, S>
where
    K: Eq + Hash,
    P: Probe,
    S: BuildHasher,
{
    /// Returns the hash bucket where the probe sequence for `key` starts
    pub fn bucket_of<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        hash_bucket(self.hash_builder.hash_one(key), self.capacity())
    }

    /// Inserts a key-value pair.
    ///
    /// If the key is already present its value is replaced and the old value is
    /// returned; the length does not change in that case.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let start = self.bucket_of(&key);

        let previous = match P::locate(&self.table, start, &key) {
            Resolved::Found(index) => self.table.replace_value(index, value),
            Resolved::Available(index) => {
                self.table.occupy(index, key, value);
                self.len = self.len.saturating_add(1);
                None
            }
            Resolved::Exhausted => {
                log::trace!("Probe sequence exhausted at capacity {}, growing", self.capacity());
                self.grow();
                return self.put(key, value);
            }
        };

        if self.is_full() {
            self.grow();
        }

        previous
    }

    /// Inserts a key-value pair given as optional inputs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either the key or the value is `None`.
    pub fn put_checked(&mut self, key: Option<K>, value: Option<V>) -> Result<Option<V>> {
        let key = key.ok_or(Error::InvalidArgument("key is absent"))?;
        let value = value.ok_or(Error::InvalidArgument("value is absent"))?;
        Ok(self.put(key, value))
    }

    /// Removes a key, returning its value if it was present.
    ///
    /// The slot becomes a tombstone.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let start = self.bucket_of(key);

        let Resolved::Found(index) = P::locate(&self.table, start, key) else {
            return None;
        };

        let value = self.table.mark_removed(index)?;
        self.len = self.len.saturating_sub(1);
        Some(value)
    }

    /// Retrieves the value for a key.
    ///
    /// With [`Lookup::DirectBucket`] only the key's hash bucket is inspected, so a key
    /// that a collision pushed further along its probe sequence is not returned.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let start = self.bucket_of(key);

        let index = match self.config.lookup {
            Lookup::DirectBucket => start,
            Lookup::Probed => match P::locate(&self.table, start, key) {
                Resolved::Found(index) => index,
                Resolved::Available(_) | Resolved::Exhausted => return None,
            },
        };

        match self.table.slot(index)?.entry() {
            Some((stored, value)) if stored.borrow() == key => Some(value),
            _ => None,
        }
    }

    /// Returns true if `get` finds the key
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns how many slots the probe sequence examines to resolve `key`
    pub fn probe_count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let start = self.bucket_of(key);
        P::locate_counted(&self.table, start, key).1
    }

    /// Moves every live entry into a table of `next_prime(2 * capacity)` slots.
    ///
    /// Entries go through `put`, and tombstones are dropped.
    fn grow(&mut self) {
        let new_capacity = next_prime(self.capacity().saturating_mul(2));
        let old_table = mem::replace(&mut self.table, SlotTable::new(new_capacity));
        let carried = self.len;
        self.len = 0;

        log::debug!(
            "Growing table from {} to {new_capacity} slots, rehashing {carried} entries",
            old_table.capacity(),
        );

        for (key, value) in old_table.into_entries() {
            self.put(key, value);
        }
    }
}

impl<K, V, P, S> Extend<(K, V)> for OpenMap<K, V, P, S>
where
    K: Eq + Hash,
    P: Probe,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K, V, P> FromIterator<(K, V)> for OpenMap<K, V, P, DefaultHashBuilder>
where
    K: Eq + Hash,
    P: Probe,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a, K, V, P, S> IntoIterator for &'a OpenMap<K, V, P, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Dumps every slot on its own line: `"{index} empty"`, `"{index} removed"` or
/// `"{index} {key} {value}"`
impl<K, V, P, S> fmt::Display for OpenMap<K, V, P, S>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.slots().enumerate() {
            match slot {
                Slot::Empty => writeln!(f, "{index} empty")?,
                Slot::Tombstoned => writeln!(f, "{index} removed")?,
                Slot::Occupied(key, value) => writeln!(f, "{index} {key} {value}")?,
            }
        }
        Ok(())
    }
}
