//! Slot states and the fixed-length slot array

use std::mem;

/// State of a single slot in the table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Slot<K, V> {
    /// Never occupied since the table was created
    #[default]
    Empty,

    /// A live entry
    Occupied(K, V),

    /// Previously occupied, now removed.
    ///
    /// Kept so that probe sequences which passed through this slot still reach
    /// the entries placed after it.
    Tombstoned,
}

impl<K, V> Slot<K, V> {
    /// Returns true if the slot holds a live entry
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied(..))
    }

    /// Returns true if the slot has been removed
    #[must_use]
    pub fn is_tombstoned(&self) -> bool {
        matches!(self, Self::Tombstoned)
    }

    /// Returns the live entry stored in the slot, if any
    #[must_use]
    pub fn entry(&self) -> Option<(&K, &V)> {
        match self {
            Self::Occupied(key, value) => Some((key, value)),
            Self::Empty | Self::Tombstoned => None,
        }
    }
}

/// Reduces a hash to a starting bucket.
///
/// The hash is first reduced modulo 10 and only then modulo `capacity`, so every
/// key starts in one of at most 10 buckets. This clustering is part of the
/// observable placement behavior and is kept on purpose.
#[must_use]
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
pub fn hash_bucket(hash: u64, capacity: usize) -> usize {
    debug_assert_ne!(capacity, 0);
    // `hash % 10` is below 10, so the cast cannot truncate
    ((hash % 10) as usize) % capacity
}

/// Fixed-length array of slots.
///
/// The length never changes; growing the map means building a new table and
/// dropping the old one.
#[derive(Debug, Clone)]
pub struct SlotTable<K, V> {
    /// The slots, indexed by probe position
    slots: Box<[Slot<K, V>]>,
}

impl<K, V> SlotTable<K, V> {
    /// Creates an all-empty table with exactly `capacity` slots
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let slots = std::iter::repeat_with(|| Slot::Empty).take(capacity).collect();
        Self { slots }
    }

    /// Number of slots
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the slot at `index`
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&Slot<K, V>> {
        self.slots.get(index)
    }

    /// All slots in index order
    #[must_use]
    pub fn slots(&self) -> &[Slot<K, V>] {
        &self.slots
    }

    /// Places a new live entry at `index`, overwriting an empty or tombstoned slot
    pub(crate) fn occupy(&mut self, index: usize, key: K, value: V) {
        if let Some(slot) = self.slots.get_mut(index) {
            debug_assert!(!slot.is_occupied(), "slot {index} already holds a live entry");
            *slot = Slot::Occupied(key, value);
        }
    }

    /// Swaps the value of the live entry at `index`, returning the old value
    pub(crate) fn replace_value(&mut self, index: usize, value: V) -> Option<V> {
        match self.slots.get_mut(index) {
            Some(Slot::Occupied(_, current)) => Some(mem::replace(current, value)),
            _ => None,
        }
    }

    /// Marks the live entry at `index` as removed and hands back its value.
    ///
    /// Empty and tombstoned slots are left untouched.
    pub(crate) fn mark_removed(&mut self, index: usize) -> Option<V> {
        let slot = self.slots.get_mut(index)?;
        if !slot.is_occupied() {
            return None;
        }

        match mem::replace(slot, Slot::Tombstoned) {
            Slot::Occupied(_, value) => Some(value),
            Slot::Empty | Slot::Tombstoned => None,
        }
    }

    /// Number of live entries found by a full scan
    #[must_use]
    pub fn count_occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_occupied()).count()
    }

    /// Consumes the table, yielding every live entry in index order.
    ///
    /// Tombstones are dropped.
    pub fn into_entries(self) -> impl Iterator<Item = (K, V)> {
        self.slots.into_iter().filter_map(|slot| match slot {
            Slot::Occupied(key, value) => Some((key, value)),
            Slot::Empty | Slot::Tombstoned => None,
        })
    }
}
