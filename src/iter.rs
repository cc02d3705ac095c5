//! Iterators over the live entries of an `OpenMap`
//!
//! Each iterator walks the slots forward once, skipping empty and tombstoned
//! slots, and stops after yielding as many entries as the map held when the
//! iterator was created.

use crate::{
    error::{Error, Result},
    table::Slot,
};
use std::iter::FusedIterator;

/// Slot cursor with a budget of entries still to yield
#[derive(Debug, Clone)]
struct Cursor<'a, K, V> {
    /// Slots being walked
    slots: &'a [Slot<K, V>],
    /// Index of the next slot to inspect
    index: usize,
    /// Entries left to yield
    remaining: usize,
}

impl<'a, K, V> Cursor<'a, K, V> {
    /// Starts at slot 0 with a budget of `len` entries
    fn new(slots: &'a [Slot<K, V>], len: usize) -> Self {
        Self { slots, index: 0, remaining: len }
    }

    /// Moves past the next occupied slot and returns its entry
    fn advance(&mut self) -> Result<(&'a K, &'a V)> {
        if self.remaining == 0 {
            return Err(Error::NoSuchElement);
        }

        while let Some(slot) = self.slots.get(self.index) {
            self.index = self.index.saturating_add(1);
            if let Some(entry) = slot.entry() {
                self.remaining = self.remaining.saturating_sub(1);
                return Ok(entry);
            }
        }

        // ran off the end with budget left; only a corrupted length gets here
        self.remaining = 0;
        Err(Error::NoSuchElement)
    }
}

/// Iterator over the live key-value pairs of a map
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// Position and budget
    cursor: Cursor<'a, K, V>,
}

impl<'a, K, V> Iter<'a, K, V> {
    /// Creates an iterator that yields `len` entries from `slots`
    pub(crate) fn new(slots: &'a [Slot<K, V>], len: usize) -> Self {
        Self { cursor: Cursor::new(slots, len) }
    }

    /// Returns true while there are entries left to yield
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.cursor.remaining > 0
    }

    /// Advances the iterator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchElement`] once every entry has been yielded.
    pub fn try_next(&mut self) -> Result<(&'a K, &'a V)> {
        self.cursor.advance()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cursor.remaining, Some(self.cursor.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Iterator over the keys of a map
#[derive(Debug, Clone)]
pub struct Keys<'a, K, V> {
    /// Underlying entry iterator
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    /// Creates an iterator that yields `len` keys from `slots`
    pub(crate) fn new(slots: &'a [Slot<K, V>], len: usize) -> Self {
        Self { inner: Iter::new(slots, len) }
    }

    /// Returns true while there are keys left to yield
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    /// Advances the iterator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchElement`] once every key has been yielded.
    pub fn try_next(&mut self) -> Result<&'a K> {
        self.inner.try_next().map(|(key, _)| key)
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Iterator over the values of a map
#[derive(Debug, Clone)]
pub struct Values<'a, K, V> {
    /// Underlying entry iterator
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
    /// Creates an iterator that yields `len` values from `slots`
    pub(crate) fn new(slots: &'a [Slot<K, V>], len: usize) -> Self {
        Self { inner: Iter::new(slots, len) }
    }

    /// Returns true while there are values left to yield
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    /// Advances the iterator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchElement`] once every value has been yielded.
    pub fn try_next(&mut self) -> Result<&'a V> {
        self.inner.try_next().map(|(_, value)| value)
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::table::SlotTable;

    fn sample() -> SlotTable<&'static str, u32> {
        let mut table = SlotTable::new(7);
        table.occupy(1, "a", 1);
        table.occupy(2, "gone", 0);
        table.occupy(4, "b", 2);
        table.occupy(6, "c", 3);
        table.mark_removed(2);
        table
    }

    #[test]
    fn test_keys_skip_empty_and_removed() {
        let table = sample();
        let keys: Vec<_> = Keys::new(table.slots(), 3).copied().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_values_in_lock_step_with_keys() {
        let table = sample();
        let mut keys = Keys::new(table.slots(), 3);
        let mut values = Values::new(table.slots(), 3);

        let mut pairs = Vec::new();
        while keys.has_next() {
            pairs.push((*keys.try_next().unwrap(), *values.try_next().unwrap()));
        }

        assert!(!values.has_next());
        assert_eq!(pairs, vec![("a", 1), ("b", 2), ("c", 3)]);
    }

    #[test]
    fn test_try_next_after_exhaustion() {
        let table = sample();
        let mut iter = Iter::new(table.slots(), 3);
        assert_eq!(iter.len(), 3);

        assert_eq!(iter.try_next(), Ok((&"a", &1)));
        assert_eq!(iter.len(), 2);
        iter.try_next().unwrap();
        iter.try_next().unwrap();

        assert!(!iter.has_next());
        assert_eq!(iter.try_next(), Err(Error::NoSuchElement));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_budget_stops_before_trailing_slots() {
        let table = sample();
        let keys: Vec<_> = Keys::new(table.slots(), 2).copied().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_table() {
        let table: SlotTable<u8, u8> = SlotTable::new(3);
        let mut values = Values::new(table.slots(), 0);
        assert!(!values.has_next());
        assert_eq!(values.try_next(), Err(Error::NoSuchElement));
    }
}
