//! Collision resolution strategies
//!
//! A strategy only decides which slot is the `step`-th candidate for a key whose
//! hash bucket is `start`. The walk itself is shared: it stops at the first live
//! slot holding the key, or at the first empty slot, remembering the first
//! tombstone on the way so that a new key can reuse it.

use crate::table::{Slot, SlotTable};
use std::borrow::Borrow;

/// Where a key lives, or where it would go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    /// The slot holds a live entry with an equal key
    Found(usize),

    /// The key is not on its probe sequence; a new entry belongs in this slot
    Available(usize),

    /// The walk visited `capacity` candidates without reaching an empty slot,
    /// a tombstone, or the key
    Exhausted,
}

/// A probe sequence
pub trait Probe {
    /// Returns the `step`-th candidate index for a walk starting at `start`.
    ///
    /// `step` 0 is always `start` itself, and the result is below `capacity`.
    fn candidate(start: usize, step: usize, capacity: usize) -> usize;

    /// Walks the probe sequence for `key`, returning the resolution and the number
    /// of slots examined
    fn locate_counted<K, V, Q>(
        table: &SlotTable<K, V>,
        start: usize,
        key: &Q,
    ) -> (Resolved, usize)
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let capacity = table.capacity();
        let mut first_tombstone = None;

        for step in 0..capacity {
            let index = Self::candidate(start, step, capacity);
            let probes = step.saturating_add(1);

            match table.slot(index) {
                None | Some(Slot::Empty) => {
                    return (Resolved::Available(first_tombstone.unwrap_or(index)), probes);
                }
                Some(Slot::Tombstoned) => {
                    if first_tombstone.is_none() {
                        first_tombstone = Some(index);
                    }
                }
                Some(Slot::Occupied(candidate, _)) => {
                    if candidate.borrow() == key {
                        return (Resolved::Found(index), probes);
                    }
                }
            }
        }

        let resolved = first_tombstone.map_or(Resolved::Exhausted, Resolved::Available);
        (resolved, capacity)
    }

    /// Walks the probe sequence for `key`
    fn locate<K, V, Q>(table: &SlotTable<K, V>, start: usize, key: &Q) -> Resolved
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        Self::locate_counted(table, start, key).0
    }
}

/// Visits `start, start + 1, start + 2, ...` modulo capacity
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl Probe for Linear {
    #[allow(clippy::arithmetic_side_effects)]
    fn candidate(start: usize, step: usize, capacity: usize) -> usize {
        // start and step are both below capacity
        (start + step) % capacity
    }
}

/// Visits `start, start + 1, start + 4, start + 9, ...` modulo capacity.
///
/// Every step is offset from the original start, not from the previous candidate.
/// For a prime capacity only about half of the slots are reachable, so a walk can
/// come back `Exhausted` while empty slots remain.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quadratic;

impl Probe for Quadratic {
    #[allow(clippy::arithmetic_side_effects)]
    fn candidate(start: usize, step: usize, capacity: usize) -> usize {
        let step = step % capacity;
        let offset = step.wrapping_mul(step) % capacity;
        (start % capacity + offset) % capacity
    }
}
