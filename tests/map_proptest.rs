#![allow(clippy::expect_used, clippy::panic, clippy::missing_docs_in_private_items)]

use probemap::{Linear, Lookup, MapConfig, OpenMap, Probe, Quadratic};
use proptest::{prelude::*, test_runner::TestCaseError};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
enum Op {
    Put(u16, u32),
    Remove(u16),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0u16..64, any::<u32>()).prop_map(|(k, v)| Op::Put(k, v)),
        1 => (0u16..64).prop_map(Op::Remove),
    ]
}

fn probed<P: Probe>(capacity: usize, load_factor: f64) -> OpenMap<u16, u32, P> {
    let config = MapConfig::new()
        .initial_capacity(capacity)
        .load_factor(load_factor)
        .lookup(Lookup::Probed);
    OpenMap::with_config(config).expect("valid config")
}

// Replays `ops` against the map and a std HashMap, checking they agree after each step
fn check_against_model<P: Probe>(
    ops: &[Op],
    capacity: usize,
    load_factor: f64,
) -> Result<(), TestCaseError> {
    let mut map = probed::<P>(capacity, load_factor);
    let mut model = HashMap::new();

    for op in ops {
        match *op {
            Op::Put(k, v) => {
                prop_assert_eq!(map.put(k, v), model.insert(k, v));
            }
            Op::Remove(k) => {
                prop_assert_eq!(map.remove(&k), model.remove(&k));
            }
        }

        prop_assert_eq!(map.len(), model.len());
        prop_assert_eq!(map.len(), map.slots().filter(|slot| slot.is_occupied()).count());
        prop_assert!(!map.is_full());
    }

    for k in 0u16..64 {
        prop_assert_eq!(map.get(&k), model.get(&k));
    }

    let mut pairs: Vec<(u16, u32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
    pairs.sort_unstable();
    let mut expected: Vec<(u16, u32)> = model.into_iter().collect();
    expected.sort_unstable();
    prop_assert_eq!(pairs, expected);

    Ok(())
}

// Keys and values each yield exactly `len` items, and keys are distinct
fn check_iteration<P: Probe>(ops: &[Op]) -> Result<(), TestCaseError> {
    let mut map = probed::<P>(7, 0.5);
    for op in ops {
        match *op {
            Op::Put(k, v) => {
                map.put(k, v);
            }
            Op::Remove(k) => {
                map.remove(&k);
            }
        }
    }

    let keys: Vec<u16> = map.keys().copied().collect();
    let distinct: HashSet<u16> = keys.iter().copied().collect();
    prop_assert_eq!(keys.len(), map.len());
    prop_assert_eq!(distinct.len(), map.len());
    prop_assert_eq!(map.values().count(), map.len());
    prop_assert_eq!(map.keys().len(), map.len());

    let mut values = map.values();
    for _ in 0..map.len() {
        prop_assert!(values.try_next().is_ok());
    }
    prop_assert!(values.try_next().is_err());

    Ok(())
}

proptest! {
    #[test]
    fn linear_matches_model(ops in proptest::collection::vec(op(), 1..200)) {
        check_against_model::<Linear>(&ops, 7, 0.5)?;
    }

    #[test]
    fn quadratic_matches_model(ops in proptest::collection::vec(op(), 1..200)) {
        check_against_model::<Quadratic>(&ops, 7, 0.5)?;
    }

    #[test]
    fn full_load_factor_matches_model(ops in proptest::collection::vec(op(), 1..200)) {
        check_against_model::<Linear>(&ops, 3, 1.0)?;
        check_against_model::<Quadratic>(&ops, 3, 1.0)?;
    }

    #[test]
    fn iteration_is_complete(ops in proptest::collection::vec(op(), 0..150)) {
        check_iteration::<Linear>(&ops)?;
        check_iteration::<Quadratic>(&ops)?;
    }

    #[test]
    fn remove_absent_is_idempotent(
        keys in proptest::collection::hash_set(0u16..1000, 0..40),
        absent in 1000u16..2000
    ) {
        let mut map = OpenMap::<u16, u16, Linear>::new();
        for &k in &keys {
            map.put(k, k);
        }
        let len = map.len();

        prop_assert_eq!(map.remove(&absent), None);
        prop_assert_eq!(map.remove(&absent), None);
        prop_assert_eq!(map.len(), len);
    }

    #[test]
    fn growth_keeps_every_key(count in 15usize..200) {
        let mut map = probed::<Quadratic>(27, 0.5);
        let initial = map.capacity();

        for k in 0..count {
            map.put(u16::try_from(k).expect("small key"), 0);
        }

        // 29 * 0.5 = 14.5, so 15 or more entries must have grown the table
        prop_assert!(map.capacity() > initial);
        prop_assert_eq!(map.len(), count);
        for k in 0..count {
            prop_assert!(map.contains(&u16::try_from(k).expect("small key")));
        }
    }

    #[test]
    fn direct_lookup_sees_keys_at_their_bucket(
        pairs in proptest::collection::hash_map(any::<u32>(), any::<u32>(), 1..60)
    ) {
        let mut map = OpenMap::<u32, u32, Linear>::new();
        for (&k, &v) in &pairs {
            map.put(k, v);
        }

        for (k, v) in &pairs {
            let bucket = map.bucket_of(k);
            let at_bucket = map
                .slots()
                .nth(bucket)
                .and_then(|slot| slot.entry())
                .is_some_and(|(stored, _)| stored == k);
            if at_bucket {
                prop_assert_eq!(map.get(k), Some(v));
            } else {
                prop_assert_eq!(map.get(k), None);
            }
        }
    }
}
