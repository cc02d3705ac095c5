//! Utility functions and traits for `OpenMap`

use crate::{
    config::MapConfig,
    error::Result,
    map::{DefaultHashBuilder, OpenMap},
    probe::Probe,
};
use std::hash::Hash;

/// Extension trait for taking owned snapshots of a map
pub trait MapExtensions<K, V> {
    /// Returns the keys of the map as a Vec, in slot order
    fn key_list(&self) -> Vec<K>;

    /// Returns the values of the map as a Vec, in slot order
    fn value_list(&self) -> Vec<V>;

    /// Returns the key-value pairs of the map as a Vec, in slot order
    fn pairs(&self) -> Vec<(K, V)>;
}

impl<K, V, P, S> MapExtensions<K, V> for OpenMap<K, V, P, S>
where
    K: Clone,
    V: Clone,
{
    fn key_list(&self) -> Vec<K> {
        self.keys().cloned().collect()
    }

    fn value_list(&self) -> Vec<V> {
        self.values().cloned().collect()
    }

    fn pairs(&self) -> Vec<(K, V)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

/// Creates an `OpenMap` from `config` and an iterator of key-value pairs
///
/// # Errors
///
/// Fails if the configuration does not validate, see [`MapConfig::validate`].
pub fn from_pairs<K, V, P, I>(
    config: MapConfig,
    pairs: I,
) -> Result<OpenMap<K, V, P, DefaultHashBuilder>>
where
    K: Eq + Hash,
    P: Probe,
    I: IntoIterator<Item = (K, V)>,
{
    let mut map = OpenMap::with_config(config)?;
    map.extend(pairs);
    Ok(map)
}
