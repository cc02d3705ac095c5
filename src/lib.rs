//! # Probe Map
//!
//! A Rust implementation of an open-addressing hash map with pluggable probing.
//!
//! Every entry lives directly in one flat array of slots. Each slot is empty,
//! occupied, or tombstoned (removed). Collisions are resolved by one of two probe
//! sequences, chosen as a type parameter:
//!
//! - [`Linear`]: `start, start + 1, start + 2, ...`
//! - [`Quadratic`]: `start, start + 1, start + 4, start + 9, ...`
//!
//! Table sizes are always prime. The table grows to the next prime after twice its
//! size as soon as the number of live entries is strictly greater than
//! `capacity * load_factor`; growing rehashes every live entry and drops all
//! tombstones.
//!
//! ## Basic Usage
//!
//! ```rust
//! use probemap::LinearProbingMap;
//!
//! // Create a new map: 29 slots, load factor 0.5
//! let mut map = LinearProbingMap::new();
//!
//! // Insert values
//! assert_eq!(map.put("apple".to_string(), 1), None);
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Update values
//! assert_eq!(map.put("apple".to_string(), 10), Some(1));
//! assert_eq!(map.len(), 1);
//!
//! // Remove values
//! assert_eq!(map.remove("apple"), Some(10));
//! assert!(map.is_empty());
//! ```
//!
//! ## Lookup Modes
//!
//! By default `get` and `contains` only inspect the key's hash bucket. A key that a
//! collision pushed further along its probe sequence is still stored and can be
//! removed, but a direct lookup does not see it. [`Lookup::Probed`] walks the probe
//! sequence instead.
//!
//! ```rust
//! use probemap::{Lookup, MapConfig, QuadraticProbingMap};
//!
//! let config = MapConfig::new()
//!     .initial_capacity(64)
//!     .load_factor(0.75)
//!     .lookup(Lookup::Probed);
//!
//! let mut map: QuadraticProbingMap<u32, &str> = QuadraticProbingMap::with_config(config)?;
//! for i in 0..20 {
//!     map.put(i, "x");
//! }
//!
//! assert_eq!(map.capacity(), 67);
//! assert_eq!(map.len(), 20);
//! assert!(map.contains(&19));
//! # Ok::<(), probemap::Error>(())
//! ```
//!
//! ## Threads
//!
//! Maps are plain owned values with no interior synchronization. Sharing one across
//! threads is up to the caller.

/// Construction-time configuration
mod config;
/// Error type
mod error;
/// Iterators over live entries
mod iter;
/// The map facade
mod map;
/// Prime table sizing
mod prime;
/// Probe sequences
mod probe;
/// Slot states and the slot array
mod table;
/// Utility functions and traits for the map
mod utils;

pub use config::{DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR, Lookup, MAX_CAPACITY, MapConfig};
pub use error::{Error, Result};
pub use iter::{Iter, Keys, Values};
pub use map::{DefaultHashBuilder, LinearProbingMap, OpenMap, QuadraticProbingMap};
pub use prime::{is_prime, next_prime};
pub use probe::{Linear, Probe, Quadratic, Resolved};
pub use table::{Slot, SlotTable, hash_bucket};
pub use utils::{MapExtensions, from_pairs};
