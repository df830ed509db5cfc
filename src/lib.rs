//! fixed-hashmap: a fixed-capacity map from string keys to values,
//! using array-based hashing with separate chaining.
//!
//! Summary
//! - One structure, `FixedHashMap<V, S>`: an array of `capacity` bucket
//!   chains plus a live-entry counter. A key hashes to one bucket; the
//!   bucket's chain is scanned linearly for string equality.
//! - Capacity is fixed at construction (zero is rejected with
//!   `InvalidCapacity`) and never changes; there is no resizing or
//!   rehashing.
//! - Once `len() == capacity()`, `set` on a new key returns `false`
//!   and leaves the map untouched. Overwriting an existing key, `get`,
//!   and `delete` are never blocked by fullness.
//! - Missing keys are normal outcomes: `get`/`delete` return `None`,
//!   never an error. `InvalidCapacity` at construction is the only
//!   failure in the crate.
//!
//! Constraints
//! - Single-threaded: mutation requires `&mut self`, which is also the
//!   serialization mechanism; the map provides no locking.
//! - Chains are unbounded. Heavy collisions degrade a bucket to a
//!   linear scan; there is no probing beyond the one computed index.
//! - The hasher builder is a type parameter (default
//!   `hashbrown::DefaultHashBuilder`), so callers and tests can pin
//!   keys to a single bucket with a constant hasher.
//!
//! Notes and non-goals
//! - No iteration over entries.
//! - No persistence or serialization.
//! - One value type per map instance; callers that want heterogeneous
//!   values can instantiate `FixedHashMap<Box<dyn Any>>` themselves.

mod fixed_hash_map;

// Public surface
pub use fixed_hash_map::{FixedHashMap, InvalidCapacity};
