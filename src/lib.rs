//! containerkit: small generic container utilities.
//!
//! What's here
//! - `IndexHeap<T, L>`: a binary heap over a caller-supplied ordering
//!   predicate that mirrors every element's position back to its owner
//!   through an index-changed callback. The owner stores each element's
//!   last-reported index, which turns arbitrary-position removal and
//!   re-prioritization into O(log n) operations instead of an O(n) search.
//! - `OrdMap<K, V, S>`: a hash map that iterates in update order (least
//!   recently updated first). Nodes live in a slotmap behind generational
//!   keys, threaded on an intrusive doubly linked list; a `HashTable` over
//!   precomputed hashes gives O(1) average lookup without rehashing keys.
//! - `Set<E>`: a hash-backed set with whole-set algebra (union,
//!   intersection, difference, bulk insert/remove) and deterministic
//!   `Debug` output.
//!
//! Constraints
//! - Single-threaded: mutating operations take `&mut self`; none of the
//!   containers carry locks, and concurrent unsynchronized mutation is the
//!   caller's bug, not a supported mode.
//! - No operation blocks or performs I/O. The heap's callback runs
//!   synchronously inside the triggering call, before it returns.
//! - Precondition violations on index-taking heap operations (`fix`,
//!   `remove`) panic; emptiness-sensitive reads (`pop`, `peek`, `get`)
//!   return `Option`. State is never silently corrupted.
//!
//! Usage contracts the containers cannot check
//! - The heap's ordering predicate must be a consistent strict weak
//!   ordering, and an element whose priority is mutated in place must be
//!   repaired with `fix` before any other heap operation. Violations leave
//!   the heap producing wrong orderings, not memory unsafety.

pub mod index_heap;
mod index_heap_proptest;
pub mod ord_map;
pub mod set;

// Public surface
pub use index_heap::IndexHeap;
pub use ord_map::OrdMap;
pub use set::Set;
