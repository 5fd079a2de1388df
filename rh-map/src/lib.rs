#![no_std]
#![forbid(
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks,
    unsafe_op_in_unsafe_fn,
    missing_docs,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]

//! # rh-map
//!
//! [`RobinHoodMap`] is an open-addressing hash map over the capabilities in
//! [`typed_ops`], using linear probing with Robin Hood displacement balancing.
//!
//! ## Robin Hood probing
//!
//! Every entry remembers its displacement, how many slots past its ideal slot
//! (`digest & (capacity - 1)`) it ended up. On insert, the incoming entry walks
//! forward from its ideal slot, and whenever it is farther from home than the
//! resident of a slot, it takes that slot and the resident continues the walk
//! instead. This keeps the variance of displacements low, and gives lookups an
//! early exit: once a lookup reaches a resident that is closer to home than the
//! wanted key would be, the key can't be in the table.
//!
//! ```
//! use rh_map::RobinHoodMap;
//!
//! let mut map = RobinHoodMap::<u64, u64>::new();
//!
//! // all three keys want slot 5 of the 16 initial slots
//! map.insert(&5, &50);
//! map.insert(&21, &210);
//! map.insert(&37, &370);
//!
//! assert_eq!(map.get(&21), Some(&210));
//! assert_eq!(map.get(&53), None);
//! assert_eq!(map.max_displacement(), 2);
//! map.check_invariants().unwrap();
//! ```
//!
//! ## Backward-shift deletion
//!
//! Removing an entry leaves no tombstone. Instead, each following entry that is
//! not already in its ideal slot is pulled back by one slot, until an empty
//! slot or an entry at home is reached.
//!
//! ```
//! use rh_map::RobinHoodMap;
//!
//! let mut map = RobinHoodMap::<u64, u64>::new();
//! map.insert(&5, &50);
//! map.insert(&21, &210);
//!
//! assert_eq!(map.remove(&5), Some(50));
//! assert_eq!(map.max_displacement(), 0);
//! assert_eq!(map.to_string(), "{21: 210}");
//! ```
//!
//! ## Growth
//!
//! The map never fills more than half of its slots. An insert of a new key
//! that would cross that line first doubles the slot count and re-seats every
//! entry. The map never shrinks.
//!
//! ## Ownership
//!
//! The map duplicates and owns both keys and values, and releases both through
//! [`ElementOps::release`](typed_ops::ElementOps::release) when they leave.
//!
//! Only kinds with [`HashOps`](typed_ops::HashOps) can be keys, so nested arrays are
//! rejected as keys at compile time
//!
//! ```compile_fail
//! use rh_map::RobinHoodMap;
//! use typed_vec::TypedVec;
//!
//! let map = RobinHoodMap::<TypedVec<u64>, u64>::new();
//! ```
//!
//! But they are fine as values
//!
//! ```
//! use rh_map::RobinHoodMap;
//! use typed_vec::TypedVec;
//!
//! let mut map = RobinHoodMap::<u64, TypedVec<u64>>::new();
//! let row: TypedVec<u64> = (1..4).collect();
//! map.insert(&1, &row);
//! assert_eq!(map.to_string(), "{1: [1, 2, 3]}");
//! ```

extern crate alloc;

pub mod check;
pub mod iter;
pub mod map;

mod slot;

pub use check::InvariantViolation;
pub use map::{RobinHoodMap, INITIAL_CAPACITY};
