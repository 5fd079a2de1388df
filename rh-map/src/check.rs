//! A consistency checker for the Robin Hood probe-chain invariants
//!
//! For every live entry at slot `i` with displacement `d`:
//!
//! * walking back `d` slots from `i` lands on the entry's ideal slot
//! * every slot between the ideal slot and `i` is filled
//! * every one of those slots sits at least as far from its own ideal slot as
//!   it does from the entry's ideal slot
//!
//! The last condition is what lets a lookup give up as soon as it reaches a
//! resident closer to home than the wanted key, so a map that breaks it can
//! report live keys as missing.

use typed_ops::{ElementOps, HashOps};

use crate::{map::ideal_index, slot::Slot, RobinHoodMap};

/// A broken invariant found by [`RobinHoodMap::check_invariants`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    /// The slot count is not a power of two
    #[error("capacity {capacity} is not a power of two")]
    CapacityNotPowerOfTwo {
        /// The slot count
        capacity: usize,
    },
    /// The live count doesn't match the number of filled slots
    #[error("map reports {len} entries, but {filled} slots are filled")]
    LenMismatch {
        /// The live count the map reports
        len: usize,
        /// The number of filled slots
        filled: usize,
    },
    /// More than half of the slots are filled
    #[error("{len} entries exceed half of the capacity {capacity}")]
    Overloaded {
        /// The live count
        len: usize,
        /// The slot count
        capacity: usize,
    },
    /// Walking back by the displacement doesn't land on the ideal slot
    #[error("slot {index} has displacement {displacement}, but its ideal slot is {ideal}")]
    WrongDisplacement {
        /// The slot holding the entry
        index: usize,
        /// The displacement stored with the entry
        displacement: usize,
        /// The ideal slot of the entry's key
        ideal: usize,
    },
    /// An empty slot breaks the probe chain of an entry
    #[error("slot {gap} is empty, but lies between slot {index} and its ideal slot {ideal}")]
    BrokenChain {
        /// The slot holding the entry
        index: usize,
        /// The ideal slot of the entry's key
        ideal: usize,
        /// The empty slot
        gap: usize,
    },
    /// A resident on an entry's probe chain is closer to home than the entry
    /// would be in its place
    #[error(
        "slot {index} is displaced by {displacement}, less than its distance {distance} from the ideal slot of slot {owner}"
    )]
    OutOfOrder {
        /// The slot whose displacement is too small
        index: usize,
        /// Its displacement
        displacement: usize,
        /// The slot holding the entry whose chain passes through `index`
        owner: usize,
        /// How far `index` is from the ideal slot of `owner`
        distance: usize,
    },
}

impl<K: HashOps, V: ElementOps> RobinHoodMap<K, V> {
    /// Verify the probe-chain invariants of every entry
    ///
    /// This walks every probe chain, so it's meant for tests and debugging, not
    /// for hot paths.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let capacity = self.slots.len();
        if !capacity.is_power_of_two() {
            return Err(InvariantViolation::CapacityNotPowerOfTwo { capacity });
        }

        let filled = self.slots.iter().filter(|slot| !slot.is_empty()).count();
        if filled != self.len {
            return Err(InvariantViolation::LenMismatch {
                len: self.len,
                filled,
            });
        }

        if self.len > capacity / 2 {
            return Err(InvariantViolation::Overloaded {
                len: self.len,
                capacity,
            });
        }

        let mask = capacity - 1;
        for (index, slot) in self.slots.iter().enumerate() {
            let Some(entry) = slot.entry() else {
                continue;
            };

            let ideal = ideal_index(&entry.key, mask);
            if (index.wrapping_sub(entry.displacement) & mask) != ideal
                || entry.displacement >= capacity
            {
                return Err(InvariantViolation::WrongDisplacement {
                    index,
                    displacement: entry.displacement,
                    ideal,
                });
            }

            for distance in 0..entry.displacement {
                let passed = (ideal + distance) & mask;
                match &self.slots[passed] {
                    Slot::Empty => {
                        return Err(InvariantViolation::BrokenChain {
                            index,
                            ideal,
                            gap: passed,
                        })
                    }
                    Slot::Filled(resident) if resident.displacement < distance => {
                        return Err(InvariantViolation::OutOfOrder {
                            index: passed,
                            displacement: resident.displacement,
                            owner: index,
                            distance,
                        })
                    }
                    Slot::Filled(_) => {}
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::Entry;

    #[test]
    fn test_empty_map() {
        RobinHoodMap::<u64, u64>::new().check_invariants().unwrap();
    }

    #[test]
    fn test_detects_wrong_displacement() {
        let mut map = RobinHoodMap::<u64, u64>::new();
        map.insert(&5, &0);
        map.insert(&21, &0);
        map.slots[6].entry_mut().unwrap().displacement = 0;

        assert_eq!(
            map.check_invariants(),
            Err(InvariantViolation::WrongDisplacement {
                index: 6,
                displacement: 0,
                ideal: 5,
            })
        );
    }

    #[test]
    fn test_detects_broken_chain() {
        let mut map = RobinHoodMap::<u64, u64>::new();
        map.insert(&5, &0);
        map.insert(&21, &0);
        // a tombstone-style removal, without the backward shift
        map.slots[5].take();
        map.len -= 1;

        assert_eq!(
            map.check_invariants(),
            Err(InvariantViolation::BrokenChain {
                index: 6,
                ideal: 5,
                gap: 5,
            })
        );
        // and that is exactly the state where lookups go wrong
        assert_eq!(map.get(&21), None);
    }

    #[test]
    fn test_detects_out_of_order() {
        let mut map = RobinHoodMap::<u64, u64>::new();
        // 6 at home in slot 6, with 21 pushed past it, which a Robin Hood
        // insert would never produce
        map.slots[5] = Slot::Filled(Entry {
            key: 5,
            value: 0,
            displacement: 0,
        });
        map.slots[6] = Slot::Filled(Entry {
            key: 6,
            value: 0,
            displacement: 0,
        });
        map.slots[7] = Slot::Filled(Entry {
            key: 21,
            value: 0,
            displacement: 2,
        });
        map.len = 3;

        assert_eq!(
            map.check_invariants(),
            Err(InvariantViolation::OutOfOrder {
                index: 6,
                displacement: 0,
                owner: 7,
                distance: 1,
            })
        );
        assert_eq!(map.get(&21), None);
    }

    #[test]
    fn test_detects_len_mismatch() {
        let mut map = RobinHoodMap::<u64, u64>::new();
        map.insert(&1, &1);
        map.len = 2;

        assert_eq!(
            map.check_invariants(),
            Err(InvariantViolation::LenMismatch { len: 2, filled: 1 })
        );
    }
}
