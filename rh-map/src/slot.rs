//! The slot storage behind [`RobinHoodMap`](crate::RobinHoodMap)

use alloc::boxed::Box;

/// A live key-value pair and how far it sits from its ideal slot
pub(crate) struct Entry<K, V> {
    pub key: K,
    pub value: V,
    pub displacement: usize,
}

/// A single slot of the table, either empty or holding a live entry
///
/// There are no tombstones, removal always restores an empty slot.
pub(crate) enum Slot<K, V> {
    Empty,
    Filled(Entry<K, V>),
}

impl<K, V> Slot<K, V> {
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[inline]
    pub const fn entry(&self) -> Option<&Entry<K, V>> {
        match self {
            Self::Empty => None,
            Self::Filled(entry) => Some(entry),
        }
    }

    #[inline]
    pub fn entry_mut(&mut self) -> Option<&mut Entry<K, V>> {
        match self {
            Self::Empty => None,
            Self::Filled(entry) => Some(entry),
        }
    }

    /// Empty this slot, handing back the entry it held
    #[inline]
    pub fn take(&mut self) -> Option<Entry<K, V>> {
        match core::mem::replace(self, Self::Empty) {
            Self::Empty => None,
            Self::Filled(entry) => Some(entry),
        }
    }
}

/// Allocate `capacity` empty slots
pub(crate) fn empty_slots<K, V>(capacity: usize) -> Box<[Slot<K, V>]> {
    debug_assert!(capacity.is_power_of_two());
    (0..capacity).map(|_| Slot::Empty).collect()
}
