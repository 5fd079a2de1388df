//! see [`RobinHoodMap`]

use core::{fmt, mem};

use alloc::boxed::Box;

use typed_ops::{ElementKind, ElementOps, Formatted, HashOps};

use crate::{
    iter::{Iter, Keys, Values},
    slot::{empty_slots, Entry, Slot},
};

/// The number of slots in a freshly created [`RobinHoodMap`]
///
/// This must be a power of two, every resize doubles it.
pub const INITIAL_CAPACITY: usize = 16;

/// An open-addressing hash map using Robin Hood linear probing and
/// backward-shift deletion
///
/// The map owns a duplicate of every key and value inserted through
/// [`RobinHoodMap::insert`], and releases both when an entry is removed or the
/// map is dropped.
pub struct RobinHoodMap<K: HashOps, V: ElementOps> {
    pub(crate) slots: Box<[Slot<K, V>]>,
    pub(crate) len: usize,
}

#[inline]
pub(crate) fn ideal_index<K: HashOps>(key: &K, mask: usize) -> usize {
    (key.digest() & mask as u64) as usize
}

/// Walk forward from the entry's ideal slot, swapping it with any resident that
/// is closer to home than it is, until it lands in an empty slot
///
/// If the incoming key is already present, nothing is moved and the index of
/// the existing entry is handed back along with the incoming entry.
///
/// There must be at least one empty slot.
fn seat<K: HashOps, V>(
    slots: &mut [Slot<K, V>],
    mut homeless: Entry<K, V>,
) -> Result<(), (usize, Entry<K, V>)> {
    let mask = slots.len() - 1;
    let mut index = ideal_index(&homeless.key, mask);
    // an existing entry for the key is always reached before the first swap
    let mut carrying_incoming = true;

    loop {
        let Some(resident) = slots[index].entry_mut() else {
            slots[index] = Slot::Filled(homeless);
            return Ok(());
        };

        if carrying_incoming && resident.key.same_key(&homeless.key) {
            return Err((index, homeless));
        }

        if homeless.displacement > resident.displacement {
            mem::swap(resident, &mut homeless);
            carrying_incoming = false;
        }

        index = (index + 1) & mask;
        homeless.displacement += 1;
    }
}

impl<K: HashOps, V: ElementOps> RobinHoodMap<K, V> {
    /// Create an empty map with [`INITIAL_CAPACITY`] slots
    pub fn new() -> Self {
        Self {
            slots: empty_slots(INITIAL_CAPACITY),
            len: 0,
        }
    }

    /// The kind of the keys in this map
    pub const fn key_kind(&self) -> ElementKind {
        K::KIND
    }

    /// The kind of the values in this map
    pub const fn value_kind(&self) -> ElementKind {
        V::KIND
    }

    /// The number of live entries
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if there are no live entries
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of slots, always a power of two
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn mask(&self) -> usize {
        self.slots.len() - 1
    }

    /// Find the slot holding `key`
    ///
    /// The scan stops at the first empty slot, or at the first resident that is
    /// closer to its own ideal slot than `key` would be at that position.
    fn find(&self, key: &K) -> Option<usize> {
        let mask = self.mask();
        let mut index = ideal_index(key, mask);

        for distance in 0..self.slots.len() {
            let entry = self.slots[index].entry()?;

            if distance > entry.displacement {
                return None;
            }

            if entry.key.same_key(key) {
                return Some(index);
            }

            index = (index + 1) & mask;
        }

        None
    }

    /// Get a reference to the value associated with `key`
    ///
    /// Returns None if the key is not in the map
    pub fn get(&self, key: &K) -> Option<&V> {
        let index = self.find(key)?;
        self.slots[index].entry().map(|entry| &entry.value)
    }

    /// Get a mutable reference to the value associated with `key`
    ///
    /// Returns None if the key is not in the map
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.find(key)?;
        self.slots[index].entry_mut().map(|entry| &mut entry.value)
    }

    /// Returns true if `key` is in the map
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    #[cold]
    #[inline(never)]
    fn grow(&mut self) {
        let capacity = self.slots.len() * 2;
        let old = mem::replace(&mut self.slots, empty_slots(capacity));

        for slot in old.into_vec() {
            if let Slot::Filled(mut entry) = slot {
                entry.displacement = 0;
                if seat(&mut self.slots, entry).is_err() {
                    unreachable!("duplicate key found while growing the table")
                }
            }
        }
    }

    /// Associate a duplicate of `value` with a duplicate of `key`
    ///
    /// If the key was already present, the old value is released and replaced.
    /// Returns true if the key was newly added.
    pub fn insert(&mut self, key: &K, value: &V) -> bool {
        match self.insert_owned(key.duplicate(), value.duplicate()) {
            Some(old) => {
                old.release();
                false
            }
            None => true,
        }
    }

    /// Associate `value` with `key`, moving both into the map
    ///
    /// If the key was already present, the map keeps its existing key, the
    /// incoming key is released, and the old value is handed back.
    pub fn insert_owned(&mut self, key: K, value: V) -> Option<V> {
        if self.len + 1 > self.slots.len() / 2 && !self.contains_key(&key) {
            self.grow();
        }

        let incoming = Entry {
            key,
            value,
            displacement: 0,
        };

        match seat(&mut self.slots, incoming) {
            Ok(()) => {
                self.len += 1;
                None
            }
            Err((index, incoming)) => {
                let Slot::Filled(resident) = &mut self.slots[index] else {
                    unreachable!("an existing key was reported in an empty slot")
                };

                incoming.key.release();
                Some(mem::replace(&mut resident.value, incoming.value))
            }
        }
    }

    /// Remove `key` from the map, handing back its value
    ///
    /// The stored key is released. Returns None if the key is not in the map.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.find(key)?;
        let entry = self.slots[index].take()?;
        self.len -= 1;
        self.backward_shift(index);

        entry.key.release();
        Some(entry.value)
    }

    /// Remove `key` from the map, releasing both the stored key and its value
    ///
    /// Returns false if the key is not in the map.
    pub fn delete(&mut self, key: &K) -> bool {
        match self.remove(key) {
            Some(value) => {
                value.release();
                true
            }
            None => false,
        }
    }

    /// Close the gap at `gap` by pulling each following displaced entry one
    /// slot back, until an empty slot or an entry already in its ideal slot
    fn backward_shift(&mut self, mut gap: usize) {
        let mask = self.mask();

        loop {
            let next = (gap + 1) & mask;

            let Some(entry) = self.slots[next].entry_mut() else {
                return;
            };

            if entry.displacement == 0 {
                return;
            }

            entry.displacement -= 1;
            self.slots.swap(gap, next);
            gap = next;
        }
    }

    /// The largest distance any entry sits from its ideal slot
    pub fn max_displacement(&self) -> usize {
        self.slots
            .iter()
            .filter_map(Slot::entry)
            .map(|entry| entry.displacement)
            .max()
            .unwrap_or(0)
    }

    /// Get an iterator over the entries in slot order
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.slots, self.len)
    }

    /// Get an iterator over the keys in slot order
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Get an iterator over the values in slot order
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Create a new map with the same capacity and layout, holding a duplicate
    /// of every key and value
    pub fn duplicate(&self) -> Self {
        let slots = self
            .slots
            .iter()
            .map(|slot| match slot {
                Slot::Empty => Slot::Empty,
                Slot::Filled(entry) => Slot::Filled(Entry {
                    key: entry.key.duplicate(),
                    value: entry.value.duplicate(),
                    displacement: entry.displacement,
                }),
            })
            .collect();

        Self {
            slots,
            len: self.len,
        }
    }

    /// Release every key and value, and the slot storage
    ///
    /// This is the same as dropping the map.
    pub fn destroy(self) {}
}

impl<K: HashOps, V: ElementOps> Drop for RobinHoodMap<K, V> {
    fn drop(&mut self) {
        for slot in self.slots.iter_mut() {
            if let Some(entry) = slot.take() {
                entry.key.release();
                entry.value.release();
            }
        }
    }
}

impl<K: HashOps, V: ElementOps> Default for RobinHoodMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: HashOps, V: ElementOps> Clone for RobinHoodMap<K, V> {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl<K: HashOps, V: ElementOps> Extend<(K, V)> for RobinHoodMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            if let Some(old) = self.insert_owned(key, value) {
                old.release();
            }
        }
    }
}

impl<K: HashOps, V: ElementOps> FromIterator<(K, V)> for RobinHoodMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a, K: HashOps, V: ElementOps> IntoIterator for &'a RobinHoodMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: HashOps, V: ElementOps> fmt::Display for RobinHoodMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("{ }");
        }

        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            key.fmt_element(f)?;
            f.write_str(": ")?;
            value.fmt_element(f)?;
        }
        f.write_str("}")
    }
}

impl<K: HashOps, V: ElementOps> fmt::Debug for RobinHoodMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.iter()
                    .map(|(key, value)| (Formatted(key), Formatted(value))),
            )
            .finish()
    }
}
