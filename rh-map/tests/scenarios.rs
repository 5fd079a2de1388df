use std::{cell::Cell, fmt, rc::Rc};

use rh_map::RobinHoodMap;
use typed_ops::{ElementKind, ElementOps, HashOps};
use typed_vec::TypedVec;

/// An element which counts how many of its copies are alive
struct Tracked {
    id: u64,
    live: Rc<Cell<usize>>,
}

impl Tracked {
    fn new(id: u64, live: &Rc<Cell<usize>>) -> Self {
        live.set(live.get() + 1);
        Self {
            id,
            live: live.clone(),
        }
    }
}

impl ElementOps for Tracked {
    const KIND: ElementKind = ElementKind::U64;

    fn duplicate(&self) -> Self {
        Self::new(self.id, &self.live)
    }

    fn release(self) {
        self.live.set(self.live.get() - 1);
    }

    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.id)
    }
}

impl HashOps for Tracked {
    fn digest(&self) -> u64 {
        self.id
    }

    fn same_key(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[test]
fn test_colliding_pair_is_displaced_by_probe_distance() {
    let mut map = RobinHoodMap::<u64, u64>::new();
    assert_eq!(map.capacity(), 16);

    map.insert(&5, &1);
    assert_eq!(map.max_displacement(), 0);

    map.insert(&21, &2);
    assert_eq!(map.max_displacement(), 1);

    map.insert(&37, &3);
    assert_eq!(map.max_displacement(), 2);

    assert_eq!(map.get(&5), Some(&1));
    assert_eq!(map.get(&21), Some(&2));
    assert_eq!(map.get(&37), Some(&3));
    assert_eq!(map.to_string(), "{5: 1, 21: 2, 37: 3}");
    map.check_invariants().unwrap();
}

#[test]
fn test_remove_leaves_other_keys_alone() {
    let mut map = RobinHoodMap::<u64, u64>::new();
    let keys = [5, 21, 37, 6, 22, 15, 31, 0];
    for key in keys {
        map.insert(&key, &(key + 100));
    }

    for (i, key) in keys.iter().enumerate() {
        assert!(map.delete(key));
        assert_eq!(map.get(key), None);
        assert!(!map.delete(key));
        map.check_invariants().unwrap();

        for other in &keys[i + 1..] {
            assert_eq!(map.get(other), Some(&(other + 100)));
        }
    }
}

#[test]
fn test_load_factor_bound() {
    let mut map = RobinHoodMap::<u64, u64>::new();
    for key in 0..10_000u64 {
        map.insert(&key.wrapping_mul(0x9E37_79B9_7F4A_7C15), &key);
        assert!(map.len() <= map.capacity() / 2);
        assert!(map.capacity().is_power_of_two());
    }

    assert_eq!(map.capacity(), 32768);
    map.check_invariants().unwrap();
}

#[test]
fn test_map_owns_keys_and_values() {
    let live = Rc::new(Cell::new(0));

    let mut map = RobinHoodMap::<Tracked, Tracked>::new();
    for id in 0..40 {
        let key = Tracked::new(id, &live);
        let value = Tracked::new(id * 10, &live);
        map.insert(&key, &value);
        key.release();
        value.release();
    }
    // only the copies inside the map are alive, growing moves entries without copying
    assert_eq!(live.get(), 80);
    assert_eq!(map.capacity(), 128);

    // replacing releases the old value and the incoming duplicate key
    let key = Tracked::new(3, &live);
    let value = Tracked::new(999, &live);
    assert!(!map.insert(&key, &value));
    key.release();
    value.release();
    assert_eq!(live.get(), 80);

    let probe = Tracked::new(7, &live);
    assert!(map.delete(&probe));
    assert_eq!(live.get(), 79);

    let value = map.remove(&Tracked::new(8, &live)).unwrap();
    assert_eq!(value.id, 80);
    value.release();
    probe.release();

    // 38 entries left, plus the temporary probe for 8, which was dropped rather than released
    assert_eq!(live.get(), 76 + 1);

    map.destroy();
    assert_eq!(live.get(), 1);
}

#[test]
fn test_composite_values() {
    let mut map = RobinHoodMap::<u64, TypedVec<u64>>::new();
    let mut row: TypedVec<u64> = (0..3).collect();

    map.insert(&1, &row);
    row.push(&3);
    map.insert(&2, &row);

    assert_eq!(map.to_string(), "{1: [0, 1, 2], 2: [0, 1, 2, 3]}");

    map.get_mut(&1).unwrap().push(&9);
    assert_eq!(map.get(&1).unwrap().as_slice(), [0, 1, 2, 9]);
    assert_eq!(row.as_slice(), [0, 1, 2, 3]);
    assert_eq!(map.value_kind(), ElementKind::Array);
}
