use rand::{rngs::StdRng, Rng, SeedableRng};
use typed_vec::TypedVec;

#[test]
fn test_against_vec() {
    let mut arr = TypedVec::<u64>::new();
    let mut model = Vec::new();
    let mut snapshot: Option<(TypedVec<u64>, Vec<u64>)> = None;

    let seed = rand::random();
    let mut rng = StdRng::from_seed(seed);

    scopeguard::defer_on_unwind! {
        println!("SEED: {seed:?}");
    }

    for i in 0..1024 * 16 {
        scopeguard::defer_on_unwind! {
            println!("failed on iteration {i}")
        }
        match rng.random_range(0..=5) {
            0 | 1 => {
                let x = rng.random_range(0..1000);
                arr.push(&x);
                model.push(x);
            }
            2 => {
                let index = rng.random_range(0..=model.len());
                let expected = (index < model.len()).then(|| model.remove(index));
                assert_eq!(arr.try_remove(index), expected);
            }
            3 => {
                let index = rng.random_range(0..=model.len());
                assert_eq!(arr.get(index), model.get(index));
            }
            4 => {
                snapshot = Some((arr.duplicate(), model.clone()));
            }
            5 => {
                let sorted = arr.sorted();
                let mut expected = model.clone();
                expected.sort();
                assert_eq!(sorted.as_slice(), expected);
                assert_eq!(arr.as_slice(), model);
            }
            _ => unreachable!(),
        }

        assert_eq!(arr.len(), model.len());
        assert!(arr.len() <= arr.capacity() / 2);

        // mutations of the original never leak into a duplicate
        if let Some((copy, frozen)) = &snapshot {
            assert_eq!(copy.as_slice(), frozen.as_slice());
        }
    }
}

#[test]
fn test_remove_everything() {
    let mut arr: TypedVec<u64> = (0..1000).collect();

    for (i, x) in arr.iter().enumerate() {
        assert_eq!(*x, i as u64);
    }

    for i in 0..1000 {
        assert_eq!(arr.try_remove(0), Some(i));
    }

    assert!(arr.is_empty());
    assert_eq!(arr.to_string(), "[]");
}

#[test]
fn test_array_of_arrays() {
    let mut rows = TypedVec::<TypedVec<u64>>::new();
    for _ in 0..100 {
        let row: TypedVec<u64> = (0..100).collect();
        rows.push(&row);
    }

    assert_eq!(rows.len(), 100);
    assert!(rows.iter().all(|row| row.len() == 100));
    assert_eq!(rows[99][99], 99);
}
