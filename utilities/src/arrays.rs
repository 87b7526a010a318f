use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded array in the same `5..105` range the terminal frontend draws bars for.
pub fn random_values(len: usize, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(5..105)).collect()
}

pub fn is_non_decreasing<T: PartialOrd>(slice: &[T]) -> bool {
    slice.windows(2).all(|pair| pair[0] <= pair[1])
}

/// True when both slices hold the same values the same number of times.
pub fn same_multiset(a: &[u32], b: &[u32]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

/// A handful of awkward shapes every sorter should survive.
pub fn shapes() -> Vec<Vec<u32>> {
    vec![
        vec![],
        vec![42],
        vec![2, 1],
        vec![1, 1, 1, 1],
        vec![5, 3, 8, 1],
        vec![9, 1, 1, 1],
        (1..40).collect(),
        (1..40).rev().collect(),
        random_values(64, 3),
        random_values(100, 11),
    ]
}
