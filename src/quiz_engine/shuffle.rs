use rand::Rng;

/// Shuffle a slice in place with `rng`.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    // Fisher-Yates shuffle
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Uniformly random permutation of the indices `0..len`.
pub fn random_permutation<R: Rng>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    shuffle(&mut indices, rng);
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn permutation_contains_every_index_once() {
        let mut rng = StdRng::seed_from_u64(42);
        let perm = random_permutation(20, &mut rng);

        let mut seen = std::collections::HashSet::new();
        for &i in &perm {
            assert!(i < 20, "index {i} out of range");
            assert!(seen.insert(i), "duplicate index: {i}");
        }
        assert_eq!(perm.len(), 20);
    }

    #[test]
    fn shuffle_is_deterministic_with_seed() {
        let make = |seed: u64| -> Vec<usize> {
            let mut rng = StdRng::seed_from_u64(seed);
            random_permutation(30, &mut rng)
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn degenerate_lengths_do_not_panic() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_permutation(0, &mut rng).is_empty());
        assert_eq!(random_permutation(1, &mut rng), vec![0]);
    }
}
