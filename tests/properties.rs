extern crate rand;
extern crate rand_chacha;

extern crate strict_arrays;

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use strict_arrays::arrays::Array;
    use strict_arrays::arrays::expressions::merge;
    use strict_arrays::arrays::indexing::IndexSet;
    use strict_arrays::arrays::slices::StridedRange;

    const TRIALS: usize = 200;

    fn random_array<R: Rng>(random_generator: &mut R, size: usize) -> Array<i32> {
        (0..size)
            .map(|_| random_generator.random_range(-1000..1000))
            .collect()
    }

    fn random_index_set<R: Rng>(random_generator: &mut R, size: usize) -> IndexSet {
        (0..size).filter(|_| random_generator.random_bool(0.3)).collect()
    }

    #[test]
    fn test_resize_round_trips_preserve_prefix() {
        let mut random_generator = ChaCha8Rng::seed_from_u64(16);
        for _ in 0..TRIALS {
            let size = random_generator.random_range(0..20);
            let original = random_array(&mut random_generator, size);
            let mut array = original.clone();
            let grown = size + random_generator.random_range(0..10);
            array.resize(grown);
            assert_eq!(array.size(), grown);
            assert_eq!(&array.as_slice()[..size], original.as_slice());
            assert!(array.as_slice()[size..].iter().all(|&x| x == 0));
            array.resize(size);
            assert_eq!(array, original);
        }
    }

    #[test]
    fn test_complement_partitions_positions() {
        let mut random_generator = ChaCha8Rng::seed_from_u64(17);
        for _ in 0..TRIALS {
            let size = random_generator.random_range(0..30);
            let set = random_index_set(&mut random_generator, size);
            let complement = set.complement(size);
            assert!(complement.is_strictly_increasing());
            assert_eq!(set.len() + complement.len(), size);
            for position in complement.positions() {
                assert!(!set.positions().contains(position));
            }
            assert_eq!(complement.complement(size), set);
        }
        let full: IndexSet = (0..5).collect();
        assert!(full.complement(5).is_empty());
    }

    #[test]
    fn test_remove_indices_keeps_complement() {
        let mut random_generator = ChaCha8Rng::seed_from_u64(18);
        for _ in 0..TRIALS {
            let size = random_generator.random_range(0..30);
            let original = random_array(&mut random_generator, size);
            let set = random_index_set(&mut random_generator, size);
            let expected: Array<i32> = set
                .complement(size)
                .positions()
                .iter()
                .map(|&position| original.get(position))
                .collect();
            let mut array = original.clone();
            array.remove_indices(set);
            assert_eq!(array, expected);
        }
    }

    #[test]
    fn test_addition_is_elementwise() {
        let mut random_generator = ChaCha8Rng::seed_from_u64(19);
        for _ in 0..TRIALS {
            let size = random_generator.random_range(1..20);
            let a = random_array(&mut random_generator, size);
            let b = random_array(&mut random_generator, size);
            let sum = &a + &b;
            let position = random_generator.random_range(0..size);
            assert_eq!(sum.get(position), a.get(position) + b.get(position));
        }
    }

    #[test]
    fn test_merge_maps_positions() {
        let mut random_generator = ChaCha8Rng::seed_from_u64(20);
        for _ in 0..TRIALS {
            let a_size = random_generator.random_range(0..10);
            let b_size = random_generator.random_range(0..10);
            let a = random_array(&mut random_generator, a_size);
            let b = random_array(&mut random_generator, b_size);
            let merged = merge(&a, &b);
            assert_eq!(merged.size(), a.size() + b.size());
            for position in 0..merged.size() {
                let expected = if position < a.size() {
                    a.get(position)
                } else {
                    b.get(position - a.size())
                };
                assert_eq!(merged.get(position), expected);
            }
        }
    }

    #[test]
    fn test_assignment_through_random_strides() {
        let mut random_generator = ChaCha8Rng::seed_from_u64(21);
        for _ in 0..TRIALS {
            let size = random_generator.random_range(1..20);
            let original = random_array(&mut random_generator, size);
            let start = random_generator.random_range(0..size);
            let stride = random_generator.random_range(1..4_i64) as isize;
            let count = (size - start).div_ceil(stride as usize);
            let range = StridedRange::new(start, count, stride);
            let mut array = original.clone();
            let replacement = random_array(&mut random_generator, count);
            array.slice_mut(range).assign(&replacement);
            let touched: Vec<usize> = range.positions().collect();
            for position in 0..size {
                match touched.iter().position(|&p| p == position) {
                    Some(i) => assert_eq!(array.get(position), replacement.get(i)),
                    None => assert_eq!(array.get(position), original.get(position)),
                }
            }
            assert_eq!(array.slice(range).to_array(), replacement);
        }
    }
}
