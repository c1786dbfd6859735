extern crate strict_arrays;

#[cfg(test)]
mod tests {
    use strict_arrays::arrays::errors::{ArrayError, InvalidIndexSetError, OutOfBoundsError};
    use strict_arrays::arrays::indexing::Last;
    use strict_arrays::arrays::{Array, FixedArray, attach};

    #[test]
    fn test_insert() {
        let mut array = Array::from(vec![1, 2, 3, 4]);
        array.insert(2, 99);
        assert_eq!(array, Array::from(vec![1, 2, 99, 3, 4]));
        array.insert(0, 0);
        assert_eq!(array.get(0), 0);
        assert_eq!(array.size(), 6);
    }

    #[test]
    fn test_insert_at_end_appends() {
        let mut array: Array<i32> = Array::empty();
        array.insert(0, 1);
        array.insert(1, 2);
        assert_eq!(array, Array::from(vec![1, 2]));
    }

    #[test]
    #[should_panic(expected = "Position 3 is out of bounds of an array of size 2")]
    fn test_insert_past_end() {
        let mut array = Array::from(vec![1, 2]);
        array.insert(3, 0);
    }

    #[test]
    fn test_insert_from_expression() {
        let mut array = Array::from(vec![1.0, 4.0]);
        let halves = Array::from(vec![1.0, 1.5]);
        array.insert_from(1, &halves * 2.0);
        assert_eq!(array, Array::from(vec![1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn test_remove() {
        let mut array = Array::from(vec![0, 1, 2, 3, 4]);
        array.remove(1, 2);
        assert_eq!(array, Array::from(vec![0, 3, 4]));
        array.remove(0, 3);
        assert!(array.is_empty());
    }

    #[test]
    fn test_remove_indices() {
        let mut array = Array::from(vec![10, 20, 30, 40]);
        array.remove_indices([0, 2]);
        assert_eq!(array, Array::from(vec![20, 40]));
        array.remove_indices(Vec::<usize>::new());
        assert_eq!(array, Array::from(vec![20, 40]));
    }

    #[test]
    fn test_remove_indices_rejects_unordered_sets() {
        let mut array = Array::from(vec![10, 20, 30, 40]);
        assert_eq!(
            array.try_remove_indices([2, 2]),
            Err(InvalidIndexSetError::NotStrictlyIncreasing { at: 1 })
        );
        assert_eq!(
            array.try_remove_indices([1, 4]),
            Err(InvalidIndexSetError::OutOfBounds(OutOfBoundsError {
                position: 4,
                size: 4
            }))
        );
        assert_eq!(array, Array::from(vec![10, 20, 30, 40]));
    }

    #[test]
    fn test_resize() {
        let mut array = Array::from(vec![1_u8, 2, 3]);
        array.resize(5);
        assert_eq!(array, Array::from(vec![1, 2, 3, 0, 0]));
        array.resize(2);
        assert_eq!(array, Array::from(vec![1, 2]));
        array.resize(0);
        assert!(array.is_empty());
    }

    #[test]
    fn test_swap_and_assign() {
        let mut a = Array::from(vec![1, 2]);
        let mut b = Array::from(vec![3, 4, 5]);
        a.swap(&mut b);
        assert_eq!(a.size(), 3);
        assert_eq!(b, Array::from(vec![1, 2]));
        b.assign(&a.slice(1..));
        assert_eq!(b, Array::from(vec![4, 5]));
    }

    #[test]
    fn test_errors_compose_with_question_mark() {
        fn last_two(array: &mut Array<i32>) -> Result<i32, ArrayError> {
            array.try_remove_indices([0])?;
            let first = array.try_get(0)?;
            let last = array.try_get(Last)?;
            Ok(first + last)
        }
        assert_eq!(last_two(&mut Array::from(vec![1, 2, 3])).ok(), Some(5));
        let error = last_two(&mut Array::from(vec![1])).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Position 0 is out of bounds of an array of size 0"
        );
    }

    #[test]
    fn test_construction() {
        assert_eq!(Array::filled(true, 2), Array::from([true, true]));
        assert_eq!(Array::<f32>::new(2), Array::from(vec![0.0, 0.0]));
        let collected: Array<i64> = (1..4).collect();
        assert_eq!(collected.into_vec(), vec![1, 2, 3]);
        let fixed = FixedArray::from([7, 8]);
        assert_eq!(Array::from_source(&fixed), Array::from(vec![7, 8]));
        let buffer = [1, 2, 3];
        assert_eq!(Array::from_source(&attach(&buffer)), Array::from(vec![1, 2, 3]));
    }

    #[test]
    fn test_map() {
        let mut array = Array::from(vec![1, 2, 3]);
        array.map_mut(|x| x * x);
        assert_eq!(array, Array::from(vec![1, 4, 9]));
        let halves = array.map(|x| x as f32 / 2.0);
        assert_eq!(halves, Array::from(vec![0.5, 2.0, 4.5]));
        for x in array.iter_mut() {
            *x += 1;
        }
        assert_eq!(array.as_slice(), &[2, 5, 10]);
    }
}
