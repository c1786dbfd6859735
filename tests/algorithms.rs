extern crate strict_arrays;

#[cfg(test)]
mod tests {
    use strict_arrays::algorithms;
    use strict_arrays::arrays::Array;
    use strict_arrays::arrays::errors::InvalidMeanError;
    use strict_arrays::arrays::expressions::sequence;
    use strict_arrays::arrays::slices::{Even, Reverse};

    #[test]
    fn test_reductions() {
        let array = Array::from(vec![2.0, -3.0, 4.0]);
        assert_eq!(algorithms::sum(&array), 3.0);
        assert_eq!(algorithms::product(&array), -24.0);
        assert_eq!(algorithms::mean(&array), 1.0);
        assert_eq!(algorithms::norm_l1(&array), 9.0);
        assert_eq!(algorithms::norm_infinity(&array), 4.0);
        assert_eq!(algorithms::norm_l2(&Array::from(vec![3.0_f32, 4.0])), 5.0);
    }

    #[test]
    fn test_reductions_over_expressions() {
        assert_eq!(algorithms::sum(&sequence(1_u64, 100, 1)), 5050);
        let a = Array::from(vec![1, 2, 3]);
        let b = Array::from(vec![4, 5, 6]);
        assert_eq!(algorithms::sum(&(&a * &b)), algorithms::dot(&a, &b));
        assert_eq!(algorithms::mean(&Array::from(vec![1, 2])), 1);
    }

    #[test]
    fn test_extremes() {
        let array = Array::from(vec![3, 9, 1, 9, 1]);
        assert_eq!(algorithms::min(&array), Some(1));
        assert_eq!(algorithms::max(&array), Some(9));
        assert_eq!(algorithms::position_of_min(&array), Some(2));
        assert_eq!(algorithms::position_of_max(&array), Some(1));
        assert_eq!(algorithms::position_of_max(&array.slice(Reverse)), Some(1));
    }

    #[test]
    fn test_searching() {
        let array = Array::from(vec![1, 4, 6, 7]);
        assert_eq!(algorithms::find(&array, |x| x % 2 == 0), Some(1));
        assert_eq!(algorithms::find(&array, |x| *x > 10), None);
        assert!(algorithms::contains(&array, &7));
        assert!(!algorithms::contains(&array.slice(Even), &7));
        assert!(algorithms::all(&array, |x| *x > 0));
        assert!(algorithms::any(&array, |x| *x == 6));
        assert_eq!(algorithms::count(&array, |x| x % 2 == 1), 2);
    }

    #[test]
    fn test_sorting() {
        let mut array = Array::from(vec![4, 2, 5, 1, 3]);
        assert!(!algorithms::is_sorted(&array));
        algorithms::sort(&mut array);
        assert_eq!(array, Array::from(vec![1, 2, 3, 4, 5]));
        assert!(algorithms::is_sorted(&array));
        algorithms::sort(&mut array.slice_mut(Reverse));
        assert_eq!(array, Array::from(vec![5, 4, 3, 2, 1]));
        algorithms::reverse(&mut array);
        assert_eq!(array, Array::from(vec![1, 2, 3, 4, 5]));
        algorithms::reverse(&mut array.slice_mut(Even));
        assert_eq!(array, Array::from(vec![5, 2, 3, 4, 1]));
    }

    #[test]
    #[should_panic(expected = "Mismatched arrays, left has size 2 but right has size 1")]
    fn test_dot_size_mismatch() {
        algorithms::dot(&Array::from(vec![1, 2]), &Array::from(vec![1]));
    }

    #[test]
    fn test_mean_of_integers() {
        assert_eq!(algorithms::mean(&Array::from(vec![-3, -4])), -3);
        assert_eq!(algorithms::mean(&Array::from(vec![7_u8, 8])), 7);
        assert_eq!(algorithms::mean(&sequence(1_i16, 4, 2)), 4);
        assert_eq!(algorithms::mean(&Array::from(vec![-1_i8; 127])), -1);
        assert_eq!(
            algorithms::try_mean(&Array::<i32>::empty()),
            Err(InvalidMeanError::Empty)
        );
    }

    #[test]
    fn test_mean_of_size_the_element_cannot_hold() {
        let array = Array::from(vec![-1_i8; 128]);
        assert_eq!(
            algorithms::try_mean(&array),
            Err(InvalidMeanError::SizeTooLarge { size: 128 })
        );
        let floats = Array::from(vec![0.5_f32; 300]);
        assert_eq!(algorithms::try_mean(&floats), Ok(0.5));
    }

    #[test]
    #[should_panic(expected = "Size 128 of the provided source cannot be represented by its element type")]
    fn test_mean_panics_when_size_cannot_be_held() {
        algorithms::mean(&Array::from(vec![0_i8; 128]));
    }
}
