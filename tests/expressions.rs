extern crate strict_arrays;

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use strict_arrays::arrays::Array;
    use strict_arrays::arrays::errors::SizeMismatchError;
    use strict_arrays::arrays::expressions::{
        ArrayBinary, ArrayUnary, Mapping, constant, exclude, merge, merge3, scalar, sequence,
    };
    use strict_arrays::arrays::slices::{Even, Reverse};
    use strict_arrays::arrays::views::ArrayView;

    #[test]
    fn test_arithmetic_is_elementwise() {
        let a = Array::from(vec![1, 2, 3]);
        let b = Array::from(vec![4, 5, 6]);
        assert_eq!((&a + &b).to_array(), Array::from(vec![5, 7, 9]));
        assert_eq!((&b - &a).to_array(), Array::from(vec![3, 3, 3]));
        assert_eq!((&a * &b).to_array(), Array::from(vec![4, 10, 18]));
        assert_eq!((&b / &a).to_array(), Array::from(vec![4, 2, 2]));
        assert_eq!((&b % &a).to_array(), Array::from(vec![0, 1, 0]));
        assert_eq!((-&a).to_array(), Array::from(vec![-1, -2, -3]));
        assert_eq!((10_i32 - &a).to_array(), Array::from(vec![9, 8, 7]));
        assert_eq!((&a << 2).to_array(), Array::from(vec![4, 8, 12]));
    }

    #[test]
    fn test_bitwise_operators() {
        let a = Array::from(vec![true, true, false]);
        let b = Array::from(vec![true, false, false]);
        assert_eq!((&a & &b).to_array(), Array::from(vec![true, false, false]));
        assert_eq!((&a | &b).to_array(), Array::from(vec![true, true, false]));
        assert_eq!((&a ^ &b).to_array(), Array::from(vec![false, true, false]));
        assert_eq!((!&a).to_array(), Array::from(vec![false, false, true]));
        let masks = Array::from(vec![0b1100_u8, 0b1010]);
        assert_eq!((&masks & 0b0110).to_array(), Array::from(vec![0b0100, 0b0010]));
    }

    #[test]
    fn test_nested_expressions() {
        let a = Array::from(vec![1.0, 2.0, 3.0]);
        let b = Array::from(vec![0.5, 0.5, 0.5]);
        let c = Array::from(vec![2.0, 4.0, 8.0]);
        let expression = (&a + &b) * (&c - 1.0_f64) / 2.0;
        assert_eq!(expression.size(), 3);
        assert_eq!(expression.get(2), 3.5 * 7.0 / 2.0);
        assert_eq!(expression.to_array(), Array::from(vec![0.75, 3.75, 12.25]));
    }

    #[test]
    fn test_expressions_over_slices() {
        let a = Array::from(vec![1, 2, 3, 4, 5]);
        let b = Array::from(vec![10, 20, 30]);
        let sum = a.slice(Even) + &b;
        assert_eq!(sum.to_array(), Array::from(vec![11, 23, 35]));
        let reversed = a.slice(Reverse) * 2_i32;
        assert_eq!(reversed.to_array(), Array::from(vec![10, 8, 6, 4, 2]));
    }

    #[test]
    fn test_expressions_are_lazy() {
        let mut a = Array::from(vec![1, 2]);
        let b = Array::from(vec![10, 20]);
        let calls = Cell::new(0);
        {
            let counted = a.view().into_map(|x| {
                calls.set(calls.get() + 1);
                x * 3
            });
            assert_eq!(calls.get(), 0);
            assert_eq!(counted.get(1), 6);
            assert_eq!(counted.get(1), 6);
            assert_eq!(calls.get(), 2);
        }
        a.set(0, 5);
        assert_eq!((&a + &b).get(0), 15);
    }

    #[test]
    fn test_size_mismatch_is_checked_at_construction() {
        let a = Array::from(vec![1, 2, 3]);
        let b = Array::from(vec![1, 2]);
        let result = ArrayBinary::try_from(
            &a,
            &b,
            strict_arrays::arrays::expressions::Addition,
        );
        assert_eq!(result.err(), Some(SizeMismatchError { left: 3, right: 2 }));
        assert!(a.view().try_zip_with(&b.view(), |x, y| x + y).is_err());
    }

    #[test]
    #[should_panic(expected = "Mismatched arrays, left has size 3 but right has size 2")]
    fn test_size_mismatch_panics() {
        let a = Array::from(vec![1, 2, 3]);
        let b = Array::from(vec![1, 2]);
        let _ = &a * &b;
    }

    #[test]
    #[should_panic(expected = "Integer division by zero, the divisor must not be 0")]
    fn test_integer_division_by_zero() {
        let a = Array::from(vec![1, 2, 3]);
        let b = Array::from(vec![1, 0, 1]);
        let quotient = &a / &b;
        assert_eq!(quotient.get(0), 1);
        quotient.get(1);
    }

    #[test]
    #[should_panic(expected = "Cannot shift by a negative amount: -2")]
    fn test_negative_shift() {
        let a = Array::from(vec![1_i64, 2]);
        let amounts = Array::from(vec![1_i64, -2]);
        (&a << &amounts).to_array();
    }

    #[test]
    fn test_float_division_by_zero_follows_ieee() {
        let a = Array::from(vec![1.0, -1.0, 0.0]);
        let quotient = (&a / 0.0_f64).to_array();
        assert_eq!(quotient.get(0), f64::INFINITY);
        assert_eq!(quotient.get(1), f64::NEG_INFINITY);
        assert!(quotient.get(2).is_nan());
    }

    #[test]
    fn test_generators() {
        assert_eq!(
            sequence(1.0, 4, 0.5).to_array(),
            Array::from(vec![1.0, 1.5, 2.0, 2.5])
        );
        assert_eq!(sequence(5_i8, 3, -2).to_array(), Array::from(vec![5, 3, 1]));
        assert!(sequence(0_u8, 0, 1).is_empty());
        assert_eq!(constant(false, 2).to_array(), Array::from(vec![false, false]));
        assert_eq!(scalar(3).size(), 1);
        let a = Array::from(vec![1, 1, 1]);
        assert_eq!((&a + sequence(0, 3, 10)).to_array(), Array::from(vec![1, 11, 21]));
    }

    #[test]
    fn test_merge() {
        let a = Array::from(vec![1, 2]);
        let b = Array::from(vec![3, 4, 5]);
        let merged = merge(&a, &b);
        assert_eq!(merged.size(), 5);
        assert_eq!(merged.get(1), 2);
        assert_eq!(merged.get(2), 3);
        assert_eq!(merged.to_array(), Array::from(vec![1, 2, 3, 4, 5]));
        let padded = merge3(scalar(0), a.view(), scalar(0));
        assert_eq!(padded.to_array(), Array::from(vec![0, 1, 2, 0]));
        let doubled = merge(&a, &b) * 2_i32;
        assert_eq!(doubled.get(4), 10);
    }

    #[test]
    fn test_merge_writes_through() {
        let mut a = Array::from(vec![1, 2]);
        let mut b = Array::from(vec![3]);
        merge(&mut a, &mut b).fill(0);
        assert_eq!(a, Array::from(vec![0, 0]));
        assert_eq!(b, Array::from(vec![0]));
    }

    #[test]
    fn test_exclude_function() {
        let a = Array::from(vec![0, 1, 2, 3, 4]);
        assert_eq!(exclude(&a, 1, 2).to_array(), Array::from(vec![0, 3, 4]));
        assert_eq!(exclude(a.slice(Reverse), 0, 4).to_array(), Array::from(vec![0]));
    }

    #[test]
    fn test_explicit_nodes() {
        let a = Array::from(vec![1, 2, 3]);
        let squares = ArrayView::from(ArrayUnary::from(&a, Mapping::from(|x: i32| x * x)));
        assert_eq!(squares.to_array(), Array::from(vec![1, 4, 9]));
        assert!(squares == ArrayView::from(&Array::from(vec![1, 4, 9])));
    }

    #[test]
    fn test_sequences_of_narrow_types() {
        let stepping = sequence(-100_i8, 3, 50);
        assert_eq!(stepping.to_array(), Array::from(vec![-100, -50, 0]));
        let flat = sequence(255_u8, 256, 0);
        assert_eq!(flat.get(255), 255);
        assert!(flat.try_get(256).is_err());
    }

    #[test]
    #[should_panic(expected = "Position 256 cannot be represented by the element type of the sequence")]
    fn test_sequence_past_narrow_type_panics() {
        sequence(0_u8, 300, 0).get(256);
    }
}
