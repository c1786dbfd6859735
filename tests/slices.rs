extern crate strict_arrays;

#[cfg(test)]
mod tests {
    use strict_arrays::arrays::errors::{InvalidSliceError, OutOfBoundsError};
    use strict_arrays::arrays::indexing::{ArrayIndex, FromEnd, IndexSet, Last};
    use strict_arrays::arrays::slices::{
        ArraySlice, Even, EveryNth, FirstN, LastN, Odd, Span, StridedRange,
    };

    fn positions<R: ArraySlice>(slice: R, size: usize) -> Vec<usize> {
        slice.resolve(size).unwrap().positions().collect()
    }

    #[test]
    fn test_even_and_odd() {
        assert_eq!(positions(Even, 5), vec![0, 2, 4]);
        assert_eq!(positions(Odd, 5), vec![1, 3]);
        assert_eq!(positions(Even, 1), vec![0]);
        assert_eq!(positions(Odd, 1), Vec::<usize>::new());
    }

    #[test]
    fn test_every_nth() {
        assert_eq!(positions(EveryNth(2), 5), vec![0, 2, 4]);
        assert_eq!(positions(EveryNth(5), 5), vec![0]);
        assert_eq!(positions(EveryNth(1), 3), vec![0, 1, 2]);
        assert_eq!(EveryNth(0).resolve(3), Err(InvalidSliceError::ZeroStep));
    }

    #[test]
    fn test_first_and_last_n() {
        assert_eq!(positions(FirstN(0), 0), Vec::<usize>::new());
        assert_eq!(positions(LastN(3), 3), vec![0, 1, 2]);
        assert_eq!(
            FirstN(4).resolve(3),
            Err(InvalidSliceError::TooLong {
                requested: 4,
                size: 3
            })
        );
    }

    #[test]
    fn test_spans() {
        assert_eq!(positions(Span::new(1, 3), 5), vec![1, 2, 3]);
        assert_eq!(positions(Span::with_stride(0, Last, 3), 8), vec![0, 3, 6]);
        assert_eq!(positions(Span::with_stride(Last, 1, -2), 6), vec![5, 3, 1]);
        assert_eq!(positions(Span::with_stride(2, 2, 0), 3), vec![2]);
        assert_eq!(
            Span::with_stride(0, 2, 0).resolve(3),
            Err(InvalidSliceError::Unreachable {
                first: 0,
                last: 2,
                stride: 0
            })
        );
        assert_eq!(
            Span::new(0_usize, Last - 5).resolve(3),
            Err(InvalidSliceError::Position(OutOfBoundsError {
                position: -3,
                size: 3
            }))
        );
    }

    #[test]
    fn test_std_ranges() {
        assert_eq!(positions(1..3, 4), vec![1, 2]);
        assert_eq!(positions(1..=3, 4), vec![1, 2, 3]);
        assert_eq!(positions(2.., 4), vec![2, 3]);
        assert_eq!(positions(..2, 4), vec![0, 1]);
        assert_eq!(positions(..=0, 4), vec![0]);
        assert_eq!(positions(.., 2), vec![0, 1]);
        assert_eq!(positions(3..3, 3), Vec::<usize>::new());
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = 3_usize..1;
        assert_eq!(
            reversed.resolve(4),
            Err(InvalidSliceError::Reversed { start: 3, end: 1 })
        );
    }

    #[test]
    fn test_strided_range_validation() {
        assert!(StridedRange::new(7, 0, 0).validate(0).is_ok());
        assert!(StridedRange::new(2, 1, 0).validate(3).is_ok());
        assert_eq!(
            StridedRange::new(0, 2, 0).validate(3),
            Err(InvalidSliceError::ZeroStride { count: 2 })
        );
        assert!(StridedRange::new(1, 3, 2).validate(5).is_err());
        assert!(StridedRange::new(1, 2, -1).validate(5).is_ok());
        assert!(StridedRange::new(1, 3, -1).validate(5).is_err());
        assert!(StridedRange::new(0, 2, isize::MAX).validate(5).is_err());
    }

    #[test]
    fn test_indexes() {
        assert_eq!(Last.resolve(3), Ok(2));
        assert_eq!((Last - 2).resolve(3), Ok(0));
        assert_eq!((Last - 3 + 1).resolve(3), Ok(0));
        assert_eq!(FromEnd::new(1), Last - 1);
        assert!((Last - 3).resolve(3).is_err());
        assert!(Last.resolve(0).is_err());
        assert_eq!(
            (-1_i64).resolve(3),
            Err(OutOfBoundsError {
                position: -1,
                size: 3
            })
        );
        assert_eq!(2_u32.resolve(3), Ok(2));
    }

    #[test]
    fn test_complement() {
        let set = IndexSet::from([0, 2]);
        assert_eq!(set.complement(4), IndexSet::from([1, 3]));
        assert_eq!(IndexSet::from([0, 1, 2]).complement(3).len(), 0);
        assert_eq!(IndexSet::default().complement(2), IndexSet::from([0, 1]));
        assert!(IndexSet::from([1, 0]).try_complement(3).is_err());
        assert!(!IndexSet::from([1, 1]).is_strictly_increasing());
    }
}
