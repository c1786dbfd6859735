extern crate strict_arrays;

#[cfg(test)]
mod tests {
    use strict_arrays::arrays::capabilities::{Capabilities, Storage};
    use strict_arrays::arrays::errors::{InvalidSliceError, SizeMismatchError};
    use strict_arrays::arrays::indexing::{IndexSet, Last};
    use strict_arrays::arrays::slices::{All, Even, Odd, Reverse, Span};
    use strict_arrays::arrays::views::{
        ArrayExclude, ArrayGather, ArrayRef, ArrayStride, ArrayView,
    };
    use strict_arrays::arrays::{Array, FixedArray, attach_mut};

    #[test]
    fn test_assignment_through_slice_only_touches_slice() {
        let mut array = Array::from(vec![0, 1, 2, 3, 4, 5, 6]);
        array
            .slice_mut(Span::with_stride(1, 5, 2))
            .assign(&Array::from(vec![10, 30, 50]));
        assert_eq!(array, Array::from(vec![0, 10, 2, 30, 4, 50, 6]));
        assert_eq!(array.slice(Odd).to_array(), Array::from(vec![10, 30, 50]));
    }

    #[test]
    fn test_slice_of_slice() {
        let array = Array::from(vec![0, 1, 2, 3, 4, 5, 6, 7]);
        let even = array.slice(Even);
        let reversed_even = even.slice(Reverse);
        assert_eq!(reversed_even.to_array(), Array::from(vec![6, 4, 2, 0]));
        assert_eq!(reversed_even.get(Last), 0);
    }

    #[test]
    fn test_slices_are_validated_against_their_source() {
        let array = Array::from(vec![1, 2, 3]);
        let first_two = array.slice(0..2);
        assert_eq!(
            first_two.try_slice(0..3).err(),
            Some(InvalidSliceError::TooLong {
                requested: 3,
                size: 2
            })
        );
        assert!(array.try_slice(Span::with_stride(0, 2, -1)).is_err());
    }

    #[test]
    fn test_empty_ranges_are_valid_against_empty_arrays() {
        let empty: Array<u8> = Array::empty();
        assert!(empty.slice(Even).is_empty());
        assert!(empty.slice(Reverse).is_empty());
        assert!(empty.slice(..).is_empty());
        assert_eq!(empty.slice(All).as_slice(), Some(&[][..]));
    }

    #[test]
    fn test_gather() {
        let mut array = Array::from(vec![5, 6, 7, 8]);
        let gathered = array.gather([3, 0, 3]);
        assert_eq!(gathered.to_array(), Array::from(vec![8, 5, 8]));
        array.gather_mut(IndexSet::from(vec![1, 2])).fill(0);
        assert_eq!(array, Array::from(vec![5, 0, 0, 8]));
        assert!(array.try_gather([4]).is_err());
    }

    #[test]
    fn test_exclude() {
        let array = Array::from(vec![0, 1, 2, 3, 4]);
        assert_eq!(array.exclude(1, 2).to_array(), Array::from(vec![0, 3, 4]));
        assert_eq!(array.exclude(0, 5).size(), 0);
        assert_eq!(array.exclude(5, 0).to_array(), array);
        assert!(array.try_exclude(4, 2).is_err());
    }

    #[test]
    fn test_exclude_mut_writes_around_the_hole() {
        let mut array = Array::from(vec![0, 1, 2, 3, 4]);
        array.exclude_mut(1, 3).map_mut(|x| x + 10);
        assert_eq!(array, Array::from(vec![10, 1, 2, 3, 14]));
    }

    #[test]
    fn test_views_of_views_store_sources_by_value() {
        let array = Array::from(vec![1, 2, 3, 4]);
        let view = ArrayView::from(ArrayGather::from(
            ArrayStride::from(&array, Reverse),
            [0, 1],
        ));
        assert_eq!(view.to_array(), Array::from(vec![4, 3]));
        let excluded = ArrayView::from(ArrayExclude::from(view.source(), 0, 1));
        assert_eq!(excluded.to_array(), Array::from(vec![3]));
    }

    #[test]
    fn test_iteration() {
        let array = Array::from(vec![1, 2, 3, 4, 5]);
        let odd = array.slice(Odd);
        assert_eq!(odd.iter().collect::<Vec<_>>(), vec![2, 4]);
        let mut iterator = array.view().into_slice(Reverse).iter().collect::<Vec<_>>();
        iterator.reverse();
        assert_eq!(iterator, vec![1, 2, 3, 4, 5]);
        let mut total = 0;
        for x in &odd {
            total += x;
        }
        assert_eq!(total, 6);
    }

    #[test]
    fn test_compound_assignment() {
        let mut array = Array::from(vec![1, 2, 3, 4]);
        let mut even = array.slice_mut(Even);
        even += 10;
        even *= &Array::from(vec![2, 3]);
        assert_eq!(array, Array::from(vec![22, 2, 39, 4]));
        array -= &Array::from(vec![1, 1, 1, 1]);
        array %= 10;
        assert_eq!(array, Array::from(vec![1, 1, 8, 3]));
    }

    #[test]
    #[should_panic(expected = "Mismatched arrays, left has size 2 but right has size 3")]
    fn test_compound_assignment_size_mismatch() {
        let mut array = Array::from(vec![1, 2, 3, 4]);
        let mut even = array.slice_mut(Even);
        even += &Array::from(vec![1, 2, 3]);
    }

    #[test]
    fn test_try_assign_size_mismatch() {
        let mut array = Array::from(vec![1, 2, 3]);
        assert_eq!(
            array.slice_mut(1..).try_assign(&Array::from(vec![0])),
            Err(SizeMismatchError { left: 2, right: 1 })
        );
        assert_eq!(array, Array::from(vec![1, 2, 3]));
    }

    #[test]
    fn test_fixed_and_attached_views() {
        let mut fixed = FixedArray::from([1.0, 2.0, 3.0]);
        fixed.view_mut().set(Last, 0.5);
        assert_eq!(fixed.get(2), 0.5);
        let mut buffer = vec![1, 2, 3];
        let mut attached = attach_mut(&mut buffer);
        attached.slice_mut(Reverse).assign(&Array::from(vec![7, 8, 9]));
        assert_eq!(attached.to_array(), Array::from(vec![9, 8, 7]));
        assert_eq!(buffer, vec![9, 8, 7]);
    }

    #[test]
    fn test_capabilities() {
        assert_eq!(<Array<i32> as Capabilities>::STORAGE, Storage::Owning);
        assert_eq!(<FixedArray<i32, 2> as Capabilities>::STORAGE, Storage::Owning);
        assert_eq!(
            <ArrayStride<i32, &Array<i32>> as Capabilities>::STORAGE,
            Storage::Referencing
        );
        assert!(!<ArrayStride<i32, &Array<i32>> as Capabilities>::MUTABLE);
        assert!(<ArrayStride<i32, &mut Array<i32>> as Capabilities>::MUTABLE);
        assert_eq!(<Array<i32> as Capabilities>::RANK, 1);
    }

    #[test]
    fn test_dynamic_sources() {
        let array = Array::from(vec![1, 2, 3]);
        let sources: Vec<Box<dyn ArrayRef<i32> + '_>> = vec![
            Box::new(&array),
            Box::new(ArrayStride::from(&array, Reverse)),
        ];
        let sizes: Vec<usize> = sources.iter().map(|source| source.view_size()).collect();
        assert_eq!(sizes, vec![3, 3]);
        assert_eq!(sources[1].try_get_value(0), Some(3));
    }

    #[test]
    fn test_display() {
        let array = Array::from(vec![1, 2, 3]);
        assert_eq!(array.slice(Reverse).to_string(), "[3, 2, 1]");
        assert_eq!(format!("{}", array), "[1, 2, 3]");
    }
}
