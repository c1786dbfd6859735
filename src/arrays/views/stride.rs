use crate::arrays::capabilities::{ByValue, Capabilities, Storage, derived_storage};
use crate::arrays::errors::InvalidSliceError;
use crate::arrays::slices::{ArraySlice, StridedRange};
use crate::arrays::views::{ArrayMut, ArrayRef};

use std::marker::PhantomData;

/**
 * A strided view of a source: position `i` of the view is position `start + i * stride` of
 * the source.
 *
 * The strided range is resolved and validated against the size of the source once when the
 * ArrayStride is created, so every position of the view is known to be in bounds.
 *
 * ```
 * use strict_arrays::arrays::Array;
 * use strict_arrays::arrays::slices::Span;
 * use strict_arrays::arrays::views::{ArrayView, ArrayStride};
 * let mut array = Array::from(vec![ 0, 1, 2, 3, 4, 5 ]);
 * let mut every_other = ArrayView::from(ArrayStride::from(&mut array, Span::with_stride(1, 5, 2)));
 * every_other.assign(&Array::from(vec![ 10, 30, 50 ]));
 * assert_eq!(array, Array::from(vec![ 0, 10, 2, 30, 4, 50 ]));
 * ```
 */
#[derive(Clone, Debug)]
pub struct ArrayStride<T, S> {
    source: S,
    range: StridedRange,
    _type: PhantomData<T>,
}

impl<T, S> ArrayStride<T, S>
where
    S: ArrayRef<T> + ByValue,
{
    /**
     * Creates an ArrayStride from a source and a slice to resolve against it.
     *
     * # Panics
     *
     * If the slice does not resolve to a strided range within the source.
     */
    #[track_caller]
    pub fn from<R: ArraySlice>(source: S, range: R) -> ArrayStride<T, S> {
        match ArrayStride::try_from(source, range) {
            Ok(stride) => stride,
            Err(error) => panic!("{}", error),
        }
    }

    /**
     * Creates an ArrayStride from a source and a slice to resolve against it, or returns an
     * error if the slice does not resolve to a strided range within the source.
     */
    pub fn try_from<R: ArraySlice>(source: S, range: R) -> Result<ArrayStride<T, S>, InvalidSliceError> {
        let range = range.resolve(source.view_size())?;
        range.validate(source.view_size())?;
        Ok(ArrayStride {
            source,
            range,
            _type: PhantomData,
        })
    }

    /**
     * Consumes the ArrayStride, yielding the source it was created from.
     */
    pub fn source(self) -> S {
        self.source
    }

    /**
     * Gives a reference to the ArrayStride's source (in which the data is not strided).
     */
    pub fn source_ref(&self) -> &S {
        &self.source
    }

    /**
     * The strided range this view reads, as resolved against its source.
     */
    pub fn range(&self) -> StridedRange {
        self.range
    }
}

// # Safety
//
// The strided range is validated against the size of our source at construction, and since
// the source must implement ArrayRef correctly its size cannot change afterwards. Every
// position below count therefore maps to a valid position of the source.
/**
 * An ArrayStride of an ArrayRef type implements ArrayRef.
 */
unsafe impl<T, S> ArrayRef<T> for ArrayStride<T, S>
where
    S: ArrayRef<T>,
{
    fn try_get_value(&self, position: usize) -> Option<T> {
        let position = self.range.position(position)?;
        self.source.try_get_value(position)
    }

    fn view_size(&self) -> usize {
        self.range.count()
    }

    unsafe fn get_value_unchecked(&self, position: usize) -> T {
        unsafe { self.source.get_value_unchecked(self.range.map(position)) }
    }

    fn as_slice(&self) -> Option<&[T]> {
        if self.range.is_empty() {
            return Some(&[]);
        }
        if !self.range.is_contiguous() {
            return None;
        }
        let start = self.range.start();
        self.source
            .as_slice()
            .map(|slice| &slice[start..start + self.range.count()])
    }
}

// # Safety
//
// See ArrayRef implementation above.
/**
 * An ArrayStride of an ArrayMut type implements ArrayMut.
 */
unsafe impl<T, S> ArrayMut<T> for ArrayStride<T, S>
where
    S: ArrayMut<T>,
{
    fn try_get_reference_mut(&mut self, position: usize) -> Option<&mut T> {
        let position = self.range.position(position)?;
        self.source.try_get_reference_mut(position)
    }

    unsafe fn get_reference_unchecked_mut(&mut self, position: usize) -> &mut T {
        unsafe { self.source.get_reference_unchecked_mut(self.range.map(position)) }
    }

    fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        if self.range.is_empty() {
            return Some(&mut []);
        }
        if !self.range.is_contiguous() {
            return None;
        }
        let start = self.range.start();
        let count = self.range.count();
        self.source
            .as_mut_slice()
            .map(|slice| &mut slice[start..start + count])
    }
}

impl<T, S: Capabilities> Capabilities for ArrayStride<T, S> {
    const STORAGE: Storage = derived_storage(S::STORAGE);
    const MUTABLE: bool = S::MUTABLE;
}

impl<T, S: ByValue> ByValue for ArrayStride<T, S> {}

#[test]
fn test_stride_reads_through_source() {
    use crate::arrays::Array;
    use crate::arrays::slices::{Reverse, Span};
    let array = Array::from(vec![0, 1, 2, 3, 4, 5, 6]);
    let reversed = ArrayStride::from(&array, Reverse);
    assert_eq!(reversed.view_size(), 7);
    assert_eq!(reversed.try_get_value(0), Some(6));
    assert_eq!(reversed.try_get_value(6), Some(0));
    assert_eq!(reversed.try_get_value(7), None);
    assert_eq!(reversed.as_slice(), None);
    let middle = ArrayStride::from(&array, Span::new(2, 4));
    assert_eq!(middle.as_slice(), Some(&[2, 3, 4][..]));
    // a stride of 0 over a single position
    let single = ArrayStride::from(&array, StridedRange::new(3, 1, 0));
    assert_eq!(single.try_get_value(0), Some(3));
}

#[test]
fn test_stride_of_stride() {
    use crate::arrays::Array;
    use crate::arrays::slices::{Even, Reverse};
    let array = Array::from(vec![0, 1, 2, 3, 4, 5, 6]);
    let even = ArrayStride::from(&array, Even);
    let reversed = ArrayStride::from(&even, Reverse);
    let values: Vec<i32> = (0..reversed.view_size())
        .map(|i| reversed.try_get_value(i).unwrap())
        .collect();
    assert_eq!(values, vec![6, 4, 2, 0]);
    assert!(matches!(
        ArrayStride::try_from(&even, 0..5),
        Err(InvalidSliceError::TooLong { requested: 5, size: 4 })
    ));
}
