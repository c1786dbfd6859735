use crate::arrays::capabilities::{ByValue, Capabilities, Storage, derived_storage};
use crate::arrays::errors::InvalidSliceError;
use crate::arrays::slices::StridedRange;
use crate::arrays::views::{ArrayMut, ArrayRef};

use std::marker::PhantomData;

/**
 * A view over a source hiding a contiguous range of `count` elements starting at `position`.
 *
 * Elements before the hidden range keep their positions and elements after it shift down by
 * `count`.
 *
 * ```
 * use strict_arrays::arrays::Array;
 * use strict_arrays::arrays::views::{ArrayView, ArrayExclude};
 * let array = Array::from(vec![ 0, 1, 2, 3, 4 ]);
 * let excluded = ArrayView::from(ArrayExclude::from(&array, 1, 2));
 * assert_eq!(excluded.to_array(), Array::from(vec![ 0, 3, 4 ]));
 * ```
 */
#[derive(Clone, Debug)]
pub struct ArrayExclude<T, S> {
    source: S,
    position: usize,
    count: usize,
    _type: PhantomData<T>,
}

impl<T, S> ArrayExclude<T, S>
where
    S: ArrayRef<T> + ByValue,
{
    /**
     * Creates an ArrayExclude hiding `count` elements of the source starting at `position`.
     *
     * # Panics
     *
     * If the hidden range is not within the source.
     */
    #[track_caller]
    pub fn from(source: S, position: usize, count: usize) -> ArrayExclude<T, S> {
        match ArrayExclude::try_from(source, position, count) {
            Ok(exclude) => exclude,
            Err(error) => panic!("{}", error),
        }
    }

    /**
     * Creates an ArrayExclude hiding `count` elements of the source starting at `position`,
     * or returns an error if the hidden range is not within the source.
     *
     * Hiding 0 elements is valid at any position up to and including the size of the source.
     */
    pub fn try_from(
        source: S,
        position: usize,
        count: usize,
    ) -> Result<ArrayExclude<T, S>, InvalidSliceError> {
        let size = source.view_size();
        match position.checked_add(count) {
            Some(end) if end <= size => Ok(ArrayExclude {
                source,
                position,
                count,
                _type: PhantomData,
            }),
            _ => Err(InvalidSliceError::OutOfBounds {
                range: StridedRange::contiguous(position, count),
                size,
            }),
        }
    }

    /**
     * Consumes the ArrayExclude, yielding the source it was created from.
     */
    pub fn source(self) -> S {
        self.source
    }

    /**
     * Gives a reference to the ArrayExclude's source (in which no data is hidden).
     */
    pub fn source_ref(&self) -> &S {
        &self.source
    }
}

impl<T, S> ArrayExclude<T, S> {
    // NOTE: This doesn't perform bounds checks, skipping over the hidden range could push the
    // position out of the valid bounds of the source, but performing the get with the masked
    // position will bounds check if required
    #[inline]
    fn mask(&self, position: usize) -> usize {
        if position < self.position {
            position
        } else {
            position + self.count
        }
    }
}

// # Safety
//
// The hidden range is validated against the size of our source at construction, and since
// the source must implement ArrayRef correctly its size cannot change afterwards.
/**
 * An ArrayExclude of an ArrayRef type implements ArrayRef.
 */
unsafe impl<T, S> ArrayRef<T> for ArrayExclude<T, S>
where
    S: ArrayRef<T>,
{
    fn try_get_value(&self, position: usize) -> Option<T> {
        if position >= self.view_size() {
            return None;
        }
        self.source.try_get_value(self.mask(position))
    }

    fn view_size(&self) -> usize {
        // The constructor guarantees the hidden range fits within the source
        self.source.view_size() - self.count
    }

    unsafe fn get_value_unchecked(&self, position: usize) -> T {
        unsafe { self.source.get_value_unchecked(self.mask(position)) }
    }

    fn as_slice(&self) -> Option<&[T]> {
        let size = self.source.view_size();
        if self.count == 0 {
            self.source.as_slice()
        } else if self.position == 0 {
            self.source.as_slice().map(|slice| &slice[self.count..size])
        } else if self.position + self.count == size {
            self.source.as_slice().map(|slice| &slice[..self.position])
        } else {
            None
        }
    }
}

// # Safety
//
// See ArrayRef implementation above.
/**
 * An ArrayExclude of an ArrayMut type implements ArrayMut.
 */
unsafe impl<T, S> ArrayMut<T> for ArrayExclude<T, S>
where
    S: ArrayMut<T>,
{
    fn try_get_reference_mut(&mut self, position: usize) -> Option<&mut T> {
        if position >= self.view_size() {
            return None;
        }
        let position = self.mask(position);
        self.source.try_get_reference_mut(position)
    }

    unsafe fn get_reference_unchecked_mut(&mut self, position: usize) -> &mut T {
        let position = self.mask(position);
        unsafe { self.source.get_reference_unchecked_mut(position) }
    }

    fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        let size = self.source.view_size();
        let (position, count) = (self.position, self.count);
        if count == 0 {
            self.source.as_mut_slice()
        } else if position == 0 {
            self.source.as_mut_slice().map(|slice| &mut slice[count..size])
        } else if position + count == size {
            self.source.as_mut_slice().map(|slice| &mut slice[..position])
        } else {
            None
        }
    }
}

impl<T, S: Capabilities> Capabilities for ArrayExclude<T, S> {
    const STORAGE: Storage = derived_storage(S::STORAGE);
    const MUTABLE: bool = S::MUTABLE;
}

impl<T, S: ByValue> ByValue for ArrayExclude<T, S> {}

#[test]
fn test_exclude_masks_positions() {
    use crate::arrays::Array;
    let array = Array::from(vec![0, 1, 2, 3, 4]);
    let exclude = ArrayExclude::from(&array, 1, 2);
    assert_eq!(exclude.view_size(), 3);
    assert_eq!(exclude.try_get_value(0), Some(0));
    assert_eq!(exclude.try_get_value(1), Some(3));
    assert_eq!(exclude.try_get_value(2), Some(4));
    assert_eq!(exclude.try_get_value(3), None);
    assert_eq!(exclude.as_slice(), None);
    assert_eq!(ArrayExclude::from(&array, 0, 2).as_slice(), Some(&[2, 3, 4][..]));
    assert_eq!(ArrayExclude::from(&array, 3, 2).as_slice(), Some(&[0, 1, 2][..]));
    assert_eq!(ArrayExclude::from(&array, 5, 0).view_size(), 5);
    assert!(ArrayExclude::try_from(&array, 4, 2).is_err());
    assert!(ArrayExclude::try_from(&array, usize::MAX, 2).is_err());
}

#[test]
fn test_exclude_mutable_slices() {
    use crate::arrays::Array;
    let mut array = Array::from(vec![0, 1, 2, 3, 4]);
    assert_eq!(ArrayExclude::from(&mut array, 1, 2).as_mut_slice(), None);
    if let Some(slice) = ArrayExclude::from(&mut array, 0, 2).as_mut_slice() {
        slice.copy_from_slice(&[20, 30, 40]);
    }
    assert_eq!(array, Array::from(vec![0, 1, 20, 30, 40]));
    let mut suffix = array.exclude_mut(3, 2);
    let slice = suffix.as_mut_slice();
    assert_eq!(slice.as_deref(), Some(&[0, 1, 20][..]));
    if let Some(slice) = slice {
        slice[0] = -1;
    }
    assert_eq!(array, Array::from(vec![-1, 1, 20, 30, 40]));
    assert_eq!(ArrayExclude::from(&mut array, 5, 0).as_mut_slice().map(|s| s.len()), Some(5));
}
