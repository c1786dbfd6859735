use crate::arrays::capabilities::{ByValue, Capabilities, Storage, merged_storage};
use crate::arrays::views::{ArrayMut, ArrayRef};

use std::marker::PhantomData;

/**
 * The concatenation of two or three sources, computed on demand.
 *
 * The sources are held as a tuple. Position `i` reads from the first source while `i` is
 * below its size, then from the second at `i` minus the size of the first, and so on.
 *
 * ```
 * use strict_arrays::arrays::Array;
 * use strict_arrays::arrays::views::ArrayView;
 * use strict_arrays::arrays::expressions::ArrayMerge;
 * let a = Array::from(vec![ 1, 2 ]);
 * let b = Array::from(vec![ 3 ]);
 * let merged = ArrayView::from(ArrayMerge::from_pair(&a, &b));
 * assert_eq!(merged.to_array(), Array::from(vec![ 1, 2, 3 ]));
 * ```
 */
#[derive(Clone, Debug)]
pub struct ArrayMerge<T, S> {
    sources: S,
    _type: PhantomData<T>,
}

impl<T, S1, S2> ArrayMerge<T, (S1, S2)>
where
    S1: ArrayRef<T> + ByValue,
    S2: ArrayRef<T> + ByValue,
{
    pub fn from_pair(first: S1, second: S2) -> ArrayMerge<T, (S1, S2)> {
        ArrayMerge {
            sources: (first, second),
            _type: PhantomData,
        }
    }
}

impl<T, S1, S2, S3> ArrayMerge<T, (S1, S2, S3)>
where
    S1: ArrayRef<T> + ByValue,
    S2: ArrayRef<T> + ByValue,
    S3: ArrayRef<T> + ByValue,
{
    pub fn from_triple(first: S1, second: S2, third: S3) -> ArrayMerge<T, (S1, S2, S3)> {
        ArrayMerge {
            sources: (first, second, third),
            _type: PhantomData,
        }
    }
}

impl<T, S> ArrayMerge<T, S> {
    /**
     * Consumes the ArrayMerge, yielding the sources it was created from.
     */
    pub fn sources(self) -> S {
        self.sources
    }

    pub fn sources_ref(&self) -> &S {
        &self.sources
    }
}

// # Safety
//
// Each source must implement ArrayRef correctly, so their sizes cannot change, and every
// position below the sum of their sizes is mapped to a valid position of exactly one of them.
/**
 * An ArrayMerge of two ArrayRef types implements ArrayRef.
 */
unsafe impl<T, S1, S2> ArrayRef<T> for ArrayMerge<T, (S1, S2)>
where
    S1: ArrayRef<T>,
    S2: ArrayRef<T>,
{
    fn try_get_value(&self, position: usize) -> Option<T> {
        let (first, second) = &self.sources;
        let offset = first.view_size();
        if position < offset {
            first.try_get_value(position)
        } else {
            second.try_get_value(position - offset)
        }
    }

    fn view_size(&self) -> usize {
        self.sources.0.view_size() + self.sources.1.view_size()
    }

    unsafe fn get_value_unchecked(&self, position: usize) -> T {
        let (first, second) = &self.sources;
        let offset = first.view_size();
        unsafe {
            if position < offset {
                first.get_value_unchecked(position)
            } else {
                second.get_value_unchecked(position - offset)
            }
        }
    }
}

// # Safety
//
// See ArrayRef implementation above. The sources are distinct values so a mutable reference
// into one never aliases the other.
/**
 * An ArrayMerge of two ArrayMut types implements ArrayMut.
 */
unsafe impl<T, S1, S2> ArrayMut<T> for ArrayMerge<T, (S1, S2)>
where
    S1: ArrayMut<T>,
    S2: ArrayMut<T>,
{
    fn try_get_reference_mut(&mut self, position: usize) -> Option<&mut T> {
        let (first, second) = &mut self.sources;
        let offset = first.view_size();
        if position < offset {
            first.try_get_reference_mut(position)
        } else {
            second.try_get_reference_mut(position - offset)
        }
    }

    unsafe fn get_reference_unchecked_mut(&mut self, position: usize) -> &mut T {
        let (first, second) = &mut self.sources;
        let offset = first.view_size();
        unsafe {
            if position < offset {
                first.get_reference_unchecked_mut(position)
            } else {
                second.get_reference_unchecked_mut(position - offset)
            }
        }
    }
}

// # Safety
//
// See the implementation for two sources.
/**
 * An ArrayMerge of three ArrayRef types implements ArrayRef.
 */
unsafe impl<T, S1, S2, S3> ArrayRef<T> for ArrayMerge<T, (S1, S2, S3)>
where
    S1: ArrayRef<T>,
    S2: ArrayRef<T>,
    S3: ArrayRef<T>,
{
    fn try_get_value(&self, position: usize) -> Option<T> {
        let (first, second, third) = &self.sources;
        let first_offset = first.view_size();
        let second_offset = first_offset + second.view_size();
        if position < first_offset {
            first.try_get_value(position)
        } else if position < second_offset {
            second.try_get_value(position - first_offset)
        } else {
            third.try_get_value(position - second_offset)
        }
    }

    fn view_size(&self) -> usize {
        let (first, second, third) = &self.sources;
        first.view_size() + second.view_size() + third.view_size()
    }

    unsafe fn get_value_unchecked(&self, position: usize) -> T {
        let (first, second, third) = &self.sources;
        let first_offset = first.view_size();
        let second_offset = first_offset + second.view_size();
        unsafe {
            if position < first_offset {
                first.get_value_unchecked(position)
            } else if position < second_offset {
                second.get_value_unchecked(position - first_offset)
            } else {
                third.get_value_unchecked(position - second_offset)
            }
        }
    }
}

// # Safety
//
// See the implementation for two sources.
/**
 * An ArrayMerge of three ArrayMut types implements ArrayMut.
 */
unsafe impl<T, S1, S2, S3> ArrayMut<T> for ArrayMerge<T, (S1, S2, S3)>
where
    S1: ArrayMut<T>,
    S2: ArrayMut<T>,
    S3: ArrayMut<T>,
{
    fn try_get_reference_mut(&mut self, position: usize) -> Option<&mut T> {
        let (first, second, third) = &mut self.sources;
        let first_offset = first.view_size();
        let second_offset = first_offset + second.view_size();
        if position < first_offset {
            first.try_get_reference_mut(position)
        } else if position < second_offset {
            second.try_get_reference_mut(position - first_offset)
        } else {
            third.try_get_reference_mut(position - second_offset)
        }
    }

    unsafe fn get_reference_unchecked_mut(&mut self, position: usize) -> &mut T {
        let (first, second, third) = &mut self.sources;
        let first_offset = first.view_size();
        let second_offset = first_offset + second.view_size();
        unsafe {
            if position < first_offset {
                first.get_reference_unchecked_mut(position)
            } else if position < second_offset {
                second.get_reference_unchecked_mut(position - first_offset)
            } else {
                third.get_reference_unchecked_mut(position - second_offset)
            }
        }
    }
}

impl<T, S1: Capabilities, S2: Capabilities> Capabilities for ArrayMerge<T, (S1, S2)> {
    const STORAGE: Storage = merged_storage(S1::STORAGE, S2::STORAGE);
    const MUTABLE: bool = S1::MUTABLE && S2::MUTABLE;
}

impl<T, S1, S2, S3> Capabilities for ArrayMerge<T, (S1, S2, S3)>
where
    S1: Capabilities,
    S2: Capabilities,
    S3: Capabilities,
{
    const STORAGE: Storage = merged_storage(merged_storage(S1::STORAGE, S2::STORAGE), S3::STORAGE);
    const MUTABLE: bool = S1::MUTABLE && S2::MUTABLE && S3::MUTABLE;
}

impl<T, S1: ByValue, S2: ByValue> ByValue for ArrayMerge<T, (S1, S2)> {}

impl<T, S1: ByValue, S2: ByValue, S3: ByValue> ByValue for ArrayMerge<T, (S1, S2, S3)> {}

#[test]
fn test_merge_with_empty_sources() {
    use crate::arrays::Array;
    let a = Array::from(vec![1, 2]);
    let empty: Array<i32> = Array::empty();
    let merged = ArrayMerge::from_triple(&empty, &a, &empty);
    assert_eq!(merged.view_size(), 2);
    assert_eq!(merged.try_get_value(0), Some(1));
    assert_eq!(merged.try_get_value(1), Some(2));
    assert_eq!(merged.try_get_value(2), None);
}

#[test]
fn test_merge_writes_through_both_sources() {
    use crate::arrays::Array;
    let mut a = Array::from(vec![1, 2]);
    let mut b = Array::from(vec![3, 4]);
    {
        let mut merged = ArrayMerge::from_pair(&mut a, &mut b);
        *merged.try_get_reference_mut(1).unwrap() = 20;
        *merged.try_get_reference_mut(2).unwrap() = 30;
        assert!(merged.try_get_reference_mut(4).is_none());
    }
    assert_eq!(a.as_slice(), &[1, 20]);
    assert_eq!(b.as_slice(), &[30, 4]);
}
