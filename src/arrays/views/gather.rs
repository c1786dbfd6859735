use crate::arrays::capabilities::{ByValue, Capabilities, Storage, derived_storage};
use crate::arrays::errors::InvalidIndexSetError;
use crate::arrays::indexing::IndexSet;
use crate::arrays::views::{ArrayMut, ArrayRef};

use std::marker::PhantomData;

/**
 * A view of an arbitrary subsequence of a source: position `i` of the view is position
 * `indices[i]` of the source.
 *
 * Indices do not need to be sorted or unique, so a gather can also permute or repeat
 * elements. Every index is checked against the size of the source when the ArrayGather is
 * created.
 *
 * ```
 * use strict_arrays::arrays::Array;
 * use strict_arrays::arrays::views::{ArrayView, ArrayGather};
 * let array = Array::from(vec![ 10, 20, 30, 40 ]);
 * let gathered = ArrayView::from(ArrayGather::from(&array, [ 3, 0, 0 ]));
 * assert_eq!(gathered.to_array(), Array::from(vec![ 40, 10, 10 ]));
 * ```
 */
#[derive(Clone, Debug)]
pub struct ArrayGather<T, S> {
    source: S,
    indices: IndexSet,
    _type: PhantomData<T>,
}

impl<T, S> ArrayGather<T, S>
where
    S: ArrayRef<T> + ByValue,
{
    /**
     * Creates an ArrayGather from a source and the positions to read from it.
     *
     * # Panics
     *
     * If any position is not within the source.
     */
    #[track_caller]
    pub fn from<I: Into<IndexSet>>(source: S, indices: I) -> ArrayGather<T, S> {
        match ArrayGather::try_from(source, indices) {
            Ok(gather) => gather,
            Err(error) => panic!("{}", error),
        }
    }

    /**
     * Creates an ArrayGather from a source and the positions to read from it, or returns an
     * error if any position is not within the source.
     */
    pub fn try_from<I: Into<IndexSet>>(
        source: S,
        indices: I,
    ) -> Result<ArrayGather<T, S>, InvalidIndexSetError> {
        let indices = indices.into();
        indices.validate(source.view_size())?;
        Ok(ArrayGather {
            source,
            indices,
            _type: PhantomData,
        })
    }

    /**
     * Consumes the ArrayGather, yielding the source it was created from.
     */
    pub fn source(self) -> S {
        self.source
    }

    /**
     * Gives a reference to the ArrayGather's source (in which the data is not gathered).
     */
    pub fn source_ref(&self) -> &S {
        &self.source
    }

    pub fn indices(&self) -> &IndexSet {
        &self.indices
    }
}

// # Safety
//
// Every index is validated against the size of our source at construction, and since the
// source must implement ArrayRef correctly its size cannot change afterwards.
/**
 * An ArrayGather of an ArrayRef type implements ArrayRef.
 */
unsafe impl<T, S> ArrayRef<T> for ArrayGather<T, S>
where
    S: ArrayRef<T>,
{
    fn try_get_value(&self, position: usize) -> Option<T> {
        let position = *self.indices.positions().get(position)?;
        self.source.try_get_value(position)
    }

    fn view_size(&self) -> usize {
        self.indices.len()
    }

    unsafe fn get_value_unchecked(&self, position: usize) -> T {
        unsafe {
            let position = *self.indices.positions().get_unchecked(position);
            self.source.get_value_unchecked(position)
        }
    }
}

// # Safety
//
// See ArrayRef implementation above. Repeated indices hand out a mutable reference to the
// same element more than once, but never at the same time, since each one requires an
// exclusive borrow of the whole ArrayGather.
/**
 * An ArrayGather of an ArrayMut type implements ArrayMut.
 */
unsafe impl<T, S> ArrayMut<T> for ArrayGather<T, S>
where
    S: ArrayMut<T>,
{
    fn try_get_reference_mut(&mut self, position: usize) -> Option<&mut T> {
        let position = *self.indices.positions().get(position)?;
        self.source.try_get_reference_mut(position)
    }

    unsafe fn get_reference_unchecked_mut(&mut self, position: usize) -> &mut T {
        unsafe {
            let position = *self.indices.positions().get_unchecked(position);
            self.source.get_reference_unchecked_mut(position)
        }
    }
}

impl<T, S: Capabilities> Capabilities for ArrayGather<T, S> {
    const STORAGE: Storage = derived_storage(S::STORAGE);
    const MUTABLE: bool = S::MUTABLE;
}

impl<T, S: ByValue> ByValue for ArrayGather<T, S> {}

#[test]
fn test_gather_validates_indices() {
    use crate::arrays::Array;
    use crate::arrays::errors::OutOfBoundsError;
    let array = Array::from(vec![1, 2, 3]);
    assert_eq!(
        ArrayGather::try_from(&array, [0, 3]).map(|gather| gather.view_size()),
        Err(InvalidIndexSetError::OutOfBounds(OutOfBoundsError {
            position: 3,
            size: 3
        }))
    );
    let empty = ArrayGather::from(&array, IndexSet::default());
    assert_eq!(empty.view_size(), 0);
    assert_eq!(empty.try_get_value(0), None);
}

#[test]
fn test_gather_writes_through_source() {
    use crate::arrays::Array;
    let mut array = Array::from(vec![1, 2, 3, 4]);
    {
        let mut gather = ArrayGather::from(&mut array, [2, 0]);
        *gather.try_get_reference_mut(0).unwrap() = 30;
        *gather.try_get_reference_mut(1).unwrap() = 10;
        assert!(gather.try_get_reference_mut(2).is_none());
    }
    assert_eq!(array.as_slice(), &[10, 2, 30, 4]);
}
