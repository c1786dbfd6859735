/*!
 * Generic views into an array.
 *
 * Anything which can be read one position at a time is an [ArrayRef], and anything which can
 * also be written one position at a time is an [ArrayMut]. Owning containers, attached
 * slices, strided and gathered views, and lazily evaluated expressions all implement these
 * traits, and the [ArrayView] facade wraps any of them to give a single API for indexing,
 * iteration, slicing, assignment and arithmetic.
 *
 * Views never change the ownership of their source. An `ArrayView<T, &Array<T>>` borrows the
 * array, an `ArrayView<T, &mut Array<T>>` mutably borrows it, and an `ArrayView` over an
 * expression owns only the expression, which in turn only holds other views or references.
 *
 * ```
 * use strict_arrays::arrays::Array;
 * use strict_arrays::arrays::slices::Odd;
 * let mut array = Array::from(vec![ 1, 2, 3, 4, 5 ]);
 * {
 *     let mut odd = array.slice_mut(Odd);
 *     odd.fill(0);
 * }
 * assert_eq!(array, Array::from(vec![ 1, 0, 3, 0, 5 ]));
 * let doubled = array.view().into_map(|x| x * 2);
 * assert_eq!(doubled.to_array(), Array::from(vec![ 2, 0, 6, 0, 10 ]));
 * ```
 */

use std::marker::PhantomData;

use crate::arrays::Array;
use crate::arrays::capabilities::{ByValue, Capabilities, Storage};
use crate::arrays::errors::{
    InvalidIndexSetError, InvalidSliceError, OutOfBoundsError, SizeMismatchError, signed,
};
use crate::arrays::expressions::{ArrayBinary, ArrayUnary, Mapping, Zipping};
use crate::arrays::indexing::{ArrayIndex, IndexSet};
use crate::arrays::slices::ArraySlice;

mod exclude;
mod gather;
mod iterators;
mod operations;
mod stride;
pub mod traits;

pub use exclude::*;
pub use gather::*;
pub use iterators::*;
pub use stride::*;

/**
* A shared/immutable reference to an array (or a portion of it, or a computation over one) of
* some type.
*
* # Indexing
*
* Valid positions into an ArrayRef range from 0 inclusive to `view_size` exclusive. Even if an
* array of 8 elements creates some ArrayRef that can view only its odd positions, the
* positions used on the ArrayRef would be 0 to 3, not 1, 3, 5 and 7 as corresponding on the
* array.
*
* Elements are read by value rather than by reference, since expressions compute each element
* on demand and have nowhere to store it.
*
* # Safety
*
* In order to support reading without bounds checking in a useful way, the implementing type
* is required to uphold several invariants.
*
* 1 - Any valid position as described in Indexing will read safely when calling
* `get_value_unchecked` and `get_reference_unchecked_mut` - It is the caller's responsibility
* to check `view_size` and request only positions in range.
*
* 2 - Either the `view_size` that defines which positions are valid may not be changed by a
* shared reference to the ArrayRef, or `get_value_unchecked` and `get_reference_unchecked_mut`
* must panic if the position is invalid.
*
* 3 - If `as_slice` returns a slice, it must have `view_size` elements, and the element at
* each position of the slice must be the element at the same position of the ArrayRef.
*
* Essentially, interior mutability causes problems, since code looping through the range of
* valid positions in an ArrayRef needs to be able to rely on that range not changing. None of
* the containers in this crate have any form of interior mutability.
*/
pub unsafe trait ArrayRef<T> {
    /**
     * Gets the value at the position if the position is in range. Otherwise returns None.
     */
    fn try_get_value(&self, position: usize) -> Option<T>;

    /**
     * The number of elements that this reference can view. This may be less than the actual
     * number of elements stored in the array.
     */
    fn view_size(&self) -> usize;

    /**
     * Gets the value at the position without doing any bounds checking. For a safe
     * alternative see [try_get_value](ArrayRef::try_get_value).
     *
     * # Safety
     *
     * Calling this method with an out-of-bounds position is *[undefined behavior]*. Valid
     * positions are defined as in [ArrayRef].
     *
     * [undefined behavior]: https://doc.rust-lang.org/reference/behavior-considered-undefined.html
     * [ArrayRef]: ArrayRef
     */
    unsafe fn get_value_unchecked(&self, position: usize) -> T;

    /**
     * The elements of this reference as one contiguous slice, if they are stored that way.
     *
     * Owning containers, attached slices and stride 1 views of them return a slice, computed
     * and gathered elements do not.
     */
    fn as_slice(&self) -> Option<&[T]> {
        None
    }
}

/**
 * A unique/mutable reference to an array (or a portion of it) of some type.
 *
 * # Safety
 *
 * See [ArrayRef](ArrayRef).
 */
pub unsafe trait ArrayMut<T>: ArrayRef<T> {
    /**
     * Gets a mutable reference to the value at the position, if the position is in range.
     * Otherwise returns None.
     */
    fn try_get_reference_mut(&mut self, position: usize) -> Option<&mut T>;

    /**
     * Gets a mutable reference to the value at the position without doing any bounds checking.
     * For a safe alternative see [try_get_reference_mut](ArrayMut::try_get_reference_mut).
     *
     * # Safety
     *
     * Calling this method with an out-of-bounds position is *[undefined behavior]* even if the
     * resulting reference is not used. Valid positions are defined as in [ArrayRef].
     *
     * [undefined behavior]: https://doc.rust-lang.org/reference/behavior-considered-undefined.html
     * [ArrayRef]: ArrayRef
     */
    unsafe fn get_reference_unchecked_mut(&mut self, position: usize) -> &mut T;

    /**
     * The elements of this reference as one contiguous mutable slice, if they are stored that
     * way. The same requirements as [as_slice](ArrayRef::as_slice) apply.
     */
    fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        None
    }
}

/**
 * A view into some or all of an array.
 *
 * An ArrayView has a similar relationship to an [`Array`] as a `&str` has to a `String`, or an
 * array slice to an array. An ArrayView cannot resize its source, and may span only a portion
 * of the source Array, in any order.
 *
 * However an ArrayView is generic not only over the type of the data in the Array,
 * but also over the way the Array is 'sliced' and the two are orthogonal to each other.
 *
 * ArrayView closely mirrors the API of Array, minus resizing methods which are not available.
 * Methods that create a new array do not return an ArrayView, they return an Array. Arithmetic
 * operators are the exception, they return lazily evaluated ArrayViews over expressions.
 */
#[derive(Clone, Debug)]
pub struct ArrayView<T, S> {
    source: S,
    _type: PhantomData<T>,
}

/**
 * ArrayView methods which require only read access via a [ArrayRef] source.
 */
impl<T, S> ArrayView<T, S>
where
    S: ArrayRef<T>,
{
    /**
     * Creates an ArrayView from a source of some type.
     *
     * The lifetime of the source determines the lifetime of the ArrayView created. If the
     * ArrayView is created from a reference to an Array, then the ArrayView cannot live
     * longer than the Array referenced.
     */
    pub fn from(source: S) -> ArrayView<T, S> {
        ArrayView {
            source,
            _type: PhantomData,
        }
    }

    /**
     * Consumes the array view, yielding the source it was created from.
     */
    pub fn source(self) -> S {
        self.source
    }

    /**
     * Gives a reference to the array view's source.
     */
    pub fn source_ref(&self) -> &S {
        &self.source
    }

    /**
     * Gives a mutable reference to the array view's source.
     */
    pub fn source_ref_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /**
     * Returns the number of elements this view can see.
     */
    pub fn size(&self) -> usize {
        self.source.view_size()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /**
     * Gets the value at the index, or an error if the index does not resolve to a position
     * within this view.
     */
    pub fn try_get<I: ArrayIndex>(&self, index: I) -> Result<T, OutOfBoundsError> {
        let size = self.size();
        let position = index.resolve(size)?;
        self.source.try_get_value(position).ok_or(OutOfBoundsError {
            position: signed(position),
            size,
        })
    }

    /**
     * Gets the value at the index.
     *
     * # Panics
     *
     * If the index does not resolve to a position within this view.
     */
    #[track_caller]
    pub fn get<I: ArrayIndex>(&self, index: I) -> T {
        match self.try_get(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }

    /**
     * Gets the value at the position without doing any bounds checking.
     *
     * # Safety
     *
     * Calling this method with a position not less than [size](ArrayView::size) is
     * *[undefined behavior]*.
     *
     * [undefined behavior]: https://doc.rust-lang.org/reference/behavior-considered-undefined.html
     */
    pub unsafe fn get_unchecked(&self, position: usize) -> T {
        unsafe { self.source.get_value_unchecked(position) }
    }

    /**
     * Returns an iterator over every value in this view, in order.
     */
    pub fn iter(&self) -> ArrayIterator<'_, T, S> {
        ArrayIterator::from(&self.source)
    }

    /**
     * The elements of this view as one contiguous slice, if its source stores them that way.
     */
    pub fn as_slice(&self) -> Option<&[T]> {
        self.source.as_slice()
    }

    /**
     * Returns a view of the elements selected by the slice, or an error if the slice does not
     * resolve against the size of this view.
     */
    pub fn try_slice<R: ArraySlice>(
        &self,
        range: R,
    ) -> Result<ArrayView<T, ArrayStride<T, &S>>, InvalidSliceError> {
        Ok(ArrayView::from(ArrayStride::try_from(&self.source, range)?))
    }

    /**
     * Returns a view of the elements selected by the slice.
     *
     * # Panics
     *
     * If the slice does not resolve against the size of this view.
     */
    #[track_caller]
    pub fn slice<R: ArraySlice>(&self, range: R) -> ArrayView<T, ArrayStride<T, &S>> {
        ArrayView::from(ArrayStride::from(&self.source, range))
    }

    /**
     * Returns a mutable view of the elements selected by the slice, or an error if the slice
     * does not resolve against the size of this view.
     */
    pub fn try_slice_mut<R: ArraySlice>(
        &mut self,
        range: R,
    ) -> Result<ArrayView<T, ArrayStride<T, &mut S>>, InvalidSliceError> {
        Ok(ArrayView::from(ArrayStride::try_from(&mut self.source, range)?))
    }

    /**
     * Returns a mutable view of the elements selected by the slice.
     *
     * # Panics
     *
     * If the slice does not resolve against the size of this view.
     */
    #[track_caller]
    pub fn slice_mut<R: ArraySlice>(&mut self, range: R) -> ArrayView<T, ArrayStride<T, &mut S>> {
        ArrayView::from(ArrayStride::from(&mut self.source, range))
    }

    /**
     * Returns a view of the elements at each position of the index set, or an error if any
     * position is not within this view.
     */
    pub fn try_gather<I: Into<IndexSet>>(
        &self,
        indices: I,
    ) -> Result<ArrayView<T, ArrayGather<T, &S>>, InvalidIndexSetError> {
        Ok(ArrayView::from(ArrayGather::try_from(&self.source, indices)?))
    }

    /**
     * Returns a view of the elements at each position of the index set.
     *
     * # Panics
     *
     * If any position is not within this view.
     */
    #[track_caller]
    pub fn gather<I: Into<IndexSet>>(&self, indices: I) -> ArrayView<T, ArrayGather<T, &S>> {
        ArrayView::from(ArrayGather::from(&self.source, indices))
    }

    pub fn try_gather_mut<I: Into<IndexSet>>(
        &mut self,
        indices: I,
    ) -> Result<ArrayView<T, ArrayGather<T, &mut S>>, InvalidIndexSetError> {
        Ok(ArrayView::from(ArrayGather::try_from(&mut self.source, indices)?))
    }

    #[track_caller]
    pub fn gather_mut<I: Into<IndexSet>>(
        &mut self,
        indices: I,
    ) -> ArrayView<T, ArrayGather<T, &mut S>> {
        ArrayView::from(ArrayGather::from(&mut self.source, indices))
    }

    /**
     * Returns a view of every element except the `count` elements starting at `position`,
     * or an error if that range is not within this view.
     */
    pub fn try_exclude(
        &self,
        position: usize,
        count: usize,
    ) -> Result<ArrayView<T, ArrayExclude<T, &S>>, InvalidSliceError> {
        Ok(ArrayView::from(ArrayExclude::try_from(&self.source, position, count)?))
    }

    /**
     * Returns a view of every element except the `count` elements starting at `position`.
     *
     * # Panics
     *
     * If the excluded range is not within this view.
     */
    #[track_caller]
    pub fn exclude(&self, position: usize, count: usize) -> ArrayView<T, ArrayExclude<T, &S>> {
        ArrayView::from(ArrayExclude::from(&self.source, position, count))
    }

    pub fn try_exclude_mut(
        &mut self,
        position: usize,
        count: usize,
    ) -> Result<ArrayView<T, ArrayExclude<T, &mut S>>, InvalidSliceError> {
        Ok(ArrayView::from(ArrayExclude::try_from(&mut self.source, position, count)?))
    }

    #[track_caller]
    pub fn exclude_mut(
        &mut self,
        position: usize,
        count: usize,
    ) -> ArrayView<T, ArrayExclude<T, &mut S>> {
        ArrayView::from(ArrayExclude::from(&mut self.source, position, count))
    }

    /**
     * Returns a lazily evaluated view of the result of applying the function to every element
     * of this view. The function is called again on every access.
     */
    pub fn map<U, F>(&self, mapping_function: F) -> ArrayView<U, ArrayUnary<T, &S, Mapping<F>>>
    where
        F: Fn(T) -> U,
    {
        ArrayView::from(ArrayUnary::from(&self.source, Mapping::from(mapping_function)))
    }

    /**
     * Returns a lazily evaluated view of the result of applying the function to every pair of
     * elements at the same position in this view and the other, or an error if the views are
     * not the same size.
     */
    pub fn try_zip_with<'a, T2, S2, U, F>(
        &'a self,
        other: &'a ArrayView<T2, S2>,
        zipping_function: F,
    ) -> Result<ArrayView<U, ArrayBinary<T, T2, &'a S, &'a S2, Zipping<F>>>, SizeMismatchError>
    where
        S2: ArrayRef<T2>,
        F: Fn(T, T2) -> U,
    {
        Ok(ArrayView::from(ArrayBinary::try_from(
            &self.source,
            &other.source,
            Zipping::from(zipping_function),
        )?))
    }

    /**
     * Returns a lazily evaluated view of the result of applying the function to every pair of
     * elements at the same position in this view and the other.
     *
     * # Panics
     *
     * If the two views are not the same size.
     */
    #[track_caller]
    pub fn zip_with<'a, T2, S2, U, F>(
        &'a self,
        other: &'a ArrayView<T2, S2>,
        zipping_function: F,
    ) -> ArrayView<U, ArrayBinary<T, T2, &'a S, &'a S2, Zipping<F>>>
    where
        S2: ArrayRef<T2>,
        F: Fn(T, T2) -> U,
    {
        ArrayView::from(ArrayBinary::from(
            &self.source,
            &other.source,
            Zipping::from(zipping_function),
        ))
    }

    /**
     * Evaluates every element of this view into a new owning [Array].
     */
    pub fn to_array(&self) -> Array<T> {
        Array::from_source(&self.source)
    }
}

/**
 * ArrayView methods which consume a source that is cheap to hold by value, producing views
 * which own that source instead of borrowing it.
 */
impl<T, S> ArrayView<T, S>
where
    S: ArrayRef<T> + ByValue,
{
    #[track_caller]
    pub fn into_slice<R: ArraySlice>(self, range: R) -> ArrayView<T, ArrayStride<T, S>> {
        ArrayView::from(ArrayStride::from(self.source, range))
    }

    pub fn try_into_slice<R: ArraySlice>(
        self,
        range: R,
    ) -> Result<ArrayView<T, ArrayStride<T, S>>, InvalidSliceError> {
        Ok(ArrayView::from(ArrayStride::try_from(self.source, range)?))
    }

    #[track_caller]
    pub fn into_gather<I: Into<IndexSet>>(self, indices: I) -> ArrayView<T, ArrayGather<T, S>> {
        ArrayView::from(ArrayGather::from(self.source, indices))
    }

    pub fn try_into_gather<I: Into<IndexSet>>(
        self,
        indices: I,
    ) -> Result<ArrayView<T, ArrayGather<T, S>>, InvalidIndexSetError> {
        Ok(ArrayView::from(ArrayGather::try_from(self.source, indices)?))
    }

    #[track_caller]
    pub fn into_exclude(self, position: usize, count: usize) -> ArrayView<T, ArrayExclude<T, S>> {
        ArrayView::from(ArrayExclude::from(self.source, position, count))
    }

    pub fn try_into_exclude(
        self,
        position: usize,
        count: usize,
    ) -> Result<ArrayView<T, ArrayExclude<T, S>>, InvalidSliceError> {
        Ok(ArrayView::from(ArrayExclude::try_from(self.source, position, count)?))
    }

    /**
     * Consumes this view, returning a lazily evaluated view of the result of applying the
     * function to every element.
     */
    pub fn into_map<U, F>(self, mapping_function: F) -> ArrayView<U, ArrayUnary<T, S, Mapping<F>>>
    where
        F: Fn(T) -> U,
    {
        ArrayView::from(ArrayUnary::from(self.source, Mapping::from(mapping_function)))
    }
}

/**
 * ArrayView methods which require mutable access via a [ArrayMut] source.
 */
impl<T, S> ArrayView<T, S>
where
    S: ArrayMut<T>,
{
    /**
     * Gets a mutable reference to the value at the index, or an error if the index does not
     * resolve to a position within this view.
     */
    pub fn try_get_reference_mut<I: ArrayIndex>(
        &mut self,
        index: I,
    ) -> Result<&mut T, OutOfBoundsError> {
        let size = self.size();
        let position = index.resolve(size)?;
        self.source
            .try_get_reference_mut(position)
            .ok_or(OutOfBoundsError {
                position: signed(position),
                size,
            })
    }

    #[track_caller]
    pub fn get_reference_mut<I: ArrayIndex>(&mut self, index: I) -> &mut T {
        match self.try_get_reference_mut(index) {
            Ok(reference) => reference,
            Err(error) => panic!("{}", error),
        }
    }

    /**
     * Sets the value at the index.
     *
     * # Panics
     *
     * If the index does not resolve to a position within this view.
     */
    #[track_caller]
    pub fn set<I: ArrayIndex>(&mut self, index: I, value: T) {
        *self.get_reference_mut(index) = value;
    }

    pub fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        self.source.as_mut_slice()
    }

    /**
     * Copies every element of the other source into this view, position by position, or
     * returns an error without modifying anything if the sizes differ.
     *
     * Only the positions this view can see are written to, so assigning to a slice of an
     * array leaves every element outside the slice untouched.
     */
    pub fn try_assign<S2>(&mut self, source: S2) -> Result<(), SizeMismatchError>
    where
        S2: ArrayRef<T>,
    {
        let size = self.size();
        if size != source.view_size() {
            return Err(SizeMismatchError {
                left: size,
                right: source.view_size(),
            });
        }
        for position in 0..size {
            // Safety: both sizes are checked above and neither source has interior mutability
            unsafe {
                *self.source.get_reference_unchecked_mut(position) =
                    source.get_value_unchecked(position);
            }
        }
        Ok(())
    }

    /**
     * Copies every element of the other source into this view, position by position.
     *
     * # Panics
     *
     * If the sizes differ.
     */
    #[track_caller]
    pub fn assign<S2>(&mut self, source: S2)
    where
        S2: ArrayRef<T>,
    {
        if let Err(error) = self.try_assign(source) {
            panic!("{}", error);
        }
    }

    /**
     * Applies a function to every element in this view, writing the result back in place.
     */
    pub fn map_mut(&mut self, mapping_function: impl Fn(T) -> T)
    where
        T: Clone,
    {
        if let Some(slice) = self.source.as_mut_slice() {
            for element in slice.iter_mut() {
                *element = mapping_function(element.clone());
            }
            return;
        }
        for position in 0..self.size() {
            // Safety: position is within view_size, which cannot change while we hold &mut self
            unsafe {
                let element = self.source.get_reference_unchecked_mut(position);
                *element = mapping_function(element.clone());
            }
        }
    }

    /**
     * Sets every element in this view to the value.
     */
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.map_mut(|_| value.clone());
    }
}

// # Safety
//
// The ArrayRef we wrap must implement ArrayRef correctly, so do we by delegating to it, as
// the facade doesn't introduce any interior mutability.
/**
 * An ArrayView of an ArrayRef type is also an ArrayRef.
 */
unsafe impl<T, S> ArrayRef<T> for ArrayView<T, S>
where
    S: ArrayRef<T>,
{
    fn try_get_value(&self, position: usize) -> Option<T> {
        self.source.try_get_value(position)
    }

    fn view_size(&self) -> usize {
        self.source.view_size()
    }

    unsafe fn get_value_unchecked(&self, position: usize) -> T {
        unsafe { self.source.get_value_unchecked(position) }
    }

    fn as_slice(&self) -> Option<&[T]> {
        self.source.as_slice()
    }
}

// # Safety
//
// See ArrayRef implementation above.
/**
 * An ArrayView of an ArrayMut type is also an ArrayMut.
 */
unsafe impl<T, S> ArrayMut<T> for ArrayView<T, S>
where
    S: ArrayMut<T>,
{
    fn try_get_reference_mut(&mut self, position: usize) -> Option<&mut T> {
        self.source.try_get_reference_mut(position)
    }

    unsafe fn get_reference_unchecked_mut(&mut self, position: usize) -> &mut T {
        unsafe { self.source.get_reference_unchecked_mut(position) }
    }

    fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        self.source.as_mut_slice()
    }
}

impl<T, S: Capabilities> Capabilities for ArrayView<T, S> {
    const STORAGE: Storage = S::STORAGE;
    const MUTABLE: bool = S::MUTABLE;
}

impl<T, S: ByValue> ByValue for ArrayView<T, S> {}

/**
 * Two views are equal if they have the same size and equal elements at every position,
 * regardless of how each one stores or computes them.
 */
impl<T, S1, S2> PartialEq<ArrayView<T, S2>> for ArrayView<T, S1>
where
    T: PartialEq + Clone,
    S1: ArrayRef<T>,
    S2: ArrayRef<T>,
{
    fn eq(&self, other: &ArrayView<T, S2>) -> bool {
        self.size() == other.size() && self.iter().zip(other.iter()).all(|(x, y)| x == y)
    }
}

/**
 * A view is equal to an array if they have the same size and equal elements at every
 * position.
 */
impl<T, S> PartialEq<Array<T>> for ArrayView<T, S>
where
    T: PartialEq + Clone,
    S: ArrayRef<T>,
{
    fn eq(&self, other: &Array<T>) -> bool {
        self.size() == other.size() && self.iter().zip(other.iter()).all(|(x, y)| x == *y)
    }
}

#[test]
fn test_view_indexing() {
    use crate::arrays::indexing::Last;
    let array = Array::from(vec![1, 2, 3]);
    let view = ArrayView::from(&array);
    assert_eq!(view.size(), 3);
    assert_eq!(view.get(Last), 3);
    assert_eq!(
        view.try_get(3),
        Err(OutOfBoundsError { position: 3, size: 3 })
    );
    assert_eq!(unsafe { view.get_unchecked(1) }, 2);
}

#[test]
#[should_panic(expected = "Position 5 is out of bounds of an array of size 3")]
fn test_view_indexing_out_of_bounds() {
    let array = Array::from(vec![1, 2, 3]);
    ArrayView::from(&array).get(5);
}

#[test]
fn test_assign_size_mismatch_leaves_view_unchanged() {
    let mut array = Array::from(vec![1, 2, 3]);
    let other = Array::from(vec![4, 5]);
    let mut view = ArrayView::from(&mut array);
    assert_eq!(
        view.try_assign(&other),
        Err(SizeMismatchError { left: 3, right: 2 })
    );
    assert_eq!(array, Array::from(vec![1, 2, 3]));
}

#[test]
fn test_zip_with_views_of_different_arrays() {
    let a = Array::from(vec![1, 2, 3]);
    let b = Array::from(vec![0.5, 1.5, 2.5]);
    let left = a.view();
    let right = b.view();
    let scaled = left.zip_with(&right, |x, y| x as f64 * y);
    assert_eq!(scaled.to_array(), Array::from(vec![0.5, 3.0, 7.5]));
    let short = Array::from(vec![1.0]);
    assert_eq!(
        left.try_zip_with(&short.view(), |x, y| x as f64 + y).err(),
        Some(SizeMismatchError { left: 3, right: 1 })
    );
}
