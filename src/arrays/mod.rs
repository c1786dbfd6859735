/*!
 * Strictly typed one dimensional arrays.
 *
 * An [Array] owns exactly `size` elements of one type in a single contiguous allocation that
 * is never over-allocated: every structural change (resizing, inserting, removing) builds a
 * new allocation of exactly the new size, and only replaces the old one once the new one is
 * complete. If any step fails, the array is left exactly as it was.
 *
 * Arrays can be viewed through an [ArrayView](views::ArrayView) to slice, gather, iterate
 * and compute lazily, and [FixedArray] and [Attached] provide the same contract over inline
 * storage and over borrowed slices.
 *
 * ```
 * use strict_arrays::arrays::Array;
 * let mut array = Array::from(vec![ 1, 2, 3, 4 ]);
 * array.insert(2, 99);
 * assert_eq!(array, Array::from(vec![ 1, 2, 99, 3, 4 ]));
 * array.remove_indices([ 0, 2 ]);
 * assert_eq!(array, Array::from(vec![ 2, 3, 4 ]));
 * array.resize(5);
 * assert_eq!(array, Array::from(vec![ 2, 3, 4, 0, 0 ]));
 * ```
 */

use std::ops::{Index, IndexMut};

pub mod attached;
pub mod capabilities;
mod display;
pub mod errors;
pub mod expressions;
pub mod fixed;
pub mod indexing;
pub mod slices;
pub mod views;

pub use attached::{Attached, AttachedMut, attach, attach_mut};
pub use fixed::FixedArray;

use crate::arrays::errors::{
    InvalidIndexSetError, InvalidSliceError, OutOfBoundsError, SizeMismatchError, signed,
};
use crate::arrays::indexing::{ArrayIndex, IndexSet};
use crate::arrays::slices::{ArraySlice, StridedRange};
use crate::arrays::views::{ArrayExclude, ArrayGather, ArrayRef, ArrayStride, ArrayView};

/**
 * A dynamically sized array of some type which owns its elements.
 *
 * This type may implement no traits, in which case the array will be rather useless. If the
 * type implements [`Clone`](std::clone::Clone) most storage and accessor methods are defined,
 * and if the type implements [`Numeric`](crate::numeric::Numeric) then the array can be used
 * in a mathematical way.
 *
 * When doing numeric operations with Arrays you should be careful to not consume an array by
 * accidentally using it by value. Operators are only defined on references to arrays so
 * `&x + &y` is always the notation to use.
 */
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Array<T> {
    data: Box<[T]>,
}

/**
 * Methods for arrays of any type, including non numerical types such as bool.
 */
impl<T> Array<T> {
    /**
     * Creates an array of size 0.
     */
    pub fn empty() -> Array<T> {
        Array {
            data: Box::new([]),
        }
    }

    /**
     * Creates an array from values computed on demand by any [ArrayRef], such as a view or
     * an expression. Each element is read exactly once.
     */
    pub fn from_source<S>(source: &S) -> Array<T>
    where
        S: ArrayRef<T> + ?Sized,
    {
        let size = source.view_size();
        // Safety: positions are all below view_size, which cannot change while we hold a
        // shared reference to the source
        (0..size)
            .map(|position| unsafe { source.get_value_unchecked(position) })
            .collect()
    }

    /**
     * Returns the number of elements in this array.
     */
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /**
     * Consumes the array, returning its elements.
     */
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /**
     * Swaps the contents of this array with another array. Only the allocations are swapped,
     * no elements are moved.
     */
    pub fn swap(&mut self, other: &mut Array<T>) {
        std::mem::swap(&mut self.data, &mut other.data);
    }

    /**
     * Gets a reference to the value at the index, or an error if the index does not resolve
     * to a position within this array.
     */
    pub fn try_get_reference<I: ArrayIndex>(&self, index: I) -> Result<&T, OutOfBoundsError> {
        let position = index.resolve(self.size())?;
        Ok(&self.data[position])
    }

    #[track_caller]
    pub fn get_reference<I: ArrayIndex>(&self, index: I) -> &T {
        match self.try_get_reference(index) {
            Ok(reference) => reference,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn try_get_reference_mut<I: ArrayIndex>(
        &mut self,
        index: I,
    ) -> Result<&mut T, OutOfBoundsError> {
        let position = index.resolve(self.size())?;
        Ok(&mut self.data[position])
    }

    #[track_caller]
    pub fn get_reference_mut<I: ArrayIndex>(&mut self, index: I) -> &mut T {
        match self.try_get_reference_mut(index) {
            Ok(reference) => reference,
            Err(error) => panic!("{}", error),
        }
    }

    /**
     * Sets a new value at the index.
     *
     * # Panics
     *
     * If the index does not resolve to a position within this array.
     */
    #[track_caller]
    pub fn set<I: ArrayIndex>(&mut self, index: I, value: T) {
        *self.get_reference_mut(index) = value;
    }
}

/**
 * Methods for arrays of a Cloneable type.
 */
impl<T: Clone> Array<T> {
    /**
     * Creates an array of `size` copies of the value.
     */
    pub fn filled(value: T, size: usize) -> Array<T> {
        Array {
            data: vec![value; size].into_boxed_slice(),
        }
    }

    /**
     * Gets a copy of the value at the index, or an error if the index does not resolve to a
     * position within this array.
     */
    pub fn try_get<I: ArrayIndex>(&self, index: I) -> Result<T, OutOfBoundsError> {
        self.try_get_reference(index).cloned()
    }

    /**
     * Gets a copy of the value at the index.
     *
     * # Panics
     *
     * If the index does not resolve to a position within this array.
     */
    #[track_caller]
    pub fn get<I: ArrayIndex>(&self, index: I) -> T {
        self.get_reference(index).clone()
    }

    /**
     * Returns an ArrayView of this array.
     */
    pub fn view(&self) -> ArrayView<T, &Array<T>> {
        ArrayView::from(self)
    }

    /**
     * Returns an ArrayView of this array which can write to it.
     */
    pub fn view_mut(&mut self) -> ArrayView<T, &mut Array<T>> {
        ArrayView::from(self)
    }

    /**
     * Consumes this array, returning an ArrayView which owns it.
     */
    pub fn into_view(self) -> ArrayView<T, Array<T>> {
        ArrayView::from(self)
    }

    /**
     * Inserts the value at the position, shifting every element from that position onwards
     * along by one, or returns an error without modifying the array if the position is
     * greater than the size. Inserting at the size appends.
     */
    pub fn try_insert(&mut self, position: usize, value: T) -> Result<(), OutOfBoundsError> {
        let size = self.size();
        if position > size {
            return Err(OutOfBoundsError {
                position: signed(position),
                size,
            });
        }
        let mut data = Vec::with_capacity(size + 1);
        data.extend_from_slice(&self.data[..position]);
        data.push(value);
        data.extend_from_slice(&self.data[position..]);
        self.data = data.into_boxed_slice();
        Ok(())
    }

    /**
     * Inserts the value at the position, shifting every element from that position onwards
     * along by one.
     *
     * # Panics
     *
     * If the position is greater than the size.
     */
    #[track_caller]
    pub fn insert(&mut self, position: usize, value: T) {
        if let Err(error) = self.try_insert(position, value) {
            panic!("{}", error);
        }
    }

    /**
     * Inserts every element of the source at the position, shifting every element from that
     * position onwards along by the size of the source, or returns an error without
     * modifying the array if the position is greater than the size.
     */
    pub fn try_insert_from<S>(&mut self, position: usize, source: S) -> Result<(), OutOfBoundsError>
    where
        S: ArrayRef<T>,
    {
        let size = self.size();
        if position > size {
            return Err(OutOfBoundsError {
                position: signed(position),
                size,
            });
        }
        let mut data = Vec::with_capacity(size + source.view_size());
        data.extend_from_slice(&self.data[..position]);
        data.extend(Array::from_source(&source).into_vec());
        data.extend_from_slice(&self.data[position..]);
        self.data = data.into_boxed_slice();
        Ok(())
    }

    #[track_caller]
    pub fn insert_from<S>(&mut self, position: usize, source: S)
    where
        S: ArrayRef<T>,
    {
        if let Err(error) = self.try_insert_from(position, source) {
            panic!("{}", error);
        }
    }

    /**
     * Removes `count` elements starting at the position, shifting every element after them
     * back, or returns an error without modifying the array if that range is not within the
     * array.
     */
    pub fn try_remove(&mut self, position: usize, count: usize) -> Result<(), InvalidSliceError> {
        let size = self.size();
        let end = match position.checked_add(count) {
            Some(end) if end <= size => end,
            _ => {
                return Err(InvalidSliceError::OutOfBounds {
                    range: StridedRange::contiguous(position, count),
                    size,
                });
            }
        };
        let mut data = Vec::with_capacity(size - count);
        data.extend_from_slice(&self.data[..position]);
        data.extend_from_slice(&self.data[end..]);
        self.data = data.into_boxed_slice();
        Ok(())
    }

    #[track_caller]
    pub fn remove(&mut self, position: usize, count: usize) {
        if let Err(error) = self.try_remove(position, count) {
            panic!("{}", error);
        }
    }

    /**
     * Removes the elements at every position in the index set, or returns an error without
     * modifying the array if the index set is not strictly increasing or has positions
     * outside the array.
     *
     * The positions to keep are computed as the complement of the index set, and then
     * gathered into the new allocation.
     */
    pub fn try_remove_indices<I>(&mut self, indices: I) -> Result<(), InvalidIndexSetError>
    where
        I: Into<IndexSet>,
    {
        let keep = indices.into().try_complement(self.size())?;
        let kept = Array::from_source(&ArrayGather::try_from(&*self, keep)?);
        *self = kept;
        Ok(())
    }

    #[track_caller]
    pub fn remove_indices<I>(&mut self, indices: I)
    where
        I: Into<IndexSet>,
    {
        if let Err(error) = self.try_remove_indices(indices) {
            panic!("{}", error);
        }
    }

    /**
     * Copies every element of the source into this array, position by position, or returns
     * an error without modifying anything if the sizes differ.
     */
    pub fn try_assign<S>(&mut self, source: S) -> Result<(), SizeMismatchError>
    where
        S: ArrayRef<T>,
    {
        self.view_mut().try_assign(source)
    }

    #[track_caller]
    pub fn assign<S>(&mut self, source: S)
    where
        S: ArrayRef<T>,
    {
        if let Err(error) = self.try_assign(source) {
            panic!("{}", error);
        }
    }

    /**
     * Sets every element to the value.
     */
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /**
     * Applies a function to all values in the array, modifying the array.
     */
    pub fn map_mut(&mut self, mapping_function: impl Fn(T) -> T) {
        for element in self.data.iter_mut() {
            *element = mapping_function(element.clone());
        }
    }

    /**
     * Creates and returns a new array with all values from the original with the function
     * applied to each. This can be used to change the type of the array such as creating a
     * mask:
     * ```
     * use strict_arrays::arrays::Array;
     * let x = Array::from(vec![ 0.0, 1.2, 5.8, 6.9 ]);
     * let y = x.map(|element| element > 2.0);
     * assert_eq!(y, Array::from(vec![ false, false, true, true ]));
     * ```
     */
    pub fn map<U>(&self, mapping_function: impl Fn(T) -> U) -> Array<U> {
        self.data
            .iter()
            .map(|element| mapping_function(element.clone()))
            .collect()
    }

    #[track_caller]
    pub fn slice<R: ArraySlice>(&self, range: R) -> ArrayView<T, ArrayStride<T, &Array<T>>> {
        self.view().into_slice(range)
    }

    pub fn try_slice<R: ArraySlice>(
        &self,
        range: R,
    ) -> Result<ArrayView<T, ArrayStride<T, &Array<T>>>, InvalidSliceError> {
        self.view().try_into_slice(range)
    }

    #[track_caller]
    pub fn slice_mut<R: ArraySlice>(
        &mut self,
        range: R,
    ) -> ArrayView<T, ArrayStride<T, &mut Array<T>>> {
        self.view_mut().into_slice(range)
    }

    pub fn try_slice_mut<R: ArraySlice>(
        &mut self,
        range: R,
    ) -> Result<ArrayView<T, ArrayStride<T, &mut Array<T>>>, InvalidSliceError> {
        self.view_mut().try_into_slice(range)
    }

    #[track_caller]
    pub fn gather<I: Into<IndexSet>>(&self, indices: I) -> ArrayView<T, ArrayGather<T, &Array<T>>> {
        self.view().into_gather(indices)
    }

    pub fn try_gather<I: Into<IndexSet>>(
        &self,
        indices: I,
    ) -> Result<ArrayView<T, ArrayGather<T, &Array<T>>>, InvalidIndexSetError> {
        self.view().try_into_gather(indices)
    }

    #[track_caller]
    pub fn gather_mut<I: Into<IndexSet>>(
        &mut self,
        indices: I,
    ) -> ArrayView<T, ArrayGather<T, &mut Array<T>>> {
        self.view_mut().into_gather(indices)
    }

    pub fn try_gather_mut<I: Into<IndexSet>>(
        &mut self,
        indices: I,
    ) -> Result<ArrayView<T, ArrayGather<T, &mut Array<T>>>, InvalidIndexSetError> {
        self.view_mut().try_into_gather(indices)
    }

    #[track_caller]
    pub fn exclude(&self, position: usize, count: usize) -> ArrayView<T, ArrayExclude<T, &Array<T>>> {
        self.view().into_exclude(position, count)
    }

    pub fn try_exclude(
        &self,
        position: usize,
        count: usize,
    ) -> Result<ArrayView<T, ArrayExclude<T, &Array<T>>>, InvalidSliceError> {
        self.view().try_into_exclude(position, count)
    }

    #[track_caller]
    pub fn exclude_mut(
        &mut self,
        position: usize,
        count: usize,
    ) -> ArrayView<T, ArrayExclude<T, &mut Array<T>>> {
        self.view_mut().into_exclude(position, count)
    }

    pub fn try_exclude_mut(
        &mut self,
        position: usize,
        count: usize,
    ) -> Result<ArrayView<T, ArrayExclude<T, &mut Array<T>>>, InvalidSliceError> {
        self.view_mut().try_into_exclude(position, count)
    }
}

/**
 * Methods for arrays of a type with a default value.
 */
impl<T: Clone + Default> Array<T> {
    /**
     * Creates an array of `size` default values.
     */
    pub fn new(size: usize) -> Array<T> {
        Array::filled(T::default(), size)
    }

    /**
     * Changes the size of this array, keeping every element at a position below both the old
     * and new size and filling any new positions with the default value.
     */
    pub fn resize(&mut self, new_size: usize) {
        let kept = std::cmp::min(self.size(), new_size);
        let mut data = Vec::with_capacity(new_size);
        data.extend_from_slice(&self.data[..kept]);
        data.resize(new_size, T::default());
        self.data = data.into_boxed_slice();
    }

    /**
     * Changes the size of this array without keeping any of its elements, leaving every
     * position set to the default value.
     */
    pub fn resize_forget(&mut self, new_size: usize) {
        *self = Array::new(new_size);
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(values: Vec<T>) -> Array<T> {
        Array {
            data: values.into_boxed_slice(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(values: [T; N]) -> Array<T> {
        Array {
            data: Box::new(values),
        }
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Array<T> {
        Array {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Array<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/**
 * Indexing an array with any [ArrayIndex], panicking if it does not resolve to a position
 * within the array.
 */
impl<T, I: ArrayIndex> Index<I> for Array<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: I) -> &T {
        self.get_reference(index)
    }
}

impl<T, I: ArrayIndex> IndexMut<I> for Array<T> {
    #[track_caller]
    fn index_mut(&mut self, index: I) -> &mut T {
        self.get_reference_mut(index)
    }
}

/**
 * An array is equal to a view if they have the same size and equal elements at every
 * position.
 */
impl<T, S> PartialEq<ArrayView<T, S>> for Array<T>
where
    T: PartialEq + Clone,
    S: ArrayRef<T>,
{
    fn eq(&self, other: &ArrayView<T, S>) -> bool {
        other == self
    }
}

#[test]
fn test_structural_mutators() {
    let mut array = Array::from(vec![10, 20, 30, 40]);
    array.remove_indices([0, 2]);
    assert_eq!(array, Array::from(vec![20, 40]));
    array.insert_from(1, &Array::from(vec![1, 2]));
    assert_eq!(array, Array::from(vec![20, 1, 2, 40]));
    array.insert(4, 50);
    assert_eq!(array, Array::from(vec![20, 1, 2, 40, 50]));
    array.remove(1, 2);
    assert_eq!(array, Array::from(vec![20, 40, 50]));
    array.remove(3, 0);
    assert_eq!(array.size(), 3);
    array.resize(1);
    assert_eq!(array, Array::from(vec![20]));
    array.resize_forget(2);
    assert_eq!(array, Array::from(vec![0, 0]));
}

#[test]
fn test_failed_mutators_leave_array_unchanged() {
    let mut array = Array::from(vec![1, 2, 3]);
    assert!(array.try_insert(4, 0).is_err());
    assert!(array.try_remove(2, 2).is_err());
    assert_eq!(
        array.try_remove_indices([2, 1]),
        Err(InvalidIndexSetError::NotStrictlyIncreasing { at: 1 })
    );
    assert!(array.try_remove_indices([3]).is_err());
    assert!(array.try_assign(&Array::from(vec![1])).is_err());
    assert_eq!(array, Array::from(vec![1, 2, 3]));
}

#[test]
fn test_index_operators() {
    use crate::arrays::indexing::Last;
    let mut array = Array::from([1.0, 2.0, 3.0]);
    array[Last] = 4.0;
    array[0_usize] += 1.0;
    assert_eq!(array[Last - 1], 2.0);
    assert_eq!(array.as_slice(), &[2.0, 2.0, 4.0]);
}
