/*!
 * Statically sized arrays stored inline.
 *
 * A [FixedArray] has the same access contract as a dynamic [Array](crate::arrays::Array), but
 * its size is a const generic so it needs no allocation and can never be resized.
 *
 * ```
 * use strict_arrays::arrays::FixedArray;
 * use strict_arrays::arrays::indexing::Last;
 * let mut array = FixedArray::from([ 1, 2, 3 ]);
 * array.set(Last, 4);
 * let taken = array.take();
 * assert_eq!(taken, FixedArray::from([ 1, 2, 4 ]));
 * assert_eq!(array, FixedArray::from([ 0, 0, 0 ]));
 * ```
 */

use std::ops::{Index, IndexMut};

use crate::arrays::capabilities::{Capabilities, Storage};
use crate::arrays::errors::{OutOfBoundsError, SizeMismatchError};
use crate::arrays::indexing::ArrayIndex;
use crate::arrays::views::{ArrayMut, ArrayRef, ArrayView};

/**
 * An array of exactly `N` elements of some type, owned inline.
 */
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>"))
)]
pub struct FixedArray<T, const N: usize> {
    #[cfg_attr(feature = "serde", serde(with = "serde_arrays"))]
    data: [T; N],
}

impl<T, const N: usize> FixedArray<T, N> {
    /**
     * Returns the number of elements in this array, which is always `N`.
     */
    pub const fn size(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /**
     * Consumes the FixedArray, returning its elements.
     */
    pub fn into_inner(self) -> [T; N] {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn try_get_reference<I: ArrayIndex>(&self, index: I) -> Result<&T, OutOfBoundsError> {
        let position = index.resolve(N)?;
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
        let position = index.resolve(N)?;
        Ok(&mut self.data[position])
    }

    #[track_caller]
    pub fn get_reference_mut<I: ArrayIndex>(&mut self, index: I) -> &mut T {
        match self.try_get_reference_mut(index) {
            Ok(reference) => reference,
            Err(error) => panic!("{}", error),
        }
    }

    #[track_caller]
    pub fn set<I: ArrayIndex>(&mut self, index: I, value: T) {
        *self.get_reference_mut(index) = value;
    }

    /**
     * Creates a FixedArray from any [ArrayRef] of exactly `N` elements, or returns an error
     * if the source has a different size.
     */
    pub fn try_from_source<S>(source: &S) -> Result<FixedArray<T, N>, SizeMismatchError>
    where
        S: ArrayRef<T> + ?Sized,
    {
        if source.view_size() != N {
            return Err(SizeMismatchError {
                left: N,
                right: source.view_size(),
            });
        }
        // Safety: the size of the source was checked to be N above
        let data = std::array::from_fn(|position| unsafe { source.get_value_unchecked(position) });
        Ok(FixedArray { data })
    }

    /**
     * Creates a FixedArray from any [ArrayRef] of exactly `N` elements.
     *
     * # Panics
     *
     * If the source has a different size.
     */
    #[track_caller]
    pub fn from_source<S>(source: &S) -> FixedArray<T, N>
    where
        S: ArrayRef<T> + ?Sized,
    {
        match FixedArray::try_from_source(source) {
            Ok(array) => array,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T: Clone, const N: usize> FixedArray<T, N> {
    /**
     * Creates a FixedArray of `N` copies of the value.
     */
    pub fn filled(value: T) -> FixedArray<T, N> {
        FixedArray {
            data: std::array::from_fn(|_| value.clone()),
        }
    }

    pub fn try_get<I: ArrayIndex>(&self, index: I) -> Result<T, OutOfBoundsError> {
        self.try_get_reference(index).cloned()
    }

    #[track_caller]
    pub fn get<I: ArrayIndex>(&self, index: I) -> T {
        self.get_reference(index).clone()
    }

    pub fn view(&self) -> ArrayView<T, &FixedArray<T, N>> {
        ArrayView::from(self)
    }

    pub fn view_mut(&mut self) -> ArrayView<T, &mut FixedArray<T, N>> {
        ArrayView::from(self)
    }

    /**
     * Copies every element of the source into this array, or returns an error without
     * modifying anything if the source is not `N` elements long.
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

    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    pub fn map_mut(&mut self, mapping_function: impl Fn(T) -> T) {
        for element in self.data.iter_mut() {
            *element = mapping_function(element.clone());
        }
    }

    pub fn map<U>(&self, mapping_function: impl Fn(T) -> U) -> FixedArray<U, N> {
        FixedArray {
            data: std::array::from_fn(|position| mapping_function(self.data[position].clone())),
        }
    }
}

impl<T: Default, const N: usize> FixedArray<T, N> {
    /**
     * Creates a FixedArray of `N` default values.
     */
    pub fn new() -> FixedArray<T, N> {
        FixedArray {
            data: std::array::from_fn(|_| T::default()),
        }
    }

    /**
     * Moves the contents out into a new FixedArray, leaving every element of this one set
     * to the default value.
     */
    pub fn take(&mut self) -> FixedArray<T, N> {
        std::mem::replace(self, FixedArray::new())
    }
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        FixedArray::new()
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    fn from(data: [T; N]) -> FixedArray<T, N> {
        FixedArray { data }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedArray<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, I: ArrayIndex, const N: usize> Index<I> for FixedArray<T, N> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: I) -> &T {
        self.get_reference(index)
    }
}

impl<T, I: ArrayIndex, const N: usize> IndexMut<I> for FixedArray<T, N> {
    #[track_caller]
    fn index_mut(&mut self, index: I) -> &mut T {
        self.get_reference_mut(index)
    }
}

// # Safety
//
// The array is inline and its size is a constant, so every position below N is valid
// forever.
/**
 * A FixedArray implements ArrayRef.
 */
unsafe impl<T: Clone, const N: usize> ArrayRef<T> for FixedArray<T, N> {
    fn try_get_value(&self, position: usize) -> Option<T> {
        self.data.get(position).cloned()
    }

    fn view_size(&self) -> usize {
        N
    }

    unsafe fn get_value_unchecked(&self, position: usize) -> T {
        unsafe { self.data.get_unchecked(position).clone() }
    }

    fn as_slice(&self) -> Option<&[T]> {
        Some(&self.data)
    }
}

// # Safety
//
// See ArrayRef implementation above.
/**
 * A FixedArray implements ArrayMut.
 */
unsafe impl<T: Clone, const N: usize> ArrayMut<T> for FixedArray<T, N> {
    fn try_get_reference_mut(&mut self, position: usize) -> Option<&mut T> {
        self.data.get_mut(position)
    }

    unsafe fn get_reference_unchecked_mut(&mut self, position: usize) -> &mut T {
        unsafe { self.data.get_unchecked_mut(position) }
    }

    fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        Some(&mut self.data)
    }
}

impl<T, const N: usize> Capabilities for FixedArray<T, N> {
    const STORAGE: Storage = Storage::Owning;
    const MUTABLE: bool = true;
}

#[test]
fn test_fixed_from_source_checks_size() {
    use crate::arrays::Array;
    use crate::arrays::expressions::sequence;
    let doubled = FixedArray::<i32, 3>::from_source(&sequence(0, 3, 2));
    assert_eq!(doubled, FixedArray::from([0, 2, 4]));
    assert_eq!(
        FixedArray::<i32, 2>::try_from_source(&Array::from(vec![1, 2, 3])),
        Err(SizeMismatchError { left: 2, right: 3 })
    );
}

#[test]
fn test_fixed_through_views() {
    use crate::arrays::slices::Reverse;
    let mut array = FixedArray::from([1.0, 2.0, 3.0]);
    array.view_mut().slice_mut(Reverse).assign(&crate::arrays::Array::from(vec![
        4.0, 5.0, 6.0,
    ]));
    assert_eq!(array.as_slice(), &[6.0, 5.0, 4.0]);
    assert_eq!(array.map(|x| x > 4.5), FixedArray::from([true, true, false]));
    assert_eq!(<FixedArray<f64, 3> as Capabilities>::STORAGE, Storage::Owning);
}
