/*!
 * Bulk algorithms over any array, view or expression.
 *
 * Every function here takes its input through [ArrayRef] (or [ArrayMut] for the functions
 * which reorder elements), so they work the same on an [Array](crate::arrays::Array), a
 * strided slice of one, a gather view or an unevaluated expression. Reads use the contiguous
 * slice of the source when it has one and read position by position otherwise.
 *
 * ```
 * use strict_arrays::arrays::Array;
 * use strict_arrays::arrays::slices::Odd;
 * use strict_arrays::algorithms;
 * let array = Array::from(vec![ 3, 1, 4, 1, 5 ]);
 * assert_eq!(algorithms::sum(&array), 14);
 * assert_eq!(algorithms::max(&array), Some(5));
 * assert_eq!(algorithms::position_of_min(&array), Some(1));
 * assert_eq!(algorithms::sum(&array.slice(Odd)), 2);
 * assert_eq!(algorithms::dot(&array, &array), 52);
 * ```
 */

use std::cmp::Ordering;

use crate::arrays::errors::{InvalidMeanError, SizeMismatchError};
use crate::arrays::views::{ArrayIterator, ArrayMut, ArrayRef};
use crate::numeric::Numeric;
use crate::numeric::extra::{Abs, Sqrt};

/**
 * Computes the sum of every element, which is zero for an empty source.
 *
 * Integer overflow behaves as it does for the element type's `+` operator.
 */
pub fn sum<T: Numeric, S: ArrayRef<T>>(source: &S) -> T {
    ArrayIterator::from(source).fold(T::zero(), |total, x| total + x)
}

/**
 * Computes the product of every element, which is one for an empty source.
 */
pub fn product<T: Numeric, S: ArrayRef<T>>(source: &S) -> T {
    ArrayIterator::from(source).fold(T::one(), |total, x| total * x)
}

/**
 * Finds the position and value of the first element for which `replace` returns true when
 * comparing it to the best so far.
 */
fn select<T, S>(source: &S, replace: impl Fn(&T, &T) -> bool) -> Option<(usize, T)>
where
    T: Clone,
    S: ArrayRef<T>,
{
    ArrayIterator::from(source)
        .enumerate()
        .fold(None, |best, (position, x)| match best {
            None => Some((position, x)),
            Some((_, ref value)) if replace(&x, value) => Some((position, x)),
            best => best,
        })
}

/**
 * Returns the smallest element, or None if the source is empty.
 *
 * Elements which are not comparable (such as NaN) are only returned if they come first.
 */
pub fn min<T: PartialOrd + Clone, S: ArrayRef<T>>(source: &S) -> Option<T> {
    select(source, |x, best| x < best).map(|(_, x)| x)
}

/**
 * Returns the largest element, or None if the source is empty.
 *
 * Elements which are not comparable (such as NaN) are only returned if they come first.
 */
pub fn max<T: PartialOrd + Clone, S: ArrayRef<T>>(source: &S) -> Option<T> {
    select(source, |x, best| x > best).map(|(_, x)| x)
}

/**
 * Returns the position of the first smallest element, or None if the source is empty.
 */
pub fn position_of_min<T: PartialOrd + Clone, S: ArrayRef<T>>(source: &S) -> Option<usize> {
    select(source, |x, best| x < best).map(|(position, _)| position)
}

/**
 * Returns the position of the first largest element, or None if the source is empty.
 */
pub fn position_of_max<T: PartialOrd + Clone, S: ArrayRef<T>>(source: &S) -> Option<usize> {
    select(source, |x, best| x > best).map(|(position, _)| position)
}

/**
 * Returns the position of the first element matching the predicate.
 */
pub fn find<T, S, P>(source: &S, predicate: P) -> Option<usize>
where
    T: Clone,
    S: ArrayRef<T>,
    P: Fn(&T) -> bool,
{
    ArrayIterator::from(source).position(|x| predicate(&x))
}

pub fn contains<T: PartialEq + Clone, S: ArrayRef<T>>(source: &S, value: &T) -> bool {
    ArrayIterator::from(source).any(|x| &x == value)
}

/**
 * True if every element matches the predicate, which is always the case for an empty source.
 */
pub fn all<T, S, P>(source: &S, predicate: P) -> bool
where
    T: Clone,
    S: ArrayRef<T>,
    P: Fn(&T) -> bool,
{
    ArrayIterator::from(source).all(|x| predicate(&x))
}

/**
 * True if any element matches the predicate, which is never the case for an empty source.
 */
pub fn any<T, S, P>(source: &S, predicate: P) -> bool
where
    T: Clone,
    S: ArrayRef<T>,
    P: Fn(&T) -> bool,
{
    ArrayIterator::from(source).any(|x| predicate(&x))
}

pub fn count<T, S, P>(source: &S, predicate: P) -> usize
where
    T: Clone,
    S: ArrayRef<T>,
    P: Fn(&T) -> bool,
{
    ArrayIterator::from(source).filter(|x| predicate(x)).count()
}

/**
 * Computes the dot product of two sources of the same size, or returns an error if their
 * sizes differ.
 */
pub fn try_dot<T, S1, S2>(left: &S1, right: &S2) -> Result<T, SizeMismatchError>
where
    T: Numeric,
    S1: ArrayRef<T>,
    S2: ArrayRef<T>,
{
    if left.view_size() != right.view_size() {
        return Err(SizeMismatchError {
            left: left.view_size(),
            right: right.view_size(),
        });
    }
    Ok(ArrayIterator::from(left)
        .zip(ArrayIterator::from(right))
        .fold(T::zero(), |total, (x, y)| total + x * y))
}

/**
 * Computes the dot product of two sources of the same size.
 *
 * # Panics
 *
 * If the sizes of the sources differ.
 */
#[track_caller]
pub fn dot<T, S1, S2>(left: &S1, right: &S2) -> T
where
    T: Numeric,
    S1: ArrayRef<T>,
    S2: ArrayRef<T>,
{
    match try_dot(left, right) {
        Ok(result) => result,
        Err(error) => panic!("{}", error),
    }
}

/**
 * Computes the mean of every element.
 *
 * For integer elements this is the truncated integer division of the sum by the size.
 *
 * # Panics
 *
 * If the source is empty, or its size cannot be represented by the element type. See
 * [try_mean] for a non panicking version.
 */
#[track_caller]
pub fn mean<T: Numeric, S: ArrayRef<T>>(source: &S) -> T {
    match try_mean(source) {
        Ok(result) => result,
        Err(error) => panic!("{}", error),
    }
}

/**
 * Computes the mean of every element, returning an error if the source is empty or its size
 * cannot be represented by the element type (such as 128 elements of `i8`).
 */
pub fn try_mean<T: Numeric, S: ArrayRef<T>>(source: &S) -> Result<T, InvalidMeanError> {
    let size = source.view_size();
    if size == 0 {
        return Err(InvalidMeanError::Empty);
    }
    let divisor = T::from_position(size).ok_or(InvalidMeanError::SizeTooLarge { size })?;
    Ok(sum(source) / divisor)
}

/**
 * Computes the sum of the absolute values of every element.
 */
pub fn norm_l1<T: Numeric + Abs, S: ArrayRef<T>>(source: &S) -> T {
    ArrayIterator::from(source).fold(T::zero(), |total, x| total + x.abs())
}

/**
 * Computes the euclidean length, the square root of the sum of the squares of every element.
 */
pub fn norm_l2<T, S>(source: &S) -> T
where
    T: Numeric + Sqrt<Output = T>,
    S: ArrayRef<T>,
{
    ArrayIterator::from(source)
        .fold(T::zero(), |total, x| total + x.clone() * x)
        .sqrt()
}

/**
 * Computes the largest absolute value of every element, which is zero for an empty source.
 */
pub fn norm_infinity<T: Numeric + Abs, S: ArrayRef<T>>(source: &S) -> T {
    ArrayIterator::from(source).fold(T::zero(), |largest, x| {
        let x = x.abs();
        if x > largest { x } else { largest }
    })
}

/**
 * True if no element is smaller than the element before it.
 */
pub fn is_sorted<T: PartialOrd + Clone, S: ArrayRef<T>>(source: &S) -> bool {
    let mut iterator = ArrayIterator::from(source);
    let mut previous = match iterator.next() {
        Some(x) => x,
        None => return true,
    };
    for x in iterator {
        if x < previous {
            return false;
        }
        previous = x;
    }
    true
}

// Orders incomparable values (which can only be NaNs for built in elements) after every
// comparable value and equal to each other, so that sorting always sees a total order.
fn total_order<T: PartialOrd>(x: &T, y: &T) -> Ordering {
    match x.partial_cmp(y) {
        Some(ordering) => ordering,
        None => {
            let x_incomparable = x.partial_cmp(x).is_none();
            let y_incomparable = y.partial_cmp(y).is_none();
            x_incomparable.cmp(&y_incomparable)
        }
    }
}

/**
 * Sorts every element of the source into ascending order. The sort is stable. Elements which
 * are not comparable even to themselves (NaNs) are moved to the end.
 *
 * If the source has a contiguous slice it is sorted in place, otherwise the elements are
 * copied out, sorted, and written back position by position.
 *
 * ```
 * use strict_arrays::arrays::Array;
 * use strict_arrays::arrays::slices::Even;
 * use strict_arrays::algorithms;
 * let mut array = Array::from(vec![ 5, 0, 3, 0, 1 ]);
 * algorithms::sort(&mut array.slice_mut(Even));
 * assert_eq!(array, Array::from(vec![ 1, 0, 3, 0, 5 ]));
 * ```
 */
pub fn sort<T: PartialOrd + Clone, S: ArrayMut<T>>(source: &mut S) {
    if let Some(slice) = source.as_mut_slice() {
        slice.sort_by(total_order);
        return;
    }
    let mut values: Vec<T> = ArrayIterator::from(&*source).collect();
    values.sort_by(total_order);
    for (position, value) in values.into_iter().enumerate() {
        // Safety: values has exactly view_size elements
        unsafe {
            *source.get_reference_unchecked_mut(position) = value;
        }
    }
}

/**
 * Reverses the order of every element of the source.
 */
pub fn reverse<T: Clone, S: ArrayMut<T>>(source: &mut S) {
    if let Some(slice) = source.as_mut_slice() {
        slice.reverse();
        return;
    }
    let size = source.view_size();
    for front in 0..size / 2 {
        let back = size - 1 - front;
        // Safety: front and back are both below view_size, which cannot change while we hold
        // &mut
        unsafe {
            let x = source.get_value_unchecked(front);
            let y = std::mem::replace(source.get_reference_unchecked_mut(back), x);
            *source.get_reference_unchecked_mut(front) = y;
        }
    }
}

#[test]
fn test_empty_sources() {
    use crate::arrays::Array;
    let empty: Array<f32> = Array::empty();
    assert_eq!(sum(&empty), 0.0);
    assert_eq!(product(&empty), 1.0);
    assert_eq!(min(&empty), None);
    assert_eq!(position_of_max(&empty), None);
    assert_eq!(norm_infinity(&empty), 0.0);
    assert!(is_sorted(&empty));
    assert!(all(&empty, |_| false));
    assert!(!any(&empty, |_| true));
}

#[test]
#[should_panic(expected = "Provided source must not be empty")]
fn test_mean_of_empty_source() {
    use crate::arrays::Array;
    let empty: Array<f64> = Array::empty();
    mean(&empty);
}

#[test]
fn test_sort_places_nan_last() {
    use crate::arrays::Array;
    let mut array = Array::from(vec![2.0, f64::NAN, -1.0, 0.5]);
    sort(&mut array);
    assert_eq!(&array.as_slice()[..3], &[-1.0, 0.5, 2.0]);
    assert!(array.get(3).is_nan());
}

#[test]
fn test_reverse_through_gather() {
    use crate::arrays::Array;
    let mut array = Array::from(vec![1, 2, 3, 4, 5]);
    reverse(&mut array.gather_mut([0, 1, 4]));
    assert_eq!(array, Array::from(vec![5, 2, 3, 4, 1]));
    assert_eq!(
        try_dot(&array, &Array::from(vec![1, 2])),
        Err(SizeMismatchError { left: 5, right: 2 })
    );
}
