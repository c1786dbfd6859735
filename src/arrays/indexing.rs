/*!
 * # Indexing
 *
 * Positions into an array are `usize` once resolved, but callers can index with any type
 * implementing [ArrayIndex]. Each index type has exactly one way of resolving against the
 * size of the array it is applied to, chosen at compile time by the type of the argument:
 *
 * - Unsigned integers are positions directly.
 * - Signed integers are positions if they are not negative. Negative positions are always
 *   out of bounds, there is no implicit wrap around from the end.
 * - [Last] is the final position, and `Last - k` is `k` positions before it.
 *
 * Indexes are never bound to a size until they are used, so the same `Last - 1` can be used
 * on arrays of different sizes.
 *
 * ```
 * use strict_arrays::arrays::Array;
 * use strict_arrays::arrays::indexing::Last;
 * let array = Array::from(vec![ 1, 2, 3, 4 ]);
 * assert_eq!(array.get(0), 1);
 * assert_eq!(array.get(Last), 4);
 * assert_eq!(array.get(Last - 1), 3);
 * assert!(array.try_get(-1_i32).is_err());
 * ```
 */

use std::ops::{Add, Sub};

use crate::arrays::errors::{InvalidIndexSetError, OutOfBoundsError, signed};

/**
 * A type which can be resolved to a position in an array of a given size.
 */
pub trait ArrayIndex {
    /**
     * Resolves this index against an array of `size` elements, returning a position in
     * `[0, size)` or the error describing why there isn't one.
     */
    fn resolve(&self, size: usize) -> Result<usize, OutOfBoundsError>;
}

macro_rules! array_index_unsigned {
    ($T:ty) => {
        impl ArrayIndex for $T {
            #[inline]
            fn resolve(&self, size: usize) -> Result<usize, OutOfBoundsError> {
                match usize::try_from(*self) {
                    Ok(position) if position < size => Ok(position),
                    _ => Err(OutOfBoundsError {
                        position: isize::try_from(*self).unwrap_or(isize::MAX),
                        size,
                    }),
                }
            }
        }
    };
}

macro_rules! array_index_signed {
    ($T:ty) => {
        impl ArrayIndex for $T {
            #[inline]
            fn resolve(&self, size: usize) -> Result<usize, OutOfBoundsError> {
                match usize::try_from(*self) {
                    Ok(position) if position < size => Ok(position),
                    _ => Err(OutOfBoundsError {
                        position: isize::try_from(*self).unwrap_or(isize::MAX),
                        size,
                    }),
                }
            }
        }
    };
}

array_index_unsigned!(usize);
array_index_unsigned!(u32);
array_index_unsigned!(u64);
array_index_signed!(isize);
array_index_signed!(i32);
array_index_signed!(i64);

/**
 * A marker for the final position of an array, whatever its size.
 *
 * Subtracting from it gives a [FromEnd] index counting back from the final position.
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Last;

/**
 * An index counting back `offset` positions from the final position of an array.
 *
 * `Last - 0` is the final position, `Last - 1` the one before. Adding to a FromEnd moves
 * towards the final position again, so `Last - 3 + 1` is the same as `Last - 2`. Offsets
 * that move past the final position are allowed to be constructed but never resolve.
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct FromEnd {
    offset: isize,
}

impl FromEnd {
    pub fn new(offset: usize) -> FromEnd {
        FromEnd { offset: signed(offset) }
    }

    /**
     * How many positions before the final position this index is. Negative offsets are after
     * the final position and never resolve.
     */
    pub fn offset(&self) -> isize {
        self.offset
    }
}

impl From<Last> for FromEnd {
    fn from(_: Last) -> FromEnd {
        FromEnd { offset: 0 }
    }
}

impl Sub<usize> for Last {
    type Output = FromEnd;

    fn sub(self, rhs: usize) -> FromEnd {
        FromEnd::new(rhs)
    }
}

impl Sub<usize> for FromEnd {
    type Output = FromEnd;

    fn sub(self, rhs: usize) -> FromEnd {
        FromEnd { offset: self.offset.saturating_add(signed(rhs)) }
    }
}

impl Add<usize> for FromEnd {
    type Output = FromEnd;

    fn add(self, rhs: usize) -> FromEnd {
        FromEnd { offset: self.offset.saturating_sub(signed(rhs)) }
    }
}

impl ArrayIndex for Last {
    #[inline]
    fn resolve(&self, size: usize) -> Result<usize, OutOfBoundsError> {
        FromEnd::from(*self).resolve(size)
    }
}

impl ArrayIndex for FromEnd {
    #[inline]
    fn resolve(&self, size: usize) -> Result<usize, OutOfBoundsError> {
        // size - 1 - offset, computed signed so that it may go negative
        let position = signed(size)
            .saturating_sub(1)
            .saturating_sub(self.offset);
        if position >= 0 && (position as usize) < size {
            Ok(position as usize)
        } else {
            Err(OutOfBoundsError { position, size })
        }
    }
}

impl<I: ArrayIndex> ArrayIndex for &I {
    #[inline]
    fn resolve(&self, size: usize) -> Result<usize, OutOfBoundsError> {
        I::resolve(*self, size)
    }
}

/**
 * An explicit ordered list of positions, used to gather an arbitrary subsequence of an array.
 *
 * The positions do not have to be sorted or unique in general. Computing the
 * [complement](IndexSet::complement) does require them to be strictly increasing.
 *
 * ```
 * use strict_arrays::arrays::indexing::IndexSet;
 * let set = IndexSet::from([ 1, 3 ]);
 * assert_eq!(set.complement(5).positions(), &[ 0, 2, 4 ]);
 * ```
 */
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexSet {
    positions: Vec<usize>,
}

impl IndexSet {
    pub fn new(positions: Vec<usize>) -> IndexSet {
        IndexSet { positions }
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.positions
    }

    /**
     * Returns the first position which is not greater than the position before it, if any.
     */
    fn first_unordered(&self) -> Option<usize> {
        self.positions
            .windows(2)
            .position(|pair| pair[0] >= pair[1])
            .map(|i| i + 1)
    }

    pub fn is_strictly_increasing(&self) -> bool {
        self.first_unordered().is_none()
    }

    /**
     * Checks every position in this set is valid for an array of `size` elements.
     */
    pub fn validate(&self, size: usize) -> Result<(), InvalidIndexSetError> {
        match self.positions.iter().find(|&&position| position >= size) {
            Some(&position) => Err(InvalidIndexSetError::OutOfBounds(OutOfBoundsError {
                position: signed(position),
                size,
            })),
            None => Ok(()),
        }
    }

    /**
     * Computes every position in `[0, size)` which is not in this set, in increasing order.
     *
     * # Panics
     *
     * - If this set is not strictly increasing or has positions outside `[0, size)`.
     */
    #[track_caller]
    pub fn complement(&self, size: usize) -> IndexSet {
        match self.try_complement(size) {
            Ok(complement) => complement,
            Err(error) => panic!("{}", error),
        }
    }

    /**
     * Computes every position in `[0, size)` which is not in this set, in increasing order,
     * or returns an error if this set is not strictly increasing or has positions outside
     * `[0, size)`.
     *
     * The complement is computed in a single pass, walking every position of the array
     * alongside a cursor into this set.
     */
    pub fn try_complement(&self, size: usize) -> Result<IndexSet, InvalidIndexSetError> {
        if let Some(at) = self.first_unordered() {
            return Err(InvalidIndexSetError::NotStrictlyIncreasing { at });
        }
        self.validate(size)?;
        let mut complement = Vec::with_capacity(size - self.positions.len());
        let mut cursor = self.positions.iter().peekable();
        for position in 0..size {
            if cursor.peek() == Some(&&position) {
                cursor.next();
            } else {
                complement.push(position);
            }
        }
        Ok(IndexSet { positions: complement })
    }
}

impl From<Vec<usize>> for IndexSet {
    fn from(positions: Vec<usize>) -> IndexSet {
        IndexSet::new(positions)
    }
}

impl From<&[usize]> for IndexSet {
    fn from(positions: &[usize]) -> IndexSet {
        IndexSet::new(positions.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for IndexSet {
    fn from(positions: [usize; N]) -> IndexSet {
        IndexSet::new(positions.to_vec())
    }
}

impl FromIterator<usize> for IndexSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> IndexSet {
        IndexSet::new(iter.into_iter().collect())
    }
}

#[test]
fn test_from_end_resolution() {
    assert_eq!(Last.resolve(4), Ok(3));
    assert_eq!((Last - 3).resolve(4), Ok(0));
    assert_eq!((Last - 3 + 1).resolve(4), Ok(1));
    assert_eq!(
        (Last - 4).resolve(4),
        Err(OutOfBoundsError { position: -1, size: 4 })
    );
    assert!(Last.resolve(0).is_err());
    assert!((Last - 1 + 2).resolve(3).is_err());
}

#[test]
fn test_complement_one_pass() {
    let set = IndexSet::from([0, 2, 3]);
    assert_eq!(set.complement(6).positions(), &[1, 4, 5]);
    assert_eq!(IndexSet::default().complement(3).positions(), &[0, 1, 2]);
    assert_eq!(
        IndexSet::from([2, 1]).try_complement(3),
        Err(InvalidIndexSetError::NotStrictlyIncreasing { at: 1 })
    );
    assert!(IndexSet::from([5]).try_complement(3).is_err());
}

#[test]
fn test_wide_unsigned_indexes_do_not_truncate() {
    let beyond = u64::MAX;
    assert_eq!(
        beyond.resolve(3),
        Err(OutOfBoundsError { position: isize::MAX, size: 3 })
    );
    assert_eq!(2_u64.resolve(3), Ok(2));
    assert_eq!(3_u32.resolve(3), Err(OutOfBoundsError { position: 3, size: 3 }));
}
