/*!
 * Ways to slice an array.
 *
 * Every slice spelling resolves to one canonical [StridedRange] through the [ArraySlice]
 * trait, with one resolution rule per type. Like [indexes](crate::arrays::indexing), slices
 * are not bound to a size until they are applied, and are always validated against the size
 * of the array they are applied to.
 *
 * ```
 * use strict_arrays::arrays::Array;
 * use strict_arrays::arrays::indexing::Last;
 * use strict_arrays::arrays::slices::{Even, Odd, Reverse, Span, FirstN, LastN, EveryNth};
 * let array = Array::from(vec![ 0, 1, 2, 3, 4 ]);
 * assert_eq!(array.slice(Even).to_array(), Array::from(vec![ 0, 2, 4 ]));
 * assert_eq!(array.slice(Odd).to_array(), Array::from(vec![ 1, 3 ]));
 * assert_eq!(array.slice(Reverse).to_array(), Array::from(vec![ 4, 3, 2, 1, 0 ]));
 * assert_eq!(array.slice(Span::new(1, Last - 1)).to_array(), Array::from(vec![ 1, 2, 3 ]));
 * assert_eq!(array.slice(Span::with_stride(Last, 0, -2)).to_array(), Array::from(vec![ 4, 2, 0 ]));
 * assert_eq!(array.slice(FirstN(2)).to_array(), Array::from(vec![ 0, 1 ]));
 * assert_eq!(array.slice(LastN(2)).to_array(), Array::from(vec![ 3, 4 ]));
 * assert_eq!(array.slice(EveryNth(3)).to_array(), Array::from(vec![ 0, 3 ]));
 * assert_eq!(array.slice(1..3).to_array(), Array::from(vec![ 1, 2 ]));
 * ```
 */

use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use crate::arrays::errors::InvalidSliceError;
use crate::arrays::indexing::ArrayIndex;

/**
 * `count` positions beginning at `start` and advancing by `stride`.
 *
 * A StridedRange with a count of 0 is valid for any array, even an empty one, whatever its
 * start and stride. A count of 1 permits any stride including 0. Larger counts need a non
 * zero stride, and since the positions form an arithmetic progression, checking the first
 * and last positions are in bounds checks every position is.
 *
 * ```
 * use strict_arrays::arrays::slices::StridedRange;
 * let range = StridedRange::new(4, 3, -2);
 * assert_eq!(range.positions().collect::<Vec<_>>(), vec![ 4, 2, 0 ]);
 * assert!(range.validate(5).is_ok());
 * assert!(range.validate(4).is_err());
 * assert!(StridedRange::new(100, 0, 0).validate(0).is_ok());
 * ```
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StridedRange {
    start: usize,
    count: usize,
    stride: isize,
}

impl StridedRange {
    pub fn new(start: usize, count: usize, stride: isize) -> StridedRange {
        StridedRange { start, count, stride }
    }

    /**
     * A range of `count` consecutive positions beginning at `start`.
     */
    pub fn contiguous(start: usize, count: usize) -> StridedRange {
        StridedRange::new(start, count, 1)
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn stride(&self) -> isize {
        self.stride
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /**
     * True if the positions are consecutive and increasing, which is always the case for
     * ranges of 0 or 1 elements.
     */
    pub fn is_contiguous(&self) -> bool {
        self.count <= 1 || self.stride == 1
    }

    /**
     * Maps from the ith position in this range to the position in the entire array. This
     * does not check `i < count`.
     */
    #[inline]
    pub(crate) fn map(&self, i: usize) -> usize {
        (self.start as isize).wrapping_add((i as isize).wrapping_mul(self.stride)) as usize
    }

    /**
     * The position in the entire array of the ith position in this range, if `i < count`.
     */
    pub fn position(&self, i: usize) -> Option<usize> {
        if i < self.count {
            Some(self.map(i))
        } else {
            None
        }
    }

    /**
     * An iterator over every position in this range, in order.
     */
    pub fn positions(self) -> impl DoubleEndedIterator<Item = usize> + ExactSizeIterator {
        (0..self.count).map(move |i| self.map(i))
    }

    /**
     * Checks every position this range generates is in `[0, size)`.
     */
    pub fn validate(&self, size: usize) -> Result<(), InvalidSliceError> {
        if self.count == 0 {
            return Ok(());
        }
        if self.count > 1 && self.stride == 0 {
            return Err(InvalidSliceError::ZeroStride { count: self.count });
        }
        // Computed wide so that overflowing strides are reported rather than wrapping
        // back into bounds.
        let last = self.start as i128 + (self.count as i128 - 1) * self.stride as i128;
        if self.start < size && last >= 0 && last < size as i128 {
            Ok(())
        } else {
            Err(InvalidSliceError::OutOfBounds { range: *self, size })
        }
    }
}

/**
 * A type which resolves to a [StridedRange] against an array of a given size.
 */
pub trait ArraySlice {
    fn resolve(&self, size: usize) -> Result<StridedRange, InvalidSliceError>;
}

impl ArraySlice for StridedRange {
    fn resolve(&self, size: usize) -> Result<StridedRange, InvalidSliceError> {
        self.validate(size)?;
        Ok(*self)
    }
}

/**
 * Every element.
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct All;

/**
 * The elements at even positions, `0, 2, 4, ...`
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Even;

/**
 * The elements at odd positions, `1, 3, 5, ...`
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Odd;

/**
 * Every element, last to first.
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Reverse;

/**
 * Every nth element, starting with the first: `0, n, 2n, ...`
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct EveryNth(pub usize);

/**
 * The first n elements.
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct FirstN(pub usize);

/**
 * The last n elements.
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct LastN(pub usize);

/**
 * The elements from `first` to `last` inclusive, stepping by `stride`.
 *
 * Both endpoints can be any [ArrayIndex], including [Last](crate::arrays::indexing::Last)
 * markers, and must resolve to valid positions. The stride must be able to walk from `first`
 * towards `last`, a negative stride walks backwards. The span stops at the last position
 * which does not go beyond `last`. A stride of 0 is only valid if both endpoints are the same
 * position.
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Span<F, L> {
    first: F,
    last: L,
    stride: isize,
}

impl<F, L> Span<F, L>
where
    F: ArrayIndex,
    L: ArrayIndex,
{
    pub fn new(first: F, last: L) -> Span<F, L> {
        Span { first, last, stride: 1 }
    }

    pub fn with_stride(first: F, last: L, stride: isize) -> Span<F, L> {
        Span { first, last, stride }
    }
}

impl ArraySlice for All {
    fn resolve(&self, size: usize) -> Result<StridedRange, InvalidSliceError> {
        Ok(StridedRange::contiguous(0, size))
    }
}

impl ArraySlice for Even {
    fn resolve(&self, size: usize) -> Result<StridedRange, InvalidSliceError> {
        Ok(StridedRange::new(0, size.div_ceil(2), 2))
    }
}

impl ArraySlice for Odd {
    fn resolve(&self, size: usize) -> Result<StridedRange, InvalidSliceError> {
        Ok(StridedRange::new(1, size / 2, 2))
    }
}

impl ArraySlice for Reverse {
    fn resolve(&self, size: usize) -> Result<StridedRange, InvalidSliceError> {
        Ok(StridedRange::new(size.saturating_sub(1), size, -1))
    }
}

impl ArraySlice for EveryNth {
    fn resolve(&self, size: usize) -> Result<StridedRange, InvalidSliceError> {
        if self.0 == 0 {
            return Err(InvalidSliceError::ZeroStep);
        }
        let stride = isize::try_from(self.0).unwrap_or(isize::MAX);
        Ok(StridedRange::new(0, size.div_ceil(self.0), stride))
    }
}

impl ArraySlice for FirstN {
    fn resolve(&self, size: usize) -> Result<StridedRange, InvalidSliceError> {
        if self.0 > size {
            return Err(InvalidSliceError::TooLong { requested: self.0, size });
        }
        Ok(StridedRange::contiguous(0, self.0))
    }
}

impl ArraySlice for LastN {
    fn resolve(&self, size: usize) -> Result<StridedRange, InvalidSliceError> {
        if self.0 > size {
            return Err(InvalidSliceError::TooLong { requested: self.0, size });
        }
        Ok(StridedRange::contiguous(size - self.0, self.0))
    }
}

impl<F, L> ArraySlice for Span<F, L>
where
    F: ArrayIndex,
    L: ArrayIndex,
{
    fn resolve(&self, size: usize) -> Result<StridedRange, InvalidSliceError> {
        let first = self.first.resolve(size).map_err(InvalidSliceError::Position)?;
        let last = self.last.resolve(size).map_err(InvalidSliceError::Position)?;
        let unreachable = InvalidSliceError::Unreachable { first, last, stride: self.stride };
        let distance = last as isize - first as isize;
        if self.stride == 0 {
            return if distance == 0 {
                Ok(StridedRange::new(first, 1, 0))
            } else {
                Err(unreachable)
            };
        }
        if distance != 0 && distance.signum() != self.stride.signum() {
            return Err(unreachable);
        }
        let count = (distance / self.stride) as usize + 1;
        Ok(StridedRange::new(first, count, self.stride))
    }
}

fn contiguous_range(start: usize, end: usize, size: usize) -> Result<StridedRange, InvalidSliceError> {
    if start > end {
        return Err(InvalidSliceError::Reversed { start, end });
    }
    if end > size {
        return Err(InvalidSliceError::TooLong { requested: end, size });
    }
    Ok(StridedRange::contiguous(start, end - start))
}

impl ArraySlice for Range<usize> {
    fn resolve(&self, size: usize) -> Result<StridedRange, InvalidSliceError> {
        contiguous_range(self.start, self.end, size)
    }
}

impl ArraySlice for RangeInclusive<usize> {
    fn resolve(&self, size: usize) -> Result<StridedRange, InvalidSliceError> {
        contiguous_range(*self.start(), self.end().saturating_add(1), size)
    }
}

impl ArraySlice for RangeFrom<usize> {
    fn resolve(&self, size: usize) -> Result<StridedRange, InvalidSliceError> {
        contiguous_range(self.start, size, size)
    }
}

impl ArraySlice for RangeTo<usize> {
    fn resolve(&self, size: usize) -> Result<StridedRange, InvalidSliceError> {
        contiguous_range(0, self.end, size)
    }
}

impl ArraySlice for RangeToInclusive<usize> {
    fn resolve(&self, size: usize) -> Result<StridedRange, InvalidSliceError> {
        contiguous_range(0, self.end.saturating_add(1), size)
    }
}

impl ArraySlice for RangeFull {
    fn resolve(&self, size: usize) -> Result<StridedRange, InvalidSliceError> {
        All.resolve(size)
    }
}

impl<R: ArraySlice> ArraySlice for &R {
    fn resolve(&self, size: usize) -> Result<StridedRange, InvalidSliceError> {
        R::resolve(*self, size)
    }
}

#[test]
fn test_named_slices_on_empty_arrays() {
    assert_eq!(Even.resolve(0), Ok(StridedRange::new(0, 0, 2)));
    assert_eq!(Odd.resolve(1), Ok(StridedRange::new(1, 0, 2)));
    assert_eq!(Reverse.resolve(0), Ok(StridedRange::new(0, 0, -1)));
    assert_eq!(EveryNth(2).resolve(0), Ok(StridedRange::new(0, 0, 2)));
    assert!(Even.resolve(0).unwrap().validate(0).is_ok());
    assert!(Odd.resolve(0).unwrap().validate(0).is_ok());
}

#[test]
fn test_span_resolution() {
    use crate::arrays::indexing::Last;
    assert_eq!(Span::new(0, Last).resolve(4), Ok(StridedRange::new(0, 4, 1)));
    assert_eq!(Span::with_stride(0, 4, 3).resolve(5), Ok(StridedRange::new(0, 2, 3)));
    assert_eq!(Span::with_stride(2, 2, 0).resolve(5), Ok(StridedRange::new(2, 1, 0)));
    assert_eq!(
        Span::with_stride(0, 3, 0).resolve(5),
        Err(InvalidSliceError::Unreachable { first: 0, last: 3, stride: 0 })
    );
    assert_eq!(
        Span::with_stride(0, 3, -1).resolve(5),
        Err(InvalidSliceError::Unreachable { first: 0, last: 3, stride: -1 })
    );
    assert!(matches!(Span::new(0, 5).resolve(5), Err(InvalidSliceError::Position(_))));
}

#[test]
fn test_strided_range_validation() {
    assert!(StridedRange::new(3, 1, 0).validate(4).is_ok());
    assert_eq!(
        StridedRange::new(0, 2, 0).validate(4),
        Err(InvalidSliceError::ZeroStride { count: 2 })
    );
    assert!(StridedRange::new(1, 2, -1).validate(4).is_ok());
    assert!(StridedRange::new(1, 3, -1).validate(4).is_err());
    assert!(StridedRange::new(0, 3, isize::MAX).validate(4).is_err());
}
