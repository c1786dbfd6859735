/*!
 * Lazily evaluated expressions over arrays.
 *
 * An expression is a tree of nodes which own nothing but their operands and an operation.
 * Building one never computes anything: `&a + &b * 2` creates an [ArrayView] over an
 * [ArrayBinary] node whose right operand is another ArrayBinary node, and reading position
 * `i` of the result reads position `i` of `a` and `b` and computes `a[i] + b[i] * 2` there and
 * then. Reading the same position again computes it again.
 *
 * Because expressions store their operands by value, and owning containers can only ever be
 * operands by reference (see [ByValue](crate::arrays::capabilities::ByValue)), an expression
 * can never outlive the arrays it reads from.
 *
 * ```
 * use strict_arrays::arrays::Array;
 * use strict_arrays::arrays::expressions::{sequence, merge, scalar};
 * let a = Array::from(vec![ 1, 2, 3 ]);
 * let b = Array::from(vec![ 10, 20, 30 ]);
 * let expression = &a + &b * 2_i32;
 * assert_eq!(expression.get(1), 42);
 * assert_eq!(expression.to_array(), Array::from(vec![ 21, 42, 63 ]));
 * let counting = sequence(0, 3, 1);
 * assert_eq!((counting * &a).to_array(), Array::from(vec![ 0, 2, 6 ]));
 * let extended = merge(a.view(), scalar(4));
 * assert_eq!(extended.to_array(), Array::from(vec![ 1, 2, 3, 4 ]));
 * ```
 */

use crate::arrays::capabilities::ByValue;
use crate::arrays::views::{ArrayExclude, ArrayRef, ArrayView};
use crate::numeric::Numeric;

mod binary;
mod generators;
mod merge;
mod operations;
mod unary;

pub use binary::*;
pub use generators::*;
pub use merge::*;
pub use operations::*;
pub use unary::*;

/**
 * An arithmetic progression of `size` elements: `start, start + increment, start + 2 *
 * increment, ...`
 *
 * ```
 * use strict_arrays::arrays::expressions::sequence;
 * assert_eq!(sequence(10, 4, -3).iter().collect::<Vec<_>>(), vec![ 10, 7, 4, 1 ]);
 * ```
 */
pub fn sequence<T: Numeric>(start: T, size: usize, increment: T) -> ArrayView<T, ArraySequence<T>> {
    ArrayView::from(ArraySequence::from(start, size, increment))
}

/**
 * `size` copies of the same value.
 */
pub fn constant<T: Clone>(value: T, size: usize) -> ArrayView<T, ArrayConstant<T>> {
    ArrayView::from(ArrayConstant::from(value, size))
}

/**
 * A single value as an array of size 1, so that it can take part in a [merge].
 */
pub fn scalar<T: Clone>(value: T) -> ArrayView<T, ArrayConstant<T>> {
    constant(value, 1)
}

/**
 * The elements of `first` followed by the elements of `second`.
 */
pub fn merge<T, S1, S2>(first: S1, second: S2) -> ArrayView<T, ArrayMerge<T, (S1, S2)>>
where
    S1: ArrayRef<T> + ByValue,
    S2: ArrayRef<T> + ByValue,
{
    ArrayView::from(ArrayMerge::from_pair(first, second))
}

/**
 * The elements of `first`, then `second`, then `third`.
 */
pub fn merge3<T, S1, S2, S3>(
    first: S1,
    second: S2,
    third: S3,
) -> ArrayView<T, ArrayMerge<T, (S1, S2, S3)>>
where
    S1: ArrayRef<T> + ByValue,
    S2: ArrayRef<T> + ByValue,
    S3: ArrayRef<T> + ByValue,
{
    ArrayView::from(ArrayMerge::from_triple(first, second, third))
}

/**
 * Every element of `source` except the `count` elements starting at `position`.
 *
 * # Panics
 *
 * If the excluded range is not within the source.
 *
 * ```
 * use strict_arrays::arrays::Array;
 * use strict_arrays::arrays::expressions::exclude;
 * let array = Array::from(vec![ 0, 1, 2, 3, 4 ]);
 * assert_eq!(exclude(&array, 1, 2).to_array(), Array::from(vec![ 0, 3, 4 ]));
 * ```
 */
#[track_caller]
pub fn exclude<T, S>(source: S, position: usize, count: usize) -> ArrayView<T, ArrayExclude<T, S>>
where
    S: ArrayRef<T> + ByValue,
{
    ArrayView::from(ArrayExclude::from(source, position, count))
}

#[test]
fn test_merge_with_scalars() {
    use crate::arrays::Array;
    let a = Array::from(vec![2, 3]);
    let merged = merge3(scalar(1), &a, scalar(4));
    assert_eq!(merged.size(), 4);
    assert_eq!(merged.to_array(), Array::from(vec![1, 2, 3, 4]));
    let empty = merge(constant(0, 0), constant(0, 0));
    assert!(empty.is_empty());
}
