/*!
 * Strictly typed one dimensional arrays.
 *
 * If this is your first time using this library you should study the
 * [Array](./arrays/struct.Array.html) type and the [ArrayView](./arrays/views/struct.ArrayView.html)
 * facade, then the [expressions](./arrays/expressions/index.html) module for how arithmetic on
 * arrays is evaluated lazily.
 *
 * Every array holds exactly one element type, and no operation converts between element types
 * implicitly. Every index, slice and size is checked, with panicking methods for convenience
 * and `try_` methods returning [errors](./arrays/errors/index.html) where the caller can
 * recover.
 *
 * ```
 * use strict_arrays::arrays::Array;
 * use strict_arrays::arrays::slices::Even;
 * use strict_arrays::algorithms;
 * let mut array = Array::from(vec![ 1.0, 2.0, 3.0, 4.0, 5.0 ]);
 * array.slice_mut(Even).assign(&Array::from(vec![ 0.0, 0.0, 0.0 ]));
 * assert_eq!(array, Array::from(vec![ 0.0, 2.0, 0.0, 4.0, 0.0 ]));
 * let scaled = &array * 0.5;
 * assert_eq!(algorithms::sum(&scaled), 3.0);
 * ```
 */

pub mod algorithms;
pub mod arrays;
pub mod numeric;
