use std::fmt;

use crate::arrays::views::{ArrayRef, ArrayView};
use crate::arrays::{Array, FixedArray};

// Common formatting logic used for Array, FixedArray and ArrayView Display implementations
pub(crate) fn format_view<T, S>(view: &S, f: &mut fmt::Formatter) -> fmt::Result
where
    T: fmt::Display,
    S: ArrayRef<T> + ?Sized,
{
    let size = view.view_size();
    write!(f, "[")?;
    for position in 0..size {
        let value = match view.try_get_value(position) {
            Some(x) => x,
            None => panic!("Expected {:?} to be a valid position for size {:?}", position, size),
        };
        // only pass the precision through if the caller asked for one
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, value)?,
            None => write!(f, "{}", value)?,
        }
        if position < size - 1 {
            write!(f, ", ")?;
        }
    }
    write!(f, "]")
}

/**
 * Any array of a Displayable type implements Display
 *
 * You can control the precision of the formatting using format arguments, i.e.
 * `format!("{:.3}", array)`
 */
impl<T: fmt::Display + Clone> fmt::Display for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_view(self, f)
    }
}

impl<T: fmt::Display + Clone, const N: usize> fmt::Display for FixedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_view(self, f)
    }
}

/**
 * Any array view of a Displayable type implements Display
 *
 * You can control the precision of the formatting using format arguments, i.e.
 * `format!("{:.3}", view)`
 */
impl<T, S> fmt::Display for ArrayView<T, S>
where
    T: fmt::Display,
    S: ArrayRef<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_view(self.source_ref(), f)
    }
}

#[test]
fn test_display() {
    use crate::arrays::slices::Reverse;
    let array = Array::from(vec![1.25, 2.5, 3.0]);
    assert_eq!(array.to_string(), "[1.25, 2.5, 3]");
    assert_eq!(format!("{:.2}", array.slice(Reverse)), "[3.00, 2.50, 1.25]");
    assert_eq!(FixedArray::from([true, false]).to_string(), "[true, false]");
    assert_eq!(Array::<i32>::empty().to_string(), "[]");
}
