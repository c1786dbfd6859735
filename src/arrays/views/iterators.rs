use std::iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator};
use std::marker::PhantomData;

use crate::arrays::views::{ArrayRef, ArrayView};

/**
 * An iterator over every value of an [ArrayRef], front to back.
 *
 * When the source stores its elements as one contiguous slice the iterator walks that slice
 * directly, otherwise it reads one position at a time through the source.
 *
 * ```
 * use strict_arrays::arrays::Array;
 * use strict_arrays::arrays::slices::Reverse;
 * let array = Array::from(vec![ 1, 2, 3 ]);
 * let reversed = array.slice(Reverse);
 * assert_eq!(reversed.iter().collect::<Vec<_>>(), vec![ 3, 2, 1 ]);
 * assert_eq!(reversed.iter().rev().collect::<Vec<_>>(), vec![ 1, 2, 3 ]);
 * assert_eq!(reversed.iter().len(), 3);
 * ```
 */
#[derive(Debug)]
pub struct ArrayIterator<'a, T, S> {
    walk: Walk<'a, T, S>,
}

#[derive(Debug)]
enum Walk<'a, T, S> {
    Contiguous(std::slice::Iter<'a, T>),
    Positional {
        source: &'a S,
        // front <= back, positions front..back are still to be yielded
        front: usize,
        back: usize,
        _type: PhantomData<T>,
    },
}

impl<'a, T, S> ArrayIterator<'a, T, S>
where
    S: ArrayRef<T>,
{
    pub fn from(source: &'a S) -> ArrayIterator<'a, T, S> {
        let walk = match source.as_slice() {
            Some(slice) => Walk::Contiguous(slice.iter()),
            None => Walk::Positional {
                source,
                front: 0,
                back: source.view_size(),
                _type: PhantomData,
            },
        };
        ArrayIterator { walk }
    }
}

impl<'a, T, S> Iterator for ArrayIterator<'a, T, S>
where
    T: Clone,
    S: ArrayRef<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match &mut self.walk {
            Walk::Contiguous(iter) => iter.next().cloned(),
            Walk::Positional {
                source,
                front,
                back,
                ..
            } => {
                if *front >= *back {
                    return None;
                }
                // Safety: back starts at view_size, which cannot change while we hold a shared
                // reference to the source
                let value = unsafe { source.get_value_unchecked(*front) };
                *front += 1;
                Some(value)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match &self.walk {
            Walk::Contiguous(iter) => iter.len(),
            Walk::Positional { front, back, .. } => back - front,
        };
        (remaining, Some(remaining))
    }
}

impl<'a, T, S> DoubleEndedIterator for ArrayIterator<'a, T, S>
where
    T: Clone,
    S: ArrayRef<T>,
{
    fn next_back(&mut self) -> Option<T> {
        match &mut self.walk {
            Walk::Contiguous(iter) => iter.next_back().cloned(),
            Walk::Positional {
                source,
                front,
                back,
                ..
            } => {
                if *front >= *back {
                    return None;
                }
                *back -= 1;
                // Safety: see next
                Some(unsafe { source.get_value_unchecked(*back) })
            }
        }
    }
}

impl<'a, T: Clone, S: ArrayRef<T>> FusedIterator for ArrayIterator<'a, T, S> {}
impl<'a, T: Clone, S: ArrayRef<T>> ExactSizeIterator for ArrayIterator<'a, T, S> {}

impl<'a, T, S> IntoIterator for &'a ArrayView<T, S>
where
    T: Clone,
    S: ArrayRef<T>,
{
    type Item = T;
    type IntoIter = ArrayIterator<'a, T, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[test]
fn test_positional_iteration_from_both_ends() {
    use crate::arrays::Array;
    use crate::arrays::slices::Odd;
    let array = Array::from(vec![0, 1, 2, 3, 4, 5, 6]);
    let odd = array.slice(Odd);
    let mut iterator = odd.iter();
    assert_eq!(iterator.len(), 3);
    assert_eq!(iterator.next(), Some(1));
    assert_eq!(iterator.next_back(), Some(5));
    assert_eq!(iterator.len(), 1);
    assert_eq!(iterator.next_back(), Some(3));
    assert_eq!(iterator.next(), None);
    assert_eq!(iterator.next_back(), None);
}
