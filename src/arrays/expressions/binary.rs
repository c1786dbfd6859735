use crate::arrays::capabilities::{ByValue, Capabilities, Storage};
use crate::arrays::errors::SizeMismatchError;
use crate::arrays::expressions::BinaryOperation;
use crate::arrays::views::ArrayRef;

use std::marker::PhantomData;

/**
 * A lazily evaluated operation over the elements at the same position in two sources.
 *
 * The two sources must be the same size, which is checked once when the ArrayBinary is
 * created. Each read of position `i` reads position `i` of both sources and applies the
 * operation to the pair, every time.
 */
#[derive(Clone, Debug)]
pub struct ArrayBinary<A, B, L, R, O> {
    left: L,
    right: R,
    operation: O,
    _types: PhantomData<(A, B)>,
}

impl<A, B, L, R, O> ArrayBinary<A, B, L, R, O>
where
    L: ArrayRef<A> + ByValue,
    R: ArrayRef<B> + ByValue,
    O: BinaryOperation<A, B>,
{
    /**
     * Creates an ArrayBinary from two sources and the operation to combine them with.
     *
     * # Panics
     *
     * If the two sources are not the same size.
     */
    #[track_caller]
    pub fn from(left: L, right: R, operation: O) -> ArrayBinary<A, B, L, R, O> {
        match ArrayBinary::try_from(left, right, operation) {
            Ok(binary) => binary,
            Err(error) => panic!("{}", error),
        }
    }

    /**
     * Creates an ArrayBinary from two sources and the operation to combine them with, or
     * returns an error if the two sources are not the same size.
     */
    pub fn try_from(
        left: L,
        right: R,
        operation: O,
    ) -> Result<ArrayBinary<A, B, L, R, O>, SizeMismatchError> {
        if left.view_size() != right.view_size() {
            return Err(SizeMismatchError {
                left: left.view_size(),
                right: right.view_size(),
            });
        }
        Ok(ArrayBinary {
            left,
            right,
            operation,
            _types: PhantomData,
        })
    }

    /**
     * Consumes the ArrayBinary, yielding the two sources it was created from.
     */
    pub fn sources(self) -> (L, R) {
        (self.left, self.right)
    }

    pub fn left_ref(&self) -> &L {
        &self.left
    }

    pub fn right_ref(&self) -> &R {
        &self.right
    }

    pub fn operation(&self) -> &O {
        &self.operation
    }
}

// # Safety
//
// Both sources are checked to have the same size at construction, and since they must
// implement ArrayRef correctly their sizes cannot change afterwards, so any position valid
// for one is valid for the other.
/**
 * An ArrayBinary of two ArrayRef types implements ArrayRef.
 */
unsafe impl<A, B, L, R, O> ArrayRef<O::Output> for ArrayBinary<A, B, L, R, O>
where
    L: ArrayRef<A>,
    R: ArrayRef<B>,
    O: BinaryOperation<A, B>,
{
    #[track_caller]
    fn try_get_value(&self, position: usize) -> Option<O::Output> {
        let left = self.left.try_get_value(position)?;
        let right = self.right.try_get_value(position)?;
        Some(self.operation.apply(left, right))
    }

    fn view_size(&self) -> usize {
        self.left.view_size()
    }

    #[track_caller]
    unsafe fn get_value_unchecked(&self, position: usize) -> O::Output {
        unsafe {
            self.operation.apply(
                self.left.get_value_unchecked(position),
                self.right.get_value_unchecked(position),
            )
        }
    }
}

impl<A, B, L, R, O> Capabilities for ArrayBinary<A, B, L, R, O> {
    const STORAGE: Storage = Storage::Computed;
    const MUTABLE: bool = false;
}

impl<A, B, L: ByValue, R: ByValue, O> ByValue for ArrayBinary<A, B, L, R, O> {}

#[test]
fn test_binary_checks_sizes_once() {
    use crate::arrays::Array;
    use crate::arrays::expressions::{Addition, Zipping};
    let a = Array::from(vec![1, 2, 3]);
    let b = Array::from(vec![10, 20, 30]);
    let c = Array::from(vec![1.5, 2.5]);
    let sum = ArrayBinary::from(&a, &b, Addition);
    assert_eq!(sum.view_size(), 3);
    assert_eq!(sum.try_get_value(2), Some(33));
    assert_eq!(sum.try_get_value(3), None);
    let mismatched = ArrayBinary::try_from(&a, &c, Zipping::from(|x: i32, y: f64| x as f64 * y));
    assert_eq!(
        mismatched.map(|binary| binary.view_size()),
        Err(SizeMismatchError { left: 3, right: 2 })
    );
}
