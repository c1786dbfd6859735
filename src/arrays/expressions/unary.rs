use crate::arrays::capabilities::{ByValue, Capabilities, Storage};
use crate::arrays::expressions::UnaryOperation;
use crate::arrays::views::ArrayRef;

use std::marker::PhantomData;

/**
 * A lazily evaluated operation over every element of a source.
 *
 * Nothing is computed when an ArrayUnary is created. Each read of position `i` reads position
 * `i` of the source and applies the operation to it, every time.
 */
#[derive(Clone, Debug)]
pub struct ArrayUnary<T, S, O> {
    source: S,
    operation: O,
    _type: PhantomData<T>,
}

impl<T, S, O> ArrayUnary<T, S, O>
where
    S: ArrayRef<T> + ByValue,
    O: UnaryOperation<T>,
{
    pub fn from(source: S, operation: O) -> ArrayUnary<T, S, O> {
        ArrayUnary {
            source,
            operation,
            _type: PhantomData,
        }
    }

    /**
     * Consumes the ArrayUnary, yielding the source it was created from.
     */
    pub fn source(self) -> S {
        self.source
    }

    /**
     * Gives a reference to the ArrayUnary's source (in which the data is not transformed).
     */
    pub fn source_ref(&self) -> &S {
        &self.source
    }

    pub fn operation(&self) -> &O {
        &self.operation
    }
}

// # Safety
//
// Since the ArrayRef we own must implement ArrayRef correctly, so do we by delegating to it,
// as we don't introduce any interior mutability.
/**
 * An ArrayUnary of an ArrayRef type implements ArrayRef.
 */
unsafe impl<T, S, O> ArrayRef<O::Output> for ArrayUnary<T, S, O>
where
    S: ArrayRef<T>,
    O: UnaryOperation<T>,
{
    #[track_caller]
    fn try_get_value(&self, position: usize) -> Option<O::Output> {
        Some(self.operation.apply(self.source.try_get_value(position)?))
    }

    fn view_size(&self) -> usize {
        self.source.view_size()
    }

    #[track_caller]
    unsafe fn get_value_unchecked(&self, position: usize) -> O::Output {
        self.operation
            .apply(unsafe { self.source.get_value_unchecked(position) })
    }
}

impl<T, S, O> Capabilities for ArrayUnary<T, S, O> {
    const STORAGE: Storage = Storage::Computed;
    const MUTABLE: bool = false;
}

impl<T, S: ByValue, O> ByValue for ArrayUnary<T, S, O> {}

#[test]
fn test_unary_is_evaluated_on_every_access() {
    use crate::arrays::Array;
    use crate::arrays::expressions::Mapping;
    use std::cell::Cell;
    let array = Array::from(vec![1, 2, 3]);
    let calls = Cell::new(0);
    let doubled = ArrayUnary::from(
        &array,
        Mapping::from(|x: i32| {
            calls.set(calls.get() + 1);
            x * 2
        }),
    );
    assert_eq!(calls.get(), 0);
    assert_eq!(doubled.try_get_value(1), Some(4));
    assert_eq!(doubled.try_get_value(1), Some(4));
    assert_eq!(calls.get(), 2);
    assert_eq!(doubled.try_get_value(3), None);
    assert_eq!(calls.get(), 2);
}
