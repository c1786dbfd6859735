use crate::arrays::capabilities::{ByValue, Capabilities, Storage};
use crate::arrays::views::ArrayRef;
use crate::numeric::Numeric;

/**
 * An arithmetic progression computed on demand: position `i` is `start + increment * i`.
 *
 * The increment may be zero, or negative for signed and floating point elements.
 *
 * Reading a position which the element type cannot represent (such as position 256 of a `u8`
 * sequence) panics instead of wrapping around.
 */
#[derive(Clone, Debug, PartialEq)]
pub struct ArraySequence<T> {
    start: T,
    size: usize,
    increment: T,
}

impl<T: Numeric> ArraySequence<T> {
    pub fn from(start: T, size: usize, increment: T) -> ArraySequence<T> {
        ArraySequence {
            start,
            size,
            increment,
        }
    }

    pub fn start(&self) -> &T {
        &self.start
    }

    pub fn increment(&self) -> &T {
        &self.increment
    }
}

// # Safety
//
// The size is fixed at construction and every position below it is computed rather than
// read, so there is nothing to index out of bounds.
unsafe impl<T: Numeric> ArrayRef<T> for ArraySequence<T> {
    fn try_get_value(&self, position: usize) -> Option<T> {
        if position < self.size {
            Some(unsafe { self.get_value_unchecked(position) })
        } else {
            None
        }
    }

    fn view_size(&self) -> usize {
        self.size
    }

    #[track_caller]
    unsafe fn get_value_unchecked(&self, position: usize) -> T {
        match T::from_position(position) {
            Some(step) => self.start.clone() + self.increment.clone() * step,
            None => panic!(
                "Position {} cannot be represented by the element type of the sequence",
                position
            ),
        }
    }
}

/**
 * The same value at every position, computed on demand. This is the zero increment
 * sequence, but works for any element type including booleans.
 */
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayConstant<T> {
    value: T,
    size: usize,
}

impl<T: Clone> ArrayConstant<T> {
    pub fn from(value: T, size: usize) -> ArrayConstant<T> {
        ArrayConstant { value, size }
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

// # Safety
//
// The size is fixed at construction and every position below it reads the same value.
unsafe impl<T: Clone> ArrayRef<T> for ArrayConstant<T> {
    fn try_get_value(&self, position: usize) -> Option<T> {
        if position < self.size {
            Some(self.value.clone())
        } else {
            None
        }
    }

    fn view_size(&self) -> usize {
        self.size
    }

    unsafe fn get_value_unchecked(&self, _position: usize) -> T {
        self.value.clone()
    }
}

impl<T> Capabilities for ArraySequence<T> {
    const STORAGE: Storage = Storage::Computed;
    const MUTABLE: bool = false;
}

impl<T> Capabilities for ArrayConstant<T> {
    const STORAGE: Storage = Storage::Computed;
    const MUTABLE: bool = false;
}

impl<T> ByValue for ArraySequence<T> {}

impl<T> ByValue for ArrayConstant<T> {}

#[test]
fn test_sequences() {
    let counting = ArraySequence::from(0_u32, 4, 1);
    assert_eq!(counting.try_get_value(3), Some(3));
    assert_eq!(counting.try_get_value(4), None);
    let descending = ArraySequence::from(1.0_f32, 3, -0.5);
    assert_eq!(descending.try_get_value(2), Some(0.0));
    let flat = ArraySequence::from(7_i8, 2, 0);
    assert_eq!(flat.try_get_value(1), Some(7));
    let empty = ArraySequence::from(7_i8, 0, 1);
    assert_eq!(empty.view_size(), 0);
    let truths = ArrayConstant::from(true, 2);
    assert_eq!(truths.try_get_value(1), Some(true));
    assert_eq!(truths.try_get_value(2), None);
}

#[test]
fn test_sequence_positions_past_narrow_types() {
    let wide = ArraySequence::from(255_u8, 256, 0);
    assert_eq!(wide.try_get_value(255), Some(255));
    let floats = ArraySequence::from(0.0_f32, 300, 1.0);
    assert_eq!(floats.try_get_value(299), Some(299.0));
}

#[test]
#[should_panic(expected = "Position 256 cannot be represented by the element type of the sequence")]
fn test_sequence_position_not_representable() {
    let too_long = ArraySequence::from(0_u8, 300, 0);
    too_long.try_get_value(256);
}
