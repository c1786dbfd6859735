/*!
 * Error types for the checked (`try_`) variants of array operations.
 *
 * Every precondition in this crate is checked. The panicking versions of each operation format
 * the same errors defined here into their panic messages, so whether a caller uses `get` or
 * `try_get`, `slice` or `try_slice`, the diagnostic is identical.
 */

use std::error::Error;
use std::fmt;

use crate::arrays::slices::StridedRange;

/**
 * An error indicating a position resolved outside `[0, size)` of the array it was used on.
 *
 * The position is kept signed so that negative integers and `Last - k` markers that resolved
 * before the start of the array can be reported as they were requested.
 */
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct OutOfBoundsError {
    pub position: isize,
    pub size: usize,
}

impl Error for OutOfBoundsError {}

impl fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position {} is out of bounds of an array of size {}",
            self.position, self.size
        )
    }
}

/**
 * An error indicating two arrays which needed to be the same size were not.
 */
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SizeMismatchError {
    pub left: usize,
    pub right: usize,
}

impl Error for SizeMismatchError {}

impl fmt::Display for SizeMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mismatched arrays, left has size {} but right has size {}",
            self.left, self.right
        )
    }
}

/**
 * An error in resolving a slice against the size of an array.
 */
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum InvalidSliceError {
    /**
     * An endpoint of the slice did not resolve to a valid position.
     */
    Position(OutOfBoundsError),
    /**
     * The strided range generates positions outside the array.
     */
    OutOfBounds { range: StridedRange, size: usize },
    /**
     * A stride of 0 was given for a range of more than one element.
     */
    ZeroStride { count: usize },
    /**
     * A step of 0 was given to [EveryNth](crate::arrays::slices::EveryNth).
     */
    ZeroStep,
    /**
     * The stride cannot walk from the first position to the last.
     */
    Unreachable { first: usize, last: usize, stride: isize },
    /**
     * A range's start was after its end.
     */
    Reversed { start: usize, end: usize },
    /**
     * More elements were requested than the array has.
     */
    TooLong { requested: usize, size: usize },
}

impl Error for InvalidSliceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InvalidSliceError::Position(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for InvalidSliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use InvalidSliceError as I;
        match self {
            I::Position(error) => write!(f, "Invalid slice endpoint: {}", error),
            I::OutOfBounds { range, size } => write!(
                f,
                "Strided range {:?} generates positions outside an array of size {}",
                range, size
            ),
            I::ZeroStride { count } => write!(
                f,
                "A stride of 0 is only valid for ranges of at most 1 element, but {} were requested",
                count
            ),
            I::ZeroStep => write!(f, "Cannot take every 0th element"),
            I::Unreachable { first, last, stride } => write!(
                f,
                "A stride of {} cannot reach position {} from position {}",
                stride, last, first
            ),
            I::Reversed { start, end } => {
                write!(f, "Range start {} is after its end {}", start, end)
            }
            I::TooLong { requested, size } => write!(
                f,
                "Requested {} elements from an array of size {}",
                requested, size
            ),
        }
    }
}

/**
 * An error in an [IndexSet](crate::arrays::indexing::IndexSet) used against an array.
 */
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum InvalidIndexSetError {
    /**
     * A position in the set is outside the array.
     */
    OutOfBounds(OutOfBoundsError),
    /**
     * The set needed to be strictly increasing but the position at `at` was not greater than
     * the position before it.
     */
    NotStrictlyIncreasing { at: usize },
}

impl Error for InvalidIndexSetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InvalidIndexSetError::OutOfBounds(error) => Some(error),
            InvalidIndexSetError::NotStrictlyIncreasing { .. } => None,
        }
    }
}

impl fmt::Display for InvalidIndexSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidIndexSetError::OutOfBounds(error) => write!(f, "Invalid index set: {}", error),
            InvalidIndexSetError::NotStrictlyIncreasing { at } => write!(
                f,
                "Index set must be strictly increasing but the position at {} is not",
                at
            ),
        }
    }
}

/**
 * An error in taking the [mean](crate::algorithms::mean) of a source.
 */
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum InvalidMeanError {
    /**
     * The source had no elements.
     */
    Empty,
    /**
     * The number of elements cannot be represented by the element type, so there is nothing
     * to divide the sum by.
     */
    SizeTooLarge { size: usize },
}

impl Error for InvalidMeanError {}

impl fmt::Display for InvalidMeanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMeanError::Empty => write!(f, "Provided source must not be empty"),
            InvalidMeanError::SizeTooLarge { size } => write!(
                f,
                "Size {} of the provided source cannot be represented by its element type",
                size
            ),
        }
    }
}

/**
 * Any error an array operation can return, so that checked operations of different kinds can
 * be combined with `?`.
 */
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ArrayError {
    Range(OutOfBoundsError),
    Shape(SizeMismatchError),
    Slice(InvalidSliceError),
    IndexSet(InvalidIndexSetError),
    Mean(InvalidMeanError),
}

impl Error for ArrayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ArrayError::Range(error) => Some(error),
            ArrayError::Shape(error) => Some(error),
            ArrayError::Slice(error) => Some(error),
            ArrayError::IndexSet(error) => Some(error),
            ArrayError::Mean(error) => Some(error),
        }
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayError::Range(error) => write!(f, "{}", error),
            ArrayError::Shape(error) => write!(f, "{}", error),
            ArrayError::Slice(error) => write!(f, "{}", error),
            ArrayError::IndexSet(error) => write!(f, "{}", error),
            ArrayError::Mean(error) => write!(f, "{}", error),
        }
    }
}

impl From<OutOfBoundsError> for ArrayError {
    fn from(error: OutOfBoundsError) -> ArrayError {
        ArrayError::Range(error)
    }
}

impl From<SizeMismatchError> for ArrayError {
    fn from(error: SizeMismatchError) -> ArrayError {
        ArrayError::Shape(error)
    }
}

impl From<InvalidSliceError> for ArrayError {
    fn from(error: InvalidSliceError) -> ArrayError {
        ArrayError::Slice(error)
    }
}

impl From<InvalidIndexSetError> for ArrayError {
    fn from(error: InvalidIndexSetError) -> ArrayError {
        ArrayError::IndexSet(error)
    }
}

impl From<InvalidMeanError> for ArrayError {
    fn from(error: InvalidMeanError) -> ArrayError {
        ArrayError::Mean(error)
    }
}

/**
 * Converts a requested position to the signed form errors report, saturating positions too
 * large to represent.
 */
#[inline]
pub(crate) fn signed(position: usize) -> isize {
    isize::try_from(position).unwrap_or(isize::MAX)
}

#[test]
fn test_error_messages() {
    let error = OutOfBoundsError { position: -1, size: 3 };
    assert_eq!(
        error.to_string(),
        "Position -1 is out of bounds of an array of size 3"
    );
    let error: ArrayError = SizeMismatchError { left: 2, right: 3 }.into();
    assert_eq!(
        error.to_string(),
        "Mismatched arrays, left has size 2 but right has size 3"
    );
    assert!(error.source().is_some());
}
