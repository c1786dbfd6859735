/*!
 * Element type definitions
 *
 * Arrays hold exactly one element type and never convert between element types implicitly.
 * Rust's built in scalars already refuse mixed type arithmetic, so they are used directly as
 * elements, with [Element] classifying each one as a boolean, integer or floating point type.
 */

use std::cmp::PartialOrd;
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

/**
 * The three categories of element an array can store.
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ElementCategory {
    Boolean,
    Integer,
    Floating,
}

/**
 * A scalar which can be stored in a strict array.
 *
 * This is implemented for `bool`, every primitive integer and both primitive floats.
 */
pub trait Element: Clone + PartialEq + Debug {
    /**
     * The category this element type belongs to.
     */
    const CATEGORY: ElementCategory;

    /**
     * True if this value is the zero of its type (`false` for booleans).
     */
    fn is_zero(&self) -> bool;

    /**
     * True if this value is strictly less than zero. Always false for unsigned and boolean
     * types.
     */
    fn is_negative(&self) -> bool;
}

/**
 * A general purpose numeric trait that defines all the behaviour numerical arrays need
 * their types to support for math operations.
 *
 * Unlike a mathematical field this does not require negation, so unsigned integers are
 * numeric too.
 */
pub trait Numeric
where
    Self: Add<Output = Self>
        + Sub<Output = Self>
        + Mul<Output = Self>
        + Div<Output = Self>
        + PartialOrd
        + Sized
        + Clone
        + Element
        + ZeroOne
        + FromPosition,
{
}

/**
 * Anything which implements all the super traits will automatically implement this trait too.
 * This covers every primitive integer and float.
 */
impl<T> Numeric for T where
    T: Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + PartialOrd
        + Sized
        + Clone
        + Element
        + ZeroOne
        + FromPosition
{
}

/**
 * A trait defining how to obtain 0 and 1 for every implementing type.
 *
 * The boilerplate implementations for primitives is performed with a macro.
 */
pub trait ZeroOne: Sized {
    fn zero() -> Self;
    fn one() -> Self;
}

/**
 * Conversion from a position in an array to an element, used by generators such as
 * [sequence](crate::arrays::expressions::sequence) which compute `start + increment * i`.
 *
 * Integer types return None for positions they cannot represent, rather than wrapping. Floats
 * can represent every position, rounding to the nearest value for very large ones.
 */
pub trait FromPosition: Sized {
    fn from_position(position: usize) -> Option<Self>;
}

macro_rules! element_signed {
    ($T:ty) => {
        impl Element for $T {
            const CATEGORY: ElementCategory = ElementCategory::Integer;
            #[inline]
            fn is_zero(&self) -> bool { *self == 0 }
            #[inline]
            fn is_negative(&self) -> bool { *self < 0 }
        }
        impl ZeroOne for $T {
            #[inline]
            fn zero() -> $T { 0 }
            #[inline]
            fn one() -> $T { 1 }
        }
        impl FromPosition for $T {
            #[inline]
            fn from_position(position: usize) -> Option<$T> { <$T>::try_from(position).ok() }
        }
    };
}

macro_rules! element_unsigned {
    ($T:ty) => {
        impl Element for $T {
            const CATEGORY: ElementCategory = ElementCategory::Integer;
            #[inline]
            fn is_zero(&self) -> bool { *self == 0 }
            #[inline]
            fn is_negative(&self) -> bool { false }
        }
        impl ZeroOne for $T {
            #[inline]
            fn zero() -> $T { 0 }
            #[inline]
            fn one() -> $T { 1 }
        }
        impl FromPosition for $T {
            #[inline]
            fn from_position(position: usize) -> Option<$T> { <$T>::try_from(position).ok() }
        }
    };
}

macro_rules! element_float {
    ($T:ty) => {
        impl Element for $T {
            const CATEGORY: ElementCategory = ElementCategory::Floating;
            #[inline]
            fn is_zero(&self) -> bool { *self == 0.0 }
            #[inline]
            fn is_negative(&self) -> bool { *self < 0.0 }
        }
        impl ZeroOne for $T {
            #[inline]
            fn zero() -> $T { 0.0 }
            #[inline]
            fn one() -> $T { 1.0 }
        }
        impl FromPosition for $T {
            #[inline]
            fn from_position(position: usize) -> Option<$T> { Some(position as $T) }
        }
    };
}

element_signed!(i8);
element_signed!(i16);
element_signed!(i32);
element_signed!(i64);
element_signed!(i128);
element_signed!(isize);
element_unsigned!(u8);
element_unsigned!(u16);
element_unsigned!(u32);
element_unsigned!(u64);
element_unsigned!(u128);
element_unsigned!(usize);
element_float!(f32);
element_float!(f64);

impl Element for bool {
    const CATEGORY: ElementCategory = ElementCategory::Boolean;
    #[inline]
    fn is_zero(&self) -> bool {
        !*self
    }
    #[inline]
    fn is_negative(&self) -> bool {
        false
    }
}

/**
 * Additional traits for more complex numerical operations.
 */
pub mod extra {

/**
 * A type which can be square rooted.
 *
 * This is implemented by `f32` and `f64`.
 */
pub trait Sqrt {
    type Output;
    fn sqrt(self) -> Self::Output;
}

macro_rules! sqrt_float {
    ($T:ty) => {
        impl Sqrt for $T {
            type Output = $T;
            #[inline]
            fn sqrt(self) -> Self::Output {
                <$T>::sqrt(self)
            }
        }
    };
}

sqrt_float!(f32);
sqrt_float!(f64);

/**
 * A type which has an absolute value of the same type.
 *
 * Unsigned integers are their own absolute value. Signed integers wrap for their minimum
 * value the same way [`wrapping_abs`](i32::wrapping_abs) does.
 */
pub trait Abs {
    fn abs(self) -> Self;
}

macro_rules! abs_signed {
    ($T:ty) => {
        impl Abs for $T {
            #[inline]
            fn abs(self) -> $T {
                self.wrapping_abs()
            }
        }
    };
}

macro_rules! abs_unsigned {
    ($T:ty) => {
        impl Abs for $T {
            #[inline]
            fn abs(self) -> $T {
                self
            }
        }
    };
}

macro_rules! abs_float {
    ($T:ty) => {
        impl Abs for $T {
            #[inline]
            fn abs(self) -> $T {
                <$T>::abs(self)
            }
        }
    };
}

abs_signed!(i8);
abs_signed!(i16);
abs_signed!(i32);
abs_signed!(i64);
abs_signed!(i128);
abs_signed!(isize);
abs_unsigned!(u8);
abs_unsigned!(u16);
abs_unsigned!(u32);
abs_unsigned!(u64);
abs_unsigned!(u128);
abs_unsigned!(usize);
abs_float!(f32);
abs_float!(f64);

}

#[test]
fn test_element_categories() {
    assert_eq!(<bool as Element>::CATEGORY, ElementCategory::Boolean);
    assert_eq!(<u8 as Element>::CATEGORY, ElementCategory::Integer);
    assert_eq!(<i64 as Element>::CATEGORY, ElementCategory::Integer);
    assert_eq!(<f32 as Element>::CATEGORY, ElementCategory::Floating);
    assert!((-3_i32).is_negative());
    assert!(!3_u32.is_negative());
    assert!(0.0_f64.is_zero());
    assert!(false.is_zero());
}

#[test]
fn test_from_position_does_not_wrap() {
    assert_eq!(u8::from_position(255), Some(255));
    assert_eq!(u8::from_position(256), None);
    assert_eq!(i8::from_position(128), None);
    assert_eq!(i64::from_position(7), Some(7));
    assert_eq!(f32::from_position(300), Some(300.0));
}
