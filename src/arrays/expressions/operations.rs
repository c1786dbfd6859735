/*!
 * Element-wise operations which expression nodes apply lazily.
 *
 * For each operator in [`std::ops`] an expression can use there is a zero sized type here
 * implementing [UnaryOperation] or [BinaryOperation], so operators can be passed around as
 * type parameters. [Mapping] and [Zipping] wrap arbitrary closures the same way.
 *
 * Operations are applied on every access to an expression, so preconditions which depend on
 * the values (integer division by zero, negative shift amounts) are checked on every access
 * too.
 */

use std::ops;

use crate::numeric::{Element, ElementCategory};

/**
 * A function of one element.
 */
pub trait UnaryOperation<A> {
    type Output;

    fn apply(&self, operand: A) -> Self::Output;
}

/**
 * A function combining two elements.
 */
pub trait BinaryOperation<A, B> {
    type Output;

    fn apply(&self, left: A, right: B) -> Self::Output;
}

macro_rules! unary_operation {
    ($name:ident, $op:ident, $method:ident, $doc:tt) => {
        #[doc=$doc]
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
        pub struct $name;

        impl<A> UnaryOperation<A> for $name
        where
            A: ops::$op,
        {
            type Output = A::Output;

            #[inline]
            fn apply(&self, operand: A) -> Self::Output {
                ops::$op::$method(operand)
            }
        }
    };
}

macro_rules! binary_operation {
    ($name:ident, $op:ident, $method:ident, $doc:tt) => {
        #[doc=$doc]
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
        pub struct $name;

        impl<A, B> BinaryOperation<A, B> for $name
        where
            A: ops::$op<B>,
        {
            type Output = A::Output;

            #[inline]
            fn apply(&self, left: A, right: B) -> Self::Output {
                ops::$op::$method(left, right)
            }
        }
    };
}

unary_operation!(Negation, Neg, neg, "Unary `-`");
unary_operation!(Not, Not, not, "Unary `!`, logical for booleans and bitwise for integers");

binary_operation!(Addition, Add, add, "Binary `+`");
binary_operation!(Subtraction, Sub, sub, "Binary `-`");
binary_operation!(Multiplication, Mul, mul, "Binary `*`");
binary_operation!(BitAnd, BitAnd, bitand, "Binary `&`");
binary_operation!(BitOr, BitOr, bitor, "Binary `|`");
binary_operation!(BitXor, BitXor, bitxor, "Binary `^`");

/**
 * Binary `/`
 *
 * # Panics
 *
 * When applied to an integer divisor of 0. Floating point division by 0 follows IEEE 754
 * and produces an infinity or NaN.
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Division;

/**
 * Binary `%`
 *
 * # Panics
 *
 * When applied to an integer divisor of 0.
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Remainder;

/**
 * Binary `<<`
 *
 * # Panics
 *
 * When applied to a negative shift amount.
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct ShiftLeft;

/**
 * Binary `>>`
 *
 * # Panics
 *
 * When applied to a negative shift amount.
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct ShiftRight;

#[track_caller]
#[inline]
fn check_divisor<B: Element>(divisor: &B) {
    if B::CATEGORY == ElementCategory::Integer && divisor.is_zero() {
        panic!("Integer division by zero, the divisor must not be 0");
    }
}

#[track_caller]
#[inline]
fn check_shift<B: Element>(amount: &B) {
    if amount.is_negative() {
        panic!("Cannot shift by a negative amount: {:?}", amount);
    }
}

impl<A, B> BinaryOperation<A, B> for Division
where
    A: ops::Div<B>,
    B: Element,
{
    type Output = A::Output;

    #[track_caller]
    #[inline]
    fn apply(&self, left: A, right: B) -> Self::Output {
        check_divisor(&right);
        left / right
    }
}

impl<A, B> BinaryOperation<A, B> for Remainder
where
    A: ops::Rem<B>,
    B: Element,
{
    type Output = A::Output;

    #[track_caller]
    #[inline]
    fn apply(&self, left: A, right: B) -> Self::Output {
        check_divisor(&right);
        left % right
    }
}

impl<A, B> BinaryOperation<A, B> for ShiftLeft
where
    A: ops::Shl<B>,
    B: Element,
{
    type Output = A::Output;

    #[track_caller]
    #[inline]
    fn apply(&self, left: A, right: B) -> Self::Output {
        check_shift(&right);
        left << right
    }
}

impl<A, B> BinaryOperation<A, B> for ShiftRight
where
    A: ops::Shr<B>,
    B: Element,
{
    type Output = A::Output;

    #[track_caller]
    #[inline]
    fn apply(&self, left: A, right: B) -> Self::Output {
        check_shift(&right);
        left >> right
    }
}

/**
 * A closure of one element as a [UnaryOperation].
 */
#[derive(Clone, Copy, Debug)]
pub struct Mapping<F> {
    function: F,
}

impl<F> Mapping<F> {
    pub fn from(function: F) -> Mapping<F> {
        Mapping { function }
    }
}

impl<A, U, F> UnaryOperation<A> for Mapping<F>
where
    F: Fn(A) -> U,
{
    type Output = U;

    #[inline]
    fn apply(&self, operand: A) -> U {
        (self.function)(operand)
    }
}

/**
 * A closure of two elements as a [BinaryOperation].
 */
#[derive(Clone, Copy, Debug)]
pub struct Zipping<F> {
    function: F,
}

impl<F> Zipping<F> {
    pub fn from(function: F) -> Zipping<F> {
        Zipping { function }
    }
}

impl<A, B, U, F> BinaryOperation<A, B> for Zipping<F>
where
    F: Fn(A, B) -> U,
{
    type Output = U;

    #[inline]
    fn apply(&self, left: A, right: B) -> U {
        (self.function)(left, right)
    }
}

#[test]
fn test_float_division_by_zero_is_ieee() {
    assert_eq!(Division.apply(1.0_f64, 0.0), f64::INFINITY);
    assert!(Division.apply(0.0_f32, 0.0).is_nan());
    assert_eq!(Remainder.apply(7_i32, 3), 1);
}

#[test]
#[should_panic(expected = "Integer division by zero")]
fn test_integer_division_by_zero_panics() {
    Division.apply(1_u8, 0_u8);
}

#[test]
#[should_panic(expected = "Cannot shift by a negative amount: -1")]
fn test_negative_shift_panics() {
    ShiftLeft.apply(1_i32, -1_i32);
}
