/*!
 * Operator overloads for [ArrayView] and [Array].
 *
 * Binary and unary operators never compute anything, they return an ArrayView over an
 * expression node which applies the operator on every access. Operands can be views taken by
 * value (when their source is [ByValue]), views taken by reference, referenced Arrays, or
 * scalars of the same element type on either side. Sizes of two array operands must match
 * and are checked when the expression is built.
 *
 * Compound assignment operators are eager, writing the result of the operator into every
 * element of the left hand side straight away.
 */

use std::ops;

use crate::arrays::Array;
use crate::arrays::capabilities::ByValue;
use crate::arrays::errors::SizeMismatchError;
use crate::arrays::expressions::{
    Addition, ArrayBinary, ArrayConstant, ArrayUnary, BinaryOperation, BitAnd, BitOr, BitXor,
    Division, Multiplication, Negation, Not, Remainder, ShiftLeft, ShiftRight, Subtraction,
    UnaryOperation,
};
use crate::arrays::views::{ArrayMut, ArrayRef, ArrayView};

/**
 * Applies the operation to every pair of elements, writing the result back into `left`.
 */
#[track_caller]
fn assign_elementwise<T, S1, S2, O>(left: &mut S1, right: &S2, operation: O)
where
    T: Clone,
    S1: ArrayMut<T>,
    S2: ArrayRef<T>,
    O: BinaryOperation<T, T, Output = T>,
{
    let size = left.view_size();
    if size != right.view_size() {
        panic!(
            "{}",
            SizeMismatchError {
                left: size,
                right: right.view_size()
            }
        );
    }
    for position in 0..size {
        // Safety: both sizes are checked above and neither can change while we hold the
        // references
        unsafe {
            let element = left.get_reference_unchecked_mut(position);
            *element = operation.apply(element.clone(), right.get_value_unchecked(position));
        }
    }
}

/**
 * Applies the operation to every element and the scalar, writing the result back into `left`.
 */
#[track_caller]
fn assign_scalar<T, S, O>(left: &mut S, right: T, operation: O)
where
    T: Clone,
    S: ArrayMut<T>,
    O: BinaryOperation<T, T, Output = T>,
{
    for position in 0..left.view_size() {
        // Safety: position is within view_size, which cannot change while we hold &mut
        unsafe {
            let element = left.get_reference_unchecked_mut(position);
            *element = operation.apply(element.clone(), right.clone());
        }
    }
}

macro_rules! array_view_operation {
    (impl $op:tt { fn $method:ident } with $node:ident $doc:tt) => {
        #[doc=$doc]
        impl<T, S1, S2> ops::$op<ArrayView<T, S2>> for ArrayView<T, S1>
        where
            S1: ArrayRef<T> + ByValue,
            S2: ArrayRef<T> + ByValue,
            $node: BinaryOperation<T, T, Output = T>,
        {
            type Output = ArrayView<T, ArrayBinary<T, T, S1, S2, $node>>;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: ArrayView<T, S2>) -> Self::Output {
                ArrayView::from(ArrayBinary::from(self.source(), rhs.source(), $node))
            }
        }

        #[doc=$doc]
        impl<'a, T, S1, S2> ops::$op<&'a ArrayView<T, S2>> for ArrayView<T, S1>
        where
            S1: ArrayRef<T> + ByValue,
            S2: ArrayRef<T>,
            $node: BinaryOperation<T, T, Output = T>,
        {
            type Output = ArrayView<T, ArrayBinary<T, T, S1, &'a S2, $node>>;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: &'a ArrayView<T, S2>) -> Self::Output {
                ArrayView::from(ArrayBinary::from(self.source(), rhs.source_ref(), $node))
            }
        }

        #[doc=$doc]
        impl<'a, T, S1> ops::$op<&'a Array<T>> for ArrayView<T, S1>
        where
            T: Clone,
            S1: ArrayRef<T> + ByValue,
            $node: BinaryOperation<T, T, Output = T>,
        {
            type Output = ArrayView<T, ArrayBinary<T, T, S1, &'a Array<T>, $node>>;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: &'a Array<T>) -> Self::Output {
                ArrayView::from(ArrayBinary::from(self.source(), rhs, $node))
            }
        }

        #[doc=$doc]
        impl<'a, T, S1, S2> ops::$op<ArrayView<T, S2>> for &'a ArrayView<T, S1>
        where
            S1: ArrayRef<T>,
            S2: ArrayRef<T> + ByValue,
            $node: BinaryOperation<T, T, Output = T>,
        {
            type Output = ArrayView<T, ArrayBinary<T, T, &'a S1, S2, $node>>;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: ArrayView<T, S2>) -> Self::Output {
                ArrayView::from(ArrayBinary::from(self.source_ref(), rhs.source(), $node))
            }
        }

        #[doc=$doc]
        impl<'a, 'b, T, S1, S2> ops::$op<&'b ArrayView<T, S2>> for &'a ArrayView<T, S1>
        where
            S1: ArrayRef<T>,
            S2: ArrayRef<T>,
            $node: BinaryOperation<T, T, Output = T>,
        {
            type Output = ArrayView<T, ArrayBinary<T, T, &'a S1, &'b S2, $node>>;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: &'b ArrayView<T, S2>) -> Self::Output {
                ArrayView::from(ArrayBinary::from(self.source_ref(), rhs.source_ref(), $node))
            }
        }

        #[doc=$doc]
        impl<'a, 'b, T, S1> ops::$op<&'b Array<T>> for &'a ArrayView<T, S1>
        where
            T: Clone,
            S1: ArrayRef<T>,
            $node: BinaryOperation<T, T, Output = T>,
        {
            type Output = ArrayView<T, ArrayBinary<T, T, &'a S1, &'b Array<T>, $node>>;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: &'b Array<T>) -> Self::Output {
                ArrayView::from(ArrayBinary::from(self.source_ref(), rhs, $node))
            }
        }

        #[doc=$doc]
        impl<'a, T, S2> ops::$op<ArrayView<T, S2>> for &'a Array<T>
        where
            T: Clone,
            S2: ArrayRef<T> + ByValue,
            $node: BinaryOperation<T, T, Output = T>,
        {
            type Output = ArrayView<T, ArrayBinary<T, T, &'a Array<T>, S2, $node>>;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: ArrayView<T, S2>) -> Self::Output {
                ArrayView::from(ArrayBinary::from(self, rhs.source(), $node))
            }
        }

        #[doc=$doc]
        impl<'a, 'b, T, S2> ops::$op<&'b ArrayView<T, S2>> for &'a Array<T>
        where
            T: Clone,
            S2: ArrayRef<T>,
            $node: BinaryOperation<T, T, Output = T>,
        {
            type Output = ArrayView<T, ArrayBinary<T, T, &'a Array<T>, &'b S2, $node>>;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: &'b ArrayView<T, S2>) -> Self::Output {
                ArrayView::from(ArrayBinary::from(self, rhs.source_ref(), $node))
            }
        }

        #[doc=$doc]
        impl<'a, 'b, T> ops::$op<&'b Array<T>> for &'a Array<T>
        where
            T: Clone,
            $node: BinaryOperation<T, T, Output = T>,
        {
            type Output = ArrayView<T, ArrayBinary<T, T, &'a Array<T>, &'b Array<T>, $node>>;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: &'b Array<T>) -> Self::Output {
                ArrayView::from(ArrayBinary::from(self, rhs, $node))
            }
        }
    };
}

array_view_operation!(impl Add { fn add } with Addition "Lazy elementwise addition");
array_view_operation!(impl Sub { fn sub } with Subtraction "Lazy elementwise subtraction");
array_view_operation!(impl Mul { fn mul } with Multiplication "Lazy elementwise multiplication");
array_view_operation!(impl Div { fn div } with Division "Lazy elementwise division");
array_view_operation!(impl Rem { fn rem } with Remainder "Lazy elementwise remainder");
array_view_operation!(impl BitAnd { fn bitand } with BitAnd "Lazy elementwise and");
array_view_operation!(impl BitOr { fn bitor } with BitOr "Lazy elementwise or");
array_view_operation!(impl BitXor { fn bitxor } with BitXor "Lazy elementwise exclusive or");
array_view_operation!(impl Shl { fn shl } with ShiftLeft "Lazy elementwise left shift");
array_view_operation!(impl Shr { fn shr } with ShiftRight "Lazy elementwise right shift");

macro_rules! array_view_unary_operation {
    (impl $op:tt { fn $method:ident } with $node:ident $doc:tt) => {
        #[doc=$doc]
        impl<T, S> ops::$op for ArrayView<T, S>
        where
            S: ArrayRef<T> + ByValue,
            $node: UnaryOperation<T, Output = T>,
        {
            type Output = ArrayView<T, ArrayUnary<T, S, $node>>;

            #[inline]
            fn $method(self) -> Self::Output {
                ArrayView::from(ArrayUnary::from(self.source(), $node))
            }
        }

        #[doc=$doc]
        impl<'a, T, S> ops::$op for &'a ArrayView<T, S>
        where
            S: ArrayRef<T>,
            $node: UnaryOperation<T, Output = T>,
        {
            type Output = ArrayView<T, ArrayUnary<T, &'a S, $node>>;

            #[inline]
            fn $method(self) -> Self::Output {
                ArrayView::from(ArrayUnary::from(self.source_ref(), $node))
            }
        }

        #[doc=$doc]
        impl<'a, T> ops::$op for &'a Array<T>
        where
            T: Clone,
            $node: UnaryOperation<T, Output = T>,
        {
            type Output = ArrayView<T, ArrayUnary<T, &'a Array<T>, $node>>;

            #[inline]
            fn $method(self) -> Self::Output {
                ArrayView::from(ArrayUnary::from(self, $node))
            }
        }
    };
}

array_view_unary_operation!(impl Neg { fn neg } with Negation "Lazy elementwise negation");
array_view_unary_operation!(impl Not { fn not } with Not "Lazy elementwise not");

macro_rules! array_view_assign_operation {
    (impl $op:tt { fn $method:ident } with $node:ident $doc:tt) => {
        #[doc=$doc]
        impl<T, S1, S2> ops::$op<ArrayView<T, S2>> for ArrayView<T, S1>
        where
            T: Clone,
            S1: ArrayMut<T>,
            S2: ArrayRef<T>,
            $node: BinaryOperation<T, T, Output = T>,
        {
            #[track_caller]
            fn $method(&mut self, rhs: ArrayView<T, S2>) {
                assign_elementwise(self.source_ref_mut(), rhs.source_ref(), $node)
            }
        }

        #[doc=$doc]
        impl<'a, T, S1, S2> ops::$op<&'a ArrayView<T, S2>> for ArrayView<T, S1>
        where
            T: Clone,
            S1: ArrayMut<T>,
            S2: ArrayRef<T>,
            $node: BinaryOperation<T, T, Output = T>,
        {
            #[track_caller]
            fn $method(&mut self, rhs: &'a ArrayView<T, S2>) {
                assign_elementwise(self.source_ref_mut(), rhs.source_ref(), $node)
            }
        }

        #[doc=$doc]
        impl<'a, T, S1> ops::$op<&'a Array<T>> for ArrayView<T, S1>
        where
            T: Clone,
            S1: ArrayMut<T>,
            $node: BinaryOperation<T, T, Output = T>,
        {
            #[track_caller]
            fn $method(&mut self, rhs: &'a Array<T>) {
                assign_elementwise(self.source_ref_mut(), &rhs, $node)
            }
        }

        #[doc=$doc]
        impl<T, S2> ops::$op<ArrayView<T, S2>> for Array<T>
        where
            T: Clone,
            S2: ArrayRef<T>,
            $node: BinaryOperation<T, T, Output = T>,
        {
            #[track_caller]
            fn $method(&mut self, rhs: ArrayView<T, S2>) {
                assign_elementwise(self, rhs.source_ref(), $node)
            }
        }

        #[doc=$doc]
        impl<'a, T, S2> ops::$op<&'a ArrayView<T, S2>> for Array<T>
        where
            T: Clone,
            S2: ArrayRef<T>,
            $node: BinaryOperation<T, T, Output = T>,
        {
            #[track_caller]
            fn $method(&mut self, rhs: &'a ArrayView<T, S2>) {
                assign_elementwise(self, rhs.source_ref(), $node)
            }
        }

        #[doc=$doc]
        impl<'a, T> ops::$op<&'a Array<T>> for Array<T>
        where
            T: Clone,
            $node: BinaryOperation<T, T, Output = T>,
        {
            #[track_caller]
            fn $method(&mut self, rhs: &'a Array<T>) {
                assign_elementwise(self, &rhs, $node)
            }
        }
    };
}

array_view_assign_operation!(impl AddAssign { fn add_assign } with Addition "Elementwise addition assignment");
array_view_assign_operation!(impl SubAssign { fn sub_assign } with Subtraction "Elementwise subtraction assignment");
array_view_assign_operation!(impl MulAssign { fn mul_assign } with Multiplication "Elementwise multiplication assignment");
array_view_assign_operation!(impl DivAssign { fn div_assign } with Division "Elementwise division assignment");
array_view_assign_operation!(impl RemAssign { fn rem_assign } with Remainder "Elementwise remainder assignment");
array_view_assign_operation!(impl BitAndAssign { fn bitand_assign } with BitAnd "Elementwise and assignment");
array_view_assign_operation!(impl BitOrAssign { fn bitor_assign } with BitOr "Elementwise or assignment");
array_view_assign_operation!(impl BitXorAssign { fn bitxor_assign } with BitXor "Elementwise exclusive or assignment");
array_view_assign_operation!(impl ShlAssign { fn shl_assign } with ShiftLeft "Elementwise left shift assignment");
array_view_assign_operation!(impl ShrAssign { fn shr_assign } with ShiftRight "Elementwise right shift assignment");

// Scalar operands are implemented per element type rather than for any T, since a generic
// `ArrayView<T, S>: Add<T>` would overlap with the implementations for array operands.
macro_rules! array_view_scalar_operation {
    (impl $op:tt { fn $method:ident } + $assign_op:tt { fn $assign_method:ident } with $node:ident for $($T:ty),+) => {
        $(
            impl<S> ops::$op<$T> for ArrayView<$T, S>
            where
                S: ArrayRef<$T> + ByValue,
            {
                type Output = ArrayView<$T, ArrayBinary<$T, $T, S, ArrayConstant<$T>, $node>>;

                #[track_caller]
                #[inline]
                fn $method(self, rhs: $T) -> Self::Output {
                    let size = self.size();
                    ArrayView::from(ArrayBinary::from(
                        self.source(),
                        ArrayConstant::from(rhs, size),
                        $node,
                    ))
                }
            }

            impl<'a, S> ops::$op<$T> for &'a ArrayView<$T, S>
            where
                S: ArrayRef<$T>,
            {
                type Output = ArrayView<$T, ArrayBinary<$T, $T, &'a S, ArrayConstant<$T>, $node>>;

                #[track_caller]
                #[inline]
                fn $method(self, rhs: $T) -> Self::Output {
                    ArrayView::from(ArrayBinary::from(
                        self.source_ref(),
                        ArrayConstant::from(rhs, self.size()),
                        $node,
                    ))
                }
            }

            impl<'a> ops::$op<$T> for &'a Array<$T> {
                type Output =
                    ArrayView<$T, ArrayBinary<$T, $T, &'a Array<$T>, ArrayConstant<$T>, $node>>;

                #[track_caller]
                #[inline]
                fn $method(self, rhs: $T) -> Self::Output {
                    ArrayView::from(ArrayBinary::from(
                        self,
                        ArrayConstant::from(rhs, self.size()),
                        $node,
                    ))
                }
            }

            impl<S> ops::$op<ArrayView<$T, S>> for $T
            where
                S: ArrayRef<$T> + ByValue,
            {
                type Output = ArrayView<$T, ArrayBinary<$T, $T, ArrayConstant<$T>, S, $node>>;

                #[track_caller]
                #[inline]
                fn $method(self, rhs: ArrayView<$T, S>) -> Self::Output {
                    let size = rhs.size();
                    ArrayView::from(ArrayBinary::from(
                        ArrayConstant::from(self, size),
                        rhs.source(),
                        $node,
                    ))
                }
            }

            impl<'a, S> ops::$op<&'a ArrayView<$T, S>> for $T
            where
                S: ArrayRef<$T>,
            {
                type Output = ArrayView<$T, ArrayBinary<$T, $T, ArrayConstant<$T>, &'a S, $node>>;

                #[track_caller]
                #[inline]
                fn $method(self, rhs: &'a ArrayView<$T, S>) -> Self::Output {
                    ArrayView::from(ArrayBinary::from(
                        ArrayConstant::from(self, rhs.size()),
                        rhs.source_ref(),
                        $node,
                    ))
                }
            }

            impl<'a> ops::$op<&'a Array<$T>> for $T {
                type Output =
                    ArrayView<$T, ArrayBinary<$T, $T, ArrayConstant<$T>, &'a Array<$T>, $node>>;

                #[track_caller]
                #[inline]
                fn $method(self, rhs: &'a Array<$T>) -> Self::Output {
                    ArrayView::from(ArrayBinary::from(
                        ArrayConstant::from(self, rhs.size()),
                        rhs,
                        $node,
                    ))
                }
            }

            impl<S> ops::$assign_op<$T> for ArrayView<$T, S>
            where
                S: ArrayMut<$T>,
            {
                #[track_caller]
                fn $assign_method(&mut self, rhs: $T) {
                    assign_scalar(self.source_ref_mut(), rhs, $node)
                }
            }

            impl ops::$assign_op<$T> for Array<$T> {
                #[track_caller]
                fn $assign_method(&mut self, rhs: $T) {
                    assign_scalar(self, rhs, $node)
                }
            }
        )+
    };
}

macro_rules! array_view_scalar_arithmetic {
    ($($T:ty),+) => {
        array_view_scalar_operation!(impl Add { fn add } + AddAssign { fn add_assign } with Addition for $($T),+);
        array_view_scalar_operation!(impl Sub { fn sub } + SubAssign { fn sub_assign } with Subtraction for $($T),+);
        array_view_scalar_operation!(impl Mul { fn mul } + MulAssign { fn mul_assign } with Multiplication for $($T),+);
        array_view_scalar_operation!(impl Div { fn div } + DivAssign { fn div_assign } with Division for $($T),+);
        array_view_scalar_operation!(impl Rem { fn rem } + RemAssign { fn rem_assign } with Remainder for $($T),+);
    };
}

macro_rules! array_view_scalar_bitwise {
    ($($T:ty),+) => {
        array_view_scalar_operation!(impl BitAnd { fn bitand } + BitAndAssign { fn bitand_assign } with BitAnd for $($T),+);
        array_view_scalar_operation!(impl BitOr { fn bitor } + BitOrAssign { fn bitor_assign } with BitOr for $($T),+);
        array_view_scalar_operation!(impl BitXor { fn bitxor } + BitXorAssign { fn bitxor_assign } with BitXor for $($T),+);
    };
}

macro_rules! array_view_scalar_shift {
    ($($T:ty),+) => {
        array_view_scalar_operation!(impl Shl { fn shl } + ShlAssign { fn shl_assign } with ShiftLeft for $($T),+);
        array_view_scalar_operation!(impl Shr { fn shr } + ShrAssign { fn shr_assign } with ShiftRight for $($T),+);
    };
}

array_view_scalar_arithmetic!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
array_view_scalar_bitwise!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool
);
array_view_scalar_shift!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[test]
fn test_operators_are_lazy_and_compose() {
    let a = Array::from(vec![1, 2, 3]);
    let b = Array::from(vec![4, 5, 6]);
    let sum = &a + &b;
    let scaled = &sum * 10_i32;
    let shifted = 1_i32 - scaled;
    assert_eq!(shifted.to_array(), Array::from(vec![-49, -69, -89]));
    assert_eq!((-&a).to_array(), Array::from(vec![-1, -2, -3]));
    assert_eq!((!&a).to_array(), Array::from(vec![!1, !2, !3]));
    let flags = Array::from(vec![true, false]);
    assert_eq!((&flags ^ true).to_array(), Array::from(vec![false, true]));
}

#[test]
#[should_panic(expected = "Mismatched arrays, left has size 3 but right has size 2")]
fn test_operator_size_mismatch() {
    let a = Array::from(vec![1, 2, 3]);
    let b = Array::from(vec![4, 5]);
    let _ = &a + &b;
}

#[test]
fn test_compound_assignment_through_slices() {
    use crate::arrays::slices::Even;
    let mut a = Array::from(vec![1, 2, 3, 4, 5]);
    let b = Array::from(vec![10, 20, 30]);
    {
        let mut even = a.slice_mut(Even);
        even += &b;
        even *= 2;
    }
    assert_eq!(a, Array::from(vec![22, 2, 46, 4, 70]));
    a -= 1;
    a <<= 1;
    assert_eq!(a, Array::from(vec![42, 2, 90, 6, 138]));
}

#[test]
#[should_panic(expected = "Integer division by zero")]
fn test_lazy_division_by_zero_panics_on_access() {
    let a = Array::from(vec![1, 2]);
    let b = Array::from(vec![1, 0]);
    let quotient = &a / &b;
    assert_eq!(quotient.get(0), 1);
    quotient.get(1);
}
