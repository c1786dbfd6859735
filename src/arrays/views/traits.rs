/*!
 * Trait implementations for [ArrayRef](ArrayRef) and [ArrayMut](ArrayMut).
 *
 * These implementations are written here but Rust docs will display them on the
 * traits' pages.
 *
 * An owned or referenced [Array](Array) is an ArrayRef, and an ArrayMut if not a shared
 * reference. Therefore, you can pass an Array to any function which takes an ArrayRef.
 *
 * Boxed ArrayRef and ArrayMut values also implement ArrayRef and ArrayMut respectively.
 */

use crate::arrays::Array;
use crate::arrays::capabilities::{Capabilities, Storage};
use crate::arrays::views::{ArrayMut, ArrayRef};

// # Safety
//
// Since we hold an owned Array we know it is not possible to mutate the size of the array
// out from under us.
/**
 * An owned Array implements ArrayRef.
 */
unsafe impl<T: Clone> ArrayRef<T> for Array<T> {
    fn try_get_value(&self, position: usize) -> Option<T> {
        self.as_slice().get(position).cloned()
    }

    fn view_size(&self) -> usize {
        self.size()
    }

    unsafe fn get_value_unchecked(&self, position: usize) -> T {
        unsafe { self.as_slice().get_unchecked(position).clone() }
    }

    fn as_slice(&self) -> Option<&[T]> {
        Some(Array::as_slice(self))
    }
}

// # Safety
//
// Since we hold an owned Array we know it is not possible to mutate the size of the array
// out from under us.
/**
 * An owned Array implements ArrayMut.
 */
unsafe impl<T: Clone> ArrayMut<T> for Array<T> {
    fn try_get_reference_mut(&mut self, position: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(position)
    }

    unsafe fn get_reference_unchecked_mut(&mut self, position: usize) -> &mut T {
        unsafe { self.as_mut_slice().get_unchecked_mut(position) }
    }

    fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        Some(Array::as_mut_slice(self))
    }
}

impl<T> Capabilities for Array<T> {
    const STORAGE: Storage = Storage::Owning;
    const MUTABLE: bool = true;
}

// # Safety
//
// Since the ArrayRef we reference must implement ArrayRef correctly, so do we by delegating
// to it, as a shared reference doesn't introduce any interior mutability.
/**
 * A shared reference to an ArrayRef also implements ArrayRef.
 */
unsafe impl<T, S> ArrayRef<T> for &S
where
    S: ArrayRef<T> + ?Sized,
{
    fn try_get_value(&self, position: usize) -> Option<T> {
        S::try_get_value(self, position)
    }

    fn view_size(&self) -> usize {
        S::view_size(self)
    }

    unsafe fn get_value_unchecked(&self, position: usize) -> T {
        unsafe { S::get_value_unchecked(self, position) }
    }

    fn as_slice(&self) -> Option<&[T]> {
        S::as_slice(self)
    }
}

// # Safety
//
// Since the ArrayRef we reference must implement ArrayRef correctly, so do we by delegating
// to it, as an exclusive reference doesn't introduce any interior mutability.
/**
 * An exclusive reference to an ArrayRef also implements ArrayRef.
 */
unsafe impl<T, S> ArrayRef<T> for &mut S
where
    S: ArrayRef<T> + ?Sized,
{
    fn try_get_value(&self, position: usize) -> Option<T> {
        S::try_get_value(self, position)
    }

    fn view_size(&self) -> usize {
        S::view_size(self)
    }

    unsafe fn get_value_unchecked(&self, position: usize) -> T {
        unsafe { S::get_value_unchecked(self, position) }
    }

    fn as_slice(&self) -> Option<&[T]> {
        S::as_slice(self)
    }
}

// # Safety
//
// Since the ArrayMut we reference must implement ArrayMut correctly, so do we by delegating
// to it, as an exclusive reference doesn't introduce any interior mutability.
/**
 * An exclusive reference to an ArrayMut also implements ArrayMut.
 */
unsafe impl<T, S> ArrayMut<T> for &mut S
where
    S: ArrayMut<T> + ?Sized,
{
    fn try_get_reference_mut(&mut self, position: usize) -> Option<&mut T> {
        S::try_get_reference_mut(self, position)
    }

    unsafe fn get_reference_unchecked_mut(&mut self, position: usize) -> &mut T {
        unsafe { S::get_reference_unchecked_mut(self, position) }
    }

    fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        S::as_mut_slice(self)
    }
}

// # Safety
//
// Since the ArrayRef we box must implement ArrayRef correctly, so do we by delegating to it,
// as a box doesn't introduce any interior mutability.
/**
 * A box of an ArrayRef also implements ArrayRef.
 */
unsafe impl<T, S> ArrayRef<T> for Box<S>
where
    S: ArrayRef<T> + ?Sized,
{
    fn try_get_value(&self, position: usize) -> Option<T> {
        self.as_ref().try_get_value(position)
    }

    fn view_size(&self) -> usize {
        self.as_ref().view_size()
    }

    unsafe fn get_value_unchecked(&self, position: usize) -> T {
        unsafe { self.as_ref().get_value_unchecked(position) }
    }

    fn as_slice(&self) -> Option<&[T]> {
        self.as_ref().as_slice()
    }
}

// # Safety
//
// Since the ArrayMut we box must implement ArrayMut correctly, so do we by delegating to it,
// as a box doesn't introduce any interior mutability.
/**
 * A box of an ArrayMut also implements ArrayMut.
 */
unsafe impl<T, S> ArrayMut<T> for Box<S>
where
    S: ArrayMut<T> + ?Sized,
{
    fn try_get_reference_mut(&mut self, position: usize) -> Option<&mut T> {
        self.as_mut().try_get_reference_mut(position)
    }

    unsafe fn get_reference_unchecked_mut(&mut self, position: usize) -> &mut T {
        unsafe { self.as_mut().get_reference_unchecked_mut(position) }
    }

    fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        self.as_mut().as_mut_slice()
    }
}

#[test]
fn test_boxed_dynamic_array_ref() {
    let array = Array::from(vec![1, 2, 3]);
    let boxed: Box<dyn ArrayRef<i32> + '_> = Box::new(&array);
    assert_eq!(boxed.view_size(), 3);
    assert_eq!(boxed.try_get_value(2), Some(3));
    assert_eq!(boxed.try_get_value(3), None);
    assert_eq!(boxed.as_slice(), Some(&[1, 2, 3][..]));
}
