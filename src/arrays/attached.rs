/*!
 * Arrays over memory owned by someone else.
 *
 * [Attached] and [AttachedMut] wrap a borrowed slice so it can be used anywhere an array can.
 * They never allocate or free anything. For interop with foreign buffers they can also be
 * created from a raw pointer and a size.
 *
 * ```
 * use strict_arrays::arrays::{Array, attach, attach_mut};
 * use strict_arrays::arrays::slices::Odd;
 * let mut buffer = [ 1, 2, 3, 4 ];
 * attach_mut(&mut buffer).slice_mut(Odd).fill(0);
 * assert_eq!(buffer, [ 1, 0, 3, 0 ]);
 * let doubled = attach(&buffer) * 2_i32;
 * assert_eq!(doubled.to_array(), Array::from(vec![ 2, 0, 6, 0 ]));
 * ```
 */

use crate::arrays::capabilities::{ByValue, Capabilities, Storage};
use crate::arrays::slices::All;
use crate::arrays::views::{ArrayMut, ArrayRef, ArrayStride, ArrayView};

/**
 * A read only array over a borrowed slice.
 */
#[derive(Debug)]
pub struct Attached<'a, T> {
    data: &'a [T],
}

/**
 * A writable array over an exclusively borrowed slice.
 */
#[derive(Debug)]
pub struct AttachedMut<'a, T> {
    data: &'a mut [T],
}

impl<'a, T> Attached<'a, T> {
    pub fn from(data: &'a [T]) -> Attached<'a, T> {
        Attached { data }
    }

    /**
     * Attaches to `size` elements starting at the pointer.
     *
     * # Safety
     *
     * The same requirements as [std::slice::from_raw_parts]: the pointer must be non null,
     * aligned and valid for reads of `size` consecutive initialised elements, and that
     * memory must not be written to by anything else for the lifetime `'a`.
     */
    pub unsafe fn from_raw_parts(pointer: *const T, size: usize) -> Attached<'a, T> {
        Attached {
            data: unsafe { std::slice::from_raw_parts(pointer, size) },
        }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }
}

impl<T> Clone for Attached<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Attached<'_, T> {}

impl<'a, T> AttachedMut<'a, T> {
    pub fn from(data: &'a mut [T]) -> AttachedMut<'a, T> {
        AttachedMut { data }
    }

    /**
     * Attaches to `size` elements starting at the pointer.
     *
     * # Safety
     *
     * The same requirements as [std::slice::from_raw_parts_mut]: the pointer must be non
     * null, aligned and valid for reads and writes of `size` consecutive initialised
     * elements, and that memory must not be accessed by anything else for the lifetime `'a`.
     */
    pub unsafe fn from_raw_parts(pointer: *mut T, size: usize) -> AttachedMut<'a, T> {
        AttachedMut {
            data: unsafe { std::slice::from_raw_parts_mut(pointer, size) },
        }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &*self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }
}

// # Safety
//
// A shared slice cannot change size while it is borrowed.
/**
 * An Attached implements ArrayRef.
 */
unsafe impl<T: Clone> ArrayRef<T> for Attached<'_, T> {
    fn try_get_value(&self, position: usize) -> Option<T> {
        self.data.get(position).cloned()
    }

    fn view_size(&self) -> usize {
        self.data.len()
    }

    unsafe fn get_value_unchecked(&self, position: usize) -> T {
        unsafe { self.data.get_unchecked(position).clone() }
    }

    fn as_slice(&self) -> Option<&[T]> {
        Some(self.data)
    }
}

// # Safety
//
// An exclusively borrowed slice cannot change size while it is borrowed.
/**
 * An AttachedMut implements ArrayRef.
 */
unsafe impl<T: Clone> ArrayRef<T> for AttachedMut<'_, T> {
    fn try_get_value(&self, position: usize) -> Option<T> {
        self.data.get(position).cloned()
    }

    fn view_size(&self) -> usize {
        self.data.len()
    }

    unsafe fn get_value_unchecked(&self, position: usize) -> T {
        unsafe { self.data.get_unchecked(position).clone() }
    }

    fn as_slice(&self) -> Option<&[T]> {
        Some(&*self.data)
    }
}

// # Safety
//
// See ArrayRef implementation above.
/**
 * An AttachedMut implements ArrayMut.
 */
unsafe impl<T: Clone> ArrayMut<T> for AttachedMut<'_, T> {
    fn try_get_reference_mut(&mut self, position: usize) -> Option<&mut T> {
        self.data.get_mut(position)
    }

    unsafe fn get_reference_unchecked_mut(&mut self, position: usize) -> &mut T {
        unsafe { self.data.get_unchecked_mut(position) }
    }

    fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        Some(&mut *self.data)
    }
}

impl<T> Capabilities for Attached<'_, T> {
    const STORAGE: Storage = Storage::Referencing;
    const MUTABLE: bool = false;
}

impl<T> Capabilities for AttachedMut<'_, T> {
    const STORAGE: Storage = Storage::Referencing;
    const MUTABLE: bool = true;
}

impl<T> ByValue for Attached<'_, T> {}

impl<T> ByValue for AttachedMut<'_, T> {}

/**
 * Attaches to a slice, returning a view over all of it.
 */
pub fn attach<T: Clone>(data: &[T]) -> ArrayView<T, ArrayStride<T, Attached<'_, T>>> {
    ArrayView::from(ArrayStride::from(Attached::from(data), All))
}

/**
 * Attaches to a slice, returning a view over all of it which can write to it.
 */
pub fn attach_mut<T: Clone>(data: &mut [T]) -> ArrayView<T, ArrayStride<T, AttachedMut<'_, T>>> {
    ArrayView::from(ArrayStride::from(AttachedMut::from(data), All))
}

#[test]
fn test_attached_raw_parts() {
    let mut buffer = vec![1_u8, 2, 3];
    {
        let attached = unsafe { AttachedMut::from_raw_parts(buffer.as_mut_ptr(), 2) };
        let mut view = ArrayView::from(attached);
        view.set(1, 9);
        assert_eq!(view.size(), 2);
    }
    assert_eq!(buffer, vec![1, 9, 3]);
}

#[test]
fn test_attached_views_are_contiguous() {
    let buffer = [1.5, 2.5];
    let view = attach(&buffer);
    assert_eq!(view.as_slice(), Some(&buffer[..]));
    assert_eq!(
        <ArrayStride<f64, Attached<'_, f64>> as Capabilities>::STORAGE,
        Storage::Referencing
    );
    let empty: [f64; 0] = [];
    assert!(attach(&empty).is_empty());
}
