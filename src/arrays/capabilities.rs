/*!
 * Compile time classification of every container, view and expression kind.
 *
 * [Capabilities] answers what rank a kind has, whether it owns, references or computes its
 * elements, and whether it can be written to. [ByValue] is the one classification the type
 * system acts on: views and expressions only ever store sources which are `ByValue`.
 *
 * Owning containers ([Array](crate::arrays::Array), [FixedArray](crate::arrays::FixedArray),
 * boxes) are deliberately **not** ByValue, so they can only be put inside a view or an
 * expression by reference, and the borrow checker then guarantees the container outlives
 * everything built on top of it. Everything else is cheap to hold by value: references,
 * attached slices, and expressions (which contain nothing but other ByValue sources and an
 * operation). A view of a temporary expression therefore owns its own copy of that
 * expression, while a view of a temporary owning container does not compile.
 *
 * ```compile_fail
 * use strict_arrays::arrays::Array;
 * use strict_arrays::arrays::views::{ArrayView, ArrayStride};
 * use strict_arrays::arrays::slices::All;
 * // An owning container cannot be moved into a view, it must be borrowed.
 * let view = ArrayView::from(ArrayStride::from(Array::from(vec![ 1, 2, 3 ]), All));
 * ```
 *
 * ```
 * use strict_arrays::arrays::Array;
 * use strict_arrays::arrays::views::{ArrayView, ArrayStride};
 * use strict_arrays::arrays::slices::All;
 * let array = Array::from(vec![ 1, 2, 3 ]);
 * let view = ArrayView::from(ArrayStride::from(&array, All));
 * assert_eq!(view.size(), 3);
 * ```
 */

/**
 * How a kind holds its elements.
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Storage {
    /**
     * Allocates and exclusively owns its elements.
     */
    Owning,
    /**
     * Reads (and possibly writes) elements owned by something else.
     */
    Referencing,
    /**
     * Computes its elements on demand and has no storage at all.
     */
    Computed,
}

/**
 * Compile time predicates for a container, view or expression kind.
 */
pub trait Capabilities {
    /**
     * The number of dimensions. Every kind in this crate is one dimensional.
     */
    const RANK: usize = 1;

    /**
     * How this kind holds its elements.
     */
    const STORAGE: Storage;

    /**
     * True if this kind can write its elements, ie it implements
     * [ArrayMut](crate::arrays::views::ArrayMut).
     */
    const MUTABLE: bool;
}

/**
 * A kind which is cheap and safe to hold by value inside a view or expression.
 *
 * Implemented for shared and exclusive references, attached slices, views over ByValue
 * sources, generators and expression nodes. Never implemented for kinds which own heap or
 * inline storage.
 */
pub trait ByValue {}

impl<S: ?Sized> Capabilities for &S {
    const STORAGE: Storage = Storage::Referencing;
    const MUTABLE: bool = false;
}

impl<S: ?Sized + Capabilities> Capabilities for &mut S {
    const STORAGE: Storage = Storage::Referencing;
    const MUTABLE: bool = S::MUTABLE;
}

impl<S: ?Sized + Capabilities> Capabilities for Box<S> {
    const STORAGE: Storage = Storage::Owning;
    const MUTABLE: bool = S::MUTABLE;
}

impl<S: ?Sized> ByValue for &S {}

impl<S: ?Sized> ByValue for &mut S {}

/**
 * Storage of a kind derived from a source it wraps. A view of an owning container is
 * referencing, a view of a reference is still referencing, and a view of an expression is
 * still computed.
 */
pub(crate) const fn derived_storage(source: Storage) -> Storage {
    match source {
        Storage::Owning => Storage::Referencing,
        other => other,
    }
}

/**
 * Storage of a kind combining several sources, which is computed if any of its sources are.
 */
pub(crate) const fn merged_storage(first: Storage, second: Storage) -> Storage {
    match (derived_storage(first), derived_storage(second)) {
        (Storage::Computed, _) | (_, Storage::Computed) => Storage::Computed,
        _ => Storage::Referencing,
    }
}

#[test]
fn test_reference_capabilities() {
    use crate::arrays::Array;
    assert_eq!(<Array<i32> as Capabilities>::STORAGE, Storage::Owning);
    assert_eq!(<&Array<i32> as Capabilities>::STORAGE, Storage::Referencing);
    assert!(!<&Array<i32> as Capabilities>::MUTABLE);
    assert!(<&mut Array<i32> as Capabilities>::MUTABLE);
    assert_eq!(<&mut Array<i32> as Capabilities>::RANK, 1);
}
