//! Compile-time predicates describing whether element operations can panic.
//!
//! Element construction and destruction in Rust fail by unwinding. Moving a
//! value is a bitwise copy and never fails, so the only fallible element
//! operations are cloning, user-supplied constructors, and `Drop`.

use core::iter::{Cloned, Copied};
use core::mem;
use core::slice;

/// Determine whether destroying a `T` may run user code which could panic.
///
/// Types without drop glue can never panic while being destroyed. For all
/// other types the answer is conservatively `true`.
#[inline]
pub const fn drop_may_panic<T>() -> bool {
    mem::needs_drop::<T>()
}

/// Determine whether relocating a `T` to new storage may panic.
///
/// Relocation is always a bitwise move.
#[inline]
pub const fn relocate_may_panic<T>() -> bool {
    false
}

/// A marker for element types whose `Clone` implementation cannot panic.
///
/// Every `Copy` type qualifies. Other types may opt in when their `clone`
/// never runs fallible code.
pub trait NoPanicClone: Clone {}

impl<T: Copy> NoPanicClone for T {}

/// An exactly-sized source of elements for bulk construction.
///
/// Sources report whether they relocate existing values out of another
/// container, and whether producing each item may run fallible user code.
pub trait ElementSource: ExactSizeIterator {
    /// Items are moved out of existing storage rather than copied.
    const RELOCATING: bool;

    /// Producing an item never panics.
    const NOPANIC_ITEM: bool;
}

impl<T, const N: usize> ElementSource for core::array::IntoIter<T, N> {
    const RELOCATING: bool = true;
    const NOPANIC_ITEM: bool = true;
}

#[cfg(feature = "alloc")]
impl<T> ElementSource for alloc::vec::IntoIter<T> {
    const RELOCATING: bool = true;
    const NOPANIC_ITEM: bool = true;
}

#[cfg(feature = "alloc")]
impl<T> ElementSource for alloc::vec::Drain<'_, T> {
    const RELOCATING: bool = true;
    const NOPANIC_ITEM: bool = true;
}

impl<'a, T: Copy + 'a> ElementSource for Copied<slice::Iter<'a, T>> {
    const RELOCATING: bool = false;
    const NOPANIC_ITEM: bool = true;
}

impl<'a, T: Clone + 'a> ElementSource for Cloned<slice::Iter<'a, T>> {
    const RELOCATING: bool = false;
    const NOPANIC_ITEM: bool = false;
}
