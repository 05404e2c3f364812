//! The generic sequence engine.
//!
//! [`Vec`] implements growth, insertion, erasure, and resizing once, over any
//! storage layout selected by a [`VecConfig`]. The storage handle only acquires
//! and releases memory; every element is constructed, relocated, and destroyed
//! here.

use core::borrow::{Borrow, BorrowMut};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::{once, repeat, repeat_with};
use core::mem;
use core::ops::{Bound, Deref, DerefMut, Range, RangeBounds};
use core::ptr;

use const_default::ConstDefault;

use crate::error::{index_panic, StorageError};
use crate::index::{checked_index, grown_capacity, Index, INITIAL_CAPACITY};
use crate::storage::RawStorage;
use crate::traits::{drop_may_panic, relocate_may_panic, ElementSource, NoPanicClone};

use self::insert::Inserter;

pub use self::{
    config::{Cached, Thin, VecConfig},
    into_iter::IntoIter,
};

#[macro_use]
mod macros;

pub mod config;
mod insert;
mod into_iter;

/// A sequence using the cached layout: pointer, length, and capacity.
pub type CachedVec<T, I = usize> = Vec<T, Cached<I>>;

/// A cached-layout sequence with a 32-bit index, two words wide on 64-bit
/// targets.
pub type CompactVec<T> = Vec<T, Cached<u32>>;

/// A pointer-sized sequence, storing its length and capacity in a header
/// before the elements.
pub type ThinVec<T, I = usize> = Vec<T, Thin<I>>;

#[cfg(feature = "zeroize")]
/// A sequence which wipes its storage when it is released.
pub type ZeroizingVec<T> =
    Vec<T, Cached<usize, crate::storage::ZeroizingAlloc<crate::storage::Global>>>;

#[inline]
fn bounds_to_range<I: Index>(range: impl RangeBounds<I>, length: usize) -> Range<usize> {
    let start = match range.start_bound() {
        Bound::Unbounded => 0,
        Bound::Included(i) => i.to_usize(),
        Bound::Excluded(i) => i.to_usize().saturating_add(1),
    };
    let end = match range.end_bound() {
        Bound::Unbounded => length,
        Bound::Included(i) => i.to_usize().saturating_add(1),
        Bound::Excluded(i) => i.to_usize(),
    };
    Range { start, end }
}

#[cfg(feature = "alloc")]
#[inline]
/// Create a `CachedVec<T>` from an array `[T; N]`.
pub fn from_array<T, const N: usize>(data: [T; N]) -> CachedVec<T> {
    Vec::from_source(data)
}

#[cfg(feature = "alloc")]
#[inline]
/// Create a `CachedVec<T>` holding `count` clones of an element.
pub fn from_elem<T: Clone>(elem: T, count: usize) -> CachedVec<T> {
    Vec::from_elem(elem, count)
}

/// A growable, contiguous sequence of `T` over the storage layout `C`.
///
/// A new sequence owns no allocation. The first `push` reserves room for
/// [`INITIAL_CAPACITY`] elements and later appends grow the capacity
/// geometrically, while `reserve` and the `resize` family allocate exactly
/// the requested capacity.
///
/// A panic raised by element code part way through an operation leaves the
/// sequence holding only initialized elements, with its length and capacity
/// consistent. Which elements remain is unspecified.
#[repr(transparent)]
pub struct Vec<T, C: VecConfig = Cached> {
    buffer: C::Buffer<T>,
}

impl<T, C: VecConfig> Vec<T, C> {
    /// `push` cannot panic for this element type, other than by exhausting
    /// memory.
    pub const NOPANIC_PUSH: bool = !relocate_may_panic::<T>();
    /// `pop` cannot panic for this element type.
    pub const NOPANIC_POP: bool = true;
    /// `reserve` cannot panic for this element type, other than by
    /// exhausting memory.
    pub const NOPANIC_RESERVE: bool = !relocate_may_panic::<T>();
    /// `grow` cannot panic for this element type, other than by exhausting
    /// memory.
    pub const NOPANIC_GROW: bool = !relocate_may_panic::<T>();
    /// `erase` cannot panic for this element type.
    pub const NOPANIC_ERASE: bool = !drop_may_panic::<T>();
    /// `clear` cannot panic for this element type.
    pub const NOPANIC_CLEAR: bool = !drop_may_panic::<T>();
    /// `release` and dropping the sequence cannot panic for this element type.
    pub const NOPANIC_RELEASE: bool = !drop_may_panic::<T>();

    /// Determine whether `resize_from` with a source of type `S` cannot
    /// panic, other than by exhausting memory.
    #[inline]
    pub const fn nopanic_resize_from<S: ElementSource<Item = T>>() -> bool {
        S::NOPANIC_ITEM && !drop_may_panic::<T>()
    }

    /// Determine whether `resize` and `insert_fill` cannot panic, other than
    /// by exhausting memory.
    #[inline]
    pub const fn nopanic_fill() -> bool
    where
        T: NoPanicClone,
    {
        !drop_may_panic::<T>()
    }

    /// Constructs a new, empty `Vec<T, C>`.
    ///
    /// The sequence will not allocate until elements are added to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use flex_seq::CachedVec;
    ///
    /// let vec = CachedVec::<i32>::new();
    /// assert!(!vec.is_allocated());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            buffer: <C::Buffer<T> as ConstDefault>::DEFAULT,
        }
    }

    /// Constructs a new, empty `Vec<T, C>` with exactly `capacity` slots.
    pub fn with_capacity(capacity: C::Index) -> Self {
        let mut vec = Self::new();
        vec.reserve(capacity);
        vec
    }

    /// Constructs a `Vec<T, C>` holding `count` clones of `value`.
    pub fn from_elem(value: T, count: C::Index) -> Self
    where
        T: Clone,
    {
        let mut vec = Self::new();
        vec.resize(count, value);
        vec
    }

    /// Constructs a `Vec<T, C>` holding `count` default values.
    pub fn with_len(count: C::Index) -> Self
    where
        T: Default,
    {
        let mut vec = Self::new();
        vec.resize_default(count);
        vec
    }

    /// Constructs a `Vec<T, C>` holding clones of the elements of a slice.
    pub fn from_slice(data: &[T]) -> Self
    where
        T: Clone,
    {
        let mut vec = Self::new();
        vec.resize_from(data.iter().cloned());
        vec
    }

    /// Constructs a `Vec<T, C>` from an exactly-sized element source.
    pub fn from_source<S>(source: S) -> Self
    where
        S: IntoIterator<Item = T>,
        S::IntoIter: ElementSource,
    {
        let mut vec = Self::new();
        vec.resize_from(source);
        vec
    }

    /// Access the raw allocator.
    #[inline]
    pub fn allocator(&self) -> &C::Alloc {
        self.buffer.allocator()
    }

    /// Determine whether the sequence owns an allocation.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.buffer.is_allocated()
    }

    #[inline]
    pub fn len(&self) -> C::Index {
        self.buffer.len()
    }

    #[inline]
    pub fn capacity(&self) -> C::Index {
        self.buffer.capacity()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Access the element pointer, which is null when unallocated.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buffer.data()
    }

    /// Access the element pointer mutably, which is null when unallocated.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buffer.data_mut()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buffer.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buffer.as_mut_slice()
    }

    /// Exchange the contents of two sequences without touching any element.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        self.buffer.swap(&mut other.buffer)
    }

    /// Move the contents out, leaving this sequence unallocated.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Ensure the capacity is at least `capacity`, allocating exactly that
    /// amount when it is not.
    ///
    /// Returns `true` when the elements were moved to a new allocation,
    /// invalidating any pointers into the sequence. A request for zero
    /// capacity never allocates.
    pub fn reserve(&mut self, capacity: C::Index) -> bool {
        match self.try_reserve(capacity) {
            Ok(moved) => moved,
            Err(err) => err.panic(),
        }
    }

    /// Ensure the capacity is at least `capacity`, reporting allocation
    /// failure instead of panicking.
    pub fn try_reserve(&mut self, capacity: C::Index) -> Result<bool, StorageError> {
        if capacity == C::Index::ZERO || capacity <= self.buffer.capacity() {
            return Ok(false);
        }
        let len = self.buffer.len().to_usize();
        self.try_reallocate(capacity, len, 0)?;
        Ok(true)
    }

    /// Move the elements to a larger allocation of
    /// `capacity + max(capacity, minimum)` elements.
    ///
    /// An unallocated sequence receives `max(minimum, INITIAL_CAPACITY)`.
    pub fn grow(&mut self, minimum: C::Index) {
        let capacity = self.buffer.capacity().to_usize();
        let new_cap = if self.buffer.is_allocated() {
            if capacity >= C::Index::MAX_USIZE {
                StorageError::CapacityLimit.panic();
            }
            Self::amortized_capacity(capacity, minimum.to_usize())
        } else {
            C::Index::from_usize(minimum.to_usize().max(INITIAL_CAPACITY))
        };
        let len = self.buffer.len().to_usize();
        self.reallocate(new_cap, len, 0);
    }

    /// Append an element, returning a reference to it.
    pub fn push(&mut self, value: T) -> &mut T {
        let len = self.buffer.len();
        if !self.buffer.is_allocated() {
            self.reserve(C::Index::from_usize(INITIAL_CAPACITY));
        } else if len == self.buffer.capacity() {
            self.grow(C::Index::ZERO);
        }
        unsafe {
            let slot = self.buffer.data_unchecked().as_ptr().add(len.to_usize());
            slot.write(value);
            self.buffer.set_len(C::Index::from_usize(len.to_usize() + 1));
            &mut *slot
        }
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Option<T> {
        let len = self.buffer.len().to_usize();
        if len == 0 {
            return None;
        }
        unsafe {
            self.buffer.set_len(C::Index::from_usize(len - 1));
            Some(ptr::read(self.buffer.data_unchecked().as_ptr().add(len - 1)))
        }
    }

    /// Insert an element before the position `index`, returning a reference
    /// to it.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length.
    pub fn insert(&mut self, index: C::Index, value: T) -> &mut T {
        let index = index.to_usize();
        self.insert_iter(index, 1, once(value));
        &mut self.as_mut_slice()[index]
    }

    /// Insert the items of an exactly-sized source before the position
    /// `index`, returning the inserted elements.
    ///
    /// A source which ends early produces a shorter insertion.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length.
    pub fn insert_from<S>(&mut self, index: C::Index, source: S) -> &mut [T]
    where
        S: IntoIterator<Item = T>,
        S::IntoIter: ExactSizeIterator,
    {
        let source = source.into_iter();
        let index = index.to_usize();
        let added = self.insert_iter(index, source.len(), source);
        &mut self.as_mut_slice()[index..index + added]
    }

    /// Insert `count` clones of `value` before the position `index`,
    /// returning the inserted elements.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length.
    pub fn insert_fill(&mut self, index: C::Index, count: C::Index, value: T) -> &mut [T]
    where
        T: Clone,
    {
        let index = index.to_usize();
        let count = count.to_usize();
        let added = self.insert_iter(index, count, repeat(value).take(count));
        &mut self.as_mut_slice()[index..index + added]
    }

    /// Append clones of the elements of a slice.
    pub fn extend_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        let len = self.buffer.len().to_usize();
        self.insert_iter(len, items.len(), items.iter().cloned());
    }

    fn insert_iter(&mut self, index: usize, count: usize, source: impl Iterator<Item = T>) -> usize {
        let len = self.buffer.len().to_usize();
        if index > len {
            index_panic();
        }
        if count == 0 {
            return 0;
        }
        let Some(required) = len
            .checked_add(count)
            .filter(|req| *req <= C::Index::MAX_USIZE)
        else {
            StorageError::CapacityLimit.panic();
        };
        let after = len - index;
        let capacity = self.buffer.capacity().to_usize();
        if required > capacity {
            let new_cap = if self.buffer.is_allocated() {
                Self::amortized_capacity(capacity, count)
            } else {
                C::Index::from_usize(count)
            };
            // the old suffix is placed after the gap while relocating
            self.reallocate(new_cap, index, count);
        } else {
            unsafe {
                let data = self.buffer.data_unchecked().as_ptr();
                let head = data.add(index);
                if after > count {
                    ptr::copy_nonoverlapping(data.add(len - count), data.add(len), count);
                    ptr::copy(head, head.add(count), after - count);
                } else {
                    ptr::copy_nonoverlapping(head, head.add(count), after);
                }
                self.buffer.set_len(C::Index::from_usize(index));
            }
        }
        // SAFETY: the buffer is allocated with `count` free slots at `index`,
        // followed by the `after` relocated elements
        let mut inserter = unsafe { Inserter::new(&mut self.buffer, index, count, after) };
        inserter.fill(source);
        inserter.complete()
    }

    /// Replace the contents with `count` clones of `value`.
    ///
    /// Storage is reused when the capacity suffices, otherwise an allocation
    /// of exactly `count` elements replaces it.
    pub fn resize(&mut self, count: C::Index, value: T)
    where
        T: Clone,
    {
        let count = count.to_usize();
        self.assign_iter(count, repeat(value).take(count));
    }

    /// Replace the contents with `count` default values.
    pub fn resize_default(&mut self, count: C::Index)
    where
        T: Default,
    {
        self.resize_with(count, T::default);
    }

    /// Replace the contents with `count` values produced by `f`.
    pub fn resize_with<F>(&mut self, count: C::Index, f: F)
    where
        F: FnMut() -> T,
    {
        let count = count.to_usize();
        self.assign_iter(count, repeat_with(f).take(count));
    }

    /// Replace the contents with the items of an exactly-sized source.
    pub fn resize_from<S>(&mut self, source: S)
    where
        S: IntoIterator<Item = T>,
        S::IntoIter: ExactSizeIterator,
    {
        let source = source.into_iter();
        let count = match checked_index::<C::Index>(source.len()) {
            Ok(count) => count.to_usize(),
            Err(err) => err.panic(),
        };
        self.assign_iter(count, source);
    }

    fn assign_iter(&mut self, count: usize, source: impl Iterator<Item = T>) {
        self.clear();
        if count == 0 {
            return;
        }
        if self.buffer.capacity().to_usize() < count {
            self.release();
            self.reallocate(C::Index::from_usize(count), 0, 0);
        }
        // SAFETY: the buffer is allocated and empty with room for `count`
        let mut inserter = unsafe { Inserter::new(&mut self.buffer, 0, count, 0) };
        inserter.fill(source);
        inserter.complete();
    }

    /// Drop the elements past `len`, keeping the allocation.
    pub fn truncate(&mut self, len: C::Index) {
        let prev = self.buffer.len().to_usize();
        let len = len.to_usize();
        if len < prev {
            unsafe {
                self.buffer.set_len(C::Index::from_usize(len));
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                    self.buffer.data_unchecked().as_ptr().add(len),
                    prev - len,
                ));
            }
        }
    }

    /// Remove the elements within `range`, shifting the following elements
    /// down.
    ///
    /// # Panics
    /// Panics if the range is decreasing or extends past the length.
    pub fn erase<R>(&mut self, range: R)
    where
        R: RangeBounds<C::Index>,
    {
        let len = self.buffer.len().to_usize();
        let Range { start, end } = bounds_to_range(range, len);
        self.erase_range(start, end, len);
    }

    /// Remove the element at `index`.
    pub fn erase_at(&mut self, index: C::Index) {
        let len = self.buffer.len().to_usize();
        let index = index.to_usize();
        self.erase_range(index, index.saturating_add(1), len);
    }

    /// Remove `count` elements starting from `index`.
    pub fn erase_count(&mut self, index: C::Index, count: C::Index) {
        let len = self.buffer.len().to_usize();
        let index = index.to_usize();
        self.erase_range(index, index.saturating_add(count.to_usize()), len);
    }

    fn erase_range(&mut self, start: usize, end: usize, len: usize) {
        if start > end || end > len {
            index_panic();
        }
        if start == end {
            return;
        }
        unsafe {
            let data = self.buffer.data_unchecked().as_ptr();
            let removed = ptr::slice_from_raw_parts_mut(data.add(start), end - start);
            if drop_may_panic::<T>() {
                self.buffer.set_len(C::Index::from_usize(start));
                let _shift = TailShift {
                    buffer: &mut self.buffer,
                    data,
                    dest: start,
                    src: end,
                    count: len - end,
                };
                ptr::drop_in_place(removed);
            } else {
                ptr::copy(data.add(end), data.add(start), len - end);
                self.buffer
                    .set_len(C::Index::from_usize(len - (end - start)));
            }
        }
    }

    /// Drop every element, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(C::Index::ZERO);
    }

    /// Drop every element and release the allocation.
    pub fn release(&mut self) {
        self.clear();
        if self.buffer.is_allocated() {
            unsafe {
                let data = self.buffer.data_unchecked();
                let capacity = self.buffer.capacity_unchecked();
                self.buffer.reset();
                self.buffer.deallocate(data, capacity);
            }
            trace_storage!("released sequence storage");
        }
    }

    #[inline]
    fn amortized_capacity(capacity: usize, minimum: usize) -> C::Index {
        C::Index::from_usize(grown_capacity(capacity, minimum).min(C::Index::MAX_USIZE))
    }

    #[inline]
    fn reallocate(&mut self, capacity: C::Index, index: usize, gap: usize) {
        if let Err(err) = self.try_reallocate(capacity, index, gap) {
            err.panic();
        }
    }

    /// Relocate the elements into a new allocation of exactly `capacity`,
    /// leaving `gap` uninitialized slots at `index`. The length becomes
    /// `index`, with any elements following it parked after the gap.
    fn try_reallocate(
        &mut self,
        capacity: C::Index,
        index: usize,
        gap: usize,
    ) -> Result<(), StorageError> {
        let data = self.buffer.try_allocate(capacity)?;
        let len = self.buffer.len().to_usize();
        if self.buffer.is_allocated() {
            unsafe {
                let prev = self.buffer.data_unchecked();
                let prev_cap = self.buffer.capacity_unchecked();
                ptr::copy_nonoverlapping(prev.as_ptr(), data.as_ptr(), index);
                ptr::copy_nonoverlapping(
                    prev.as_ptr().add(index),
                    data.as_ptr().add(index + gap),
                    len - index,
                );
                self.buffer.deallocate(prev, prev_cap);
            }
        }
        unsafe {
            self.buffer.set_data(data);
            self.buffer.set_capacity(capacity);
            self.buffer.set_len(C::Index::from_usize(index));
        }
        trace_storage!(
            capacity = capacity.to_usize(),
            len,
            "reallocated sequence storage"
        );
        Ok(())
    }
}

/// Moves the elements following an erased range down, once the range has
/// been dropped.
struct TailShift<'a, T, B: RawStorage<T>> {
    buffer: &'a mut B,
    data: *mut T,
    dest: usize,
    src: usize,
    count: usize,
}

impl<T, B: RawStorage<T>> Drop for TailShift<'_, T, B> {
    fn drop(&mut self) {
        unsafe {
            if self.count > 0 {
                ptr::copy(self.data.add(self.src), self.data.add(self.dest), self.count);
            }
            self.buffer
                .set_len(B::Index::from_usize(self.dest + self.count));
        }
    }
}

impl<T, C: VecConfig> AsRef<[T]> for Vec<T, C> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, C: VecConfig> AsMut<[T]> for Vec<T, C> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, C: VecConfig> Borrow<[T]> for Vec<T, C> {
    #[inline]
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, C: VecConfig> BorrowMut<[T]> for Vec<T, C> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Clone, C: VecConfig> Clone for Vec<T, C> {
    fn clone(&self) -> Self {
        Self::from_slice(self)
    }

    fn clone_from(&mut self, source: &Self) {
        self.resize_from(source.iter().cloned());
    }
}

impl<T: fmt::Debug, C: VecConfig> fmt::Debug for Vec<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl<T, C: VecConfig> Default for Vec<T, C> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: VecConfig> ConstDefault for Vec<T, C> {
    const DEFAULT: Self = Self::new();
}

impl<T, C: VecConfig> Deref for Vec<T, C> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, C: VecConfig> DerefMut for Vec<T, C> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, C: VecConfig> Drop for Vec<T, C> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T, C: VecConfig> Extend<T> for Vec<T, C> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let len = self.buffer.len().to_usize();
        if lower > 0 && len.saturating_add(lower) > self.buffer.capacity().to_usize() {
            if self.buffer.is_allocated() {
                let free = self.buffer.capacity().to_usize() - len;
                self.grow(C::Index::from_usize(
                    (lower - free).min(C::Index::MAX_USIZE),
                ));
            } else {
                self.reserve(C::Index::from_usize(
                    lower.max(INITIAL_CAPACITY).min(C::Index::MAX_USIZE),
                ));
            }
        }
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Clone + 'a, C: VecConfig> Extend<&'a T> for Vec<T, C> {
    #[inline]
    fn extend<A: IntoIterator<Item = &'a T>>(&mut self, iter: A) {
        self.extend(iter.into_iter().cloned())
    }
}

impl<T, C: VecConfig> FromIterator<T> for Vec<T, C> {
    #[inline]
    fn from_iter<A: IntoIterator<Item = T>>(iter: A) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

// If a particular storage handle is not 'Send' then the VecConfig type must reflect that.
unsafe impl<T: Send, C: VecConfig + Send> Send for Vec<T, C> {}

// If a particular storage handle is not 'Sync' then the VecConfig type must reflect that.
unsafe impl<T: Sync, C: VecConfig + Sync> Sync for Vec<T, C> {}

impl<T, C: VecConfig, const N: usize> From<[T; N]> for Vec<T, C> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self::from_source(data)
    }
}

impl<T: Clone, C: VecConfig> From<&[T]> for Vec<T, C> {
    #[inline]
    fn from(data: &[T]) -> Self {
        Self::from_slice(data)
    }
}

impl<T: Clone, C: VecConfig> From<&mut [T]> for Vec<T, C> {
    #[inline]
    fn from(data: &mut [T]) -> Self {
        Self::from_slice(data)
    }
}

impl<T: Clone, C: VecConfig, const N: usize> From<&[T; N]> for Vec<T, C> {
    #[inline]
    fn from(data: &[T; N]) -> Self {
        Self::from_slice(data)
    }
}

impl<C: VecConfig> From<&str> for Vec<u8, C> {
    #[inline]
    fn from(data: &str) -> Self {
        Self::from_slice(data.as_bytes())
    }
}

#[cfg(feature = "alloc")]
impl<T, C: VecConfig> From<alloc::vec::Vec<T>> for Vec<T, C> {
    #[inline]
    fn from(vec: alloc::vec::Vec<T>) -> Self {
        Self::from_source(vec)
    }
}

#[cfg(feature = "alloc")]
impl<T, C: VecConfig> From<Vec<T, C>> for alloc::vec::Vec<T> {
    #[inline]
    fn from(vec: Vec<T, C>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T, C: VecConfig> IntoIterator for Vec<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T, C>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T, C: VecConfig> IntoIterator for &'a Vec<T, C> {
    type Item = &'a T;
    type IntoIter = <&'a [T] as IntoIterator>::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, C: VecConfig> IntoIterator for &'a mut Vec<T, C> {
    type Item = &'a mut T;
    type IntoIter = <&'a mut [T] as IntoIterator>::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T1, C1, T2, C2> PartialEq<Vec<T2, C2>> for Vec<T1, C1>
where
    C1: VecConfig,
    C2: VecConfig,
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &Vec<T2, C2>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<T: Eq, C: VecConfig> Eq for Vec<T, C> {}

impl<T1, C1, T2> PartialEq<&[T2]> for Vec<T1, C1>
where
    T1: PartialEq<T2>,
    C1: VecConfig,
{
    #[inline]
    fn eq(&self, other: &&[T2]) -> bool {
        self.as_slice().eq(*other)
    }
}

impl<T1, C1, T2> PartialEq<[T2]> for Vec<T1, C1>
where
    T1: PartialEq<T2>,
    C1: VecConfig,
{
    #[inline]
    fn eq(&self, other: &[T2]) -> bool {
        self.as_slice().eq(other)
    }
}

impl<T1, C1, T2, const N: usize> PartialEq<&[T2; N]> for Vec<T1, C1>
where
    T1: PartialEq<T2>,
    C1: VecConfig,
{
    #[inline]
    fn eq(&self, other: &&[T2; N]) -> bool {
        self.as_slice().eq(&other[..])
    }
}

impl<T1, C1, T2, const N: usize> PartialEq<[T2; N]> for Vec<T1, C1>
where
    T1: PartialEq<T2>,
    C1: VecConfig,
{
    #[inline]
    fn eq(&self, other: &[T2; N]) -> bool {
        self.as_slice().eq(&other[..])
    }
}

impl<T1, T2, C2> PartialEq<Vec<T2, C2>> for &[T1]
where
    T1: PartialEq<T2>,
    C2: VecConfig,
{
    #[inline]
    fn eq(&self, other: &Vec<T2, C2>) -> bool {
        <[T1] as PartialEq<[T2]>>::eq(self, other.as_slice())
    }
}

impl<T1, T2, C2> PartialEq<Vec<T2, C2>> for [T1]
where
    T1: PartialEq<T2>,
    C2: VecConfig,
{
    #[inline]
    fn eq(&self, other: &Vec<T2, C2>) -> bool {
        <[T1] as PartialEq<[T2]>>::eq(self, other.as_slice())
    }
}

impl<T1, T2, C2, const N: usize> PartialEq<Vec<T2, C2>> for [T1; N]
where
    T1: PartialEq<T2>,
    C2: VecConfig,
{
    #[inline]
    fn eq(&self, other: &Vec<T2, C2>) -> bool {
        <[T1] as PartialEq<[T2]>>::eq(&self[..], other.as_slice())
    }
}

#[cfg(feature = "alloc")]
impl<A, B, C> PartialEq<alloc::vec::Vec<A>> for Vec<B, C>
where
    B: PartialEq<A>,
    C: VecConfig,
{
    #[inline]
    fn eq(&self, other: &alloc::vec::Vec<A>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

#[cfg(feature = "alloc")]
impl<A, B, C> PartialEq<Vec<B, C>> for alloc::vec::Vec<A>
where
    A: PartialEq<B>,
    C: VecConfig,
{
    #[inline]
    fn eq(&self, other: &Vec<B, C>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<T: PartialOrd, C: VecConfig> PartialOrd for Vec<T, C> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, C: VecConfig> Ord for Vec<T, C> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash, C: VecConfig> Hash for Vec<T, C> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

#[cfg(feature = "std")]
impl<C: VecConfig> std::io::Write for Vec<u8, C> {
    #[inline]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }

    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let spare = C::Index::MAX_USIZE - self.buffer.len().to_usize();
        let count = buf.len().min(spare);
        self.extend_from_slice(&buf[..count]);
        Ok(count)
    }
}

#[cfg(feature = "zeroize")]
impl<T, C: VecConfig> zeroize::Zeroize for Vec<T, C>
where
    C::Alloc: crate::storage::ZeroizeOnRelease,
{
    #[inline]
    fn zeroize(&mut self) {
        self.release();
    }
}

#[cfg(feature = "zeroize")]
impl<T, C: VecConfig> zeroize::ZeroizeOnDrop for Vec<T, C> where
    C::Alloc: crate::storage::ZeroizeOnRelease
{
}
