use core::fmt::Debug;
use core::marker::PhantomData;

use const_default::ConstDefault;

use crate::index::Index;
use crate::storage::{FatBuffer, Global, RawAlloc, RawStorage, ThinBuffer};

/// Type-level configuration of a [`Vec`](super::Vec): the storage layout,
/// the index type, and the raw allocator.
pub trait VecConfig: Debug {
    /// The type used for positions, lengths, and capacities.
    type Index: Index;
    /// The raw allocator backing the storage.
    type Alloc: RawAlloc + ConstDefault;
    /// The storage handle held by the sequence.
    type Buffer<T>: RawStorage<T, Index = Self::Index, Alloc = Self::Alloc>;
}

/// Select the cached layout, keeping the length and capacity in the handle.
#[derive(Debug, Default, Clone, Copy)]
pub struct Cached<I: Index = usize, A: RawAlloc = Global>(PhantomData<(I, A)>);

impl<I: Index, A: RawAlloc + ConstDefault> VecConfig for Cached<I, A> {
    type Index = I;
    type Alloc = A;
    type Buffer<T> = FatBuffer<T, I, A>;
}

/// Select the co-located layout, keeping the length and capacity in a header
/// before the elements so the handle is a single pointer.
#[derive(Debug, Default, Clone, Copy)]
pub struct Thin<I: Index = usize, A: RawAlloc = Global>(PhantomData<(I, A)>);

impl<I: Index, A: RawAlloc + ConstDefault> VecConfig for Thin<I, A> {
    type Index = I;
    type Alloc = A;
    type Buffer<T> = ThinBuffer<T, I, A>;
}
