//! A pointer-sized byte sequence which stores no terminator.

use core::borrow::Borrow;
use core::ffi::{c_char, CStr};
use core::fmt;
use core::ops::{Deref, DerefMut};
use core::slice;
use core::str::{self, Utf8Error};

use const_default::ConstDefault;

use crate::vec::ThinVec;

/// A byte sequence using the co-located layout.
///
/// The length is exactly the number of stored bytes. No terminating sentinel
/// is stored, and none is assumed when comparing against other
/// representations, so embedded zero bytes are preserved.
///
/// ```
/// use flex_seq::ThinBytes;
///
/// let mut s = ThinBytes::from("hello");
/// s.extend_from_slice(b" world");
/// assert_eq!(s, "hello world");
/// assert_eq!(core::mem::size_of::<ThinBytes>(), core::mem::size_of::<usize>());
/// ```
#[derive(Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ThinBytes {
    vec: ThinVec<u8>,
}

impl ThinBytes {
    /// Create an empty, unallocated byte sequence.
    #[inline]
    pub const fn new() -> Self {
        Self {
            vec: ThinVec::new(),
        }
    }

    /// Copy the contents of a nul-terminated C string, excluding the
    /// terminator. A null pointer produces an empty sequence.
    ///
    /// # Safety
    /// A non-null `ptr` must satisfy the requirements of [`CStr::from_ptr`].
    pub unsafe fn from_ptr(ptr: *const c_char) -> Self {
        let mut bytes = Self::new();
        bytes.assign_ptr(ptr);
        bytes
    }

    /// Copy `len` bytes starting at `data`. A null pointer produces an empty
    /// sequence.
    ///
    /// # Safety
    /// A non-null `data` must be valid for reads of `len` bytes.
    pub unsafe fn from_raw_parts(data: *const u8, len: usize) -> Self {
        if data.is_null() || len == 0 {
            Self::new()
        } else {
            Self::from_bytes(slice::from_raw_parts(data, len))
        }
    }

    /// Copy the contents of a byte slice.
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            vec: ThinVec::from_slice(bytes),
        }
    }

    /// Replace the contents with a copy of `bytes`, reusing the allocation
    /// when it is large enough.
    #[inline]
    pub fn assign(&mut self, bytes: impl AsRef<[u8]>) {
        self.vec.resize_from(bytes.as_ref().iter().copied());
    }

    /// Replace the contents with a copy of a nul-terminated C string. A null
    /// pointer clears the sequence.
    ///
    /// # Safety
    /// A non-null `ptr` must satisfy the requirements of [`CStr::from_ptr`].
    pub unsafe fn assign_ptr(&mut self, ptr: *const c_char) {
        if ptr.is_null() {
            self.vec.clear();
        } else {
            self.assign(CStr::from_ptr(ptr).to_bytes());
        }
    }

    /// Compare against a nul-terminated C string, treating a null pointer as
    /// empty.
    ///
    /// # Safety
    /// A non-null `ptr` must satisfy the requirements of [`CStr::from_ptr`].
    pub unsafe fn eq_ptr(&self, ptr: *const c_char) -> bool {
        if ptr.is_null() {
            self.is_empty()
        } else {
            self.as_bytes() == CStr::from_ptr(ptr).to_bytes()
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.vec.as_slice()
    }

    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.vec.as_mut_slice()
    }

    /// Interpret the contents as UTF-8.
    #[inline]
    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        str::from_utf8(self.as_bytes())
    }

    #[cfg(feature = "alloc")]
    /// Interpret the contents as UTF-8, replacing invalid sequences.
    #[inline]
    pub fn to_string_lossy(&self) -> alloc::borrow::Cow<'_, str> {
        alloc::string::String::from_utf8_lossy(self.as_bytes())
    }

    #[cfg(feature = "alloc")]
    /// Copy the contents into a standard vector.
    #[inline]
    pub fn into_vec(self) -> alloc::vec::Vec<u8> {
        self.vec.into()
    }

    /// Unwrap the underlying sequence.
    #[inline]
    pub fn into_inner(self) -> ThinVec<u8> {
        self.vec
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.vec.capacity()
    }

    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.vec.is_allocated()
    }

    /// Ensure the capacity is at least `capacity`, returning `true` when the
    /// contents were moved.
    #[inline]
    pub fn reserve(&mut self, capacity: usize) -> bool {
        self.vec.reserve(capacity)
    }

    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.vec.push(byte);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<u8> {
        self.vec.pop()
    }

    #[inline]
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.vec.extend_from_slice(bytes);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.vec.clear();
    }

    /// Clear the contents and release the allocation.
    #[inline]
    pub fn release(&mut self) {
        self.vec.release();
    }
}

impl ConstDefault for ThinBytes {
    const DEFAULT: Self = Self::new();
}

impl AsRef<[u8]> for ThinBytes {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsMut<[u8]> for ThinBytes {
    #[inline]
    fn as_mut(&mut self) -> &mut [u8] {
        self.as_bytes_mut()
    }
}

impl Borrow<[u8]> for ThinBytes {
    #[inline]
    fn borrow(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Deref for ThinBytes {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl DerefMut for ThinBytes {
    #[inline]
    fn deref_mut(&mut self) -> &mut [u8] {
        self.as_bytes_mut()
    }
}

impl fmt::Debug for ThinBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("b\"")?;
        for byte in self.as_bytes() {
            write!(f, "{}", core::ascii::escape_default(*byte))?;
        }
        f.write_str("\"")
    }
}

impl fmt::Write for ThinBytes {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

impl Extend<u8> for ThinBytes {
    #[inline]
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        self.vec.extend(iter)
    }
}

impl<'a> Extend<&'a u8> for ThinBytes {
    #[inline]
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.vec.extend(iter.into_iter().copied())
    }
}

impl FromIterator<u8> for ThinBytes {
    #[inline]
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self {
            vec: ThinVec::from_iter(iter),
        }
    }
}

impl From<&[u8]> for ThinBytes {
    #[inline]
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<const N: usize> From<&[u8; N]> for ThinBytes {
    #[inline]
    fn from(bytes: &[u8; N]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&str> for ThinBytes {
    #[inline]
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }
}

impl From<&CStr> for ThinBytes {
    #[inline]
    fn from(s: &CStr) -> Self {
        Self::from_bytes(s.to_bytes())
    }
}

impl From<ThinVec<u8>> for ThinBytes {
    #[inline]
    fn from(vec: ThinVec<u8>) -> Self {
        Self { vec }
    }
}

#[cfg(feature = "alloc")]
impl From<alloc::string::String> for ThinBytes {
    #[inline]
    fn from(s: alloc::string::String) -> Self {
        Self::from_bytes(s.as_bytes())
    }
}

#[cfg(feature = "alloc")]
impl From<&alloc::string::String> for ThinBytes {
    #[inline]
    fn from(s: &alloc::string::String) -> Self {
        Self::from_bytes(s.as_bytes())
    }
}

#[cfg(feature = "alloc")]
impl From<alloc::vec::Vec<u8>> for ThinBytes {
    #[inline]
    fn from(vec: alloc::vec::Vec<u8>) -> Self {
        Self {
            vec: ThinVec::from_source(vec),
        }
    }
}

macro_rules! impl_bytes_eq {
    ($($(#[$m:meta])* $ty:ty => |$o:ident| $bytes:expr;)+) => {
        $(
            $(#[$m])*
            impl PartialEq<$ty> for ThinBytes {
                #[inline]
                fn eq(&self, $o: &$ty) -> bool {
                    self.as_bytes() == $bytes
                }
            }
        )+
    };
}

macro_rules! impl_bytes_eq_rev {
    ($($(#[$m:meta])* $ty:ty;)+) => {
        $(
            $(#[$m])*
            impl PartialEq<ThinBytes> for $ty {
                #[inline]
                fn eq(&self, other: &ThinBytes) -> bool {
                    other == self
                }
            }
        )+
    };
}

impl_bytes_eq! {
    [u8] => |other| other;
    &[u8] => |other| *other;
    str => |other| other.as_bytes();
    &str => |other| other.as_bytes();
    CStr => |other| other.to_bytes();
    &CStr => |other| other.to_bytes();
    #[cfg(feature = "alloc")]
    alloc::string::String => |other| other.as_bytes();
    #[cfg(feature = "alloc")]
    alloc::vec::Vec<u8> => |other| other.as_slice();
}

impl_bytes_eq_rev! {
    [u8];
    &[u8];
    str;
    &str;
    #[cfg(feature = "alloc")]
    alloc::string::String;
    #[cfg(feature = "alloc")]
    alloc::vec::Vec<u8>;
}

impl<const N: usize> PartialEq<[u8; N]> for ThinBytes {
    #[inline]
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for ThinBytes {
    #[inline]
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == other.as_slice()
    }
}
