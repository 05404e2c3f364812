/// Create a [`CachedVec`](crate::vec::CachedVec) containing the arguments.
///
/// ```
/// use flex_seq::seq;
///
/// let v = seq![1, 2, 3];
/// assert_eq!(v, [1, 2, 3]);
/// let z = seq![0u8; 4];
/// assert_eq!(z.len(), 4);
/// ```
#[macro_export]
macro_rules! seq {
    () => (
        $crate::vec::from_array([])
    );
    ($elem:expr; $n:expr) => (
        $crate::vec::from_elem($elem, $n)
    );
    ($($x:expr),+ $(,)?) => (
        $crate::vec::from_array([$($x),+])
    );
}

macro_rules! trace_storage {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    };
}
