//! A growable array with hand-rolled storage management.
//!
//! [`GrowableArray`] reimplements the dynamic-array abstraction from raw
//! allocation upwards: a single owned block, values constructed in place at
//! the end of the live prefix, explicit drops, and geometric growth. This
//! crate is the only one in the workspace that contains `unsafe` code.
//!
//! # Layout
//!
//! ```text
//! GrowableArray<T>
//! ├── RawBuf<T>     owned block of `capacity` slots (raw.rs)
//! │   ├── 0..len          live values
//! │   └── len..capacity   uninitialised
//! └── len
//! ```
//!
//! # Guarantees
//!
//! - Relocation (growth, [`reserve`](GrowableArray::reserve),
//!   [`shrink_to_fit`](GrowableArray::shrink_to_fit)) allocates the new block
//!   before touching the old one and moves values bitwise, so it either
//!   completes or leaves the array untouched.
//! - Cloning builds a complete copy before anything is exchanged; a
//!   panicking element `clone` drops the partial copy.
//! - Moving out ([`GrowableArray::take`]) leaves an empty array with no
//!   storage that is safe to reuse or drop.
//!
//! # Example
//!
//! ```
//! use cclib_array::{growable, GrowableArray};
//!
//! let mut a = growable![1, 2, 3, 4, 5];
//! a.emplace_back(|| 6);
//! a.resize(10, 7);
//! assert_eq!(a.len(), 10);
//! assert_eq!(a[9], 7);
//!
//! let mut b: GrowableArray<i32> = growable![50, 49, 48, 47, 46];
//! a.swap_with(&mut b);
//! assert_eq!(a.front(), Some(&50));
//! assert_eq!(b.back(), Some(&7));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod array;
pub mod error;
pub mod growth;
pub mod iter;
mod raw;

// Public re-exports for the primary API surface.
pub use array::GrowableArray;
pub use error::ArrayError;
pub use iter::IntoIter;

/// Create a [`GrowableArray`] from a list of values or a repeated value.
///
/// - `growable![]` is an empty array with no storage.
/// - `growable![a, b, c]` moves the values in, with capacity exactly 3.
/// - `growable![value; count]` holds `count` clones of `value`.
///
/// ```
/// use cclib_array::growable;
///
/// let filled = growable![0u8; 4];
/// assert_eq!(filled, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! growable {
    () => {
        $crate::GrowableArray::new()
    };
    ($elem:expr; $count:expr) => {
        $crate::GrowableArray::from_elem($elem, $count)
    };
    ($($item:expr),+ $(,)?) => {
        $crate::GrowableArray::from([$($item),+])
    };
}
