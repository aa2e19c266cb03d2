//! Array-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during array operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The requested capacity cannot be represented: either the slot count
    /// computation overflowed or the byte size exceeds `isize::MAX`.
    CapacityOverflow {
        /// Number of element slots requested.
        requested: usize,
    },
    /// The global allocator could not satisfy the request.
    AllocFailed {
        /// Size of the rejected allocation in bytes.
        size: usize,
        /// Alignment of the rejected allocation in bytes.
        align: usize,
    },
    /// Checked access to a slot outside `[0, len)`.
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// Number of live elements at the time of access.
        len: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: cannot hold {requested} elements")
            }
            Self::AllocFailed { size, align } => {
                write!(
                    f,
                    "allocation failed: {size} bytes with alignment {align}"
                )
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index out of bounds: index {index}, len {len}")
            }
        }
    }
}

impl Error for ArrayError {}

/// Unwrap the result of a fallible operation for its infallible twin.
///
/// Allocation failures go to [`std::alloc::handle_alloc_error`]; everything
/// else panics with the error's message.
pub(crate) fn infallible<R>(result: Result<R, ArrayError>) -> R {
    match result {
        Ok(value) => value,
        Err(err) => handle_error(err),
    }
}

#[cold]
#[inline(never)]
fn handle_error(err: ArrayError) -> ! {
    if let ArrayError::AllocFailed { size, align } = err {
        if let Ok(layout) = std::alloc::Layout::from_size_align(size, align) {
            std::alloc::handle_alloc_error(layout);
        }
    }
    panic!("{err}")
}
