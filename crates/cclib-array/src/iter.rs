//! Owning iteration.

#![allow(unsafe_code)]

use std::fmt;
use std::iter::FusedIterator;

use crate::raw::RawBuf;

/// Owning iterator returned by `GrowableArray::into_iter`.
///
/// Takes over the array's storage. Values not yet yielded are dropped,
/// and the storage released, when the iterator is dropped.
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    /// First slot not yet yielded from the front.
    head: usize,
    /// One past the last slot not yet yielded from the back.
    tail: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(buf: RawBuf<T>, len: usize) -> Self {
        Self {
            buf,
            head: 0,
            tail: len,
        }
    }

    /// The values not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `head..tail` are exactly the live slots.
        unsafe { self.buf.slice(self.head, self.tail) }
    }

    /// The values not yet yielded, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: `head..tail` are exactly the live slots.
        unsafe { self.buf.slice_mut(self.head, self.tail) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.head == self.tail {
            return None;
        }
        let slot = self.head;
        self.head += 1;
        // SAFETY: `slot` was live and is now outside `head..tail`.
        Some(unsafe { self.buf.read(slot) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tail - self.head;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.head == self.tail {
            return None;
        }
        self.tail -= 1;
        // SAFETY: the slot was live and is now outside `head..tail`.
        Some(unsafe { self.buf.read(self.tail) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: `head..tail` are the remaining live values.
        unsafe { self.buf.drop_range(self.head, self.tail) };
    }
}
