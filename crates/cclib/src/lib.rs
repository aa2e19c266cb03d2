//! cclib: a growable array with explicit storage management, and the small
//! vector/matrix math that usually travels with it in graphics code.
//!
//! This is the facade crate re-exporting both halves. Depend on
//! `cclib-array` or `cclib-math` directly if you only need one.
//!
//! # Quick start
//!
//! ```rust
//! use cclib::prelude::*;
//!
//! let mut points: GrowableArray<Vec3> = GrowableArray::new();
//! points.push_back(vec3(1.0, 0.0, 0.0));
//! points.emplace_back(|| vec3(0.0, 1.0, 0.0));
//! assert_eq!(points.capacity(), 3);
//!
//! let model = Mat4::IDENTITY.translate(vec3(0.0, 0.0, -5.0));
//! let moved: GrowableArray<Vec4> = points.iter().map(|p| model * p.extend(1.0)).collect();
//! assert_eq!(moved[1], vec4(0.0, 1.0, -5.0, 1.0));
//! assert_eq!(moved.at(2), Err(ArrayError::IndexOutOfBounds { index: 2, len: 2 }));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `cclib-array` | `GrowableArray`, its iterator and errors |
//! | [`math`] | `cclib-math` | Vectors, matrices, transforms, fast trig |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Growable array (`cclib-array`).
///
/// [`array::GrowableArray`] owns a contiguous buffer and grows it to
/// `2 * capacity + 1` when full. Fallible forms of every allocating
/// operation return [`array::ArrayError`].
pub use cclib_array as array;

/// Graphics math (`cclib-math`).
///
/// [`math::Vec3`], [`math::Mat4`] and friends, plus [`math::fast`]
/// approximations of common float functions.
pub use cclib_math as math;

pub use cclib_array::growable;

/// Common imports.
///
/// ```rust
/// use cclib::prelude::*;
/// ```
pub mod prelude {
    // Array
    pub use cclib_array::{growable, ArrayError, GrowableArray};

    // Math
    pub use cclib_math::{vec2, vec3, vec4, Mat3, Mat4, Vec2, Vec3, Vec4};
}
