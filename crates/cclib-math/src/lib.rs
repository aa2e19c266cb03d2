//! Small-vector and matrix math for graphics code.
//!
//! Everything here is a pure function over small `Copy` value types:
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`]: `f32` vectors with component-wise
//!   arithmetic and the usual geometric helpers.
//! - [`Mat3`], [`Mat4`]: column-major matrices with products, determinants,
//!   inverses, and the common view/projection/model transforms.
//! - [`fast`]: cheaper approximations of reciprocal and trigonometric
//!   functions, with their error documented per function.
//! - [`util`] and [`convert`]: scalar helpers.
//!
//! Conventions follow OpenGL/GLM: right-handed view space, clip-space depth
//! in `[-1, 1]`, matrices stored and indexed by column.
//!
//! Exact comparison is `PartialEq`; approximate comparison goes through the
//! [`approx`] traits, with [`EPS`] as the default absolute tolerance.
//!
//! ```
//! use cclib_math::{vec3, vec4, Mat4};
//!
//! let view = Mat4::look_at(vec3(2.0, 5.0, 10.0), vec3(0.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0));
//! let proj = Mat4::perspective(1.05, 1.33, 0.1, 1000.0);
//! let clip = proj * view * vec4(3.0, 2.0, 1.0, 1.0);
//! assert!(clip.w > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod convert;
pub mod fast;
pub mod matrix;
mod transform;
pub mod util;
pub mod vector;

pub use convert::{cot, degrees, lerp, radians};
pub use matrix::{Mat3, Mat4};
pub use vector::{vec2, vec3, vec4, Vec2, Vec3, Vec4};

/// Archimedes' constant.
pub const PI: f32 = std::f32::consts::PI;

/// π / 2.
pub const PI_2: f32 = std::f32::consts::FRAC_PI_2;

/// Default absolute tolerance for approximate comparisons.
pub const EPS: f32 = 1.0e-8;
