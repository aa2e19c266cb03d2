//! `f32` vectors of dimension 2, 3 and 4.
//!
//! All arithmetic operators work component-wise, against another vector of
//! the same dimension or against a scalar on either side. `s - v` and
//! `s / v` compute `s - v.x`, `s / v.x`, and so on.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::fast;

/// A 2-dimensional vector.
#[derive(Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Vec2 {
    #[allow(missing_docs)]
    pub x: f32,
    #[allow(missing_docs)]
    pub y: f32,
}

/// A 3-dimensional vector.
#[derive(Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Vec3 {
    #[allow(missing_docs)]
    pub x: f32,
    #[allow(missing_docs)]
    pub y: f32,
    #[allow(missing_docs)]
    pub z: f32,
}

/// A 4-dimensional vector.
#[derive(Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Vec4 {
    #[allow(missing_docs)]
    pub x: f32,
    #[allow(missing_docs)]
    pub y: f32,
    #[allow(missing_docs)]
    pub z: f32,
    #[allow(missing_docs)]
    pub w: f32,
}

/// Shorthand for [`Vec2::new`].
#[inline]
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

/// Shorthand for [`Vec3::new`].
#[inline]
pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

/// Shorthand for [`Vec4::new`].
#[inline]
pub const fn vec4(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
    Vec4::new(x, y, z, w)
}

macro_rules! binop {
    ($name:ident { $($field:ident),+ }, $Op:ident :: $op:ident, $OpAssign:ident :: $op_assign:ident, $sym:tt) => {
        impl $Op for $name {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self {
                Self { $($field: self.$field $sym rhs.$field),+ }
            }
        }

        impl $Op<f32> for $name {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: f32) -> Self {
                Self { $($field: self.$field $sym rhs),+ }
            }
        }

        impl $Op<$name> for f32 {
            type Output = $name;

            #[inline]
            fn $op(self, rhs: $name) -> $name {
                $name { $($field: self $sym rhs.$field),+ }
            }
        }

        impl $OpAssign for $name {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                *self = *self $sym rhs;
            }
        }

        impl $OpAssign<f32> for $name {
            #[inline]
            fn $op_assign(&mut self, rhs: f32) {
                *self = *self $sym rhs;
            }
        }
    };
}

macro_rules! vector {
    ($name:ident, $dim:literal, { $($field:ident : $index:literal),+ }) => {
        impl $name {
            /// Dimension.
            pub const DIM: usize = $dim;
            /// All components zero.
            pub const ZERO: Self = Self::splat(0.0);
            /// All components one.
            pub const ONE: Self = Self::splat(1.0);

            /// Builds a vector from its components.
            #[inline]
            pub const fn new($($field: f32),+) -> Self {
                Self { $($field),+ }
            }

            /// A vector with every component set to `v`.
            #[inline]
            pub const fn splat(v: f32) -> Self {
                Self { $($field: v),+ }
            }

            /// Components in order.
            #[inline]
            pub const fn to_array(self) -> [f32; $dim] {
                [$(self.$field),+]
            }

            /// Applies `f` to each component.
            #[inline]
            pub fn map(self, mut f: impl FnMut(f32) -> f32) -> Self {
                Self { $($field: f(self.$field)),+ }
            }

            /// Dot product.
            #[inline]
            pub fn dot(self, rhs: Self) -> f32 {
                let products = [$(self.$field * rhs.$field),+];
                products.iter().sum()
            }

            /// Squared Euclidean length.
            #[inline]
            pub fn length2(self) -> f32 {
                self.dot(self)
            }

            /// Euclidean length.
            #[inline]
            pub fn length(self) -> f32 {
                self.length2().sqrt()
            }

            /// Component-wise minimum.
            #[inline]
            pub fn min(self, rhs: Self) -> Self {
                Self { $($field: crate::util::min(self.$field, rhs.$field)),+ }
            }

            /// Component-wise maximum.
            #[inline]
            pub fn max(self, rhs: Self) -> Self {
                Self { $($field: crate::util::max(self.$field, rhs.$field)),+ }
            }

            /// Component-wise absolute value.
            #[inline]
            pub fn abs(self) -> Self {
                self.map(f32::abs)
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        binop!($name { $($field),+ }, Add::add, AddAssign::add_assign, +);
        binop!($name { $($field),+ }, Sub::sub, SubAssign::sub_assign, -);
        binop!($name { $($field),+ }, Mul::mul, MulAssign::mul_assign, *);
        binop!($name { $($field),+ }, Div::div, DivAssign::div_assign, /);

        impl Index<usize> for $name {
            type Output = f32;

            #[inline]
            fn index(&self, index: usize) -> &f32 {
                match index {
                    $($index => &self.$field,)+
                    _ => panic!(
                        "component index {index} out of range for {}",
                        stringify!($name)
                    ),
                }
            }
        }

        impl IndexMut<usize> for $name {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                match index {
                    $($index => &mut self.$field,)+
                    _ => panic!(
                        "component index {index} out of range for {}",
                        stringify!($name)
                    ),
                }
            }
        }

        impl From<[f32; $dim]> for $name {
            #[inline]
            fn from(components: [f32; $dim]) -> Self {
                Self { $($field: components[$index]),+ }
            }
        }

        impl From<$name> for [f32; $dim] {
            #[inline]
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name))$(.field(&self.$field))+.finish()
            }
        }

        impl AbsDiffEq for $name {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                crate::EPS
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                $(self.$field.abs_diff_eq(&other.$field, epsilon))&&+
            }
        }

        impl RelativeEq for $name {
            fn default_max_relative() -> f32 {
                f32::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                $(self.$field.relative_eq(&other.$field, epsilon, max_relative))&&+
            }
        }

        impl UlpsEq for $name {
            fn default_max_ulps() -> u32 {
                f32::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
                $(self.$field.ulps_eq(&other.$field, epsilon, max_ulps))&&+
            }
        }
    };
}

vector!(Vec2, 2, { x: 0, y: 1 });
vector!(Vec3, 3, { x: 0, y: 1, z: 2 });
vector!(Vec4, 4, { x: 0, y: 1, z: 2, w: 3 });

impl Vec2 {
    /// Appends a `z` component.
    #[inline]
    pub const fn extend(self, z: f32) -> Vec3 {
        Vec3::new(self.x, self.y, z)
    }
}

impl Vec3 {
    /// Unit vector along +X.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along +Y.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along +Z.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Appends a `w` component.
    #[inline]
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }

    /// Drops `z`.
    #[inline]
    pub const fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - rhs.y * self.z,
            self.z * rhs.x - rhs.z * self.x,
            self.x * rhs.y - rhs.x * self.y,
        )
    }

    /// Squared distance between two points.
    #[inline]
    pub fn distance2(self, rhs: Self) -> f32 {
        (rhs - self).length2()
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(self, rhs: Self) -> f32 {
        self.distance2(rhs).sqrt()
    }

    /// `self` scaled to unit length.
    ///
    /// The zero vector has no direction; its components come back NaN.
    #[inline]
    pub fn normalize(self) -> Self {
        self * fast::rsqrt(self.length2())
    }

    /// Reflects the incident direction `self` off a surface with normal `n`.
    ///
    /// `n` should be normalized.
    #[inline]
    pub fn reflect(self, n: Self) -> Self {
        self - n * (n.dot(self) * 2.0)
    }

    /// Refracts the incident direction `self` through a surface with
    /// normal `n` and ratio of indices of refraction `eta`.
    ///
    /// Both `self` and `n` should be normalized. Total internal reflection
    /// yields the zero vector.
    pub fn refract(self, n: Self, eta: f32) -> Self {
        let n_dot_i = n.dot(self);
        let k = 1.0 - eta * eta * (1.0 - n_dot_i * n_dot_i);
        if k < 0.0 {
            Self::ZERO
        } else {
            self * eta - n * (eta * n_dot_i + k.sqrt())
        }
    }
}

impl Vec4 {
    /// Drops `w`.
    #[inline]
    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl From<(Vec2, f32)> for Vec3 {
    #[inline]
    fn from((xy, z): (Vec2, f32)) -> Self {
        Self::new(xy.x, xy.y, z)
    }
}

impl From<(f32, Vec2)> for Vec3 {
    #[inline]
    fn from((x, yz): (f32, Vec2)) -> Self {
        Self::new(x, yz.x, yz.y)
    }
}

impl From<(Vec2, Vec2)> for Vec4 {
    #[inline]
    fn from((xy, zw): (Vec2, Vec2)) -> Self {
        Self::new(xy.x, xy.y, zw.x, zw.y)
    }
}

impl From<(Vec3, f32)> for Vec4 {
    #[inline]
    fn from((xyz, w): (Vec3, f32)) -> Self {
        Self::new(xyz.x, xyz.y, xyz.z, w)
    }
}

impl From<(f32, Vec3)> for Vec4 {
    #[inline]
    fn from((x, yzw): (f32, Vec3)) -> Self {
        Self::new(x, yzw.x, yzw.y, yzw.z)
    }
}
