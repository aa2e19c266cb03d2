//! Column-major 3×3 and 4×4 matrices.
//!
//! `m[c]` is column `c` and `m[c][r]` the element in row `r` of that
//! column. Products compose right to left: `(a * b) * v == a * (b * v)`.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::vector::{Vec3, Vec4};

/// A 3×3 matrix stored as three columns.
#[derive(Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    /// Columns, left to right.
    pub cols: [Vec3; 3],
}

/// A 4×4 matrix stored as four columns.
#[derive(Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Mat4 {
    /// Columns, left to right.
    pub cols: [Vec4; 4],
}

macro_rules! matrix_common {
    ($name:ident, $col:ident, $dim:literal) => {
        impl $name {
            /// Every element zero.
            pub const ZERO: Self = Self::from_diagonal(0.0);
            /// Ones on the diagonal, zero elsewhere.
            pub const IDENTITY: Self = Self::from_diagonal(1.0);

            /// Column `c`.
            #[inline]
            pub fn col(&self, c: usize) -> $col {
                self.cols[c]
            }

            /// Row `r`, gathered across the columns.
            #[inline]
            pub fn row(&self, r: usize) -> $col {
                let mut row = $col::ZERO;
                for (c, col) in self.cols.iter().enumerate() {
                    row[c] = col[r];
                }
                row
            }

            /// Rows and columns exchanged.
            pub fn transpose(&self) -> Self {
                let mut cols = [$col::ZERO; $dim];
                for (c, col) in cols.iter_mut().enumerate() {
                    *col = self.row(c);
                }
                Self { cols }
            }

            /// The inverse, or `None` when the determinant is zero or not
            /// finite.
            pub fn try_inverse(&self) -> Option<Self> {
                let (adj, det) = self.adjugate_and_determinant();
                if det == 0.0 || !det.is_finite() {
                    return None;
                }
                Some(adj * (1.0 / det))
            }

            /// The inverse.
            ///
            /// No singularity check: a singular matrix produces infinite or
            /// NaN elements. Use [`Self::try_inverse`] to detect that case.
            pub fn inverse(&self) -> Self {
                let (adj, det) = self.adjugate_and_determinant();
                adj * (1.0 / det)
            }
        }

        impl Index<usize> for $name {
            type Output = $col;

            #[inline]
            fn index(&self, c: usize) -> &$col {
                &self.cols[c]
            }
        }

        impl IndexMut<usize> for $name {
            #[inline]
            fn index_mut(&mut self, c: usize) -> &mut $col {
                &mut self.cols[c]
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { cols: std::array::from_fn(|c| self.cols[c] + rhs.cols[c]) }
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { cols: std::array::from_fn(|c| self.cols[c] - rhs.cols[c]) }
            }
        }

        impl Mul<f32> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f32) -> Self {
                Self { cols: self.cols.map(|c| c * rhs) }
            }
        }

        impl Mul<$col> for $name {
            type Output = $col;

            #[inline]
            fn mul(self, rhs: $col) -> $col {
                let mut out = $col::ZERO;
                for (c, col) in self.cols.iter().enumerate() {
                    out += *col * rhs[c];
                }
                out
            }
        }

        impl Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self { cols: rhs.cols.map(|c| self * c) }
            }
        }

        impl From<[[f32; $dim]; $dim]> for $name {
            /// Builds from an array of columns.
            fn from(cols: [[f32; $dim]; $dim]) -> Self {
                Self { cols: cols.map($col::from) }
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.cols.iter()).finish()
            }
        }

        impl AbsDiffEq for $name {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                crate::EPS
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                self.cols
                    .iter()
                    .zip(&other.cols)
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl RelativeEq for $name {
            fn default_max_relative() -> f32 {
                f32::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                self.cols
                    .iter()
                    .zip(&other.cols)
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }

        impl UlpsEq for $name {
            fn default_max_ulps() -> u32 {
                f32::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
                self.cols
                    .iter()
                    .zip(&other.cols)
                    .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
            }
        }
    };
}

matrix_common!(Mat3, Vec3, 3);
matrix_common!(Mat4, Vec4, 4);

impl Mat3 {
    /// Builds a matrix from its columns.
    #[inline]
    pub const fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self { cols: [c0, c1, c2] }
    }

    /// `d` on the diagonal, zero elsewhere.
    #[inline]
    pub const fn from_diagonal(d: f32) -> Self {
        Self::from_cols(
            Vec3::new(d, 0.0, 0.0),
            Vec3::new(0.0, d, 0.0),
            Vec3::new(0.0, 0.0, d),
        )
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        let m = self;
        m[0][0] * (m[1][1] * m[2][2] - m[2][1] * m[1][2])
            - m[1][0] * (m[0][1] * m[2][2] - m[2][1] * m[0][2])
            + m[2][0] * (m[0][1] * m[1][2] - m[1][1] * m[0][2])
    }

    fn adjugate_and_determinant(&self) -> (Self, f32) {
        (self.adjugate(), self.determinant())
    }

    fn adjugate(&self) -> Self {
        let m = self;
        let mut adj = Self::ZERO;

        adj[0][0] = m[1][1] * m[2][2] - m[2][1] * m[1][2];
        adj[1][0] = -(m[1][0] * m[2][2] - m[2][0] * m[1][2]);
        adj[2][0] = m[1][0] * m[2][1] - m[2][0] * m[1][1];

        adj[0][1] = -(m[0][1] * m[2][2] - m[2][1] * m[0][2]);
        adj[1][1] = m[0][0] * m[2][2] - m[2][0] * m[0][2];
        adj[2][1] = -(m[0][0] * m[2][1] - m[2][0] * m[0][1]);

        adj[0][2] = m[0][1] * m[1][2] - m[1][1] * m[0][2];
        adj[1][2] = -(m[0][0] * m[1][2] - m[1][0] * m[0][2]);
        adj[2][2] = m[0][0] * m[1][1] - m[1][0] * m[0][1];

        adj
    }
}

impl Mat4 {
    /// Builds a matrix from its columns.
    #[inline]
    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    /// `d` on the diagonal, zero elsewhere.
    #[inline]
    pub const fn from_diagonal(d: f32) -> Self {
        Self::from_cols(
            Vec4::new(d, 0.0, 0.0, 0.0),
            Vec4::new(0.0, d, 0.0, 0.0),
            Vec4::new(0.0, 0.0, d, 0.0),
            Vec4::new(0.0, 0.0, 0.0, d),
        )
    }

    /// Determinant, expanded along the first row of the adjugate.
    pub fn determinant(&self) -> f32 {
        self.adjugate_and_determinant().1
    }

    fn adjugate_and_determinant(&self) -> (Self, f32) {
        let adj = self.adjugate();
        let row0 = Vec4::new(adj[0][0], adj[1][0], adj[2][0], adj[3][0]);
        let dot = self[0] * row0;
        (adj, (dot.x + dot.y) + (dot.z + dot.w))
    }

    // Cofactors grouped into 2x2 sub-determinants of the lower two rows.
    fn adjugate(&self) -> Self {
        let m = self;

        let coef00 = m[2][2] * m[3][3] - m[3][2] * m[2][3];
        let coef02 = m[1][2] * m[3][3] - m[3][2] * m[1][3];
        let coef03 = m[1][2] * m[2][3] - m[2][2] * m[1][3];

        let coef04 = m[2][1] * m[3][3] - m[3][1] * m[2][3];
        let coef06 = m[1][1] * m[3][3] - m[3][1] * m[1][3];
        let coef07 = m[1][1] * m[2][3] - m[2][1] * m[1][3];

        let coef08 = m[2][1] * m[3][2] - m[3][1] * m[2][2];
        let coef10 = m[1][1] * m[3][2] - m[3][1] * m[1][2];
        let coef11 = m[1][1] * m[2][2] - m[2][1] * m[1][2];

        let coef12 = m[2][0] * m[3][3] - m[3][0] * m[2][3];
        let coef14 = m[1][0] * m[3][3] - m[3][0] * m[1][3];
        let coef15 = m[1][0] * m[2][3] - m[2][0] * m[1][3];

        let coef16 = m[2][0] * m[3][2] - m[3][0] * m[2][2];
        let coef18 = m[1][0] * m[3][2] - m[3][0] * m[1][2];
        let coef19 = m[1][0] * m[2][2] - m[2][0] * m[1][2];

        let coef20 = m[2][0] * m[3][1] - m[3][0] * m[2][1];
        let coef22 = m[1][0] * m[3][1] - m[3][0] * m[1][1];
        let coef23 = m[1][0] * m[2][1] - m[2][0] * m[1][1];

        let fac0 = Vec4::new(coef00, coef00, coef02, coef03);
        let fac1 = Vec4::new(coef04, coef04, coef06, coef07);
        let fac2 = Vec4::new(coef08, coef08, coef10, coef11);
        let fac3 = Vec4::new(coef12, coef12, coef14, coef15);
        let fac4 = Vec4::new(coef16, coef16, coef18, coef19);
        let fac5 = Vec4::new(coef20, coef20, coef22, coef23);

        let v0 = Vec4::new(m[1][0], m[0][0], m[0][0], m[0][0]);
        let v1 = Vec4::new(m[1][1], m[0][1], m[0][1], m[0][1]);
        let v2 = Vec4::new(m[1][2], m[0][2], m[0][2], m[0][2]);
        let v3 = Vec4::new(m[1][3], m[0][3], m[0][3], m[0][3]);

        let inv0 = v1 * fac0 - v2 * fac1 + v3 * fac2;
        let inv1 = v0 * fac0 - v2 * fac3 + v3 * fac4;
        let inv2 = v0 * fac1 - v1 * fac3 + v3 * fac5;
        let inv3 = v0 * fac2 - v1 * fac4 + v2 * fac5;

        let sign_a = Vec4::new(1.0, -1.0, 1.0, -1.0);
        let sign_b = -sign_a;

        Self::from_cols(inv0 * sign_a, inv1 * sign_b, inv2 * sign_a, inv3 * sign_b)
    }
}

/// Row vector times matrix: component `c` is `v · m[c]`.
impl Mul<Mat4> for Vec4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Mat4) -> Vec4 {
        Vec4::new(
            self.dot(rhs[0]),
            self.dot(rhs[1]),
            self.dot(rhs[2]),
            self.dot(rhs[3]),
        )
    }
}

/// Row vector times matrix: component `c` is `v · m[c]`.
impl Mul<Mat3> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Mat3) -> Vec3 {
        Vec3::new(self.dot(rhs[0]), self.dot(rhs[1]), self.dot(rhs[2]))
    }
}

/// The upper-left 3×3 block.
impl From<Mat4> for Mat3 {
    fn from(m: Mat4) -> Self {
        Self::from_cols(m[0].xyz(), m[1].xyz(), m[2].xyz())
    }
}

/// Embeds into the upper-left block of an identity.
impl From<Mat3> for Mat4 {
    fn from(m: Mat3) -> Self {
        Self::from_cols(
            m[0].extend(0.0),
            m[1].extend(0.0),
            m[2].extend(0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{vec3, vec4};
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn sample_mat3() -> Mat3 {
        Mat3::from([[2.0, 0.0, 1.0], [1.0, 3.0, 0.0], [0.0, 1.0, 4.0]])
    }

    fn sample_mat4() -> Mat4 {
        Mat4::from([
            [4.0, 0.0, 1.0, 0.0],
            [1.0, 3.0, 0.0, 2.0],
            [0.0, 1.0, 5.0, 0.0],
            [2.0, 0.0, 1.0, 6.0],
        ])
    }

    #[test]
    fn indexing_is_column_then_row() {
        let m = sample_mat3();
        assert_eq!(m[1], vec3(1.0, 3.0, 0.0));
        assert_eq!(m[1][0], 1.0);
        assert_eq!(m.row(0), vec3(2.0, 1.0, 0.0));
        assert_eq!(m.col(2), m[2]);
    }

    #[test]
    fn identity_is_neutral() {
        let m = sample_mat4();
        assert_eq!(Mat4::IDENTITY * m, m);
        assert_eq!(m * Mat4::IDENTITY, m);
        let v = vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Mat4::IDENTITY * v, v);
        assert_eq!(v * Mat4::IDENTITY, v);
    }

    #[test]
    fn matrix_vector_product_combines_columns() {
        let m = sample_mat3();
        // x * col0 + y * col1 + z * col2
        assert_eq!(m * vec3(1.0, 0.0, 0.0), m[0]);
        assert_eq!(m * vec3(1.0, 1.0, 1.0), vec3(3.0, 4.0, 5.0));
    }

    #[test]
    fn row_vector_product_is_transposed_product() {
        let m = sample_mat4();
        let v = vec4(1.0, -2.0, 0.5, 3.0);
        assert_eq!(v * m, m.transpose() * v);
    }

    #[test]
    fn transpose_twice_is_identity() {
        let m = sample_mat4();
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose()[0][1], m[1][0]);
    }

    #[test]
    fn determinants() {
        assert_eq!(Mat3::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat3::from_diagonal(2.0).determinant(), 8.0);
        assert_eq!(Mat4::from_diagonal(2.0).determinant(), 16.0);
        assert_abs_diff_eq!(sample_mat3().determinant(), 25.0, epsilon = 1e-5);
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        let m3 = sample_mat3();
        assert_abs_diff_eq!(m3 * m3.inverse(), Mat3::IDENTITY, epsilon = 1e-5);
        let m4 = sample_mat4();
        assert_abs_diff_eq!(m4 * m4.inverse(), Mat4::IDENTITY, epsilon = 1e-5);
        assert_abs_diff_eq!(m4.inverse() * m4, Mat4::IDENTITY, epsilon = 1e-5);
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let flat = Mat4::from_cols(
            vec4(1.0, 2.0, 3.0, 4.0),
            vec4(2.0, 4.0, 6.0, 8.0),
            vec4(0.0, 1.0, 0.0, 0.0),
            vec4(0.0, 0.0, 0.0, 1.0),
        );
        assert_eq!(flat.determinant(), 0.0);
        assert!(flat.try_inverse().is_none());
        assert!(Mat3::ZERO.try_inverse().is_none());
        assert!(!Mat3::ZERO.inverse()[0][0].is_finite());
    }

    #[test]
    fn add_sub_are_element_wise() {
        let m = sample_mat3();
        assert_eq!(m + m, m * 2.0);
        assert_eq!(m - m, Mat3::ZERO);
    }

    #[test]
    fn mat3_mat4_conversions() {
        let m3 = sample_mat3();
        let m4 = Mat4::from(m3);
        assert_eq!(m4[3], vec4(0.0, 0.0, 0.0, 1.0));
        assert_eq!(m4[0][3], 0.0);
        assert_eq!(Mat3::from(m4), m3);
    }

    proptest! {
        #[test]
        fn product_is_associative_on_vectors(
            a in prop::array::uniform4(prop::array::uniform4(-4.0f32..4.0)),
            b in prop::array::uniform4(prop::array::uniform4(-4.0f32..4.0)),
            v in prop::array::uniform4(-4.0f32..4.0),
        ) {
            let (a, b, v) = (Mat4::from(a), Mat4::from(b), Vec4::from(v));
            let lhs = (a * b) * v;
            let rhs = a * (b * v);
            prop_assert!(lhs.abs_diff_eq(&rhs, 1e-2), "{:?} != {:?}", lhs, rhs);
        }

        #[test]
        fn diagonally_dominant_matrices_invert(
            a in prop::array::uniform3(prop::array::uniform3(-1.0f32..1.0)),
        ) {
            let m = Mat3::from(a) + Mat3::from_diagonal(4.0);
            let inv = m.try_inverse();
            prop_assert!(inv.is_some());
            if let Some(inv) = inv {
                prop_assert!((m * inv).abs_diff_eq(&Mat3::IDENTITY, 1e-4));
            }
        }
    }
}
