//! Model, view and projection matrices.
//!
//! The model transforms post-multiply: `m.translate(v)` is `m * T(v)`, so the
//! last call applies to vertices first.

use crate::fast;
use crate::matrix::Mat4;
use crate::vector::{Vec3, Vec4};

impl Mat4 {
    /// `self` followed by a translation by `v`.
    pub fn translate(&self, v: Vec3) -> Self {
        let m = self;
        Self::from_cols(m[0], m[1], m[2], m[0] * v.x + m[1] * v.y + m[2] * v.z + m[3])
    }

    /// `self` followed by a rotation of `angle` radians around `axis`.
    ///
    /// `axis` need not be normalized, but must be non-zero.
    pub fn rotate(&self, angle: f32, axis: Vec3) -> Self {
        let Vec3 { x, y, z } = axis.normalize();
        let c = fast::cos(angle);
        let s = fast::sin(angle);
        let t = 1.0 - c;

        let rot = Self::from_cols(
            Vec4::new(x * x * t + c, y * x * t + z * s, x * z * t - y * s, 0.0),
            Vec4::new(x * y * t - z * s, y * y * t + c, y * z * t + x * s, 0.0),
            Vec4::new(x * z * t + y * s, y * z * t - x * s, z * z * t + c, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        );
        *self * rot
    }

    /// `self` followed by a per-axis scale.
    pub fn scale(&self, v: Vec3) -> Self {
        let m = self;
        Self::from_cols(m[0] * v.x, m[1] * v.y, m[2] * v.z, m[3])
    }

    /// Right-handed view matrix looking from `eye` towards `center`.
    ///
    /// `up` must not be parallel to the viewing direction.
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        let f = (center - eye).normalize();
        let s = f.cross(up).normalize();
        let u = s.cross(f);

        Self::from_cols(
            Vec4::new(s.x, u.x, -f.x, 0.0),
            Vec4::new(s.y, u.y, -f.y, 0.0),
            Vec4::new(s.z, u.z, -f.z, 0.0),
            Vec4::new(-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0),
        )
    }

    /// Perspective projection with a vertical field of view of `fovy`
    /// radians, mapping `[-z_near, -z_far]` onto clip depth `[-1, 1]`.
    pub fn perspective(fovy: f32, aspect: f32, z_near: f32, z_far: f32) -> Self {
        let f = fast::rcp((fovy / 2.0).tan());
        let depth = z_far - z_near;

        Self::from_cols(
            Vec4::new(f / aspect, 0.0, 0.0, 0.0),
            Vec4::new(0.0, f, 0.0, 0.0),
            Vec4::new(0.0, 0.0, -(z_far + z_near) / depth, -1.0),
            Vec4::new(0.0, 0.0, -(2.0 * z_far * z_near) / depth, 0.0),
        )
    }
}
