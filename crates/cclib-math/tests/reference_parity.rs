//! Cross-checks against nalgebra for the camera pipeline, products and
//! inverses.

use approx::assert_abs_diff_eq;
use cclib_math::{vec3, vec4, Mat3, Mat4, Vec3, Vec4};
use nalgebra::{Matrix3, Matrix4, Point3, Rotation3, Unit, Vector3, Vector4};

const TOLERANCE: f32 = 1e-4;

const EYE: [f32; 3] = [2.0, 5.0, 10.0];
const FOVY: f32 = 1.05;
const ASPECT: f32 = 1.33;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 1000.0;

fn to_na4(m: &Mat4) -> Matrix4<f32> {
    Matrix4::from_fn(|r, c| m[c][r])
}

fn to_na3(m: &Mat3) -> Matrix3<f32> {
    Matrix3::from_fn(|r, c| m[c][r])
}

fn assert_matches4(ours: &Mat4, reference: &Matrix4<f32>) {
    for c in 0..4 {
        for r in 0..4 {
            assert!(
                (ours[c][r] - reference[(r, c)]).abs() < TOLERANCE,
                "element (row {r}, col {c}): {} vs {}",
                ours[c][r],
                reference[(r, c)]
            );
        }
    }
}

fn assert_matches3(ours: &Mat3, reference: &Matrix3<f32>) {
    for c in 0..3 {
        for r in 0..3 {
            assert!(
                (ours[c][r] - reference[(r, c)]).abs() < TOLERANCE,
                "element (row {r}, col {c}): {} vs {}",
                ours[c][r],
                reference[(r, c)]
            );
        }
    }
}

fn assert_matches_vec4(ours: Vec4, reference: &Vector4<f32>) {
    assert_abs_diff_eq!(
        ours,
        vec4(reference.x, reference.y, reference.z, reference.w),
        epsilon = TOLERANCE
    );
}

fn view() -> Mat4 {
    Mat4::look_at(Vec3::from(EYE), Vec3::ZERO, Vec3::Y)
}

fn reference_view() -> Matrix4<f32> {
    Matrix4::look_at_rh(
        &Point3::new(EYE[0], EYE[1], EYE[2]),
        &Point3::origin(),
        &Vector3::y(),
    )
}

fn reference_projection() -> Matrix4<f32> {
    Matrix4::new_perspective(ASPECT, FOVY, Z_NEAR, Z_FAR)
}

#[test]
fn look_at_matches() {
    assert_matches4(&view(), &reference_view());
}

#[test]
fn perspective_matches() {
    let ours = Mat4::perspective(FOVY, ASPECT, Z_NEAR, Z_FAR);
    assert_matches4(&ours, &reference_projection());
}

#[test]
fn view_projection_product_matches() {
    let ours = Mat4::perspective(FOVY, ASPECT, Z_NEAR, Z_FAR) * view();
    let reference = reference_projection() * reference_view();
    assert_matches4(&ours, &reference);
}

#[test]
fn projected_point_matches() {
    let pos = vec4(3.0, 2.0, 1.0, 1.0);
    let ours = Mat4::perspective(FOVY, ASPECT, Z_NEAR, Z_FAR) * view() * pos;
    let reference = reference_projection() * reference_view() * Vector4::new(3.0, 2.0, 1.0, 1.0);
    assert_matches_vec4(ours, &reference);
}

#[test]
fn row_vector_product_matches_transpose() {
    let m = Mat4::perspective(FOVY, ASPECT, Z_NEAR, Z_FAR) * view();
    let v = vec4(3.0, 2.0, 1.0, 1.0);
    let reference = to_na4(&m).transpose() * Vector4::new(3.0, 2.0, 1.0, 1.0);
    assert_matches_vec4(v * m, &reference);
}

#[test]
fn mat4_inverse_matches() {
    let m = view();
    let reference = reference_view()
        .try_inverse()
        .expect("view matrix is invertible");
    assert_matches4(&m.inverse(), &reference);

    let pv = Mat4::perspective(FOVY, ASPECT, Z_NEAR, Z_FAR) * m;
    let pv_inv = pv.try_inverse().expect("projection-view is invertible");
    assert_abs_diff_eq!(pv * pv_inv, Mat4::IDENTITY, epsilon = 1e-3);
    assert!(to_na4(&pv).try_inverse().is_some());
}

#[test]
fn mat4_determinant_matches() {
    let m = Mat4::IDENTITY
        .translate(vec3(1.0, -2.0, 3.0))
        .rotate(0.4, vec3(1.0, 1.0, 0.0))
        .scale(vec3(2.0, 3.0, 0.5));
    assert_abs_diff_eq!(m.determinant(), to_na4(&m).determinant(), epsilon = TOLERANCE);
    assert_abs_diff_eq!(m.determinant(), 3.0, epsilon = TOLERANCE);
}

#[test]
fn mat3_inverse_matches() {
    let m = Mat3::from(view());
    let reference = to_na3(&m).try_inverse().expect("rotation is invertible");
    assert_matches3(&m.inverse(), &reference);
    // A pure rotation inverts to its transpose.
    assert_abs_diff_eq!(m.inverse(), m.transpose(), epsilon = TOLERANCE);
}

#[test]
fn model_transforms_match() {
    let axis = vec3(1.0, 2.0, 3.0);
    let angle = 0.8;

    let rotation = Mat4::IDENTITY.rotate(angle, axis);
    let reference =
        Rotation3::from_axis_angle(&Unit::new_normalize(Vector3::new(1.0, 2.0, 3.0)), angle)
            .to_homogeneous();
    assert_matches4(&rotation, &reference);

    let translation = Mat4::IDENTITY.translate(axis);
    assert_matches4(
        &translation,
        &Matrix4::new_translation(&Vector3::new(1.0, 2.0, 3.0)),
    );

    let scaling = Mat4::IDENTITY.scale(axis);
    assert_matches4(
        &scaling,
        &Matrix4::new_nonuniform_scaling(&Vector3::new(1.0, 2.0, 3.0)),
    );

    let composed = translation * rotation * scaling;
    let chained = Mat4::IDENTITY.translate(axis).rotate(angle, axis).scale(axis);
    assert_matches4(&chained, &to_na4(&composed));
}

#[test]
fn mat3_product_matches() {
    let a = Mat3::from(Mat4::IDENTITY.rotate(0.5, Vec3::X));
    let b = Mat3::from([[1.0, 2.0, 0.0], [0.0, 1.0, 3.0], [4.0, 0.0, 1.0]]);
    assert_matches3(&(a * b), &(to_na3(&a) * to_na3(&b)));
}
