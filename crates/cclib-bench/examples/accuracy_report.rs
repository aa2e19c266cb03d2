//! Speed and accuracy of the fast math functions against std, followed by a
//! side-by-side of the camera matrices against nalgebra.

use cclib_bench::{measure, measure_binary, sample_values, BenchConfig};
use cclib_math::{fast, vec3, vec4, Mat4, Vec3};
use nalgebra::{Matrix4, Point3, Vector3, Vector4};

fn main() {
    let config = BenchConfig::default();
    let values = sample_values(&config);
    println!(
        "=== cclib accuracy report ({} samples in [{}, {}), seed {}) ===\n",
        config.samples, config.range.start, config.range.end, config.seed
    );

    let reports = [
        measure_binary("atan2(y, x)", &values, fast::atan2, f32::atan2),
        measure("rcp(x)", &values, fast::rcp, |x| 1.0 / x),
        measure("rsqrt(x)", &values, fast::rsqrt, |x| 1.0 / x.sqrt()),
        measure("sin(x)", &values, fast::sin, f32::sin),
        measure("cos(x)", &values, fast::cos, f32::cos),
    ];
    for report in &reports {
        println!("{report}");
    }

    let eye = vec3(2.0, 5.0, 10.0);
    let view = Mat4::look_at(eye, Vec3::ZERO, Vec3::Y);
    let proj = Mat4::perspective(1.05, 1.33, 0.1, 1000.0);

    let na_view = Matrix4::look_at_rh(
        &Point3::new(eye.x, eye.y, eye.z),
        &Point3::origin(),
        &Vector3::y(),
    );
    let na_proj = Matrix4::new_perspective(1.33, 1.05, 0.1, 1000.0);

    print_side_by_side("View", &na_view, &view);
    print_side_by_side("Projection", &na_proj, &proj);
    print_side_by_side("mat4 * mat4", &(na_proj * na_view), &(proj * view));
    print_side_by_side("inverse(mat4)", &na_view.try_inverse().unwrap_or_else(Matrix4::zeros), &view.inverse());

    let pos = proj * view * vec4(3.0, 2.0, 1.0, 1.0);
    let na_pos = na_proj * na_view * Vector4::new(3.0, 2.0, 1.0, 1.0);
    println!("mat4 * vec4: nalgebra / cclib");
    println!("  {}  {}\n", format_row(na_pos.as_slice()), format_row(&pos.to_array()));
}

fn print_side_by_side(label: &str, reference: &Matrix4<f32>, ours: &Mat4) {
    println!("{label}: nalgebra / cclib");
    for r in 0..4 {
        let theirs: Vec<f32> = (0..4).map(|c| reference[(r, c)]).collect();
        let mine = ours.row(r).to_array();
        println!("  {}  {}", format_row(&theirs), format_row(&mine));
    }
    println!();
}

fn format_row(row: &[f32]) -> String {
    let cells: Vec<String> = row.iter().map(|v| format!("{v:+07.2}")).collect();
    format!("[{}]", cells.join(" "))
}
