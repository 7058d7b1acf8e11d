//! Authoring-space to engine-space conversion.
//!
//! p3di documents are authored Z-up with +Y forward; the engine is Y-up
//! with +Z forward. Sockets encode pure orientation and are remapped
//! differently from mesh nodes, which carry render placement. The two
//! paths stay separate functions: their matrix compositions differ
//! structurally (only sockets take the extra rotation and handedness
//! flip), so do not try to merge them.

use std::f32::consts::FRAC_PI_2;

use cgmath::{Matrix, Matrix4, Quaternion, Rad, Rotation3, Vector3, Vector4};

/// Build a matrix from four authored rows (the p3di wire order).
///
/// The authored convention is row-major storage with the translation in
/// the fourth column; cgmath stores columns, hence the transpose.
pub fn matrix_from_rows(rows: [[f32; 4]; 4]) -> Matrix4<f32> {
    Matrix4::from_cols(
        rows[0].into(),
        rows[1].into(),
        rows[2].into(),
        rows[3].into(),
    )
    .transpose()
}

/// Flatten a matrix back into row-major order for emission.
pub fn matrix_to_rows(m: &Matrix4<f32>) -> [f32; 16] {
    let rows: [[f32; 4]; 4] = m.transpose().into();
    let mut out = [0.0f32; 16];
    for (i, row) in rows.iter().enumerate() {
        out[i * 4..i * 4 + 4].copy_from_slice(row);
    }
    out
}

/// Convert a socket orientation into the engine's attachment axes.
///
/// Socket gizmos are authored as arrows along the source axes; the
/// engine reads them as local bone axes. That takes a basis reindex, an
/// extra -90 degree spin about X and a handedness flip, composed as
/// `axis_fix(M) * Rx(-90) * Sz(-1)`.
pub fn socket_transform(m: Matrix4<f32>) -> Matrix4<f32> {
    let spin = Matrix4::from(Quaternion::from_angle_x(Rad(-FRAC_PI_2)));
    let mirror = Matrix4::from_nonuniform_scale(1.0, 1.0, -1.0);
    axis_fix(m) * spin * mirror
}

/// Convert a mesh placement into the engine frame.
///
/// The rotation/scale block is kept axis-for-axis; only the translation
/// column swaps into the Y-up frame, `(tx, ty, tz) -> (tx, tz, -ty)`.
/// No rotation or flip is applied here, unlike sockets.
pub fn mesh_transform(m: Matrix4<f32>) -> Matrix4<f32> {
    let mut out = m;
    out.w = Vector4::new(m.w.x, m.w.z, -m.w.y, m.w.w);
    out
}

/// Convert a bare position or direction, `(x, y, z) -> (x, z, -y)`.
///
/// Applied to every vertex position and face normal, independent of the
/// matrix conversions above.
pub fn position(v: Vector3<f32>) -> Vector3<f32> {
    Vector3::new(v.x, v.z, -v.y)
}

// Reindex the authored basis: row 2 becomes the negated row 3, row 3
// becomes row 2. Rows 1 and 4 are untouched.
fn axis_fix(m: Matrix4<f32>) -> Matrix4<f32> {
    let t = m.transpose();
    Matrix4::from_cols(t.x, -t.z, t.y, t.w).transpose()
}
