//! Shared builders and byte helpers for the p3dc integration tests.

#![allow(dead_code)]

use p3dc::{Face, Material, Matrix4, Mesh, Model, Socket, SquareMatrix, Vertex};

/// Root model with the given meshes; version 1, no sockets.
pub fn model_with(meshes: Vec<Mesh>) -> Model {
    Model {
        version: 1,
        sockets: Vec::new(),
        meshes,
    }
}

/// Mesh with identity transform and the default opaque material.
pub fn mesh(name: &str, faces: Vec<Face>) -> Mesh {
    Mesh {
        name: name.to_string(),
        transform: Matrix4::identity(),
        material: Material::DiffuseOpaque,
        faces,
        children: Vec::new(),
    }
}

/// Socket with identity transform.
pub fn socket(name: &str, parent: Option<&str>) -> Socket {
    Socket {
        name: name.to_string(),
        parent: parent.map(str::to_string),
        transform: Matrix4::identity(),
    }
}

pub fn face(normal: [f32; 3], vertices: Vec<Vertex>) -> Face {
    Face {
        normal: normal.into(),
        vertices,
    }
}

pub fn vertex(position: [f32; 3], texture: [f32; 2]) -> Vertex {
    Vertex {
        position: position.into(),
        texture: texture.into(),
    }
}

/// Quad covering the whole UV square, facing +Z.
pub fn full_square_quad() -> Face {
    face(
        [0.0, 0.0, 1.0],
        vec![
            vertex([0.0, 0.0, 0.0], [0.0, 0.0]),
            vertex([1.0, 0.0, 0.0], [1.0, 0.0]),
            vertex([1.0, 1.0, 0.0], [1.0, 1.0]),
            vertex([0.0, 1.0, 0.0], [0.0, 1.0]),
        ],
    )
}

pub fn read_i32(bytes: &[u8], at: usize) -> i32 {
    i32::from_le_bytes(bytes[at..at + 4].try_into().unwrap())
}

pub fn read_f32(bytes: &[u8], at: usize) -> f32 {
    f32::from_le_bytes(bytes[at..at + 4].try_into().unwrap())
}

/// Compare a matrix against expected row-major values within 1e-6.
pub fn assert_matrix_close(actual: &Matrix4<f32>, expected: &[f32; 16]) {
    let rows = p3dc::convert::matrix_to_rows(actual);
    for (i, (a, e)) in rows.iter().zip(expected).enumerate() {
        assert!((a - e).abs() < 1e-6, "component {i}: {a} != {e}");
    }
}
