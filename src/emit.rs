//! Binary emission of compiled models and rigs.
//!
//! All multi-byte values are little-endian: counts are `i32`, scalars
//! `f32`, names NUL-terminated ASCII. The layout is
//!
//! ```text
//! magic            "P3D" (model) or "P3DR" (rig), no terminator
//! version          i32
//! socket_count     i32
//! sockets[]        name, has_parent byte, [parent name], 16 x f32
//! mesh_count       i32
//! meshes[]         recursive mesh records, pre-order
//! ```
//!
//! A model-mode mesh record carries a material code byte, a face count
//! and the face data; a rig record is the same node skeleton with no
//! visual payload at all. Every face is written as exactly four vertex
//! records: the consumer's renderer only accepts quads, so a triangle
//! repeats its last corner once.

use log::debug;

use crate::convert;
use crate::data_structures::model::{Face, Mesh, Model, Socket, Vertex};
use crate::error::CompileError;
use crate::snap::Snap;

/// Output flavor of a single emission pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Full visual model: geometry and materials ("P3D").
    Model,
    /// Skeleton overlay: node names and transforms only ("P3DR").
    Rig,
}

impl Mode {
    fn magic(self) -> &'static [u8] {
        match self {
            Mode::Model => b"P3D",
            Mode::Rig => b"P3DR",
        }
    }
}

/// Serialize a parsed model into the engine's binary layout.
///
/// A pure function of the tree and mode; the input is never mutated and
/// the caller owns writing the returned buffer to disk, so a failed
/// emission never leaves a partial file behind. Names are written
/// as-is: trees that did not come through [`crate::resources`] are
/// assumed to carry well-formed names already.
pub fn emit(model: &Model, mode: Mode, snap: &Snap) -> Result<Vec<u8>, CompileError> {
    let mut out = Vec::new();
    out.extend_from_slice(mode.magic());
    put_i32(&mut out, model.version);
    put_i32(&mut out, model.sockets.len() as i32);
    for socket in &model.sockets {
        put_socket(&mut out, socket);
    }
    put_i32(&mut out, model.meshes.len() as i32);
    for mesh in &model.meshes {
        put_mesh(&mut out, mesh, mode, snap)?;
    }
    debug!("emitted {:?} artifact, {} bytes", mode, out.len());
    Ok(out)
}

fn put_socket(out: &mut Vec<u8>, socket: &Socket) {
    put_name(out, &socket.name);
    match &socket.parent {
        Some(parent) => {
            out.push(0x01);
            put_name(out, parent);
        }
        None => out.push(0x00),
    }
    put_matrix(out, convert::socket_transform(socket.transform));
}

fn put_mesh(out: &mut Vec<u8>, mesh: &Mesh, mode: Mode, snap: &Snap) -> Result<(), CompileError> {
    put_name(out, &mesh.name);
    put_matrix(out, convert::mesh_transform(mesh.transform));
    match mode {
        Mode::Model => {
            out.push(mesh.material.code());
            put_i32(out, mesh.faces.len() as i32);
            for face in &mesh.faces {
                put_face(out, face, &mesh.name, snap)?;
            }
        }
        Mode::Rig => {
            // No geometry in the rig, but a malformed face still
            // aborts the compile.
            for face in &mesh.faces {
                check_face(face, &mesh.name)?;
            }
        }
    }
    put_i32(out, mesh.children.len() as i32);
    for child in &mesh.children {
        put_mesh(out, child, mode, snap)?;
    }
    Ok(())
}

fn put_face(
    out: &mut Vec<u8>,
    face: &Face,
    mesh_name: &str,
    snap: &Snap,
) -> Result<(), CompileError> {
    check_face(face, mesh_name)?;
    let normal = convert::position(face.normal);
    put_f32(out, normal.x);
    put_f32(out, normal.y);
    put_f32(out, normal.z);
    for vertex in &face.vertices {
        put_vertex(out, vertex, snap);
    }
    if face.vertices.len() == 3 {
        // Degenerate quad: repeat the last corner of a triangle.
        put_vertex(out, &face.vertices[2], snap);
    }
    Ok(())
}

fn check_face(face: &Face, mesh_name: &str) -> Result<(), CompileError> {
    match face.vertices.len() {
        3 | 4 => Ok(()),
        count => Err(CompileError::UnsupportedPolygon {
            mesh: mesh_name.to_string(),
            count,
        }),
    }
}

fn put_vertex(out: &mut Vec<u8>, vertex: &Vertex, snap: &Snap) {
    let position = convert::position(vertex.position);
    put_f32(out, position.x);
    put_f32(out, position.y);
    put_f32(out, position.z);
    put_f32(out, snap.apply(vertex.texture.x));
    put_f32(out, snap.apply(vertex.texture.y));
}

fn put_name(out: &mut Vec<u8>, name: &str) {
    out.extend_from_slice(name.as_bytes());
    out.push(0x00);
}

fn put_matrix(out: &mut Vec<u8>, m: cgmath::Matrix4<f32>) {
    for value in convert::matrix_to_rows(&m) {
        put_f32(out, value);
    }
}

fn put_i32(out: &mut Vec<u8>, value: i32) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn put_f32(out: &mut Vec<u8>, value: f32) {
    out.extend_from_slice(&value.to_le_bytes());
}
