//! Loading of intermediate models from external files.
//!
//! This module contains all logic for getting a p3di document from disk
//! into the in-memory model tree. Parsing is strict about structure
//! (wrong shapes are fatal) but lenient about vocabulary: unknown
//! material names degrade with a warning inside the tree types.

use std::fs;
use std::path::Path;

use log::debug;

use crate::data_structures::model::{Mesh, Model};
use crate::error::CompileError;

/// Read and parse a p3di document from disk.
pub fn load_model(path: &Path) -> Result<Model, CompileError> {
    let text = fs::read_to_string(path).map_err(|source| CompileError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_model(&text)
}

/// Parse a p3di document from JSON text.
///
/// Socket and mesh names are validated here, before any output exists:
/// they land in the binary as NUL-terminated single-byte strings, so
/// they must be non-empty ASCII without embedded NULs. The emitter
/// itself writes names as-is and trusts trees built in code.
pub fn parse_model(text: &str) -> Result<Model, CompileError> {
    let model: Model = serde_json::from_str(text)?;
    for socket in &model.sockets {
        check_name("socket", &socket.name)?;
    }
    for mesh in &model.meshes {
        check_mesh_names(mesh)?;
    }
    debug!(
        "parsed model v{}: {} sockets, {} root meshes",
        model.version,
        model.sockets.len(),
        model.meshes.len()
    );
    Ok(model)
}

fn check_mesh_names(mesh: &Mesh) -> Result<(), CompileError> {
    check_name("mesh", &mesh.name)?;
    for child in &mesh.children {
        check_mesh_names(child)?;
    }
    Ok(())
}

fn check_name(kind: &'static str, name: &str) -> Result<(), CompileError> {
    if name.is_empty() || !name.is_ascii() || name.contains('\0') {
        return Err(CompileError::InvalidName {
            kind,
            name: name.to_string(),
        });
    }
    Ok(())
}
