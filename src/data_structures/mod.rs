//! Compiler data structures.
//!
//! - `model` contains the parsed intermediate model tree: sockets,
//!   meshes, faces, vertices and the closed material set

pub mod model;
