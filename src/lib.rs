//! p3dc
//!
//! A small compiler for the p3di intermediate mesh format. The input is
//! a hand-authored JSON tree of sockets and meshes; the outputs are the
//! binary artifacts the engine consumes: a visual model (geometry and
//! materials), a rig (named attachment points and node transforms, no
//! geometry), and a UV-layout reference image for texture painting.
//!
//! High-level modules
//! - `data_structures`: the parsed model tree (sockets, meshes, faces)
//! - `convert`: authoring-space to engine-space transform conversion
//! - `snap`: UV quantization onto the texture pixel grid
//! - `emit`: binary serialization of models and rigs
//! - `rasterize`: UV footprint rasterization to an RGBA image
//! - `resources`: loading of p3di documents from external files
//! - `error`: the compile error type
//!

pub mod convert;
pub mod data_structures;
pub mod emit;
pub mod error;
pub mod rasterize;
pub mod resources;
pub mod snap;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use data_structures::model::{Face, Material, Mesh, Model, Socket, Vertex};
pub use emit::{Mode, emit};
pub use error::CompileError;
pub use rasterize::rasterize;
pub use snap::Snap;
