//! The intermediate model tree: the parsed form of a p3di document.
//!
//! Every node owns its children outright, so the tree needs no
//! back-references or cycle handling; a socket's `parent` is a label
//! the engine resolves, never a structural edge. Nothing here is
//! mutated after parse. The emitter and the rasterizer both walk the
//! same tree through shared references.

use cgmath::{Matrix4, Vector2, Vector3};
use log::warn;
use serde::{Deserialize, Deserializer};

use crate::convert;

/// Root of a parsed intermediate model.
#[derive(Clone, Debug, Deserialize)]
pub struct Model {
    /// Schema version, copied verbatim into the binary header.
    pub version: i32,
    #[serde(default)]
    pub sockets: Vec<Socket>,
    #[serde(default)]
    pub meshes: Vec<Mesh>,
}

/// A named attachment point carrying only an orientation transform.
#[derive(Clone, Debug, Deserialize)]
pub struct Socket {
    pub name: String,
    /// Name of the parent socket, if any. Producing a valid attachment
    /// hierarchy is the author's responsibility; the compiler does not
    /// resolve or cycle-check it.
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(deserialize_with = "matrix_rows")]
    pub transform: Matrix4<f32>,
}

/// A sub-model node; may be a pure grouping node with no faces.
#[derive(Clone, Debug, Deserialize)]
pub struct Mesh {
    pub name: String,
    /// Authoring-space transform, relative to the parent mesh.
    #[serde(deserialize_with = "matrix_rows")]
    pub transform: Matrix4<f32>,
    #[serde(deserialize_with = "material_name")]
    pub material: Material,
    #[serde(default)]
    pub faces: Vec<Face>,
    #[serde(default)]
    pub children: Vec<Mesh>,
}

/// One polygon: a triangle or a quad.
#[derive(Clone, Debug, Deserialize)]
pub struct Face {
    /// Authoring-space normal, taken as-is and never re-normalized.
    #[serde(deserialize_with = "vector3")]
    pub normal: Vector3<f32>,
    pub vertices: Vec<Vertex>,
}

/// One face corner: a position and an unnormalized UV coordinate.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Vertex {
    #[serde(rename = "v", deserialize_with = "vector3")]
    pub position: Vector3<f32>,
    #[serde(rename = "t", deserialize_with = "vector2")]
    pub texture: Vector2<f32>,
}

/// The closed set of surface materials the engine understands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Material {
    #[default]
    DiffuseOpaque,
    DiffuseCutout,
    DiffuseTranslucent,
    Emissive,
}

impl Material {
    /// Map an authored material name onto the closed set.
    ///
    /// A typo in a material name must not abort an otherwise-valid
    /// compile: unknown names fall back to the opaque default with a
    /// warning.
    pub fn from_name(name: &str) -> Self {
        match name {
            "MAT_DIFFUSE_OPAQUE" => Material::DiffuseOpaque,
            "MAT_DIFFUSE_CUTOUT" => Material::DiffuseCutout,
            "MAT_DIFFUSE_TRANSLUCENT" => Material::DiffuseTranslucent,
            "MAT_EMISSIVE" => Material::Emissive,
            other => {
                warn!("unknown material {other:?}, substituting MAT_DIFFUSE_OPAQUE");
                Material::DiffuseOpaque
            }
        }
    }

    /// Single-byte material code used by the binary model format.
    pub fn code(self) -> u8 {
        match self {
            Material::DiffuseOpaque => 0,
            Material::DiffuseCutout => 1,
            Material::DiffuseTranslucent => 2,
            Material::Emissive => 3,
        }
    }
}

fn material_name<'de, D>(de: D) -> Result<Material, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(de)?;
    Ok(Material::from_name(&name))
}

fn matrix_rows<'de, D>(de: D) -> Result<Matrix4<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows = <[[f32; 4]; 4]>::deserialize(de)?;
    Ok(convert::matrix_from_rows(rows))
}

fn vector3<'de, D>(de: D) -> Result<Vector3<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = <[f32; 3]>::deserialize(de)?;
    Ok(v.into())
}

fn vector2<'de, D>(de: D) -> Result<Vector2<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = <[f32; 2]>::deserialize(de)?;
    Ok(v.into())
}
