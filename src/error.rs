//! The compile error type.
//!
//! Only fatal conditions surface here. Recoverable ones never become
//! values of this enum: an unknown material name degrades to the opaque
//! default with a warning, and a degenerate face is skipped by the
//! rasterizer.

use thiserror::Error;

/// Fatal failure modes of a compile run.
#[derive(Debug, Error)]
pub enum CompileError {
    /// Reading the input or writing an output failed.
    #[error("could not access {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The input was not valid JSON or did not match the p3di shape.
    #[error("malformed intermediate model")]
    Parse(#[from] serde_json::Error),

    /// A socket or mesh name cannot be written as a NUL-terminated
    /// single-byte string.
    #[error("{kind} name {name:?} must be non-empty ASCII with no embedded NUL")]
    InvalidName { kind: &'static str, name: String },

    /// A face had a vertex count the binary format cannot express.
    #[error("mesh {mesh:?} has a face with {count} vertices, expected 3 or 4")]
    UnsupportedPolygon { mesh: String, count: usize },

    /// Encoding the UV map image failed.
    #[error("could not encode {path}")]
    Png {
        path: String,
        #[source]
        source: image::ImageError,
    },
}
