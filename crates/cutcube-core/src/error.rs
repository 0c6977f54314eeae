//! Error types for cutcube-rs.

use thiserror::Error;

/// The main error type for cutcube-rs operations.
///
/// Every variant is recoverable: callers are expected to report the message
/// and keep whatever state they had before the failing call.
#[derive(Error, Debug)]
pub enum CutCubeError {
    /// A build parameter is out of range or not finite.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The mesh could not be serialized.
    #[error("export failed: {0}")]
    ExportFailure(String),

    /// A triangle references a vertex that does not exist.
    #[error("triangle references vertex {index} but the mesh has {vertex_count} vertices")]
    InvalidMesh { index: u32, vertex_count: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for cutcube-rs operations.
pub type Result<T> = std::result::Result<T, CutCubeError>;
