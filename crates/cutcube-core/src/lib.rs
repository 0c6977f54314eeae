//! Core types for cutcube-rs.
//!
//! This crate provides the data shared by the builder and the exporter:
//! - [`Mesh`], an immutable indexed triangle mesh with derived vertex normals
//! - [`CubeParameters`], the value a UI layer edits and passes to the builder
//! - [`CutCubeError`], the error taxonomy for every fallible operation

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod mesh;
pub mod parameters;

pub use error::{CutCubeError, Result};
pub use mesh::{compute_vertex_normals, Mesh, RenderBuffers};
pub use parameters::{
    validate_cube_size, validate_cut_position, CubeParameters, CUBE_SIZE_RANGE,
    CUT_POSITION_RANGE, CUT_PROPORTION_RANGE, DEFAULT_CUT_POSITION,
};

// Re-export glam types for convenience
pub use glam::Vec3;
