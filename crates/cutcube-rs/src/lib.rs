//! cutcube-rs: build a cube with one beveled corner and export it as OBJ.
//!
//! The cube is centered at the origin. One corner is replaced by a cut
//! vertex placed at a normalized position inside the cube, and the three
//! faces around that corner are folded in to meet it. The result is a
//! closed 9-vertex, 12-triangle mesh with per-vertex normals.
//!
//! # Quick Start
//!
//! ```
//! use cutcube_rs::*;
//!
//! fn main() -> Result<()> {
//!     let mesh = build(1.0, Vec3::new(0.5, 0.5, 0.5))?;
//!     assert_eq!(mesh.vertices()[8], Vec3::ZERO);
//!
//!     let document = export(&mesh)?;
//!     let name = export_filename(1.0, 1.0 / 3.0);
//!     assert_eq!(name, "cut_cube_1.0_33%.obj");
//!     assert!(!document.is_empty());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`cutcube_core`] - [`Mesh`], [`CubeParameters`], and [`CutCubeError`]
//! - [`cutcube_geometry`] - the builder and the [`PreviewBox`]
//! - [`cutcube_export`] - the OBJ writer and file naming
//! - [`Session`] - keeps parameters and the last built mesh for a UI layer
//!
//! The cut proportion only sizes the preview box; it never changes the mesh.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod cli;
pub mod session;

// Re-export core types
pub use cutcube_core::{
    compute_vertex_normals,
    error::{CutCubeError, Result},
    CubeParameters, Mesh, RenderBuffers, Vec3, CUBE_SIZE_RANGE, CUT_POSITION_RANGE,
    CUT_PROPORTION_RANGE, DEFAULT_CUT_POSITION,
};

// Re-export the builder
pub use cutcube_geometry::{
    build, build_from_parameters, build_unchecked, cut_point, topology, PreviewBox,
};

// Re-export the exporter
pub use cutcube_export::{
    export, export_filename, export_filename_for, export_string, export_with, save_obj,
    save_obj_with, ObjOptions,
};

pub use session::{ExportArtifact, Session};

/// Initializes logging from `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::try_init();
}

/// Builds the mesh for `params` and exports it, returning the generated
/// file name together with the document.
pub fn build_and_export(params: &CubeParameters) -> Result<ExportArtifact> {
    Session::new(*params)?.export()
}
