//! Mesh export for cutcube-rs.
//!
//! Meshes are written as Wavefront OBJ text: vertex records, deduplicated
//! normal records, then 1-based face records. The exporter works on any
//! [`Mesh`](cutcube_core::Mesh) and validates it before writing a single
//! byte.

#![allow(clippy::missing_errors_doc)]

pub mod filename;
pub mod obj;

pub use filename::{export_filename, export_filename_for, FILE_EXTENSION, FILE_PREFIX};
pub use obj::{
    export, export_string, export_with, save_obj, save_obj_with, ObjOptions,
    DEFAULT_OBJECT_NAME, HEADER,
};
