//! Wavefront OBJ serialization.
//!
//! A document written here looks like:
//!
//! ```text
//! # cutcube-rs
//! o cut_cube
//! v -0.5 -0.5 -0.5
//! ...
//! vn -0.57735026 -0.57735026 -0.57735026
//! ...
//! f 1//1 2//2 3//3
//! ...
//! ```
//!
//! OBJ references are 1-based, so every internal index is shifted by one.
//! Normals are deduplicated; a face reference pairs each vertex with the
//! index of its normal in the deduplicated list.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;

use cutcube_core::{CutCubeError, Mesh, Result};
use glam::Vec3;

/// Header comment written at the top of every document.
pub const HEADER: &str = "# cutcube-rs";

/// Object name used when none is given.
pub const DEFAULT_OBJECT_NAME: &str = "cut_cube";

/// Options for OBJ export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjOptions {
    /// Name written on the `o` line. Whitespace is replaced by underscores.
    pub object_name: String,
    /// Whether to write `vn` records and `v//vn` face references.
    pub write_normals: bool,
}

impl Default for ObjOptions {
    fn default() -> Self {
        Self {
            object_name: DEFAULT_OBJECT_NAME.to_string(),
            write_normals: true,
        }
    }
}

/// Exports a mesh as an OBJ document with default options.
///
/// # Errors
/// Returns [`CutCubeError::ExportFailure`] if the mesh has no vertices or
/// triangles, references a missing vertex, or has a non-finite coordinate.
pub fn export(mesh: &Mesh) -> Result<Vec<u8>> {
    export_with(mesh, &ObjOptions::default())
}

/// Exports a mesh as OBJ bytes with the given options.
pub fn export_with(mesh: &Mesh, options: &ObjOptions) -> Result<Vec<u8>> {
    Ok(export_string(mesh, options)?.into_bytes())
}

/// Exports a mesh as an OBJ string with the given options.
///
/// Either the whole document is produced or an error is returned.
pub fn export_string(mesh: &Mesh, options: &ObjOptions) -> Result<String> {
    check_exportable(mesh)?;

    let mut out = String::new();
    write_document(&mut out, mesh, options)
        .map_err(|e| CutCubeError::ExportFailure(format!("formatting failed: {e}")))?;

    log::debug!(
        "exported {} vertices, {} triangles ({} bytes)",
        mesh.num_vertices(),
        mesh.num_triangles(),
        out.len()
    );
    Ok(out)
}

/// Exports a mesh and writes the document to `path`.
///
/// The document is fully built before the file is created, so a failed
/// export never leaves a partial file behind.
pub fn save_obj(path: impl AsRef<Path>, mesh: &Mesh) -> Result<()> {
    save_obj_with(path, mesh, &ObjOptions::default())
}

/// Like [`save_obj`], with explicit options.
pub fn save_obj_with(path: impl AsRef<Path>, mesh: &Mesh, options: &ObjOptions) -> Result<()> {
    let path = path.as_ref();
    let bytes = export_with(mesh, options)?;
    std::fs::write(path, bytes)?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn check_exportable(mesh: &Mesh) -> Result<()> {
    let vertex_count = mesh.num_vertices();
    if vertex_count == 0 {
        return Err(CutCubeError::ExportFailure("mesh has no vertices".into()));
    }
    if mesh.is_empty() {
        return Err(CutCubeError::ExportFailure("mesh has no triangles".into()));
    }
    for (t, tri) in mesh.indices().iter().enumerate() {
        if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(CutCubeError::ExportFailure(format!(
                "triangle {t} references vertex {index}, mesh has {vertex_count}"
            )));
        }
    }
    if let Some(i) = mesh.vertices().iter().position(|v| !v.is_finite()) {
        return Err(CutCubeError::ExportFailure(format!(
            "vertex {i} has a non-finite coordinate"
        )));
    }
    Ok(())
}

fn write_document(out: &mut String, mesh: &Mesh, options: &ObjOptions) -> std::fmt::Result {
    writeln!(out, "{HEADER}")?;
    writeln!(out, "o {}", object_name(&options.object_name))?;

    for v in mesh.vertices() {
        writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
    }

    if !options.write_normals {
        for [a, b, c] in mesh.indices() {
            writeln!(out, "f {} {} {}", a + 1, b + 1, c + 1)?;
        }
        return Ok(());
    }

    let (unique, normal_of_vertex) = dedup_normals(mesh.normals());
    for n in &unique {
        writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
    }

    for tri in mesh.indices() {
        let [a, b, c] = tri.map(|i| (i + 1, normal_of_vertex[i as usize] + 1));
        writeln!(
            out,
            "f {}//{} {}//{} {}//{}",
            a.0, a.1, b.0, b.1, c.0, c.1
        )?;
    }
    Ok(())
}

/// Returns the distinct normals in first-seen order and, for each vertex,
/// the index of its normal in that list.
fn dedup_normals(normals: &[Vec3]) -> (Vec<Vec3>, Vec<usize>) {
    let mut unique = Vec::new();
    let mut seen: HashMap<[u32; 3], usize> = HashMap::new();
    let mapping = normals
        .iter()
        .map(|n| {
            let key = n.to_array().map(f32::to_bits);
            *seen.entry(key).or_insert_with(|| {
                unique.push(*n);
                unique.len() - 1
            })
        })
        .collect();
    (unique, mapping)
}

fn object_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return DEFAULT_OBJECT_NAME.to_string();
    }
    trimmed
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}
