//! Builds the cut cube mesh.
//!
//! The mesh always has [`VERTEX_COUNT`] vertices and [`TRIANGLE_COUNT`]
//! triangles: the eight cube corners in the order documented in
//! [`crate::topology`], followed by the cut vertex, connected by
//! [`CUT_CUBE_TRIANGLES`].

use cutcube_core::{
    validate_cube_size, validate_cut_position, CubeParameters, CutCubeError, Mesh, Result,
};
use glam::Vec3;

use crate::topology::{CORNER_SIGNS, CUT_CUBE_TRIANGLES, TRIANGLE_COUNT, VERTEX_COUNT};

/// Builds a cube of edge length `cube_size`, centered at the origin, with
/// corner 6 replaced by a vertex at the normalized `cut_position`.
///
/// # Errors
/// Returns [`CutCubeError::InvalidParameter`] if `cube_size` is not a
/// positive finite number, or if any component of `cut_position` lies
/// outside the open interval (0, 1). A cut vertex on or beyond the cube
/// surface would produce a self-intersecting or degenerate solid.
pub fn build(cube_size: f32, cut_position: Vec3) -> Result<Mesh> {
    validate_cube_size(cube_size)?;
    validate_cut_position(cut_position)?;
    Ok(assemble(cube_size, cut_position))
}

/// Builds the cut cube from a parameter set.
///
/// Only the cube size and cut position are used; the cut proportion affects
/// the preview box alone.
pub fn build_from_parameters(params: &CubeParameters) -> Result<Mesh> {
    build(params.cube_size, params.cut_position)
}

/// Builds the cut cube without range-checking the cut position.
///
/// This accepts cut positions on or outside the cube, such as
/// `(1.0, 1.0, 1.0)` which places the cut vertex on corner 6. The resulting
/// mesh can contain zero-area triangles or intersect itself; those triangles
/// contribute nothing to the vertex normals.
///
/// # Errors
/// Returns [`CutCubeError::InvalidParameter`] for a non-positive cube size
/// or a non-finite cut position.
pub fn build_unchecked(cube_size: f32, cut_position: Vec3) -> Result<Mesh> {
    validate_cube_size(cube_size)?;
    if !cut_position.is_finite() {
        return Err(CutCubeError::InvalidParameter(format!(
            "cut position must be finite, got {cut_position}"
        )));
    }
    if validate_cut_position(cut_position).is_err() {
        log::warn!("cut position {cut_position} is not inside the cube, mesh may self-intersect");
    }
    Ok(assemble(cube_size, cut_position))
}

/// Maps a normalized cut position into cube-local coordinates.
#[must_use]
pub fn cut_point(cube_size: f32, cut_position: Vec3) -> Vec3 {
    cut_position * cube_size - Vec3::splat(cube_size / 2.0)
}

fn assemble(cube_size: f32, cut_position: Vec3) -> Mesh {
    let half_size = cube_size / 2.0;

    let mut vertices = Vec::with_capacity(VERTEX_COUNT);
    vertices.extend(CORNER_SIGNS.iter().map(|&signs| signs * half_size));
    vertices.push(cut_point(cube_size, cut_position));

    let mesh = Mesh::from_raw(vertices, CUT_CUBE_TRIANGLES.to_vec());
    debug_assert_eq!(mesh.num_vertices(), VERTEX_COUNT);
    debug_assert_eq!(mesh.num_triangles(), TRIANGLE_COUNT);

    log::debug!(
        "built cut cube: size {cube_size}, cut vertex {}",
        mesh.vertices()[VERTEX_COUNT - 1]
    );
    mesh
}
