//! Indexed triangle mesh with derived per-vertex normals.
//!
//! A [`Mesh`] is an immutable snapshot: positions and triangles are fixed at
//! construction and the normals are computed from them right away, so they
//! can never go stale. Changing the geometry means building a new mesh.

use std::collections::HashSet;

use glam::Vec3;

use crate::error::{CutCubeError, Result};

/// An indexed triangle mesh.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    indices: Vec<[u32; 3]>,
    normals: Vec<Vec3>,
}

impl Mesh {
    /// Creates a mesh after checking that every triangle references an
    /// existing vertex.
    pub fn new(vertices: Vec<Vec3>, indices: Vec<[u32; 3]>) -> Result<Self> {
        let vertex_count = vertices.len();
        if let Some(&index) = indices
            .iter()
            .flatten()
            .find(|&&i| i as usize >= vertex_count)
        {
            return Err(CutCubeError::InvalidMesh {
                index,
                vertex_count,
            });
        }
        Ok(Self::from_raw(vertices, indices))
    }

    /// Creates a mesh without validating the triangle indices.
    ///
    /// Triangles with out-of-range references are ignored when computing
    /// normals. Consumers such as the exporter still reject them.
    pub fn from_raw(vertices: Vec<Vec3>, indices: Vec<[u32; 3]>) -> Self {
        let normals = compute_vertex_normals(&vertices, &indices);
        Self {
            vertices,
            indices,
            normals,
        }
    }

    /// Returns the vertex positions.
    #[must_use]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Returns the triangles as 0-based vertex index triples.
    #[must_use]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// Returns the per-vertex normals.
    #[must_use]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[must_use]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the unit normal of a triangle, or zero for a degenerate one.
    ///
    /// Returns `None` if the triangle does not exist or references a missing
    /// vertex.
    #[must_use]
    pub fn face_normal(&self, triangle: usize) -> Option<Vec3> {
        let [a, b, c] = self.triangle_positions(triangle)?;
        Some((b - a).cross(c - a).normalize_or_zero())
    }

    /// Returns the axis-aligned bounding box as `(min, max)`.
    #[must_use]
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(min, max), &v| (min.min(v), max.max(v))),
        )
    }

    /// Returns true if every edge is shared by exactly two triangles that
    /// traverse it in opposite directions. A triangle that repeats a vertex
    /// makes the mesh open.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        let mut directed: HashSet<(u32, u32)> = HashSet::new();
        for &[a, b, c] in &self.indices {
            if a == b || b == c || c == a {
                return false;
            }
            for edge in [(a, b), (b, c), (c, a)] {
                if !directed.insert(edge) {
                    return false;
                }
            }
        }
        directed.iter().all(|&(a, b)| directed.contains(&(b, a)))
    }

    /// Returns flat buffers ready for upload to a triangle renderer.
    #[must_use]
    pub fn render_buffers(&self) -> RenderBuffers {
        RenderBuffers {
            positions: self.vertices.iter().map(|v| v.to_array()).collect(),
            normals: self.normals.iter().map(|n| n.to_array()).collect(),
            indices: self.indices.iter().flatten().copied().collect(),
        }
    }

    fn triangle_positions(&self, triangle: usize) -> Option<[Vec3; 3]> {
        let [a, b, c] = *self.indices.get(triangle)?;
        Some([
            *self.vertices.get(a as usize)?,
            *self.vertices.get(b as usize)?,
            *self.vertices.get(c as usize)?,
        ])
    }
}

/// Vertex, normal, and index buffers in the layout GPU APIs expect.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderBuffers {
    /// One `[x, y, z]` position per vertex.
    pub positions: Vec<[f32; 3]>,
    /// One `[x, y, z]` normal per vertex.
    pub normals: Vec<[f32; 3]>,
    /// Three indices per triangle.
    pub indices: Vec<u32>,
}

impl RenderBuffers {
    /// Returns the position buffer as raw bytes.
    #[must_use]
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Returns the normal buffer as raw bytes.
    #[must_use]
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Returns the index buffer as raw bytes.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Computes per-vertex normals from triangle connectivity.
///
/// Each triangle contributes its unnormalized cross product (so larger faces
/// weigh more) to its three vertices; the sums are then normalized. Vertices
/// that touch no triangle, or only degenerate ones, get the zero vector.
/// Triangles referencing missing vertices are skipped.
#[must_use]
pub fn compute_vertex_normals(vertices: &[Vec3], indices: &[[u32; 3]]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; vertices.len()];

    for tri in indices {
        let [a, b, c] = tri.map(|i| i as usize);
        let (Some(&va), Some(&vb), Some(&vc)) = (vertices.get(a), vertices.get(b), vertices.get(c))
        else {
            continue;
        };

        let face_normal = (vb - va).cross(vc - va);
        normals[a] += face_normal;
        normals[b] += face_normal;
        normals[c] += face_normal;
    }

    for normal in &mut normals {
        *normal = normal.normalize_or_zero();
    }
    normals
}
