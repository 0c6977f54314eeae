//! Fixed vertex ordering and triangle tables for the cut cube.
//!
//! Corner ordering: the bottom face (y = -h) walked around its edge starting
//! at (-,-,-), then the top face (y = +h) in the matching order, so corner
//! `i + 4` sits directly above corner `i`.
//!
//! ```text
//! index  x  y  z
//!   0    -  -  -
//!   1    +  -  -
//!   2    +  -  +
//!   3    -  -  +
//!   4    -  +  -
//!   5    +  +  -
//!   6    +  +  +
//!   7    -  +  +
//! ```
//!
//! Vertex 8 is the cut vertex. The triangle tables below index into this
//! ordering, so the two must change together.

use glam::Vec3;

/// Number of cube corners.
pub const CORNER_COUNT: usize = 8;

/// Number of vertices in a cut cube mesh (corners plus the cut vertex).
pub const VERTEX_COUNT: usize = CORNER_COUNT + 1;

/// Number of triangles in a cut cube mesh.
pub const TRIANGLE_COUNT: usize = 12;

/// Index of the cut vertex.
pub const CUT_VERTEX: u32 = 8;

/// Index of the corner replaced by the cut vertex.
///
/// The corner stays in the vertex buffer but no triangle references it.
pub const BEVELED_CORNER: u32 = 6;

/// Corner positions of a cube with half-size 1, in the documented order.
pub const CORNER_SIGNS: [Vec3; CORNER_COUNT] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

/// Triangles of the full cube, counter-clockwise seen from outside.
pub const CUBE_TRIANGLES: [[u32; 3]; TRIANGLE_COUNT] = [
    // Bottom (-y)
    [0, 1, 2],
    [0, 2, 3],
    // Back (-z)
    [0, 4, 5],
    [0, 5, 1],
    // Left (-x)
    [0, 3, 7],
    [0, 7, 4],
    // Right (+x)
    [1, 5, 6],
    [1, 6, 2],
    // Front (+z)
    [3, 2, 6],
    [3, 6, 7],
    // Top (+y)
    [4, 7, 6],
    [4, 6, 5],
];

/// Triangles of the cut cube, counter-clockwise seen from outside.
///
/// The first six are the faces that do not touch corner 6. The last six are
/// the right, front, and top faces with corner 6 swapped for the cut vertex,
/// each split along the diagonal through the cut vertex. Together they fan
/// from the cut vertex to the hexagon 1-5-4-7-3-2 around the removed corner.
pub const CUT_CUBE_TRIANGLES: [[u32; 3]; TRIANGLE_COUNT] = [
    // Bottom (-y)
    [0, 1, 2],
    [0, 2, 3],
    // Back (-z)
    [0, 4, 5],
    [0, 5, 1],
    // Left (-x)
    [0, 3, 7],
    [0, 7, 4],
    // Bevel, right side
    [1, 5, 8],
    [1, 8, 2],
    // Bevel, front side
    [3, 2, 8],
    [3, 8, 7],
    // Bevel, top side
    [4, 7, 8],
    [4, 8, 5],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_table_matches_cube_with_corner_swapped() {
        for (cut, full) in CUT_CUBE_TRIANGLES.iter().zip(CUBE_TRIANGLES.iter()) {
            let restored = cut.map(|i| if i == CUT_VERTEX { BEVELED_CORNER } else { i });
            assert_eq!(restored, *full);
        }
    }

    #[test]
    fn test_cut_table_never_references_beveled_corner() {
        assert!(CUT_CUBE_TRIANGLES
            .iter()
            .flatten()
            .all(|&i| i != BEVELED_CORNER && (i as usize) < VERTEX_COUNT));
    }

    #[test]
    fn test_cube_triangles_face_outward() {
        for tri in CUBE_TRIANGLES {
            let [a, b, c] = tri.map(|i| CORNER_SIGNS[i as usize]);
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(
                normal.dot(centroid) > 0.0,
                "triangle {tri:?} faces inward"
            );
        }
    }

    #[test]
    fn test_bottom_then_top_ordering() {
        for (i, corner) in CORNER_SIGNS.iter().enumerate() {
            let expected_y = if i < 4 { -1.0 } else { 1.0 };
            assert_eq!(corner.y, expected_y);
        }
        // Top corners sit directly above the matching bottom corners
        for i in 0..4 {
            assert_eq!(CORNER_SIGNS[i].x, CORNER_SIGNS[i + 4].x);
            assert_eq!(CORNER_SIGNS[i].z, CORNER_SIGNS[i + 4].z);
        }
    }
}
