//! Preview box marking the cut region.

use cutcube_core::{CubeParameters, Mesh};
use glam::Vec3;

use crate::builder::cut_point;
use crate::topology::{CORNER_SIGNS, CUBE_TRIANGLES};

/// An axis-aligned box centered on the cut vertex.
///
/// Its edge length is `cube_size * cut_proportion`. The cut mesh itself does
/// not depend on the proportion, so the box is an indicator only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewBox {
    /// Center of the box in cube-local coordinates.
    pub center: Vec3,
    /// Edge length of the box.
    pub size: f32,
}

impl PreviewBox {
    /// Returns the preview box for the given parameters, or `None` when the
    /// preview is hidden.
    pub fn from_parameters(params: &CubeParameters) -> Option<Self> {
        params.show_preview.then(|| Self {
            center: cut_point(params.cube_size, params.cut_position),
            size: params.cube_size * params.cut_proportion,
        })
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Vec3 {
        self.center - Vec3::splat(self.size / 2.0)
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Vec3 {
        self.center + Vec3::splat(self.size / 2.0)
    }

    /// Returns true if `point` lies inside or on the box.
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min()).all() && point.cmple(self.max()).all()
    }

    /// Returns a closed box mesh for display.
    #[must_use]
    pub fn mesh(&self) -> Mesh {
        let half_size = self.size / 2.0;
        let vertices = CORNER_SIGNS
            .iter()
            .map(|&signs| self.center + signs * half_size)
            .collect();
        Mesh::from_raw(vertices, CUBE_TRIANGLES.to_vec())
    }
}
