//! Build parameters for the cut cube.
//!
//! [`CubeParameters`] is the value a UI layer owns and hands to the builder on
//! every change. It never holds geometry; meshes are rebuilt from it.

use std::ops::RangeInclusive;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{CutCubeError, Result};

/// Range offered by the cube size slider.
pub const CUBE_SIZE_RANGE: RangeInclusive<f32> = 0.5..=2.0;

/// Range offered by the cut proportion slider.
pub const CUT_PROPORTION_RANGE: RangeInclusive<f32> = 0.1..=0.5;

/// Per-axis range offered by the cut position sliders.
pub const CUT_POSITION_RANGE: RangeInclusive<f32> = 0.0..=1.0;

/// Cut position used on startup and by [`CubeParameters::reset_cut`].
pub const DEFAULT_CUT_POSITION: Vec3 = Vec3::splat(0.5);

/// Parameters describing a cube with one beveled corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeParameters {
    /// Edge length of the cube.
    pub cube_size: f32,

    /// Size of the preview box relative to the cube.
    ///
    /// Only the preview box uses this value; the mesh topology and the cut
    /// vertex do not depend on it.
    pub cut_proportion: f32,

    /// Normalized location of the cut vertex, each component in (0, 1).
    pub cut_position: Vec3,

    /// Whether a preview box should be shown around the cut vertex.
    pub show_preview: bool,
}

impl Default for CubeParameters {
    fn default() -> Self {
        Self {
            cube_size: 1.0,
            cut_proportion: 1.0 / 3.0,
            cut_position: DEFAULT_CUT_POSITION,
            show_preview: true,
        }
    }
}

impl CubeParameters {
    /// Creates parameters with the given size and cut position and default
    /// preview settings.
    pub fn new(cube_size: f32, cut_position: Vec3) -> Self {
        Self {
            cube_size,
            cut_position,
            ..Self::default()
        }
    }

    /// Sets the cut proportion.
    #[must_use]
    pub fn with_cut_proportion(mut self, cut_proportion: f32) -> Self {
        self.cut_proportion = cut_proportion;
        self
    }

    /// Sets whether the preview box is shown.
    #[must_use]
    pub fn with_show_preview(mut self, show_preview: bool) -> Self {
        self.show_preview = show_preview;
        self
    }

    /// Moves the cut vertex back to the center of the cube.
    pub fn reset_cut(&mut self) {
        self.cut_position = DEFAULT_CUT_POSITION;
    }

    /// Returns a copy with every value clamped into its slider range.
    ///
    /// Note that the cut position range is closed, so a clamped value can
    /// still sit on the cube boundary and fail [`Self::validate`].
    #[must_use]
    pub fn clamped(&self) -> Self {
        let clamp = |v: f32, range: &RangeInclusive<f32>| v.clamp(*range.start(), *range.end());
        Self {
            cube_size: clamp(self.cube_size, &CUBE_SIZE_RANGE),
            cut_proportion: clamp(self.cut_proportion, &CUT_PROPORTION_RANGE),
            cut_position: Vec3::new(
                clamp(self.cut_position.x, &CUT_POSITION_RANGE),
                clamp(self.cut_position.y, &CUT_POSITION_RANGE),
                clamp(self.cut_position.z, &CUT_POSITION_RANGE),
            ),
            show_preview: self.show_preview,
        }
    }

    /// Checks that these parameters describe a buildable cube.
    pub fn validate(&self) -> Result<()> {
        validate_cube_size(self.cube_size)?;
        validate_cut_position(self.cut_position)?;
        if !self.cut_proportion.is_finite() || self.cut_proportion <= 0.0 {
            return Err(CutCubeError::InvalidParameter(format!(
                "cut proportion must be positive, got {}",
                self.cut_proportion
            )));
        }
        Ok(())
    }

    /// Parses parameters from a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the parameters as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads parameters from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let params = Self::from_json_str(&text)?;
        log::debug!("loaded parameters from {}", path.display());
        Ok(params)
    }
}

/// Checks that a cube size is finite and strictly positive.
pub fn validate_cube_size(cube_size: f32) -> Result<()> {
    if !cube_size.is_finite() || cube_size <= 0.0 {
        return Err(CutCubeError::InvalidParameter(format!(
            "cube size must be positive, got {cube_size}"
        )));
    }
    Ok(())
}

/// Checks that every cut position component lies in the open interval (0, 1).
pub fn validate_cut_position(cut_position: Vec3) -> Result<()> {
    for (axis, value) in ["x", "y", "z"].into_iter().zip(cut_position.to_array()) {
        if !value.is_finite() || value <= 0.0 || value >= 1.0 {
            return Err(CutCubeError::InvalidParameter(format!(
                "cut position {axis} must lie strictly between 0 and 1, got {value}"
            )));
        }
    }
    Ok(())
}
