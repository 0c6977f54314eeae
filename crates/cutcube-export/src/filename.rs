//! File names offered for exported documents.

use cutcube_core::CubeParameters;

/// Prefix shared by every exported file name.
pub const FILE_PREFIX: &str = "cut_cube";

/// Extension of exported documents.
pub const FILE_EXTENSION: &str = "obj";

/// Returns a file name encoding the cube size and cut proportion, e.g.
/// `cut_cube_1.0_33%.obj`.
///
/// The size is written with one decimal and the proportion as a whole
/// percentage.
#[must_use]
pub fn export_filename(cube_size: f32, cut_proportion: f32) -> String {
    format!(
        "{FILE_PREFIX}_{cube_size:.1}_{:.0}%.{FILE_EXTENSION}",
        cut_proportion * 100.0
    )
}

/// Returns the export file name for a parameter set.
#[must_use]
pub fn export_filename_for(params: &CubeParameters) -> String {
    export_filename(params.cube_size, params.cut_proportion)
}
