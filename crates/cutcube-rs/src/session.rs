//! Parameter-to-file pipeline for interactive front ends.
//!
//! A [`Session`] keeps the current [`CubeParameters`] together with the mesh
//! last built from them. Every change rebuilds the mesh from scratch, and a
//! rejected change leaves both untouched. Exports read the retained mesh.

use std::path::{Path, PathBuf};

use cutcube_core::{CubeParameters, Mesh, Result};
use cutcube_export::{export_filename_for, export_with, ObjOptions};
use cutcube_geometry::{build_from_parameters, PreviewBox};
use glam::Vec3;

/// An exported document and the file name it should be offered under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Generated file name, e.g. `cut_cube_1.0_33%.obj`.
    pub filename: String,
    /// UTF-8 OBJ text.
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Writes the document into `dir` under its generated name and returns
    /// the full path.
    pub fn save_in(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(&self.filename);
        self.save_as(&path)?;
        Ok(path)
    }

    /// Writes the document to an explicit path.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, &self.bytes)?;
        log::info!("wrote {} ({} bytes)", path.display(), self.bytes.len());
        Ok(())
    }
}

/// Current parameters and the mesh built from them.
#[derive(Debug, Clone)]
pub struct Session {
    params: CubeParameters,
    mesh: Mesh,
}

impl Session {
    /// Creates a session, building the mesh right away.
    pub fn new(params: CubeParameters) -> Result<Self> {
        params.validate()?;
        let mesh = build_from_parameters(&params)?;
        Ok(Self { params, mesh })
    }

    /// Returns the current parameters.
    pub fn parameters(&self) -> &CubeParameters {
        &self.params
    }

    /// Returns the mesh built from the current parameters.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Returns the preview box, if the preview is shown.
    pub fn preview(&self) -> Option<PreviewBox> {
        PreviewBox::from_parameters(&self.params)
    }

    /// Replaces the parameters and rebuilds the mesh.
    ///
    /// On error the previous parameters and mesh are kept.
    pub fn set_parameters(&mut self, params: CubeParameters) -> Result<()> {
        params.validate()?;
        let mesh = build_from_parameters(&params)?;
        self.params = params;
        self.mesh = mesh;
        Ok(())
    }

    /// Changes the cube size.
    pub fn set_cube_size(&mut self, cube_size: f32) -> Result<()> {
        self.set_parameters(CubeParameters {
            cube_size,
            ..self.params
        })
    }

    /// Changes the cut proportion. The mesh is unaffected.
    pub fn set_cut_proportion(&mut self, cut_proportion: f32) -> Result<()> {
        self.set_parameters(self.params.with_cut_proportion(cut_proportion))
    }

    /// Changes the normalized cut position.
    pub fn set_cut_position(&mut self, cut_position: Vec3) -> Result<()> {
        self.set_parameters(CubeParameters {
            cut_position,
            ..self.params
        })
    }

    /// Shows or hides the preview box.
    pub fn set_show_preview(&mut self, show_preview: bool) {
        self.params.show_preview = show_preview;
    }

    /// Moves the cut vertex back to the cube center.
    pub fn reset_cut(&mut self) -> Result<()> {
        let mut params = self.params;
        params.reset_cut();
        self.set_parameters(params)
    }

    /// Exports the retained mesh with default options.
    pub fn export(&self) -> Result<ExportArtifact> {
        self.export_with(&ObjOptions::default())
    }

    /// Exports the retained mesh with the given options.
    pub fn export_with(&self, options: &ObjOptions) -> Result<ExportArtifact> {
        let bytes = export_with(&self.mesh, options)?;
        Ok(ExportArtifact {
            filename: export_filename_for(&self.params),
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutcube_core::CutCubeError;

    #[test]
    fn test_new_builds_mesh() {
        let session = Session::new(CubeParameters::default()).unwrap();
        assert_eq!(session.mesh().num_vertices(), 9);
        assert_eq!(session.mesh().vertices()[8], Vec3::ZERO);
    }

    #[test]
    fn test_new_rejects_invalid() {
        let err = Session::new(CubeParameters::new(0.0, Vec3::splat(0.5))).unwrap_err();
        assert!(matches!(err, CutCubeError::InvalidParameter(_)));
    }

    #[test]
    fn test_failed_update_keeps_state() {
        let mut session = Session::new(CubeParameters::default()).unwrap();
        let before_params = *session.parameters();
        let before_mesh = session.mesh().clone();

        assert!(session.set_cube_size(-2.0).is_err());
        assert!(session.set_cut_position(Vec3::new(0.5, 1.0, 0.5)).is_err());
        assert!(session.set_cut_proportion(f32::NAN).is_err());

        assert_eq!(*session.parameters(), before_params);
        assert_eq!(*session.mesh(), before_mesh);
    }

    #[test]
    fn test_update_rebuilds() {
        let mut session = Session::new(CubeParameters::default()).unwrap();
        session.set_cube_size(2.0).unwrap();
        assert_eq!(session.mesh().vertices()[0], Vec3::splat(-1.0));

        session.set_cut_position(Vec3::new(0.75, 0.5, 0.5)).unwrap();
        assert_eq!(session.mesh().vertices()[8], Vec3::new(0.5, 0.0, 0.0));

        session.reset_cut().unwrap();
        assert_eq!(session.mesh().vertices()[8], Vec3::ZERO);
    }

    #[test]
    fn test_proportion_only_moves_preview() {
        let mut session = Session::new(CubeParameters::default()).unwrap();
        let mesh = session.mesh().clone();
        session.set_cut_proportion(0.5).unwrap();
        assert_eq!(*session.mesh(), mesh);
        assert_eq!(session.preview().unwrap().size, 0.5);

        session.set_show_preview(false);
        assert!(session.preview().is_none());
    }

    #[test]
    fn test_export_artifact() {
        let session = Session::new(CubeParameters::default()).unwrap();
        let artifact = session.export().unwrap();
        assert_eq!(artifact.filename, "cut_cube_1.0_33%.obj");
        let text = String::from_utf8(artifact.bytes).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 12);
    }

    #[test]
    fn test_artifact_save_in() {
        let dir = std::env::temp_dir().join(format!("cutcube_session_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let artifact = Session::new(CubeParameters::default())
            .unwrap()
            .export()
            .unwrap();
        let path = artifact.save_in(&dir).unwrap();
        assert_eq!(path.file_name().unwrap(), "cut_cube_1.0_33%.obj");
        assert_eq!(std::fs::read(&path).unwrap(), artifact.bytes);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
