//! Command-line front end for the `cutcube` binary.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use cutcube_core::{CubeParameters, CutCubeError, Mesh};
use cutcube_export::{export_filename_for, export_with, ObjOptions};
use cutcube_geometry::{build_from_parameters, build_unchecked};
use glam::Vec3;
use thiserror::Error;

const USAGE: &str = r"cutcube - build a cube with a beveled corner and export it as OBJ

Usage:
  cutcube [options]

Options:
  --config <file>         Load parameters from a JSON file
  --size <s>              Cube edge length
  --proportion <p>        Cut proportion (only used in the file name)
  --position <x> <y> <z>  Normalized cut position, each in (0, 1)
  --out <path>            Output file, or directory for the generated name
  --stdout                Print the document instead of writing a file
  --name <name>           Object name written on the `o` line
  --no-normals            Omit normal records
  --allow-boundary        Accept cut positions on or outside the cube
  --overwrite             Overwrite an existing output file
  -h, --help              Show this help

Set RUST_LOG=debug for build details.
";

/// Errors reported by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// The command line could not be parsed.
    #[error("{0}\n\n{usage}", usage = USAGE)]
    Usage(String),

    /// The output file exists and `--overwrite` was not given.
    #[error("refusing to overwrite existing file {} (use --overwrite)", .0.display())]
    Exists(PathBuf),

    /// Building or exporting failed.
    #[error(transparent)]
    CutCube(#[from] CutCubeError),
}

/// Where the exported document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Write into this directory under the generated file name.
    Directory(PathBuf),
    /// Write to exactly this path.
    File(PathBuf),
    /// Print to standard output.
    Stdout,
}

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    /// JSON parameter file loaded before the flag overrides.
    pub config: Option<PathBuf>,
    /// Cube edge length from `--size`.
    pub cube_size: Option<f32>,
    /// Cut proportion from `--proportion`.
    pub cut_proportion: Option<f32>,
    /// Normalized cut position from `--position`.
    pub cut_position: Option<Vec3>,
    /// Where the document is written.
    pub destination: Destination,
    /// Object name and normal output.
    pub obj: ObjOptions,
    /// Use the permissive builder.
    pub allow_boundary: bool,
    /// Replace an existing output file.
    pub overwrite: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            config: None,
            cube_size: None,
            cut_proportion: None,
            cut_position: None,
            destination: Destination::Directory(PathBuf::from(".")),
            obj: ObjOptions::default(),
            allow_boundary: false,
            overwrite: false,
        }
    }
}

impl CliOptions {
    /// Loads the config file, if any, and applies the command-line overrides.
    pub fn parameters(&self) -> Result<CubeParameters, CliError> {
        let mut params = match &self.config {
            Some(path) => CubeParameters::load(path)?,
            None => CubeParameters::default(),
        };
        if let Some(size) = self.cube_size {
            params.cube_size = size;
        }
        if let Some(proportion) = self.cut_proportion {
            params.cut_proportion = proportion;
        }
        if let Some(position) = self.cut_position {
            params.cut_position = position;
        }
        Ok(params)
    }
}

/// Parses arguments (without the program name). Returns `None` when help
/// was requested.
pub fn parse_args<I>(args: I) -> Result<Option<CliOptions>, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => options.config = Some(PathBuf::from(value(&mut args, "--config")?)),
            "--size" => options.cube_size = Some(number(&mut args, "--size")?),
            "--proportion" => options.cut_proportion = Some(number(&mut args, "--proportion")?),
            "--position" => {
                let x = number(&mut args, "--position")?;
                let y = number(&mut args, "--position")?;
                let z = number(&mut args, "--position")?;
                options.cut_position = Some(Vec3::new(x, y, z));
            }
            "--out" => options.destination = destination(&value(&mut args, "--out")?),
            "--stdout" => options.destination = Destination::Stdout,
            "--name" => options.obj.object_name = value(&mut args, "--name")?,
            "--no-normals" => options.obj.write_normals = false,
            "--allow-boundary" => options.allow_boundary = true,
            "--overwrite" => options.overwrite = true,
            "-h" | "--help" => return Ok(None),
            other => return Err(CliError::Usage(format!("unknown option `{other}`"))),
        }
    }

    Ok(Some(options))
}

/// Builds the mesh described by `options` and returns it with its
/// parameters.
pub fn build_mesh(options: &CliOptions) -> Result<(CubeParameters, Mesh), CliError> {
    let params = options.parameters()?;
    let mesh = if options.allow_boundary {
        build_unchecked(params.cube_size, params.cut_position)?
    } else {
        build_from_parameters(&params)?
    };
    Ok((params, mesh))
}

/// Runs the command line. Returns the path written, if any.
pub fn run<I>(args: I) -> Result<Option<PathBuf>, CliError>
where
    I: IntoIterator<Item = String>,
{
    let Some(options) = parse_args(args)? else {
        write_output(&mut io::stdout().lock(), USAGE.as_bytes())?;
        return Ok(None);
    };

    let (params, mesh) = build_mesh(&options)?;
    let bytes = export_with(&mesh, &options.obj)?;

    let path = match &options.destination {
        Destination::Stdout => {
            write_output(&mut io::stdout().lock(), &bytes)?;
            return Ok(None);
        }
        Destination::Directory(dir) => dir.join(export_filename_for(&params)),
        Destination::File(path) => path.clone(),
    };

    write_file(&path, &bytes, options.overwrite)?;
    eprintln!(
        "wrote {}: vertices={} triangles={}",
        path.display(),
        mesh.num_vertices(),
        mesh.num_triangles()
    );
    Ok(Some(path))
}

/// Interprets an `--out` value. A path naming an existing directory, or
/// ending in a separator, is a directory that receives the generated name.
fn destination(raw: &str) -> Destination {
    let path = PathBuf::from(raw);
    if raw.ends_with('/') || raw.ends_with(std::path::MAIN_SEPARATOR) || path.is_dir() {
        Destination::Directory(path)
    } else {
        Destination::File(path)
    }
}

/// Writes the document to a stream. A closed pipe ends output quietly.
fn write_output(out: &mut impl Write, bytes: &[u8]) -> Result<(), CliError> {
    match out.write_all(bytes).and_then(|()| out.flush()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("output closed early");
            Ok(())
        }
        Err(e) => Err(CutCubeError::from(e).into()),
    }
}

fn write_file(path: &Path, bytes: &[u8], overwrite: bool) -> Result<(), CliError> {
    if path.exists() && !overwrite {
        return Err(CliError::Exists(path.to_path_buf()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(CutCubeError::from)?;
    }
    std::fs::write(path, bytes).map_err(CutCubeError::from)?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, CliError> {
    args.next()
        .ok_or_else(|| CliError::Usage(format!("missing value for {flag}")))
}

fn number(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<f32, CliError> {
    let raw = value(args, flag)?;
    raw.parse()
        .map_err(|_| CliError::Usage(format!("invalid number `{raw}` for {flag}")))
}
