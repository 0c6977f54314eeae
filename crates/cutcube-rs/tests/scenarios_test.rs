//! End-to-end tests for cutcube-rs: build a mesh, export it, and read the
//! document back.

use cutcube_rs::*;
use proptest::prelude::*;

/// Vertex positions and 0-based triangles read back from an OBJ document.
struct Parsed {
    vertices: Vec<Vec3>,
    normals: Vec<Vec3>,
    faces: Vec<[usize; 3]>,
    normal_refs: Vec<[usize; 3]>,
}

fn parse_obj(text: &str) -> Parsed {
    let mut parsed = Parsed {
        vertices: Vec::new(),
        normals: Vec::new(),
        faces: Vec::new(),
        normal_refs: Vec::new(),
    };

    let vec3 = |fields: Vec<&str>| {
        let v: Vec<f32> = fields.iter().map(|f| f.parse().unwrap()).collect();
        Vec3::new(v[0], v[1], v[2])
    };

    for line in text.lines() {
        let mut fields = line.split_whitespace();
        match fields.next() {
            Some("v") => parsed.vertices.push(vec3(fields.collect())),
            Some("vn") => parsed.normals.push(vec3(fields.collect())),
            Some("f") => {
                let refs: Vec<(usize, usize)> = fields
                    .map(|r| {
                        let (v, n) = r.split_once("//").unwrap();
                        (v.parse().unwrap(), n.parse().unwrap())
                    })
                    .collect();
                assert_eq!(refs.len(), 3);
                parsed.faces.push([refs[0].0 - 1, refs[1].0 - 1, refs[2].0 - 1]);
                parsed
                    .normal_refs
                    .push([refs[0].1 - 1, refs[1].1 - 1, refs[2].1 - 1]);
            }
            _ => {}
        }
    }
    parsed
}

#[test]
fn test_unit_cube_center_cut() {
    let mesh = build(1.0, Vec3::new(0.5, 0.5, 0.5)).unwrap();
    assert_eq!(mesh.num_vertices(), 9);
    assert_eq!(mesh.num_triangles(), 12);
    assert_eq!(mesh.vertices()[8], Vec3::ZERO);
    assert!(mesh.is_closed());
}

#[test]
fn test_corner_coincident_cut() {
    // Strict build rejects the boundary, permissive build reproduces it
    assert!(matches!(
        build(2.0, Vec3::ONE),
        Err(CutCubeError::InvalidParameter(_))
    ));

    let mesh = build_unchecked(2.0, Vec3::ONE).unwrap();
    assert_eq!(mesh.vertices()[8], Vec3::new(1.0, 1.0, 1.0));
    assert_eq!(mesh.vertices()[8], mesh.vertices()[6]);
    for normal in mesh.normals() {
        assert!(normal.is_finite());
        let len = normal.length();
        assert!(len == 0.0 || (len - 1.0).abs() < 1e-5);
    }

    let doc = export_string(&mesh, &ObjOptions::default()).unwrap();
    assert_eq!(parse_obj(&doc).faces.len(), 12);
}

#[test]
fn test_export_face_records() {
    let mesh = build(1.0, DEFAULT_CUT_POSITION).unwrap();
    let doc = String::from_utf8(export(&mesh).unwrap()).unwrap();
    let face_lines = doc.lines().filter(|l| l.starts_with("f ")).count();
    assert_eq!(face_lines, 12);

    let parsed = parse_obj(&doc);
    let max_ref = parsed.faces.iter().flatten().max().unwrap() + 1;
    assert_eq!(max_ref, 9);
}

#[test]
fn test_round_trip_topology_and_normals() {
    let mesh = build(1.25, Vec3::new(0.35, 0.8, 0.6)).unwrap();
    let doc = String::from_utf8(export(&mesh).unwrap()).unwrap();
    let parsed = parse_obj(&doc);

    assert_eq!(parsed.vertices, mesh.vertices());
    let faces: Vec<[usize; 3]> = mesh
        .indices()
        .iter()
        .map(|t| t.map(|i| i as usize))
        .collect();
    assert_eq!(parsed.faces, faces);

    // Each face corner resolves to the normal of its vertex
    for (face, normals) in parsed.faces.iter().zip(&parsed.normal_refs) {
        for (&v, &n) in face.iter().zip(normals) {
            assert_eq!(parsed.normals[n], mesh.normals()[v]);
        }
    }
}

#[test]
fn test_reimport_with_tobj() {
    let mesh = build(0.8, Vec3::new(0.1, 0.5, 0.9)).unwrap();
    let doc = export(&mesh).unwrap();

    let mut reader = std::io::BufReader::new(doc.as_slice());
    let (models, _materials) = tobj::load_obj_buf(
        &mut reader,
        &tobj::LoadOptions {
            single_index: true,
            triangulate: true,
            ..Default::default()
        },
        |_| Err(tobj::LoadError::OpenFileFailed),
    )
    .unwrap();

    assert_eq!(models.len(), 1);
    assert_eq!(models[0].name, "cut_cube");
    let loaded = &models[0].mesh;
    assert_eq!(loaded.indices.len(), 36);
    assert_eq!(loaded.normals.len(), loaded.positions.len());
}

#[test]
fn test_render_buffers_match_mesh() {
    let mesh = build(1.0, DEFAULT_CUT_POSITION).unwrap();
    let buffers = mesh.render_buffers();
    assert_eq!(buffers.positions.len(), 9);
    assert_eq!(buffers.normals.len(), 9);
    assert_eq!(buffers.indices.len(), 36);
    assert!(buffers.indices.iter().all(|&i| i < 9));
}

#[test]
fn test_build_and_export_pipeline() {
    let params = CubeParameters::new(1.5, Vec3::new(0.3, 0.3, 0.3)).with_cut_proportion(0.2);
    let artifact = build_and_export(&params).unwrap();
    assert_eq!(artifact.filename, "cut_cube_1.5_20%.obj");

    let parsed = parse_obj(std::str::from_utf8(&artifact.bytes).unwrap());
    assert_eq!(parsed.vertices[8], cut_point(1.5, Vec3::splat(0.3)));
}

#[test]
fn test_json_config_pipeline() {
    let params = CubeParameters::from_json_str(
        r#"{ "cube_size": 2.0, "cut_position": [0.25, 0.25, 0.75], "show_preview": false }"#,
    )
    .unwrap();
    let session = Session::new(params).unwrap();
    assert!(session.preview().is_none());
    assert_eq!(session.mesh().vertices()[8], Vec3::new(-0.5, -0.5, 0.5));
}

#[test]
fn test_errors_are_reported_not_panics() {
    assert!(build(-1.0, DEFAULT_CUT_POSITION).is_err());
    assert!(export(&Mesh::default()).is_err());
    let malformed = Mesh::from_raw(vec![Vec3::ZERO; 3], vec![[0, 1, 7]]);
    assert!(matches!(
        export(&malformed),
        Err(CutCubeError::ExportFailure(_))
    ));
}

proptest! {
    #[test]
    fn prop_export_round_trip(
        size in 0.5f32..2.0,
        x in 0.01f32..0.99,
        y in 0.01f32..0.99,
        z in 0.01f32..0.99,
    ) {
        let mesh = build(size, Vec3::new(x, y, z)).unwrap();
        let doc = String::from_utf8(export(&mesh).unwrap()).unwrap();
        let parsed = parse_obj(&doc);

        prop_assert_eq!(parsed.vertices.as_slice(), mesh.vertices());
        prop_assert_eq!(parsed.faces.len(), 12);
        for (face, tri) in parsed.faces.iter().zip(mesh.indices()) {
            prop_assert_eq!(*face, tri.map(|i| i as usize));
        }
    }
}
