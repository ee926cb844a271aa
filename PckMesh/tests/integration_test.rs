use pckmesh::converter::{ObjExportOptions, convert_pck_to_obj, to_obj};
use pckmesh::formats::pck::FaceRecord;
use pckmesh::mesh::MeshReport;
use pckmesh::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn quad() -> Vec<VertexRecord> {
    vec![
        VertexRecord::new(0, 0, 0),
        VertexRecord::new(256, 0, 0),
        VertexRecord::new(0, 256, 0),
        VertexRecord::new(256, 256, 0),
    ]
}

fn quad_uvs() -> Vec<UvRecord> {
    vec![
        UvRecord::new(0, 0),
        UvRecord::new(4096, 0),
        UvRecord::new(0, 4096),
        UvRecord::new(4096, 4096),
    ]
}

/// Two vertex groups separated by unrelated bytes.
fn two_groups(variant: MarkerVariant) -> Vec<u8> {
    PckWriter::new()
        .raw(&[0x00, 0x11, 0x22, 0x33, 0x44])
        .vertices(variant, &quad())
        .uvs(variant, &quad_uvs())
        .raw(&[0xAB; 7])
        .faces(variant, &[0x00, 0x01])
        .raw(&[0x10, 0x20])
        .vertices(variant, &[VertexRecord::new(-5, 6, -7); 5])
        .uvs(variant, &[UvRecord::new(1, -1); 5])
        .faces(variant, &[0x02, 0x00, 0x03])
        .finish()
}

#[test]
fn test_single_group_scenario() {
    let data = PckWriter::new()
        .vertices(MarkerVariant::A, &quad())
        .uvs(MarkerVariant::A, &quad_uvs())
        .faces(MarkerVariant::A, &[0x00, 0x01])
        .finish();

    let meshes = parse_pck_bytes(&data).unwrap();
    assert_eq!(meshes.len(), 1);
    assert_eq!(
        meshes.submeshes()[0].stats(),
        MeshStats {
            vertex_count: 4,
            uv_count: 4,
            active_face_count: 1,
            inactive_face_count: 1,
        }
    );

    let obj = to_obj(&meshes, true);
    let count = |prefix: &str| obj.lines().filter(|l| l.starts_with(prefix)).count();
    assert_eq!(count("v "), 4);
    assert_eq!(count("vt "), 4);
    assert_eq!(count("f "), 2);
}

#[test]
fn test_global_vertex_indices_are_contiguous() {
    let meshes = parse_pck_bytes(&two_groups(MarkerVariant::A)).unwrap();

    let mut next = 0;
    for submesh in meshes.submeshes() {
        let range = submesh.vertex_range();
        assert_eq!(range.start, next);
        next = range.end;
    }
    assert_eq!(next as usize, meshes.totals().vertex_count);
    assert_eq!(meshes.vertices().count(), 9);
}

#[test]
fn test_faces_stay_inside_their_submesh() {
    let meshes = parse_pck_bytes(&two_groups(MarkerVariant::B)).unwrap();

    for submesh in meshes.submeshes() {
        let vertices = submesh.vertex_range();
        let uvs = submesh.uv_range();
        for face in submesh.faces(true) {
            assert!(face.vertices.iter().all(|i| vertices.contains(i)));
            let face_uvs = face.uvs.expect("both groups carry UVs");
            assert!(face_uvs.iter().all(|i| uvs.contains(i)));
        }
    }
}

#[test]
fn test_export_face_counts_follow_partition() {
    let meshes = parse_pck_bytes(&two_groups(MarkerVariant::A)).unwrap();
    let active: usize = meshes.submeshes().iter().map(|s| s.active_faces().len()).sum();
    let inactive: usize = meshes.submeshes().iter().map(|s| s.inactive_faces().len()).sum();
    assert_eq!((active, inactive), (3, 2));

    let faces = |obj: String| obj.lines().filter(|l| l.starts_with("f ")).count();
    assert_eq!(faces(to_obj(&meshes, false)), active);
    assert_eq!(faces(to_obj(&meshes, true)), active + inactive);
}

#[test]
fn test_export_is_idempotent() {
    let meshes = parse_pck_bytes(&two_groups(MarkerVariant::A)).unwrap();
    let options = ObjExportOptions {
        include_inactive: true,
        scale_vertices: true,
        ..ObjExportOptions::default()
    };
    assert_eq!(export_obj(&meshes, &options), export_obj(&meshes, &options));
    assert_eq!(to_obj(&meshes, false), to_obj(&meshes, false));
}

#[test]
fn test_marker_variants_are_equivalent() {
    let a = parse_pck_bytes(&two_groups(MarkerVariant::A)).unwrap();
    let b = parse_pck_bytes(&two_groups(MarkerVariant::B)).unwrap();

    assert_eq!(a.len(), b.len());
    assert_eq!(a.totals(), b.totals());
    for (sa, sb) in a.submeshes().iter().zip(b.submeshes()) {
        assert_eq!(sa.vertices(), sb.vertices());
        assert_eq!(sa.uvs(), sb.uvs());
        assert_eq!(sa.active_faces(), sb.active_faces());
        assert_eq!(sa.inactive_faces(), sb.inactive_faces());
        assert_eq!(sa.variant(), MarkerVariant::A);
        assert_eq!(sb.variant(), MarkerVariant::B);
    }
    assert_eq!(to_obj(&a, true), to_obj(&b, true));
}

#[test]
fn test_face_before_vertices_fails() {
    let data = PckWriter::new()
        .faces(MarkerVariant::A, &[0x00])
        .vertices(MarkerVariant::A, &quad())
        .finish();

    let err = parse_pck_bytes(&data).unwrap_err();
    assert!(matches!(err, Error::DanglingFaceSection { offset: 0 }));
    assert_eq!(err.section_kind(), Some(SectionKind::Face));
}

#[test]
fn test_uv_header_noise_before_first_group_is_ignored() {
    let data = PckWriter::new()
        .raw(&[0x10, 0xC4, 0x00, 0x01, 0x65, 0xAA, 0xBB, 0xCC, 0xDD, 0x00])
        .vertices(MarkerVariant::A, &quad())
        .uvs(MarkerVariant::A, &quad_uvs())
        .faces(MarkerVariant::A, &[0x00, 0x00])
        .finish();

    let meshes = parse_pck_bytes(&data).unwrap();
    assert_eq!(meshes.len(), 1);
    assert_eq!(meshes.totals().uv_count, 4);

    let submesh = meshes.get(0).unwrap();
    assert_eq!(submesh.uv_range(), 0..4);
    assert_eq!(submesh.active_faces()[0].uvs, Some([0, 1, 2]));
    assert!(meshes.get(1).is_none());
}

#[test]
fn test_declared_count_exceeds_data() {
    let mut data = vec![0xEE, 0x00, 0x0A, 0x69];
    data.extend_from_slice(&[0u8; 6 * 6]);

    let err = parse_pck_bytes(&data).unwrap_err();
    assert!(matches!(
        err,
        Error::CountMismatch {
            kind: SectionKind::Vertex,
            declared: 10,
            available: 6,
            ..
        }
    ));
    assert_eq!(err.offset(), Some(0));
}

#[test]
fn test_error_after_valid_group_returns_nothing() {
    let mut data = PckWriter::new()
        .vertices(MarkerVariant::A, &quad())
        .faces(MarkerVariant::A, &[0x00, 0x00])
        .finish();
    // A UV header declaring two records with only one and a half present.
    data.extend_from_slice(&[0xC4, 0x00, 0x02, 0x65, 1, 0, 2, 0, 3, 0]);

    let err = parse_pck_bytes(&data).unwrap_err();
    assert!(matches!(err, Error::RecordMisaligned { .. }));
}

#[test]
fn test_face_records_are_three_bytes_after_preamble() {
    let data = PckWriter::new()
        .vertices(MarkerVariant::B, &quad())
        .faces(MarkerVariant::B, &[0x04, 0x05])
        .finish();
    let faces: Vec<FaceRecord> = scan(&data)
        .filter_map(|s| match s.unwrap().data {
            pckmesh::formats::pck::SectionData::Faces(faces) => Some(faces),
            _ => None,
        })
        .flatten()
        .collect();

    assert_eq!(faces.len(), 2);
    assert_eq!(classify(&faces[0]), FaceState::Active);
    assert_eq!(classify(&faces[1]), FaceState::Inactive);
}

#[test]
fn test_report_json_lists_groups() {
    let meshes = parse_pck_bytes(&two_groups(MarkerVariant::A)).unwrap();
    let report = MeshReport::from_collection(&meshes).with_file_path("car.pck");

    assert_eq!(report.submesh_count, 2);
    assert_eq!(report.submeshes[1].vertex_range, [4, 9]);
    assert_eq!(report.submeshes[0].inactive_faces, vec![[1, 2, 3]]);

    let json = report.to_json().unwrap();
    assert!(json.contains("\"file_path\": \"car.pck\""));
    assert!(json.contains("\"kind\": \"face\""));
}

#[test]
fn test_convert_file_to_obj() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("model.pck");
    let dest = dir.path().join("model.obj");
    std::fs::write(&source, two_groups(MarkerVariant::A)).unwrap();

    convert_pck_to_obj(&source, &dest, &ObjExportOptions::default()).unwrap();

    let written = std::fs::read_to_string(&dest).unwrap();
    let meshes = read_pck(&source).unwrap();
    assert_eq!(written, to_obj(&meshes, false));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = read_pck(dir.path().join("absent.pck")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert_eq!(err.offset(), None);
}
