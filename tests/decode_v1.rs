// SPDX-License-Identifier: Apache-2.0

//! End-to-end decoding of v1 text meshes

use approx::assert_relative_eq;
use rbxmesh::{decode_mesh_data, decode_to_obj, DecodeError};

fn corner(p: [f32; 3], n: [f32; 3], t: [f32; 3]) -> String {
    format!(
        "[{},{},{}][{},{},{}][{},{},{}]",
        p[0], p[1], p[2], n[0], n[1], n[2], t[0], t[1], t[2]
    )
}

fn two_triangle_file(version: &str) -> String {
    // Two triangles sharing the corner at the origin, written with
    // byte-identical records.
    let shared = corner([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0]);
    let mut text = format!("version {version}\n2\n");
    text.push_str(&shared);
    text.push_str(&corner([1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0]));
    text.push_str(&corner([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0]));
    text.push_str(&shared);
    text.push_str(&corner([2.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0]));
    text.push_str(&corner([0.0, 2.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0]));
    text
}

#[test]
fn zero_triangle_file_decodes_to_empty_mesh() {
    let mesh = decode_mesh_data(b"version 1.01\n0\n").unwrap();
    assert_eq!(mesh.vertex_count(), 0);
    assert_eq!(mesh.face_count(), 0);
}

#[test]
fn single_triangle_decodes_with_compacted_corners() {
    // All three corners carry distinct positions but the same normal
    // and texcoord; records differ, so all three survive compaction.
    let data = "version 1.01\n1\n\
        [0,0,0][0,0,1][0,0,0]\
        [1,0,0][0,0,1][0,0,0]\
        [0,1,0][0,0,1][0,0,0]";
    let mesh = decode_mesh_data(data.as_bytes()).unwrap();
    assert_eq!(mesh.face_count(), 1);
    assert_eq!(mesh.vertex_count(), 3);
}

#[test]
fn identical_corners_compact_to_one_vertex() {
    let one = corner([1.0, 2.0, 3.0], [0.0, 0.0, 1.0], [0.5, 0.5, 0.0]);
    let data = format!("version 1.01\n1\n{one}{one}{one}");
    let mesh = decode_mesh_data(data.as_bytes()).unwrap();
    assert_eq!(mesh.face_count(), 1);
    assert_eq!(mesh.vertex_count(), 1);
    assert_eq!(mesh.faces[0].indices(), [0, 0, 0]);
}

#[test]
fn shared_corner_across_triangles_dedups() {
    let mesh = decode_mesh_data(two_triangle_file("1.01").as_bytes()).unwrap();
    assert_eq!(mesh.face_count(), 2);
    assert_eq!(mesh.vertex_count(), 5);
    assert_eq!(mesh.faces[0].a, mesh.faces[1].a);
}

#[test]
fn v1_00_scales_positions_by_half() {
    let half = decode_mesh_data(two_triangle_file("1.00").as_bytes()).unwrap();
    let full = decode_mesh_data(two_triangle_file("1.01").as_bytes()).unwrap();

    assert_eq!(half.vertex_count(), full.vertex_count());
    for (a, b) in half.vertices.iter().zip(&full.vertices) {
        for axis in 0..3 {
            assert_relative_eq!(a.position[axis], b.position[axis] * 0.5);
        }
    }
}

#[test]
fn zero_normal_does_not_abort_or_produce_nan() {
    let data = "version 1.01\n1\n\
        [1,0,0][0,0,0][0,0,0]\
        [0,1,0][0,0,0][0,0,0]\
        [0,0,1][0,0,0][0,0,0]";
    let mesh = decode_mesh_data(data.as_bytes()).unwrap();
    for vertex in &mesh.vertices {
        assert_eq!(vertex.normal, [0.0; 3]);
    }
}

#[test]
fn interchange_text_has_all_blocks() {
    let text = decode_to_obj(two_triangle_file("1.01").as_bytes()).unwrap();
    assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 5);
    assert_eq!(text.lines().filter(|l| l.starts_with("vt ")).count(), 5);
    assert_eq!(text.lines().filter(|l| l.starts_with("vn ")).count(), 5);
    assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 2);
}

#[test]
fn truncated_file_fails_with_malformed_token() {
    let data = "version 1.01\n2\n[0,0,0][0,0,1][0,0,0]";
    let err = decode_mesh_data(data.as_bytes()).unwrap_err();
    assert!(matches!(err, DecodeError::MalformedToken { .. }));
}

#[test]
fn wrong_delimiter_reports_expected_byte() {
    let data = "version 1.01\n1\n(0,0,0)";
    match decode_mesh_data(data.as_bytes()).unwrap_err() {
        DecodeError::MalformedToken { expected, .. } => assert_eq!(expected, '['),
        other => panic!("unexpected error: {other:?}"),
    }
}
