// SPDX-License-Identifier: Apache-2.0

//! Reader for the v1 text layout
//!
//! Legacy files store one line-free stream of bracketed triples: a
//! triangle count, then for each triangle three corners, each carrying
//! its own `[position][normal][texcoord]` triple group. There is no
//! index stream; corners are emitted flat and compacted later.

use nalgebra::Vector3;

use crate::error::Result;
use crate::geometry::{MeshData, RawFace, RawVertex};
use crate::io::{lexer, token};

// Upper bound on speculative capacity reservations, so a bogus triangle
// count in a tiny file cannot force a multi-gigabyte allocation before
// parsing fails.
const MAX_RESERVED_FACES: usize = 1 << 16;

/// Parses the v1 payload starting at `offset` into a flat mesh.
///
/// `scale` is the version-specific position scale factor. Any delimiter
/// mismatch or truncation aborts the decode; there is no partial mesh.
pub fn read(data: &[u8], offset: usize, scale: f32) -> Result<MeshData> {
    let (face_count, mut pos) = lexer::parse_uint(data, offset);

    let reserve = (face_count as usize).min(MAX_RESERVED_FACES);
    let mut mesh = MeshData {
        vertices: Vec::with_capacity(reserve * 3),
        faces: Vec::with_capacity(reserve),
    };

    for i in 0..face_count {
        for _ in 0..3 {
            let (position, next) = read_triple(data, pos)?;
            let (raw_normal, next) = read_triple(data, next)?;
            let (texcoord, next) = read_triple(data, next)?;
            pos = next;

            mesh.vertices.push(RawVertex {
                position: [position[0] * scale, position[1] * scale, position[2] * scale],
                normal: sanitize_normal(raw_normal),
                // The format stores v flipped relative to the
                // interchange convention.
                texcoord: [texcoord[0], 1.0 - texcoord[1], texcoord[2]],
                color: [255; 4],
            });
        }

        mesh.faces.push(RawFace {
            a: 3 * i,
            b: 3 * i + 1,
            c: 3 * i + 2,
        });
    }

    Ok(mesh)
}

/// Reads a bracketed, comma-separated triple: `[x,y,z]`.
fn read_triple(data: &[u8], pos: usize) -> Result<([f32; 3], usize)> {
    let pos = token::expect(data, pos, b'[')?;
    let (x, pos) = token::read_float(data, pos, b',')?;
    let (y, pos) = token::read_float(data, pos, b',')?;
    let (z, pos) = token::read_float(data, pos, b']')?;
    Ok(([x, y, z], pos))
}

/// Unit-normalizes the raw normal, mapping degenerate results to zero.
///
/// A zero-length or non-finite raw normal normalizes to NaN or infinity
/// components; those must not leak into the output mesh.
fn sanitize_normal(raw: [f32; 3]) -> [f32; 3] {
    let unit = Vector3::from(raw).normalize();
    if unit.iter().all(|component| component.is_finite()) {
        unit.into()
    } else {
        [0.0; 3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // One corner with position [x,y,z], normal [nx,ny,nz], texcoord [u,v,w].
    fn corner(p: [f32; 3], n: [f32; 3], t: [f32; 3]) -> String {
        format!(
            "[{},{},{}][{},{},{}][{},{},{}]",
            p[0], p[1], p[2], n[0], n[1], n[2], t[0], t[1], t[2]
        )
    }

    fn one_triangle_payload() -> String {
        let mut text = String::from("1\n");
        text.push_str(&corner([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0]));
        text.push_str(&corner([1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]));
        text.push_str(&corner([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]));
        text
    }

    #[test]
    fn reads_one_triangle_flat() {
        let payload = one_triangle_payload();
        let mesh = read(payload.as_bytes(), 0, 1.0).unwrap();

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.faces[0], RawFace { a: 0, b: 1, c: 2 });
        assert_eq!(mesh.vertices[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(mesh.vertices[1].color, [255; 4]);
    }

    #[test]
    fn zero_triangle_count_is_an_empty_mesh() {
        let mesh = read(b"0\n", 0, 1.0).unwrap();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn applies_position_scale() {
        let payload = one_triangle_payload();
        let half = read(payload.as_bytes(), 0, 0.5).unwrap();
        let full = read(payload.as_bytes(), 0, 1.0).unwrap();

        for (a, b) in half.vertices.iter().zip(&full.vertices) {
            for axis in 0..3 {
                assert_eq!(a.position[axis], b.position[axis] * 0.5);
            }
        }
    }

    #[test]
    fn flips_texcoord_v() {
        let payload = one_triangle_payload();
        let mesh = read(payload.as_bytes(), 0, 1.0).unwrap();
        // Corner 2 stored v = 1.0.
        assert_eq!(mesh.vertices[2].texcoord, [0.0, 0.0, 0.0]);
        // Corner 0 stored v = 0.0.
        assert_eq!(mesh.vertices[0].texcoord, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn zero_normal_sanitizes_to_zero() {
        let mut text = String::from("1\n");
        for _ in 0..3 {
            text.push_str(&corner([0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]));
        }
        let mesh = read(text.as_bytes(), 0, 1.0).unwrap();
        for vertex in &mesh.vertices {
            assert_eq!(vertex.normal, [0.0; 3]);
        }
    }

    #[test]
    fn normalizes_normals_to_unit_length() {
        let mut text = String::from("1\n");
        for _ in 0..3 {
            text.push_str(&corner([0.0, 0.0, 0.0], [3.0, 0.0, 4.0], [0.0, 0.0, 0.0]));
        }
        let mesh = read(text.as_bytes(), 0, 1.0).unwrap();
        assert_relative_eq!(mesh.vertices[0].normal[0], 0.6, max_relative = 1e-6);
        assert_relative_eq!(mesh.vertices[0].normal[2], 0.8, max_relative = 1e-6);
    }

    #[test]
    fn truncated_corner_aborts_the_decode() {
        let payload = "1\n[0,0,0][0,0,1]";
        assert!(read(payload.as_bytes(), 0, 1.0).is_err());
    }

    #[test]
    fn missing_delimiter_aborts_the_decode() {
        let payload = "1\n[0;0,0][0,0,1][0,0,0]";
        assert!(read(payload.as_bytes(), 0, 1.0).is_err());
    }
}
