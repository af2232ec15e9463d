// SPDX-License-Identifier: Apache-2.0

//! Reader for the v2 packed binary layout
//!
//! A v2 payload is a 12-byte header, a vertex array, and a face-index
//! array, all little-endian with no padding. Fields are decoded
//! explicitly from byte slices; nothing is reinterpreted in place, so
//! the reader is endian- and alignment-agnostic.

use crate::error::{DecodeError, Result};
use crate::geometry::{MeshData, RawFace, RawVertex, FACE_SIZE, VERTEX_SIZE};

/// Wire size of the packed header.
pub const HEADER_SIZE: usize = 12;

/// Packed v2 header, read once, validated, then discarded.
#[derive(Debug, Clone, Copy)]
struct Header {
    declared_size: u16,
    vertex_stride: u8,
    face_stride: u8,
    vertex_count: u32,
    face_count: u32,
}

impl Header {
    fn from_bytes(bytes: &[u8]) -> Self {
        debug_assert!(bytes.len() >= HEADER_SIZE);
        Self {
            declared_size: u16::from_le_bytes([bytes[0], bytes[1]]),
            vertex_stride: bytes[2],
            face_stride: bytes[3],
            vertex_count: u32_at(bytes, 4),
            face_count: u32_at(bytes, 8),
        }
    }
}

fn u32_at(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// Takes the next `wanted` bytes, failing if the buffer is too short.
fn take<'a>(data: &'a [u8], pos: &mut usize, wanted: usize) -> Result<&'a [u8]> {
    match pos.checked_add(wanted) {
        Some(end) if end <= data.len() => {
            let slice = &data[*pos..end];
            *pos = end;
            Ok(slice)
        }
        _ => Err(DecodeError::OutOfBounds {
            offset: *pos,
            wanted,
        }),
    }
}

/// Total byte size of `count` records of `stride` bytes each.
///
/// Saturates on 32-bit targets; a saturated size always fails the
/// subsequent bounds check in [`take`].
fn array_size(count: u32, stride: usize) -> usize {
    (count as usize).saturating_mul(stride)
}

/// Parses the v2 payload starting at `offset` into a flat mesh.
///
/// The cursor must land exactly on the end of the buffer once the
/// declared vertex and face arrays are consumed, and every face index
/// must be in range for the declared vertex count.
pub fn read(data: &[u8], offset: usize) -> Result<MeshData> {
    let mut pos = offset;

    let header = Header::from_bytes(take(data, &mut pos, HEADER_SIZE)?);

    if header.declared_size as usize != HEADER_SIZE || header.face_stride as usize != FACE_SIZE {
        return Err(DecodeError::IncompatibleStride);
    }
    // A zero vertex stride would let a 12-byte header demand an
    // arbitrarily large vertex buffer without consuming any input.
    if header.vertex_stride == 0 {
        return Err(DecodeError::IncompatibleStride);
    }
    if header.vertex_count == 0 || header.face_count == 0 {
        return Err(DecodeError::EmptyMesh);
    }

    let stride = header.vertex_stride as usize;
    let vertex_bytes = take(data, &mut pos, array_size(header.vertex_count, stride))?;

    let mut vertices = Vec::with_capacity(header.vertex_count as usize);
    if stride == VERTEX_SIZE {
        for record in vertex_bytes.chunks_exact(VERTEX_SIZE) {
            vertices.push(RawVertex::from_bytes(record));
        }
    } else {
        // Legacy strides: overlay the record prefix onto a
        // default-initialized vertex and step by the declared stride.
        // Bytes past the prefix keep their defaults (zero fields,
        // opaque-white color).
        let copied = stride.min(VERTEX_SIZE);
        for record in vertex_bytes.chunks_exact(stride) {
            let mut raw = RawVertex::default().to_bytes();
            raw[..copied].copy_from_slice(&record[..copied]);
            vertices.push(RawVertex::from_bytes(&raw));
        }
    }

    let face_bytes = take(data, &mut pos, array_size(header.face_count, FACE_SIZE))?;
    let mut faces = Vec::with_capacity(header.face_count as usize);
    for record in face_bytes.chunks_exact(FACE_SIZE) {
        faces.push(RawFace {
            a: u32_at(record, 0),
            b: u32_at(record, 4),
            c: u32_at(record, 8),
        });
    }

    if pos != data.len() {
        return Err(DecodeError::TrailingData(data.len() - pos));
    }

    // Guard downstream consumers against a corrupted or hostile index
    // stream before anything dereferences it.
    for face in &faces {
        for index in face.indices() {
            if index >= header.vertex_count {
                return Err(DecodeError::IndexOutOfRange {
                    index,
                    vertex_count: header.vertex_count,
                });
            }
        }
    }

    Ok(MeshData { vertices, faces })
}
