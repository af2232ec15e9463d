// SPDX-License-Identifier: Apache-2.0

//! Raw mesh records and the decoded mesh container

/// Canonical wire size of one vertex record: 9 little-endian `f32`
/// fields followed by 4 color bytes.
pub const VERTEX_SIZE: usize = 40;

/// Wire size of one face record: 3 little-endian `u32` indices.
pub const FACE_SIZE: usize = 12;

/// One vertex record as stored in the file, one per triangle corner.
///
/// The format carries no shared-index stream, so identical records are
/// emitted redundantly; [`reindex`](crate::geometry::reindex) collapses
/// them. Identity for that pass is the raw byte encoding
/// ([`Self::to_bytes`]), not float equality, so NaN payloads and signed
/// zeros behave predictably.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    /// u, v, and an extra `w` channel the format carries but leaves opaque.
    pub texcoord: [f32; 3],
    /// RGBA, opaque white unless the file stores one.
    pub color: [u8; 4],
}

impl Default for RawVertex {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            normal: [0.0; 3],
            texcoord: [0.0; 3],
            color: [255; 4],
        }
    }
}

impl RawVertex {
    /// Encodes the record in its canonical 40-byte wire layout.
    pub fn to_bytes(&self) -> [u8; VERTEX_SIZE] {
        let mut out = [0u8; VERTEX_SIZE];
        let mut at = 0;
        for field in [self.position, self.normal, self.texcoord] {
            for value in field {
                out[at..at + 4].copy_from_slice(&value.to_le_bytes());
                at += 4;
            }
        }
        out[at..].copy_from_slice(&self.color);
        out
    }

    /// Decodes a record from its canonical wire layout.
    ///
    /// `bytes` must hold at least [`VERTEX_SIZE`] bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        debug_assert!(bytes.len() >= VERTEX_SIZE);
        let f32_at = |at: usize| {
            f32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
        };
        Self {
            position: [f32_at(0), f32_at(4), f32_at(8)],
            normal: [f32_at(12), f32_at(16), f32_at(20)],
            texcoord: [f32_at(24), f32_at(28), f32_at(32)],
            color: [bytes[36], bytes[37], bytes[38], bytes[39]],
        }
    }
}

/// One triangle, referencing slots in the owning mesh's vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFace {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl RawFace {
    pub fn indices(&self) -> [u32; 3] {
        [self.a, self.b, self.c]
    }
}

/// Decoded mesh: an ordered vertex buffer plus an ordered face list.
///
/// Straight out of a reader the mesh is *flat* (vertex count equals
/// 3 × face count, one record per corner). After reindexing it is
/// *compacted* (byte-identical records merged, faces remapped). Both
/// states uphold: every face index is strictly less than the vertex
/// buffer length.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<RawVertex>,
    pub faces: Vec<RawFace>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}
