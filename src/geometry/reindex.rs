// SPDX-License-Identifier: Apache-2.0

//! Vertex deduplication and face reindexing

use ahash::AHashMap;

use super::{MeshData, RawVertex, VERTEX_SIZE};

/// Collapses byte-identical vertex records and remaps face indices.
///
/// The readers emit one full vertex record per triangle corner, so most
/// files carry heavily redundant vertex data. A single forward pass
/// assigns each distinct record an output slot in first-occurrence
/// order; later byte-identical records reuse that slot. The hash map is
/// only an accelerator: keys are the full 40-byte encodings, so
/// colliding hashes still compare by content and can never merge
/// distinct vertices. Runs in linear time and is idempotent.
///
/// Every face index must already be in range for the vertex buffer.
pub fn reindex(mesh: &mut MeshData) {
    let mut slots: AHashMap<[u8; VERTEX_SIZE], u32> =
        AHashMap::with_capacity(mesh.vertices.len());
    let mut remap: Vec<u32> = Vec::with_capacity(mesh.vertices.len());
    let mut unique: Vec<RawVertex> = Vec::new();

    for vertex in &mesh.vertices {
        let slot = *slots.entry(vertex.to_bytes()).or_insert_with(|| {
            unique.push(*vertex);
            (unique.len() - 1) as u32
        });
        remap.push(slot);
    }

    mesh.vertices = unique;

    for face in &mut mesh.faces {
        face.a = remap[face.a as usize];
        face.b = remap[face.b as usize];
        face.c = remap[face.c as usize];
    }
}
