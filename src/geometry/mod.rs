// SPDX-License-Identifier: Apache-2.0

//! Geometry module - mesh records, containers, and reindexing

mod mesh;
mod reindex;

pub use mesh::{MeshData, RawFace, RawVertex, FACE_SIZE, VERTEX_SIZE};
pub use reindex::reindex;
