// SPDX-License-Identifier: Apache-2.0

//! Decode pipeline and public entry points
//!
//! The whole decode is synchronous and single-pass: the caller's file
//! or buffer is materialized in memory, sniffed, parsed by the
//! revision-specific reader, compacted, serialized to the interchange
//! text, and handed to the downstream decoder. Failures at any stage
//! abort the decode; no error kind is swallowed.

use std::fs;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{DecodeError, Result};
use crate::geometry::{reindex, MeshData};
use crate::io::version::{self, Version, MAGIC_LEN};
use crate::io::{obj_write, read_v1, read_v2};

/// Buffer-decode interface of the downstream generic text-mesh decoder.
///
/// Implementations consume the materialized interchange buffer and
/// populate their own mesh or point-cloud representation, reporting
/// success. The importer propagates a rejection as
/// [`DecodeError::Downstream`] without interpreting it further.
pub trait InterchangeSink {
    /// Decodes the buffer keeping triangle connectivity.
    fn decode_mesh(&mut self, buffer: &[u8]) -> bool;

    /// Decodes positions and attributes only, discarding connectivity.
    fn decode_point_cloud(&mut self, buffer: &[u8]) -> bool;
}

/// Decodes a buffer into a compacted [`MeshData`].
///
/// Runs version sniffing, the revision-specific reader, and vertex
/// compaction. Compaction is unconditional: v2 files in the wild rarely
/// carry a real index stream, and flat v1 output always triplicates
/// shared corners.
pub fn decode_mesh_data(data: &[u8]) -> Result<MeshData> {
    let (version, payload) = version::sniff(data)?;
    let mut mesh = match version {
        Version::V1_00 | Version::V1_01 => {
            read_v1::read(data, payload, version.position_scale())?
        }
        Version::V2_00 => read_v2::read(data, payload)?,
    };
    reindex(&mut mesh);
    Ok(mesh)
}

/// Decodes a buffer all the way to the interchange text.
pub fn decode_to_obj(data: &[u8]) -> Result<String> {
    Ok(obj_write::write_interchange(&decode_mesh_data(data)?))
}

/// Decodes a buffer and feeds the result to the sink as a full mesh.
pub fn decode_mesh_from_buffer<S: InterchangeSink>(data: &[u8], sink: &mut S) -> Result<()> {
    let text = decode_to_obj(data)?;
    if sink.decode_mesh(text.as_bytes()) {
        Ok(())
    } else {
        Err(DecodeError::Downstream)
    }
}

/// Decodes a buffer and feeds the result to the sink as a point cloud.
pub fn decode_point_cloud_from_buffer<S: InterchangeSink>(
    data: &[u8],
    sink: &mut S,
) -> Result<()> {
    let text = decode_to_obj(data)?;
    if sink.decode_point_cloud(text.as_bytes()) {
        Ok(())
    } else {
        Err(DecodeError::Downstream)
    }
}

/// Decodes a file and feeds the result to the sink as a full mesh.
pub fn decode_mesh_from_file<S: InterchangeSink>(
    path: impl AsRef<Path>,
    sink: &mut S,
) -> Result<()> {
    decode_mesh_from_buffer(&read_whole_file(path.as_ref())?, sink)
}

/// Decodes a file and feeds the result to the sink as a point cloud.
pub fn decode_point_cloud_from_file<S: InterchangeSink>(
    path: impl AsRef<Path>,
    sink: &mut S,
) -> Result<()> {
    decode_point_cloud_from_buffer(&read_whole_file(path.as_ref())?, sink)
}

/// True if the buffer starts with a recognized magic prefix.
pub fn probe(prefix: &[u8]) -> bool {
    version::probe(prefix)
}

/// True if the file starts with a recognized magic prefix.
///
/// Reads only the prefix; unreadable or short files probe false.
pub fn probe_file(path: impl AsRef<Path>) -> bool {
    let mut prefix = [0u8; MAGIC_LEN];
    match File::open(path) {
        Ok(mut file) => file.read_exact(&mut prefix).is_ok() && probe(&prefix),
        Err(_) => false,
    }
}

fn read_whole_file(path: &Path) -> Result<Vec<u8>> {
    let data = fs::read(path)?;
    if data.is_empty() {
        return Err(DecodeError::UnknownFormat);
    }
    Ok(data)
}
