// SPDX-License-Identifier: Apache-2.0

//! rbxmesh
//!
//! Single-pass importer for the Roblox `.mesh` interchange format. The
//! three on-disk revisions (`version 1.00` and `1.01` text, `version
//! 2.00` packed binary) are sniffed, parsed, and collapsed into a
//! deduplicated triangle mesh, then materialized as an OBJ-style text
//! buffer for a downstream generic mesh decoder.
//!
//! Input is treated as untrusted: truncated, malformed, or hostile
//! files fail with a typed [`DecodeError`] and never read past a
//! validated buffer boundary.
//!
//! # Example
//!
//! ```no_run
//! use rbxmesh::{decode_to_obj, probe};
//!
//! let data = std::fs::read("model.mesh")?;
//! if probe(&data) {
//!     let obj_text = decode_to_obj(&data)?;
//!     println!("{obj_text}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod geometry;
pub mod io;

pub use error::{DecodeError, Result};
pub use geometry::{reindex, MeshData, RawFace, RawVertex};
pub use io::{
    decode_mesh_data, decode_mesh_from_buffer, decode_mesh_from_file,
    decode_point_cloud_from_buffer, decode_point_cloud_from_file, decode_to_obj, probe,
    probe_file, InterchangeSink, Version,
};
