// SPDX-License-Identifier: Apache-2.0

//! I/O module - lexing, format readers, materialization, entry points

pub mod lexer;
pub mod token;
pub mod version;

mod decoder;
mod obj_write;
mod read_v1;
mod read_v2;

pub use decoder::{
    decode_mesh_data, decode_mesh_from_buffer, decode_mesh_from_file, decode_point_cloud_from_buffer,
    decode_point_cloud_from_file, decode_to_obj, probe, probe_file, InterchangeSink,
};
pub use obj_write::write_interchange;
pub use read_v2::HEADER_SIZE;
pub use version::{Version, MAGIC_LEN};
