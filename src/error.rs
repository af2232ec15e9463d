// SPDX-License-Identifier: Apache-2.0

//! Decode error taxonomy

use thiserror::Error;

/// Errors raised while decoding a Roblox mesh file.
///
/// Every failure aborts the whole decode; there is no partial-mesh
/// recovery and no fallback between format revisions.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The 12-byte magic prefix is unrecognized, or the header line has
    /// no terminating newline.
    #[error("unrecognized mesh header")]
    UnknownFormat,

    /// A required delimiter was absent during text parsing.
    #[error("expected `{expected}` at byte {offset}")]
    MalformedToken { expected: char, offset: usize },

    /// A read would consume more bytes than remain in the buffer.
    #[error("read of {wanted} bytes at offset {offset} is out of bounds")]
    OutOfBounds { offset: usize, wanted: usize },

    /// The declared header size or record stride does not match the
    /// format's fixed layout.
    #[error("incompatible header or record stride")]
    IncompatibleStride,

    /// The header declares zero vertices or zero faces.
    #[error("empty mesh")]
    EmptyMesh,

    /// Bytes remain unconsumed after all declared records were read.
    #[error("{0} unexpected bytes at end of file")]
    TrailingData(usize),

    /// A face references a vertex slot past the declared vertex count.
    #[error("face index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: u32 },

    /// The downstream text-mesh decoder rejected the interchange buffer.
    #[error("downstream mesh decoder rejected the interchange buffer")]
    Downstream,
}

pub type Result<T> = std::result::Result<T, DecodeError>;
