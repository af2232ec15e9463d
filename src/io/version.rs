// SPDX-License-Identifier: Apache-2.0

//! Format revision sniffing

use crate::error::{DecodeError, Result};

/// Length of the magic prefix shared by all known revisions.
pub const MAGIC_LEN: usize = 12;

/// A recognized revision of the mesh format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    V1_00,
    V1_01,
    V2_00,
}

impl Version {
    /// Classifies a buffer by its 12-byte magic prefix.
    pub fn from_magic(prefix: &[u8]) -> Option<Version> {
        match prefix.get(..MAGIC_LEN)? {
            b"version 1.00" => Some(Version::V1_00),
            b"version 1.01" => Some(Version::V1_01),
            b"version 2.00" => Some(Version::V2_00),
            _ => None,
        }
    }

    /// Position scale the v1 text reader applies; 1.00 files store
    /// positions at half scale.
    pub fn position_scale(self) -> f32 {
        match self {
            Version::V1_00 => 0.5,
            Version::V1_01 | Version::V2_00 => 1.0,
        }
    }
}

/// True if the buffer plausibly starts a mesh file of this format.
///
/// Usable by an outer format-detection dispatcher without committing to
/// a full decode.
pub fn probe(prefix: &[u8]) -> bool {
    Version::from_magic(prefix).is_some()
}

/// Classifies the buffer and locates the payload.
///
/// Returns the version and the byte offset just past the first newline,
/// where the revision-specific reader starts. A short buffer, unknown
/// prefix, or missing newline fails with [`DecodeError::UnknownFormat`].
pub fn sniff(data: &[u8]) -> Result<(Version, usize)> {
    let version = Version::from_magic(data).ok_or(DecodeError::UnknownFormat)?;
    let newline = data
        .iter()
        .position(|&byte| byte == b'\n')
        .ok_or(DecodeError::UnknownFormat)?;
    Ok((version, newline + 1))
}
