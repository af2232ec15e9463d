// SPDX-License-Identifier: Apache-2.0

//! Delimiter-aware token reading for the v1 text layout

use crate::error::{DecodeError, Result};
use crate::io::lexer;

/// Skips whitespace, then requires the next byte to be `delimiter`.
///
/// Returns the cursor just past the delimiter. A mismatch or exhausted
/// buffer fails with [`DecodeError::MalformedToken`].
pub fn expect(data: &[u8], pos: usize, delimiter: u8) -> Result<usize> {
    let pos = lexer::skip_whitespace(data, pos);
    match data.get(pos) {
        Some(&byte) if byte == delimiter => Ok(pos + 1),
        _ => Err(DecodeError::MalformedToken {
            expected: delimiter as char,
            offset: pos,
        }),
    }
}

/// Parses a float, then requires `delimiter` immediately after it.
///
/// The delimiter must directly follow the number; only the float itself
/// tolerates leading whitespace.
pub fn read_float(data: &[u8], pos: usize, delimiter: u8) -> Result<(f32, usize)> {
    let (value, end) = lexer::parse_float(data, pos);
    match data.get(end) {
        Some(&byte) if byte == delimiter => Ok((value as f32, end + 1)),
        _ => Err(DecodeError::MalformedToken {
            expected: delimiter as char,
            offset: end,
        }),
    }
}
