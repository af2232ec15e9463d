// SPDX-License-Identifier: Apache-2.0

//! Locale-independent numeric lexing over raw byte buffers
//!
//! The text reader spends nearly all of its time turning digit runs into
//! numbers, so these parsers work directly on the byte buffer with a
//! plain cursor instead of going through UTF-8 validation and
//! `str::parse`. Each returns the parsed value together with the cursor
//! position after the consumed token and never allocates.

/// Advances past ASCII whitespace (space, tab, CR, LF).
pub fn skip_whitespace(data: &[u8], mut pos: usize) -> usize {
    while let Some(&byte) = data.get(pos) {
        if byte == b' ' || byte == b'\t' || byte == b'\r' || byte == b'\n' {
            pos += 1;
        } else {
            break;
        }
    }
    pos
}

/// Parses an unsigned decimal integer.
///
/// An empty digit run yields 0 with the cursor left after any skipped
/// whitespace. Accumulation saturates at `u32::MAX` so an absurd digit
/// run cannot wrap around into a small, plausible-looking count.
pub fn parse_uint(data: &[u8], pos: usize) -> (u32, usize) {
    let mut pos = skip_whitespace(data, pos);
    let mut value: u64 = 0;

    while let Some(&byte) = data.get(pos) {
        let digit = byte.wrapping_sub(b'0');
        if digit >= 10 {
            break;
        }
        value = (value * 10 + u64::from(digit)).min(u64::from(u32::MAX));
        pos += 1;
    }

    (value as u32, pos)
}

// Exact powers of ten representable in an f64 without rounding.
const POWERS: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

/// Parses a signed decimal float with optional fraction and exponent.
///
/// The mantissa accumulates in an f64 and is scaled by a power-of-ten
/// table, which reproduces single-precision geometry within float
/// rounding error; bit-exact agreement with a general-purpose
/// string-to-double conversion is not a goal. An empty digit run yields
/// 0.0.
pub fn parse_float(data: &[u8], pos: usize) -> (f64, usize) {
    let mut pos = skip_whitespace(data, pos);

    let mut sign = 1.0;
    match data.get(pos) {
        Some(&b'-') => {
            sign = -1.0;
            pos += 1;
        }
        Some(&b'+') => pos += 1,
        _ => {}
    }

    let mut mantissa = 0.0f64;
    let mut power: i32 = 0;

    while let Some(&byte) = data.get(pos) {
        let digit = byte.wrapping_sub(b'0');
        if digit >= 10 {
            break;
        }
        mantissa = mantissa * 10.0 + f64::from(digit);
        pos += 1;
    }

    if data.get(pos) == Some(&b'.') {
        pos += 1;
        while let Some(&byte) = data.get(pos) {
            let digit = byte.wrapping_sub(b'0');
            if digit >= 10 {
                break;
            }
            mantissa = mantissa * 10.0 + f64::from(digit);
            power -= 1;
            pos += 1;
        }
    }

    if matches!(data.get(pos), Some(&byte) if byte | 0x20 == b'e') {
        pos += 1;

        let mut exp_sign: i32 = 1;
        match data.get(pos) {
            Some(&b'-') => {
                exp_sign = -1;
                pos += 1;
            }
            Some(&b'+') => pos += 1,
            _ => {}
        }

        let mut exponent: i32 = 0;
        while let Some(&byte) = data.get(pos) {
            let digit = byte.wrapping_sub(b'0');
            if digit >= 10 {
                break;
            }
            exponent = exponent.saturating_mul(10).saturating_add(i32::from(digit));
            pos += 1;
        }

        power = power.saturating_add(exp_sign.saturating_mul(exponent));
    }

    let scale = power.unsigned_abs() as usize;
    let value = if scale < POWERS.len() {
        if power < 0 {
            sign * mantissa / POWERS[scale]
        } else {
            sign * mantissa * POWERS[scale]
        }
    } else {
        sign * mantissa * 10f64.powi(power)
    };

    (value, pos)
}
