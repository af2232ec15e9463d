// SPDX-License-Identifier: Apache-2.0

//! Interchange text materializer
//!
//! Serializes a compacted mesh as position, texcoord, and normal blocks
//! followed by triangulated faces, the layout the downstream generic
//! text-mesh decoder consumes. Every corner references its position,
//! texcoord, and normal with one shared one-based index; the source
//! format has no independent index streams per attribute.

use crate::geometry::MeshData;

/// Serializes the mesh into an OBJ-style interchange buffer.
pub fn write_interchange(mesh: &MeshData) -> String {
    // Rough per-record sizes; avoids most growth reallocations.
    let mut out = String::with_capacity(mesh.vertex_count() * 72 + mesh.face_count() * 24);

    for vertex in &mesh.vertices {
        push_record(&mut out, "v", &vertex.position);
    }
    out.push('\n');
    for vertex in &mesh.vertices {
        push_record(&mut out, "vt", &vertex.texcoord);
    }
    out.push('\n');
    for vertex in &mesh.vertices {
        push_record(&mut out, "vn", &vertex.normal);
    }
    out.push('\n');

    for face in &mesh.faces {
        out.push('f');
        for index in face.indices() {
            let one_based = index as u64 + 1;
            out.push(' ');
            out.push_str(&format!("{one_based}/{one_based}/{one_based}"));
        }
        out.push('\n');
    }

    out
}

fn push_record(out: &mut String, tag: &str, values: &[f32; 3]) {
    out.push_str(tag);
    for &value in values {
        out.push(' ');
        out.push_str(&format_g6(value));
    }
    out.push('\n');
}

/// Formats a float with up to six significant digits, trailing zeros
/// trimmed, in plain decimal notation.
///
/// Magnitudes at or above 1e6 print all their integer digits instead
/// of switching to scientific notation; the six-digit bound applies to
/// the fractional side. Mesh coordinates never reach that range in
/// practice, and the downstream decoder parses either form.
fn format_g6(value: f32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (5 - magnitude).clamp(0, 24) as usize;
    let mut text = format!("{value:.decimals$}");
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    text
}
