//! Shortest round-trip decimal output, matching ECMAScript `Number#toString`
//! so stringified paths are byte-identical to what a browser would produce.

/// Normalize a value for output: non-finite values and negative zero both
/// print as `0`.
pub(crate) fn clean(value: f64) -> f64 {
    if value.is_finite() && value != 0.0 {
        value
    } else {
        0.0
    }
}

pub(crate) fn push(out: &mut String, value: f64) {
    let mut buffer = ryu_js::Buffer::new();
    out.push_str(buffer.format_finite(clean(value)));
}
