//! Character classes of the SVG2 path-data grammar.
//!
//! All predicates are total over a single byte; callers peeking past the end
//! of the input get `None` from the cursor and treat it as "no match".

/// White space accepted between tokens (tab, space, LF, FF, CR).
pub fn wsp(b: u8) -> bool {
    matches!(b, b'\t' | b' ' | b'\n' | b'\x0C' | b'\r')
}

/// One of the twenty command letters.
pub fn command(b: u8) -> bool {
    matches!(
        b,
        b'A' | b'a'
            | b'C'
            | b'c'
            | b'H'
            | b'h'
            | b'L'
            | b'l'
            | b'M'
            | b'm'
            | b'Q'
            | b'q'
            | b'S'
            | b's'
            | b'T'
            | b't'
            | b'V'
            | b'v'
            | b'Z'
            | b'z'
    )
}

pub fn digit(b: u8) -> bool {
    b.is_ascii_digit()
}

pub fn dot(b: u8) -> bool {
    b == b'.'
}

pub fn exponent(b: u8) -> bool {
    b == b'e' || b == b'E'
}

pub fn sign(b: u8) -> bool {
    b == b'+' || b == b'-'
}

pub fn comma(b: u8) -> bool {
    b == b','
}

/// Arc flag values are restricted to the literal digits `0` and `1`.
pub fn flag(b: u8) -> bool {
    b == b'0' || b == b'1'
}
