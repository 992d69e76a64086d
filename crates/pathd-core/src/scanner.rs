use serde::Serialize;

use crate::is;

/// Low-level lexical unit produced by [`Scanner`].
///
/// Tokens tile the input: `index + len` of one token is the `index` of the
/// next, except for [`ScanKind::Unknown`] which always extends to the end of
/// the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanToken {
    pub kind: ScanKind,
    /// Byte offset of the token's first character within the path.
    pub index: usize,
    /// Byte length of the token.
    pub len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanKind {
    /// A run of white space characters.
    Wsp,
    /// A single command letter.
    Command,
    /// A comma followed by optional white space.
    CommaWsp,
    /// A well-formed numeric literal (coordinate or flag).
    Number,
    /// Anything the grammar does not define, or a malformed numeric literal.
    /// Consumes the remainder of the path.
    Unknown,
}

/// Unary lexer for SVG path data.
///
/// Splits a path string into the five [`ScanKind`] token classes without any
/// knowledge of command arities; [`crate::PathParser`] layers the grammar on
/// top. Prefer the parser unless you need the raw token stream.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    path: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(path: &'a str) -> Self {
        Self { path, pos: 0 }
    }

    pub fn path(&self) -> &'a str {
        self.path
    }

    fn peek(&self) -> Option<u8> {
        self.path.as_bytes().get(self.pos).copied()
    }

    fn lex_wsp(&mut self) -> ScanToken {
        let index = self.pos;
        while self.peek().is_some_and(is::wsp) {
            self.pos += 1;
        }
        ScanToken {
            kind: ScanKind::Wsp,
            index,
            len: self.pos - index,
        }
    }

    fn lex_command(&mut self) -> ScanToken {
        let index = self.pos;
        self.pos += 1;
        ScanToken {
            kind: ScanKind::Command,
            index,
            len: 1,
        }
    }

    fn lex_comma_wsp(&mut self) -> ScanToken {
        let index = self.pos;
        self.pos += 1;
        while self.peek().is_some_and(is::wsp) {
            self.pos += 1;
        }
        ScanToken {
            kind: ScanKind::CommaWsp,
            index,
            len: self.pos - index,
        }
    }

    /// Recognize one numeric literal.
    ///
    /// The cursor walks forward while the next byte could still belong to a
    /// number, tracking three facts: whether a sign would still be legal
    /// (`signed`), whether a dot would still be legal (`float`), and whether
    /// an exponent marker was already seen (`exp`). `valid` records whether
    /// the literal is complete at the current position; a literal that ends
    /// while invalid (trailing dot, trailing exponent, doubled sign) turns
    /// into an [`ScanKind::Unknown`] token at the exact offending offset.
    fn lex_number(&mut self) -> ScanToken {
        let index = self.pos;

        let mut valid = self
            .peek()
            .is_some_and(|b| is::digit(b) || is::sign(b) || is::dot(b));
        let mut signed = false;
        let mut float = false;
        let mut exp = false;

        while let Some(b) = self.peek() {
            if !(is::digit(b) || is::sign(b) || is::dot(b) || is::exponent(b)) {
                break;
            }

            if is::digit(b) {
                // An implicit positive number; a later sign starts a new literal.
                signed = true;
                valid = true;
            }

            if is::sign(b) {
                if signed {
                    break;
                }
                if !exp && float {
                    return self.lex_unknown();
                }
                valid = false;
                signed = true;
            }

            if is::dot(b) {
                if float {
                    break;
                }
                valid = false;
                float = true;
            }

            if is::exponent(b) {
                if exp {
                    break;
                }
                valid = false;
                signed = false;
                float = true;
                exp = true;
            }

            self.pos += 1;
        }

        if !valid {
            if self.peek().is_none() {
                // At end of input the offending character is the last one consumed.
                self.pos -= 1;
            }
            return self.lex_unknown();
        }

        ScanToken {
            kind: ScanKind::Number,
            index,
            len: self.pos - index,
        }
    }

    fn lex_unknown(&mut self) -> ScanToken {
        let index = self.pos;
        let len = self.path.len() - index;
        self.pos = self.path.len();
        ScanToken {
            kind: ScanKind::Unknown,
            index,
            len,
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = ScanToken;

    fn next(&mut self) -> Option<ScanToken> {
        let b = self.peek()?;

        Some(if is::wsp(b) {
            self.lex_wsp()
        } else if is::command(b) {
            self.lex_command()
        } else if is::comma(b) {
            self.lex_comma_wsp()
        } else if is::digit(b) || is::sign(b) || is::dot(b) {
            self.lex_number()
        } else {
            self.lex_unknown()
        })
    }
}
