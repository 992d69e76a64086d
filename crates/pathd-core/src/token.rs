use serde::Serialize;

/// The ten SVG path command kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cmd {
    Move,
    Line,
    HorizontalLine,
    VerticalLine,
    CubicBezier,
    SmoothCubicBezier,
    QuadraticBezier,
    SmoothQuadraticBezier,
    Arc,
    ClosePath,
}

impl Cmd {
    /// Map a command letter to its kind and coordinate mode.
    ///
    /// Returns `(kind, relative)`; lowercase letters select relative
    /// coordinates. `None` for anything outside the command alphabet.
    pub fn from_letter(letter: u8) -> Option<(Cmd, bool)> {
        let cmd = match letter.to_ascii_lowercase() {
            b'm' => Cmd::Move,
            b'l' => Cmd::Line,
            b'h' => Cmd::HorizontalLine,
            b'v' => Cmd::VerticalLine,
            b'c' => Cmd::CubicBezier,
            b's' => Cmd::SmoothCubicBezier,
            b'q' => Cmd::QuadraticBezier,
            b't' => Cmd::SmoothQuadraticBezier,
            b'a' => Cmd::Arc,
            b'z' => Cmd::ClosePath,
            _ => return None,
        };
        Some((cmd, letter.is_ascii_lowercase()))
    }

    /// Number of numeric values one instance of the command consumes.
    pub fn arity(self) -> usize {
        match self {
            Cmd::ClosePath => 0,
            Cmd::HorizontalLine | Cmd::VerticalLine => 1,
            Cmd::Move | Cmd::Line | Cmd::SmoothQuadraticBezier => 2,
            Cmd::QuadraticBezier | Cmd::SmoothCubicBezier => 4,
            Cmd::CubicBezier => 6,
            Cmd::Arc => 7,
        }
    }

    /// The command letter in the requested coordinate mode.
    pub fn letter(self, relative: bool) -> char {
        let lower = match self {
            Cmd::Move => 'm',
            Cmd::Line => 'l',
            Cmd::HorizontalLine => 'h',
            Cmd::VerticalLine => 'v',
            Cmd::CubicBezier => 'c',
            Cmd::SmoothCubicBezier => 's',
            Cmd::QuadraticBezier => 'q',
            Cmd::SmoothQuadraticBezier => 't',
            Cmd::Arc => 'a',
            Cmd::ClosePath => 'z',
        };
        if relative {
            lower
        } else {
            lower.to_ascii_uppercase()
        }
    }
}

/// Syntax-error category, selected from what was actually found at the
/// failure offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// A character that cannot begin any construct at the current position.
    #[error("Syntax Error: Unexpected token")]
    UnexpectedToken,
    /// A command letter where a value was required, or an incomplete command.
    #[error("Syntax Error: Unexpected command")]
    UnexpectedCommand,
    /// A comma where the grammar permits none.
    #[error("Syntax Error: Unexpected comma")]
    UnexpectedComma,
    /// A well-formed number where a command letter was required.
    #[error("Syntax Error: Unexpected number")]
    UnexpectedNumber,
    /// A bare sign that does not extend into a valid number.
    #[error("Syntax Error: Unexpected sign character")]
    UnexpectedSign,
    /// A bare dot that does not extend into a valid number.
    #[error("Syntax Error: Unexpected dot")]
    UnexpectedDot,
    /// An arc flag value that is not the literal `0` or `1`.
    #[error("Syntax Error: Invalid arc flag")]
    InvalidArcFlag,
}

/// A syntax error as a `Result`-level value, for callers that do not consume
/// the token stream directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Serialize)]
#[error("{kind} at index {index}")]
pub struct ParseError {
    pub kind: ErrorKind,
    /// Absolute byte offset of the failure within the path.
    pub index: usize,
}

/// High-level token produced by [`crate::PathParser`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "token", rename_all = "kebab-case")]
pub enum PathToken {
    /// Leading white space (the only place it is not absorbed by a command).
    Wsp { index: usize, len: usize },
    /// One command letter plus every argument group attached to it through
    /// shorthand repetition. `numbers` holds `arity * k` values, flattened;
    /// see [`PathToken::tuples`] for the grouped view.
    Command {
        cmd: Cmd,
        relative: bool,
        index: usize,
        len: usize,
        numbers: Vec<f64>,
    },
    /// Terminal error; always the last token of a traversal and always
    /// extending to the end of the input.
    Error {
        kind: ErrorKind,
        index: usize,
        len: usize,
    },
}

impl PathToken {
    pub fn index(&self) -> usize {
        match self {
            PathToken::Wsp { index, .. }
            | PathToken::Command { index, .. }
            | PathToken::Error { index, .. } => *index,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            PathToken::Wsp { len, .. }
            | PathToken::Command { len, .. }
            | PathToken::Error { len, .. } => *len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Arity-sized value groups of a command token; empty for non-command
    /// tokens and for zero-arity commands.
    pub fn tuples(&self) -> impl Iterator<Item = &[f64]> {
        let (chunk, numbers): (usize, &[f64]) = match self {
            PathToken::Command { cmd, numbers, .. } if cmd.arity() > 0 => (cmd.arity(), numbers),
            _ => (1, &[]),
        };
        numbers.chunks_exact(chunk)
    }

    /// Turn an error token into a [`ParseError`]; `None` for other tokens.
    pub fn as_error(&self) -> Option<ParseError> {
        match self {
            PathToken::Error { kind, index, .. } => Some(ParseError {
                kind: *kind,
                index: *index,
            }),
            _ => None,
        }
    }
}
