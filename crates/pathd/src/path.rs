use std::fmt;
use std::str::FromStr;

use pathd_core::{Cmd, ParseError, PathParser, PathToken};

use crate::num;
use crate::{Coordinates, PathCommand};

/// An ordered list of path commands; the parsed form of a `d` attribute.
///
/// Building a path from a string resolves shorthand repetition: every
/// argument tuple of a command token becomes its own [`PathCommand`], and the
/// extra tuples of a move become line commands of the same case. Repeated
/// horizontal/vertical values split the same way, one command per value, so
/// absolute coordinates keep their meaning.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
#[serde(transparent)]
pub struct SvgPath {
    commands: Vec<PathCommand>,
}

impl SvgPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a partial path: the leading-move rule is waived so the result
    /// can be spliced after other commands. Everything else stays strict.
    pub fn parse_fragment(path: &str) -> Result<Self, ParseError> {
        Self::from_parser(PathParser::fragment(path))
    }

    /// Parse as much of `path` as is valid. On a syntax error the commands
    /// before the error are kept, the suffix is dropped, and the error is
    /// returned alongside for callers that want to surface it.
    pub fn parse_lenient(path: &str) -> (Self, Option<ParseError>) {
        let mut parsed = Self::new();
        for token in PathParser::new(path) {
            if let Some(err) = token.as_error() {
                tracing::debug!(error = %err, "dropping path suffix at syntax error");
                return (parsed, Some(err));
            }
            parsed.push_token(&token);
        }
        (parsed, None)
    }

    fn from_parser(parser: PathParser<'_>) -> Result<Self, ParseError> {
        let mut parsed = Self::new();
        for token in parser {
            if let Some(err) = token.as_error() {
                return Err(err);
            }
            parsed.push_token(&token);
        }
        Ok(parsed)
    }

    /// Append the commands of one parsed token, splitting repetition.
    fn push_token(&mut self, token: &PathToken) {
        let PathToken::Command { cmd, relative, .. } = token else {
            return;
        };
        match cmd {
            Cmd::ClosePath => self.commands.push(PathCommand::Close),
            Cmd::Move => {
                let mut tuples = token.tuples();
                if let Some(first) = tuples.next() {
                    self.commands
                        .push(PathCommand::from_tuple(Cmd::Move, *relative, first));
                }
                for tuple in tuples {
                    self.commands
                        .push(PathCommand::from_tuple(Cmd::Line, *relative, tuple));
                }
            }
            _ => {
                for tuple in token.tuples() {
                    self.commands
                        .push(PathCommand::from_tuple(*cmd, *relative, tuple));
                }
            }
        }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// A fragment does not start with a move; stringification prefixes
    /// `M0,0` to keep the output well formed.
    pub fn is_fragment(&self) -> bool {
        !matches!(
            self.commands.first(),
            None | Some(PathCommand::Move { .. })
        )
    }

    /// Rewrite every command to absolute coordinates, in place.
    ///
    /// Walks the current point the way a renderer would: a move also records
    /// the subpath start, close-path jumps back to it, and horizontal and
    /// vertical lines update one axis only.
    pub fn to_absolute(&mut self) {
        let mut cursor = Coordinates::default();
        let mut start = Coordinates::default();
        for command in &mut self.commands {
            command.to_absolute(cursor);
            match command {
                PathCommand::Move { to, .. } => {
                    cursor = *to;
                    start = *to;
                }
                PathCommand::Line { to, .. }
                | PathCommand::Cubic { to, .. }
                | PathCommand::SmoothCubic { to, .. }
                | PathCommand::Quadratic { to, .. }
                | PathCommand::SmoothQuadratic { to, .. }
                | PathCommand::Arc { to, .. } => cursor = *to,
                PathCommand::Horizontal { x, .. } => cursor.x = *x,
                PathCommand::Vertical { y, .. } => cursor.y = *y,
                PathCommand::Close => cursor = start,
            }
        }
    }

    /// Rewrite every command to relative coordinates, in place; inverse of
    /// [`SvgPath::to_absolute`].
    pub fn to_relative(&mut self) {
        let mut cursor = Coordinates::default();
        let mut start = Coordinates::default();
        for command in &mut self.commands {
            command.to_relative(cursor);
            match command {
                PathCommand::Move { to, .. } => {
                    cursor = to.absolute_from(cursor);
                    start = cursor;
                }
                PathCommand::Line { to, .. }
                | PathCommand::Cubic { to, .. }
                | PathCommand::SmoothCubic { to, .. }
                | PathCommand::Quadratic { to, .. }
                | PathCommand::SmoothQuadratic { to, .. }
                | PathCommand::Arc { to, .. } => cursor = to.absolute_from(cursor),
                PathCommand::Horizontal { x, .. } => cursor.x += *x,
                PathCommand::Vertical { y, .. } => cursor.y += *y,
                PathCommand::Close => cursor = start,
            }
        }
    }

    /// One-line form using implicit repetition: a repeated command letter is
    /// dropped and its tuples joined with commas, and a line directly after a
    /// same-case move continues the move's implicit line sequence. Moves
    /// themselves never merge with each other.
    pub fn to_compact_string(&self) -> String {
        let mut out = String::new();
        let mut prev = '\0';
        if self.is_fragment() {
            out.push_str("M0,0");
            prev = 'M';
        }
        for command in &self.commands {
            let letter = command.letter();
            let prev_for = match (prev, letter) {
                ('m', 'l') | ('M', 'L') => letter,
                _ => prev,
            };
            if letter == prev_for && !matches!(letter, 'm' | 'M' | 'z') {
                for value in command.parameters() {
                    out.push(',');
                    num::push(&mut out, value);
                }
            } else {
                out.push(letter);
                for (i, value) in command.parameters().iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    num::push(&mut out, *value);
                }
            }
            prev = letter;
        }
        out
    }
}

impl FromStr for SvgPath {
    type Err = ParseError;

    /// Strict parse: the whole string must conform to the grammar.
    fn from_str(path: &str) -> Result<Self, Self::Err> {
        Self::from_parser(PathParser::new(path))
    }
}

impl fmt::Display for SvgPath {
    /// Verbose form: one command per line, `M0,0` prepended for fragments.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        if self.is_fragment() {
            f.write_str("M0,0")?;
            first = false;
        }
        for command in &self.commands {
            if !first {
                f.write_str("\n")?;
            }
            write!(f, "{command}")?;
            first = false;
        }
        Ok(())
    }
}

impl IntoIterator for SvgPath {
    type Item = PathCommand;
    type IntoIter = std::vec::IntoIter<PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

impl<'a> IntoIterator for &'a SvgPath {
    type Item = &'a PathCommand;
    type IntoIter = std::slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl FromIterator<PathCommand> for SvgPath {
    fn from_iter<I: IntoIterator<Item = PathCommand>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}
