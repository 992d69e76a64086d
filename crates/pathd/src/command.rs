use std::fmt;

use pathd_core::Cmd;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::num;
use crate::Coordinates;

/// One drawing instruction of a path.
///
/// Every data-carrying variant stores exactly one argument tuple; shorthand
/// repetition is resolved into separate commands when a path is built from
/// tokens. `relative` mirrors the letter case (`m` vs `M`). Close-path takes
/// no coordinates and always prints as `z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    Move {
        relative: bool,
        to: Coordinates,
    },
    Line {
        relative: bool,
        to: Coordinates,
    },
    Horizontal {
        relative: bool,
        x: f64,
    },
    Vertical {
        relative: bool,
        y: f64,
    },
    Cubic {
        relative: bool,
        control1: Coordinates,
        control2: Coordinates,
        to: Coordinates,
    },
    SmoothCubic {
        relative: bool,
        control2: Coordinates,
        to: Coordinates,
    },
    Quadratic {
        relative: bool,
        control: Coordinates,
        to: Coordinates,
    },
    SmoothQuadratic {
        relative: bool,
        to: Coordinates,
    },
    Arc {
        relative: bool,
        radii: Coordinates,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: Coordinates,
    },
    Close,
}

/// Failure building a command from a letter and loose values.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command letter `{0}`")]
    UnknownLetter(char),
    #[error("command `{letter}` takes {expected} values, found {found}")]
    WrongArity {
        letter: char,
        expected: usize,
        found: usize,
    },
    #[error("arc flag must be 0 or 1, found {0}")]
    InvalidFlag(f64),
}

impl PathCommand {
    /// Build a command from a letter and exactly one argument tuple.
    pub fn from_parts(letter: char, values: &[f64]) -> Result<Self, CommandError> {
        let byte = u8::try_from(letter).map_err(|_| CommandError::UnknownLetter(letter))?;
        let Some((cmd, relative)) = Cmd::from_letter(byte) else {
            return Err(CommandError::UnknownLetter(letter));
        };
        if values.len() != cmd.arity() {
            return Err(CommandError::WrongArity {
                letter,
                expected: cmd.arity(),
                found: values.len(),
            });
        }
        if cmd == Cmd::Arc {
            for &flag in &values[3..5] {
                if flag != 0.0 && flag != 1.0 {
                    return Err(CommandError::InvalidFlag(flag));
                }
            }
        }
        Ok(Self::from_tuple(cmd, relative, values))
    }

    /// `values` must hold exactly `cmd.arity()` elements.
    pub(crate) fn from_tuple(cmd: Cmd, relative: bool, values: &[f64]) -> Self {
        match cmd {
            Cmd::Move => PathCommand::Move {
                relative,
                to: Coordinates::new(values[0], values[1]),
            },
            Cmd::Line => PathCommand::Line {
                relative,
                to: Coordinates::new(values[0], values[1]),
            },
            Cmd::HorizontalLine => PathCommand::Horizontal {
                relative,
                x: values[0],
            },
            Cmd::VerticalLine => PathCommand::Vertical {
                relative,
                y: values[0],
            },
            Cmd::CubicBezier => PathCommand::Cubic {
                relative,
                control1: Coordinates::new(values[0], values[1]),
                control2: Coordinates::new(values[2], values[3]),
                to: Coordinates::new(values[4], values[5]),
            },
            Cmd::SmoothCubicBezier => PathCommand::SmoothCubic {
                relative,
                control2: Coordinates::new(values[0], values[1]),
                to: Coordinates::new(values[2], values[3]),
            },
            Cmd::QuadraticBezier => PathCommand::Quadratic {
                relative,
                control: Coordinates::new(values[0], values[1]),
                to: Coordinates::new(values[2], values[3]),
            },
            Cmd::SmoothQuadraticBezier => PathCommand::SmoothQuadratic {
                relative,
                to: Coordinates::new(values[0], values[1]),
            },
            Cmd::Arc => PathCommand::Arc {
                relative,
                radii: Coordinates::new(values[0], values[1]),
                rotation: values[2],
                large_arc: values[3] != 0.0,
                sweep: values[4] != 0.0,
                to: Coordinates::new(values[5], values[6]),
            },
            Cmd::ClosePath => PathCommand::Close,
        }
    }

    pub fn cmd(&self) -> Cmd {
        match self {
            PathCommand::Move { .. } => Cmd::Move,
            PathCommand::Line { .. } => Cmd::Line,
            PathCommand::Horizontal { .. } => Cmd::HorizontalLine,
            PathCommand::Vertical { .. } => Cmd::VerticalLine,
            PathCommand::Cubic { .. } => Cmd::CubicBezier,
            PathCommand::SmoothCubic { .. } => Cmd::SmoothCubicBezier,
            PathCommand::Quadratic { .. } => Cmd::QuadraticBezier,
            PathCommand::SmoothQuadratic { .. } => Cmd::SmoothQuadraticBezier,
            PathCommand::Arc { .. } => Cmd::Arc,
            PathCommand::Close => Cmd::ClosePath,
        }
    }

    /// Close-path is neither absolute nor relative; it reports `false`.
    pub fn is_relative(&self) -> bool {
        match self {
            PathCommand::Move { relative, .. }
            | PathCommand::Line { relative, .. }
            | PathCommand::Horizontal { relative, .. }
            | PathCommand::Vertical { relative, .. }
            | PathCommand::Cubic { relative, .. }
            | PathCommand::SmoothCubic { relative, .. }
            | PathCommand::Quadratic { relative, .. }
            | PathCommand::SmoothQuadratic { relative, .. }
            | PathCommand::Arc { relative, .. } => *relative,
            PathCommand::Close => false,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            PathCommand::Close => 'z',
            _ => self.cmd().letter(self.is_relative()),
        }
    }

    /// The argument tuple in SVG2 order; arc flags come out as `0.0`/`1.0`.
    pub fn parameters(&self) -> Vec<f64> {
        match self {
            PathCommand::Move { to, .. }
            | PathCommand::Line { to, .. }
            | PathCommand::SmoothQuadratic { to, .. } => vec![to.x, to.y],
            PathCommand::Horizontal { x, .. } => vec![*x],
            PathCommand::Vertical { y, .. } => vec![*y],
            PathCommand::Cubic {
                control1,
                control2,
                to,
                ..
            } => vec![control1.x, control1.y, control2.x, control2.y, to.x, to.y],
            PathCommand::SmoothCubic { control2, to, .. } => {
                vec![control2.x, control2.y, to.x, to.y]
            }
            PathCommand::Quadratic { control, to, .. } => {
                vec![control.x, control.y, to.x, to.y]
            }
            PathCommand::Arc {
                radii,
                rotation,
                large_arc,
                sweep,
                to,
                ..
            } => vec![
                radii.x,
                radii.y,
                *rotation,
                f64::from(u8::from(*large_arc)),
                f64::from(u8::from(*sweep)),
                to.x,
                to.y,
            ],
            PathCommand::Close => Vec::new(),
        }
    }

    /// Resolve relative coordinates against `origin`. Radii, rotation and
    /// flags are positions in neither sense and stay untouched. Already
    /// absolute commands are left alone.
    pub fn to_absolute(&mut self, origin: Coordinates) {
        if !self.is_relative() {
            return;
        }
        match self {
            PathCommand::Move { relative, to }
            | PathCommand::Line { relative, to }
            | PathCommand::SmoothQuadratic { relative, to }
            | PathCommand::Arc { relative, to, .. } => {
                *to = to.absolute_from(origin);
                *relative = false;
            }
            PathCommand::Horizontal { relative, x } => {
                *x += origin.x;
                *relative = false;
            }
            PathCommand::Vertical { relative, y } => {
                *y += origin.y;
                *relative = false;
            }
            PathCommand::Cubic {
                relative,
                control1,
                control2,
                to,
            } => {
                *control1 = control1.absolute_from(origin);
                *control2 = control2.absolute_from(origin);
                *to = to.absolute_from(origin);
                *relative = false;
            }
            PathCommand::SmoothCubic {
                relative,
                control2,
                to,
            } => {
                *control2 = control2.absolute_from(origin);
                *to = to.absolute_from(origin);
                *relative = false;
            }
            PathCommand::Quadratic {
                relative,
                control,
                to,
            } => {
                *control = control.absolute_from(origin);
                *to = to.absolute_from(origin);
                *relative = false;
            }
            PathCommand::Close => {}
        }
    }

    /// Express absolute coordinates as offsets from `origin`; inverse of
    /// [`PathCommand::to_absolute`].
    pub fn to_relative(&mut self, origin: Coordinates) {
        if self.is_relative() {
            return;
        }
        match self {
            PathCommand::Move { relative, to }
            | PathCommand::Line { relative, to }
            | PathCommand::SmoothQuadratic { relative, to }
            | PathCommand::Arc { relative, to, .. } => {
                *to = to.relative_to(origin);
                *relative = true;
            }
            PathCommand::Horizontal { relative, x } => {
                *x -= origin.x;
                *relative = true;
            }
            PathCommand::Vertical { relative, y } => {
                *y -= origin.y;
                *relative = true;
            }
            PathCommand::Cubic {
                relative,
                control1,
                control2,
                to,
            } => {
                *control1 = control1.relative_to(origin);
                *control2 = control2.relative_to(origin);
                *to = to.relative_to(origin);
                *relative = true;
            }
            PathCommand::SmoothCubic {
                relative,
                control2,
                to,
            } => {
                *control2 = control2.relative_to(origin);
                *to = to.relative_to(origin);
                *relative = true;
            }
            PathCommand::Quadratic {
                relative,
                control,
                to,
            } => {
                *control = control.relative_to(origin);
                *to = to.relative_to(origin);
                *relative = true;
            }
            PathCommand::Close => {}
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        out.push(self.letter());
        for (i, value) in self.parameters().iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            num::push(&mut out, *value);
        }
        f.write_str(&out)
    }
}

impl Serialize for PathCommand {
    /// Array form: `["M", 0, 0]`. Arc flags serialize as the integers `0`/`1`
    /// rather than floats.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let params = self.parameters();
        let mut seq = serializer.serialize_seq(Some(1 + params.len()))?;
        seq.serialize_element(&self.letter())?;
        let flags = matches!(self, PathCommand::Arc { .. });
        for (i, value) in params.iter().enumerate() {
            if flags && matches!(i, 3 | 4) {
                seq.serialize_element(&((*value != 0.0) as u8))?;
            } else {
                seq.serialize_element(value)?;
            }
        }
        seq.end()
    }
}
