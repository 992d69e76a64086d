#![forbid(unsafe_code)]

//! Typed model for SVG path data (`d` attribute values).
//!
//! Parsing is delegated to [`pathd-core`](pathd_core) and stays strict by
//! default: [`SvgPath`] implements [`std::str::FromStr`] and rejects the
//! whole string on the first syntax error, while [`SvgPath::parse_lenient`]
//! keeps the valid prefix. On top of the parsed commands this crate offers
//! absolute⇄relative normalization and verbose/compact stringification with
//! ECMAScript-compatible number formatting.
//!
//! ```
//! use pathd::SvgPath;
//!
//! let mut path: SvgPath = "m10,10 h5 v5 z".parse()?;
//! path.to_absolute();
//! assert_eq!(path.to_compact_string(), "M10,10H15V15z");
//! # Ok::<(), pathd::ParseError>(())
//! ```

mod command;
mod coordinates;
mod num;
mod path;

pub use command::{CommandError, PathCommand};
pub use coordinates::Coordinates;
pub use path::SvgPath;

// Re-exported so downstream users need one crate only.
pub use pathd_core::{Cmd, ErrorKind, ParseError, PathParser, PathToken};

#[cfg(test)]
mod tests;
