#![forbid(unsafe_code)]

//! Strict SVG2 path-data scanner and parser.
//!
//! Design goals:
//! - enforce the SVG2 `d`-attribute grammar exactly (numeric edge cases,
//!   flag digits, separator rules) with byte-precise error offsets
//! - pull-based token production: no work until a token is requested, no
//!   tokens after an error
//! - no I/O, no logging, no shared state; a parser is a pure function of the
//!   input string
//!
//! The typed command objects built from this token stream live in the
//! `pathd` crate.

pub mod is;
mod parser;
mod scanner;
mod token;

pub use parser::PathParser;
pub use scanner::{ScanKind, ScanToken, Scanner};
pub use token::{Cmd, ErrorKind, ParseError, PathToken};
