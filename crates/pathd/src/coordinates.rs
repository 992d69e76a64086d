use std::fmt;

use serde::{Serialize, Serializer};

use crate::num;

/// An `x,y` pair. Whether it denotes an absolute position or an offset is
/// decided by the command carrying it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl Coordinates {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Resolve an offset against `origin`, yielding an absolute position.
    pub fn absolute_from(self, origin: Coordinates) -> Self {
        Self::new(self.x + origin.x, self.y + origin.y)
    }

    /// Express an absolute position as an offset from `origin`.
    pub fn relative_to(self, origin: Coordinates) -> Self {
        Self::new(self.x - origin.x, self.y - origin.y)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        num::push(&mut out, self.x);
        out.push(',');
        num::push(&mut out, self.y);
        f.write_str(&out)
    }
}

impl Serialize for Coordinates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.x, self.y).serialize(serializer)
    }
}
