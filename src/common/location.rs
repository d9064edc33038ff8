//!
//! Byte offsets into the streams flowing through the compressor: [Loc].
//!

use std::{
    fmt::{Display, Formatter},
    ops::{Add, Sub},
};

///
/// Represents the index of a byte in a stream.
///
/// Also doubles as a byte count: the [Loc] after `n` bytes
/// have been moved is `Loc(n)`.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Loc(pub(crate) usize);

impl Loc {
    ///
    /// The position as a raw index.
    ///
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for Loc {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<Loc> for usize {
    fn from(value: Loc) -> Self {
        value.0
    }
}

impl Add<usize> for Loc {
    type Output = Loc;

    fn add(self, rhs: usize) -> Self::Output {
        Self(self.0 + rhs)
    }
}

///
/// Distance between two locations, saturating at zero.
///
impl Sub for Loc {
    type Output = usize;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0.saturating_sub(rhs.0)
    }
}

impl Display for Loc {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "byte {}", self.0)
    }
}
