use std::fmt;

use crate::CalcError;

/// A decimal digit in `0..=9`.
///
/// Constructing one is the only place the digit range is checked; everything
/// downstream takes a `Digit` and cannot receive an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    pub const MAX: u8 = 9;

    pub fn new(value: u8) -> Result<Self, CalcError> {
        if value > Self::MAX {
            return Err(CalcError::Range {
                value: value.to_string(),
                limit: u32::from(Self::MAX),
            });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_digit(10) {
            Some(d) => Self::new(d as u8),
            None => Err(CalcError::Range {
                value: value.escape_default().to_string(),
                limit: u32::from(Self::MAX),
            }),
        }
    }
}

impl From<Digit> for u32 {
    fn from(value: Digit) -> Self {
        u32::from(value.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
