//! Arbitrary-precision natural numbers.
//!
//! [`Natural`] is the operand type of the calculator. All arithmetic is in
//! place, mirroring how the engine threads results between the two operand
//! slots. Operations with a precondition check it before touching `self`, so a
//! failed call leaves the value unchanged.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::{CalcError, Digit, DomainError, ParseNaturalError, truncate_with_ellipsis};

/// Largest value accepted where a machine integer is required (power
/// exponents and root indices): the maximum signed 32-bit integer.
pub const INT_LIMIT: u32 = 0x7FFF_FFFF;

/// Longest rendering of an out-of-range value kept in an error message.
const RANGE_ERROR_PREVIEW: usize = 40;

/// A non-negative integer of unbounded size.
///
/// Defaults to zero. Ordering and equality are numeric; [`fmt::Display`] and
/// [`FromStr`] use plain base-10 without separators or sign.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Natural(BigUint);

impl Natural {
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn clear(&mut self) {
        self.0.set_zero();
    }

    pub fn add(&mut self, other: &Natural) {
        self.0 += &other.0;
    }

    pub fn subtract(&mut self, other: &Natural) -> Result<(), DomainError> {
        if self.0 < other.0 {
            return Err(DomainError::NegativeDifference);
        }
        self.0 -= &other.0;
        Ok(())
    }

    pub fn multiply(&mut self, other: &Natural) {
        self.0 *= &other.0;
    }

    /// Replace `self` with the quotient `self / divisor` and return the remainder.
    pub fn divide(&mut self, divisor: &Natural) -> Result<Natural, DomainError> {
        if divisor.is_zero() {
            return Err(DomainError::DivideByZero);
        }
        let (quotient, remainder) = self.0.div_rem(&divisor.0);
        self.0 = quotient;
        Ok(Natural(remainder))
    }

    /// Raise `self` to `exponent`. `0^0` is 1.
    pub fn power(&mut self, exponent: u32) {
        self.0 = self.0.pow(exponent);
    }

    /// Replace `self` with the integer part of its `index`-th root.
    pub fn root(&mut self, index: u32) -> Result<(), DomainError> {
        if index < 2 {
            return Err(DomainError::DegenerateRoot(index));
        }
        self.0 = self.0.nth_root(index);
        Ok(())
    }

    /// Shift a decimal digit in on the right: `self = self * 10 + digit`.
    pub fn append_digit(&mut self, digit: Digit) {
        self.0 *= 10u32;
        self.0 += u32::from(digit);
    }

    /// The value as a machine integer, or `None` above [`INT_LIMIT`].
    ///
    /// Never renders the number, so it is cheap on huge values.
    #[must_use]
    pub fn machine_int(&self) -> Option<u32> {
        self.0.to_u32().filter(|value| *value <= INT_LIMIT)
    }

    /// Like [`Natural::machine_int`], with a [`CalcError::Range`] on overflow.
    pub fn to_machine_int(&self) -> Result<u32, CalcError> {
        self.machine_int().ok_or_else(|| CalcError::Range {
            value: truncate_with_ellipsis(&self.to_string(), RANGE_ERROR_PREVIEW),
            limit: INT_LIMIT,
        })
    }

    /// Move the value out of `source` into `self`, leaving `source` at zero.
    pub fn transfer_from(&mut self, source: &mut Natural) {
        self.0 = std::mem::take(&mut source.0);
    }

    /// Number of decimal digits in the base-10 rendering.
    #[must_use]
    pub fn decimal_len(&self) -> usize {
        if self.is_zero() {
            return 1;
        }
        self.0.to_str_radix(10).len()
    }
}

impl From<u32> for Natural {
    fn from(value: u32) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<u64> for Natural {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl FromStr for Natural {
    type Err = ParseNaturalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseNaturalError(truncate_with_ellipsis(s, RANGE_ERROR_PREVIEW)));
        }
        BigUint::from_str(trimmed)
            .map(Self)
            .map_err(|_| ParseNaturalError(truncate_with_ellipsis(s, RANGE_ERROR_PREVIEW)))
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
