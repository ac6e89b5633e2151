//! Error taxonomy for calculator events.
//!
//! Every variant describes a defect in the calling discipline: the legality
//! flags exist so that a front end never triggers one. Errors abort the event
//! that raised them and leave the operands as they were.

use thiserror::Error;

use crate::Operation;

/// A degenerate primitive operation on natural numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("division by zero")]
    DivideByZero,
    #[error("subtraction would produce a negative result")]
    NegativeDifference,
    #[error("root index must be at least 2 (got {0})")]
    DegenerateRoot(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A gated event was invoked while its legality flag was false.
    #[error("{op} is not allowed for the current operands")]
    PreconditionViolation { op: Operation },
    /// A value does not fit the machine-integer parameter it is converted to.
    #[error("value {value} is outside the range 0..={limit}")]
    Range { value: String, limit: u32 },
    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid natural number '{0}': expected decimal digits only")]
pub struct ParseNaturalError(pub(crate) String);
