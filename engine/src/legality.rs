//! Legality policy authority.
//!
//! This module is the single encoding point for which operations may be
//! invoked given the current operands. The calculator consults it before every
//! gated event and publishes it to the view after every event.

use nncalc_types::{CalcError, Operation};

use crate::Operands;

/// Smallest root index offered. Roots by 0 or 1 are degenerate.
pub const TWO: u32 = 2;

/// Which gated operations are currently allowed.
///
/// A pure projection of [`Operands`]: it carries no state of its own and two
/// computations over the same operands always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Legality {
    pub subtract_allowed: bool,
    pub divide_allowed: bool,
    pub power_allowed: bool,
    pub root_allowed: bool,
}

impl Legality {
    #[must_use]
    pub fn of(operands: &Operands) -> Self {
        let top = operands.top();
        let bottom = operands.bottom();
        let machine_bottom = bottom.machine_int();

        Self {
            subtract_allowed: bottom <= top,
            divide_allowed: !bottom.is_zero(),
            power_allowed: machine_bottom.is_some(),
            root_allowed: machine_bottom.is_some_and(|index| index >= TWO),
        }
    }

    /// Whether `op` may be invoked. Ungated operations are always allowed.
    #[must_use]
    pub const fn allows(self, op: Operation) -> bool {
        match op {
            Operation::Subtract => self.subtract_allowed,
            Operation::Divide => self.divide_allowed,
            Operation::Power => self.power_allowed,
            Operation::Root => self.root_allowed,
            Operation::Clear
            | Operation::Swap
            | Operation::Enter
            | Operation::Add
            | Operation::Multiply
            | Operation::AppendDigit => true,
        }
    }

    pub(crate) fn ensure(self, op: Operation) -> Result<(), CalcError> {
        if self.allows(op) {
            Ok(())
        } else {
            Err(CalcError::PreconditionViolation { op })
        }
    }
}
