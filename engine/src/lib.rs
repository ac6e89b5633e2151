//! Operation engine for nncalc.
//!
//! This crate owns the calculator state (two natural-number operands) and the
//! only code allowed to mutate it. Front ends drive it one [`Event`] at a time
//! and observe the result through a [`CalcView`].
//!
//! ```text
//! caller -> Calculator::apply(event) -> Operands mutated -> Legality::of(..)
//!                                                               |
//!                                                               v
//!                                                      CalcView::update_*
//! ```

mod calculator;
mod event;
mod legality;
mod operands;
mod view;

pub use calculator::Calculator;
pub use event::Event;
pub use legality::{Legality, TWO};
pub use operands::Operands;
pub use view::{CalcView, NullView};

pub use nncalc_types::{
    CalcError, Digit, DomainError, INT_LIMIT, Natural, Operation, ParseNaturalError,
};
