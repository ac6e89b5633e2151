//! Core value types for nncalc.
//!
//! This crate contains pure value types with no IO and no terminal dependency:
//! the arbitrary-precision [`Natural`] operand, validated decimal [`Digit`]s,
//! the [`Operation`] names, and the [`CalcError`] taxonomy shared by the engine
//! and every front end.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod digit;
mod error;
mod natural;
mod operation;
mod text;

pub use digit::Digit;
pub use error::{CalcError, DomainError, ParseNaturalError};
pub use natural::{INT_LIMIT, Natural};
pub use operation::Operation;
pub use text::truncate_with_ellipsis;
