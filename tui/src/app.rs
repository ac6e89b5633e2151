//! Keypad session state: the calculator plus the entry policy in front of it.

use nncalc_engine::{CalcError, Calculator, Event, Operation};

use crate::{DisplayState, UiOptions};

/// How the next digit key is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryState {
    /// Digits extend the number in the bottom operand.
    #[default]
    Appending,
    /// Bottom holds a copy from Enter or Swap; the next digit replaces it.
    AfterEntry,
    /// Bottom holds a computed result; the next digit pushes it into top first.
    AfterResult,
}

impl EntryState {
    fn after(op: Operation) -> Self {
        if op.is_arithmetic() {
            Self::AfterResult
        } else if matches!(op, Operation::Enter | Operation::Swap) {
            Self::AfterEntry
        } else {
            Self::Appending
        }
    }
}

/// Outcome of the most recent key, shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Ready,
    Applied(Operation),
    /// The key's operation was disabled by its legality flag.
    Ignored(Operation),
}

#[derive(Debug)]
pub struct CalcApp {
    calculator: Calculator<DisplayState>,
    entry: EntryState,
    status: Status,
    options: UiOptions,
}

impl CalcApp {
    #[must_use]
    pub fn new(options: UiOptions) -> Self {
        Self {
            calculator: Calculator::new(DisplayState::default()),
            entry: EntryState::default(),
            status: Status::default(),
            options,
        }
    }

    #[inline]
    #[must_use]
    pub fn display(&self) -> &DisplayState {
        self.calculator.view()
    }

    #[inline]
    #[must_use]
    pub fn calculator(&self) -> &Calculator<DisplayState> {
        &self.calculator
    }

    #[inline]
    #[must_use]
    pub fn entry(&self) -> EntryState {
        self.entry
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.options
    }

    /// Forward a keypad event to the calculator, honoring the displayed flags.
    ///
    /// Events whose flag is off are dropped here and never reach the engine.
    /// An error from the engine means the flags and the engine disagree; it is
    /// returned to the caller unhandled.
    pub fn dispatch(&mut self, event: Event) -> Result<(), CalcError> {
        let op = event.operation();
        if !self.display().allows(op) {
            tracing::debug!(op = %op, "Ignoring disabled operation");
            self.status = Status::Ignored(op);
            return Ok(());
        }

        if matches!(event, Event::AppendDigit(_)) {
            match self.entry {
                EntryState::Appending => {}
                EntryState::AfterEntry => self.calculator.apply(Event::Clear)?,
                EntryState::AfterResult => {
                    self.calculator.apply(Event::Enter)?;
                    self.calculator.apply(Event::Clear)?;
                }
            }
        }
        self.calculator.apply(event)?;

        self.entry = EntryState::after(op);
        self.status = Status::Applied(op);
        Ok(())
    }
}
