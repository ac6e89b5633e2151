use nncalc_types::{Digit, Operation};

/// One user action. Exactly one is applied per call into the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    Clear,
    Swap,
    Enter,
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Root,
    AppendDigit(Digit),
}

impl Event {
    #[must_use]
    pub const fn operation(self) -> Operation {
        match self {
            Event::Clear => Operation::Clear,
            Event::Swap => Operation::Swap,
            Event::Enter => Operation::Enter,
            Event::Add => Operation::Add,
            Event::Subtract => Operation::Subtract,
            Event::Multiply => Operation::Multiply,
            Event::Divide => Operation::Divide,
            Event::Power => Operation::Power,
            Event::Root => Operation::Root,
            Event::AppendDigit(_) => Operation::AppendDigit,
        }
    }
}

impl From<Digit> for Event {
    fn from(digit: Digit) -> Self {
        Event::AppendDigit(digit)
    }
}
