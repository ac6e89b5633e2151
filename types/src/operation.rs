use std::fmt;

/// Names of the calculator events, independent of their payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Clear,
    Swap,
    Enter,
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Root,
    AppendDigit,
}

impl Operation {
    pub const ALL: [Operation; 10] = [
        Operation::Clear,
        Operation::Swap,
        Operation::Enter,
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::Root,
        Operation::AppendDigit,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Operation::Clear => "clear",
            Operation::Swap => "swap",
            Operation::Enter => "enter",
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::Root => "root",
            Operation::AppendDigit => "append digit",
        }
    }

    /// Whether the operation has a legality flag. The others are always legal.
    #[must_use]
    pub const fn is_gated(self) -> bool {
        matches!(
            self,
            Operation::Subtract | Operation::Divide | Operation::Power | Operation::Root
        )
    }

    /// Whether the operation combines both operands and promotes the result.
    #[must_use]
    pub const fn is_arithmetic(self) -> bool {
        matches!(
            self,
            Operation::Add
                | Operation::Subtract
                | Operation::Multiply
                | Operation::Divide
                | Operation::Power
                | Operation::Root
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
