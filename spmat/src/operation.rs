//! Operation selector for the command line driver

use std::fmt;
use std::str::FromStr;

use spmat_core::{MatrixElement, SparseStore};

use crate::Error;

/// One of the three binary matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// All operations in menu order
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Menu number of this operation
    pub const fn selector(self) -> u8 {
        match self {
            Operation::Add => 1,
            Operation::Subtract => 2,
            Operation::Multiply => 3,
        }
    }

    /// Menu label
    pub const fn label(self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
        }
    }

    /// Status line printed once the operation succeeded
    pub const fn completed_message(self) -> &'static str {
        match self {
            Operation::Add => "Addition completed.",
            Operation::Subtract => "Subtraction completed.",
            Operation::Multiply => "Multiplication completed.",
        }
    }

    /// Combine two matrices
    pub fn apply<T: MatrixElement>(
        self,
        lhs: &SparseStore<T>,
        rhs: &SparseStore<T>,
    ) -> spmat_core::Result<SparseStore<T>> {
        match self {
            Operation::Add => spmat_core::add(lhs, rhs),
            Operation::Subtract => spmat_core::subtract(lhs, rhs),
            Operation::Multiply => spmat_core::multiply(lhs, rhs),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        };
        f.write_str(name)
    }
}

impl FromStr for Operation {
    type Err = Error;

    /// Accepts the menu numbers `1`-`3` or the operation names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        match input.to_ascii_lowercase().as_str() {
            "1" | "add" => Ok(Operation::Add),
            "2" | "subtract" | "sub" => Ok(Operation::Subtract),
            "3" | "multiply" | "mul" => Ok(Operation::Multiply),
            _ => Err(Error::InvalidOperation {
                input: input.to_string(),
            }),
        }
    }
}
