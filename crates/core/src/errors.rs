use thiserror::Error;

use crate::units::Quantity;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error("Please enter at least 2 values to calculate the others.")]
    InsufficientInputs { supplied: usize },
    #[error("{reason}")]
    InvalidValue {
        quantity: Quantity,
        reason: InvalidReason,
    },
}

impl SolveError {
    pub fn invalid(quantity: Quantity, reason: InvalidReason) -> Self {
        Self::InvalidValue { quantity, reason }
    }

    /// The field that triggered the error, if any.
    pub fn quantity(&self) -> Option<Quantity> {
        match self {
            Self::InvalidValue { quantity, .. } => Some(*quantity),
            Self::InsufficientInputs { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidReason {
    #[error("Values cannot be zero.")]
    Zero,
    #[error("All values must be positive numbers greater than zero.")]
    NotPositive,
    #[error("All values must be positive numbers greater than zero.")]
    Unparseable(String),
}
