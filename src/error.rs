use thiserror::Error;

use crate::Operator;

/// Every way an evaluation can fail.
///
/// All variants except [`EvaluationError::UnknownOperator`] describe a
/// problem with the caller's input. The `Display` output is meant to be shown
/// to end users as-is.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("expression is {len} bytes long; the limit is {max}")]
    InputTooLong { len: usize, max: usize },

    /// `position` is the character index in the raw input.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// `position` is the byte offset in the whitespace-stripped input.
    #[error("could not read a token at position {position}: {message}")]
    TokenizationFailed { position: usize, message: String },

    #[error("{literal:?} is not a valid number")]
    InvalidNumber { literal: String },

    #[error("closing parenthesis has no matching opener")]
    UnbalancedParentheses,

    #[error("operator `{operator}` needs {needed} operand(s) but only {available} available")]
    StackUnderflow {
        operator: Operator,
        needed: usize,
        available: usize,
    },

    #[error(
        "expression did not reduce to a single value \
         ({operands} operand(s), {pending} pending operator(s) or parentheses)"
    )]
    MalformedExpression { operands: usize, pending: usize },

    #[error("unknown operator `{symbol}`")]
    UnknownOperator { symbol: String },
}

/// Payload-free tag of an [`EvaluationError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InputTooLong,
    InvalidCharacter,
    TokenizationFailed,
    InvalidNumber,
    UnbalancedParentheses,
    StackUnderflow,
    MalformedExpression,
    UnknownOperator,
}

impl EvaluationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InputTooLong { .. } => ErrorKind::InputTooLong,
            Self::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            Self::TokenizationFailed { .. } => ErrorKind::TokenizationFailed,
            Self::InvalidNumber { .. } => ErrorKind::InvalidNumber,
            Self::UnbalancedParentheses => ErrorKind::UnbalancedParentheses,
            Self::StackUnderflow { .. } => ErrorKind::StackUnderflow,
            Self::MalformedExpression { .. } => ErrorKind::MalformedExpression,
            Self::UnknownOperator { .. } => ErrorKind::UnknownOperator,
        }
    }

    /// True when the failure points at a defect in this crate rather than at
    /// the input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::UnknownOperator { .. })
    }
}
