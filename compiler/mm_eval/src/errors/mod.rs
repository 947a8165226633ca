//! Error types for expression evaluation.
//!
//! `EvalErrorKind` carries the structured data of each failure and renders the
//! human-readable message through `Display`. `EvalError` pairs a kind with the
//! span of input where it was detected. Factory functions are the public way
//! to build errors so the kind and location always travel together.

use crate::span::Span;
use crate::stack::StackError;
use mm_diagnostic::ErrorCode;
use std::fmt;

/// Result of evaluating one expression.
pub type EvalResult = Result<i64, EvalError>;

/// How a parenthesis failed to match up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Imbalance {
    /// A `)` with no `(` left to close.
    UnmatchedClose,
    /// The operands of a `)` sit on top of something other than their `(`.
    MisplacedOperands { found: String },
}

/// Typed error category.
///
/// Each variant maps to one [`ErrorCode`] via [`EvalErrorKind::code`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Lexical
    InvalidCharacter {
        ch: char,
    },
    IntegerOverflow {
        literal: String,
    },

    // Structural
    EmptyExpression,
    UnbalancedParentheses(Imbalance),
    WrongArity {
        /// Operation symbol, when one was found beneath the operands.
        operation: Option<char>,
        expected: usize,
        got: usize,
    },
    UnknownOperation {
        /// What occupied the operation slot; `None` if nothing did.
        found: Option<String>,
    },
    IncompleteExpression {
        unclosed: usize,
    },

    // Internal
    EmptyStack(StackError),
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidCharacter { .. } => ErrorCode::E0001,
            Self::IntegerOverflow { .. } => ErrorCode::E0002,
            Self::EmptyExpression => ErrorCode::E1001,
            Self::UnbalancedParentheses(_) => ErrorCode::E1002,
            Self::WrongArity { .. } => ErrorCode::E1003,
            Self::UnknownOperation { .. } => ErrorCode::E1004,
            Self::IncompleteExpression { .. } => ErrorCode::E1005,
            Self::EmptyStack(_) => ErrorCode::E9001,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { ch } => write!(f, "invalid character {ch:?}"),
            Self::IntegerOverflow { literal } => {
                write!(f, "integer literal {literal} is out of range (max {})", i64::MAX)
            }

            Self::EmptyExpression => write!(f, "empty expression"),
            Self::UnbalancedParentheses(Imbalance::UnmatchedClose) => {
                write!(f, "unbalanced parentheses: unmatched ')'")
            }
            Self::UnbalancedParentheses(Imbalance::MisplacedOperands { found }) => {
                write!(
                    f,
                    "unbalanced parentheses: expected '(' before the operands, found {found}"
                )
            }
            Self::WrongArity {
                operation,
                expected,
                got,
            } => {
                let operand_word = if *expected == 1 { "operand" } else { "operands" };
                match operation {
                    Some(symbol) => {
                        write!(f, "{symbol} expects {expected} {operand_word}, got {got}")
                    }
                    None => write!(f, "expected {expected} {operand_word}, got {got}"),
                }
            }
            Self::UnknownOperation { found: None } => {
                write!(f, "missing operation before '('")
            }
            Self::UnknownOperation { found: Some(found) } => {
                write!(f, "expected operation `m` or `M`, found {found}")
            }
            Self::IncompleteExpression { unclosed: 0 } => write!(f, "incomplete expression"),
            Self::IncompleteExpression { unclosed } => {
                write!(f, "incomplete expression: {unclosed} unclosed '('")
            }

            Self::EmptyStack(source) => write!(f, "internal error: {source}"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Location in the input where the error was detected.
    pub span: Span,
}

impl EvalError {
    fn new(kind: EvalErrorKind, span: Span) -> Self {
        EvalError { kind, span }
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn invalid_character(ch: char, span: Span) -> Self {
        Self::new(EvalErrorKind::InvalidCharacter { ch }, span)
    }

    pub fn integer_overflow(literal: impl Into<String>, span: Span) -> Self {
        Self::new(
            EvalErrorKind::IntegerOverflow {
                literal: literal.into(),
            },
            span,
        )
    }

    pub fn empty_expression(span: Span) -> Self {
        Self::new(EvalErrorKind::EmptyExpression, span)
    }

    pub fn unbalanced(imbalance: Imbalance, span: Span) -> Self {
        Self::new(EvalErrorKind::UnbalancedParentheses(imbalance), span)
    }

    /// Arity failure for the fixed two-operand calls of the language.
    pub fn wrong_arity(operation: Option<char>, got: usize, span: Span) -> Self {
        Self::new(
            EvalErrorKind::WrongArity {
                operation,
                expected: 2,
                got,
            },
            span,
        )
    }

    pub fn unknown_operation(found: Option<String>, span: Span) -> Self {
        Self::new(EvalErrorKind::UnknownOperation { found }, span)
    }

    pub fn incomplete(unclosed: usize, span: Span) -> Self {
        Self::new(EvalErrorKind::IncompleteExpression { unclosed }, span)
    }

    pub fn empty_stack(source: StackError, span: Span) -> Self {
        Self::new(EvalErrorKind::EmptyStack(source), span)
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for EvalError {}

#[cfg(test)]
mod tests;
