//! Evaluator for nested min/max expressions.
//!
//! The language has two binary operations, `m` (minimum) and `M` (maximum),
//! over non-negative integer literals:
//!
//! ```text
//! expr := NUMBER | call
//! call := ('m' | 'M') '(' expr SEP expr ')'
//! SEP  := ',' and/or whitespace, allowed anywhere
//! ```
//!
//! Evaluation is one left-to-right scan driving an explicit [`Stack`] of
//! [`StackEntry`] values. Every `)` reduces its call to a single value on the
//! spot, so nesting depth costs stack entries, never native recursion.
//!
//! ```text
//! assert_eq!(mm_eval::calculate("M(15, m(16, 8))"), Ok(15));
//! ```

mod batch;
mod entry;
mod errors;
mod evaluator;
mod span;
mod stack;

pub use batch::calculate_all;
pub use entry::{Operation, StackEntry};
pub use errors::{EvalError, EvalErrorKind, EvalResult, Imbalance};
pub use evaluator::{calculate, Evaluator};
pub use span::Span;
pub use stack::{Stack, StackError};

pub use mm_diagnostic::ErrorCode;
