//! Single-pass tokenizer and evaluator.
//!
//! The scan dispatches on one character at a time:
//!
//! | Character        | Effect                                   |
//! |------------------|------------------------------------------|
//! | `m`, `M`         | push `Operator`                          |
//! | `(`              | push `OpenMarker`                        |
//! | `)`              | reduce the innermost call to a `Value`   |
//! | `0`-`9`          | consume the whole digit run, push `Value`|
//! | `,`, whitespace  | skip                                     |
//! | anything else    | `InvalidCharacter`                       |
//!
//! A reduction pops exactly two values, then the open marker, then the
//! operator, and pushes the result. When the scan ends the stack must hold a
//! single value.

use crate::entry::{Operation, StackEntry};
use crate::errors::{EvalError, EvalResult, Imbalance};
use crate::span::Span;
use crate::stack::Stack;
use std::iter::Peekable;
use std::str::CharIndices;
use tracing::trace;

/// Evaluate one expression.
///
/// Every call builds its own [`Evaluator`], so calls never share state.
///
/// # Errors
///
/// Returns the first problem found in the input; see [`crate::EvalErrorKind`].
#[tracing::instrument(level = "debug", skip_all, fields(len = expression.len()))]
pub fn calculate(expression: &str) -> EvalResult {
    Evaluator::new(expression).evaluate()
}

/// Evaluation state for one expression.
///
/// Consumed by [`Evaluator::evaluate`]; create a new one per input.
pub struct Evaluator<'a> {
    source: &'a str,
    stack: Stack<StackEntry>,
    /// Number of `OpenMarker`s currently on the stack.
    open_parens: usize,
}

impl<'a> Evaluator<'a> {
    pub fn new(source: &'a str) -> Self {
        Evaluator {
            source,
            stack: Stack::new(),
            open_parens: 0,
        }
    }

    /// Scan the whole input and produce its value.
    ///
    /// # Errors
    ///
    /// Fails at the first malformed construct; nothing is evaluated past it.
    pub fn evaluate(mut self) -> EvalResult {
        let mut chars = self.source.char_indices().peekable();

        while let Some((pos, ch)) = chars.next() {
            let span = Span::from_range(pos..pos + ch.len_utf8());
            match ch {
                _ if Operation::is_symbol(ch) => self.push(StackEntry::Operator(ch)),
                '(' => {
                    self.open_parens += 1;
                    self.push(StackEntry::OpenMarker);
                }
                ')' => self.reduce(span)?,
                '0'..='9' => {
                    let end = consume_digits(&mut chars, pos + 1);
                    let value = self.literal(pos..end)?;
                    self.push(StackEntry::Value(value));
                }
                ',' => {}
                _ if ch.is_whitespace() => {}
                _ => return Err(EvalError::invalid_character(ch, span)),
            }
        }

        self.finish()
    }

    fn push(&mut self, entry: StackEntry) {
        trace!(?entry, depth = self.stack.size(), "push");
        self.stack.push(entry);
    }

    fn pop(&mut self, span: Span) -> Result<StackEntry, EvalError> {
        self.stack
            .pop()
            .map_err(|source| EvalError::empty_stack(source, span))
    }

    fn peek(&self, span: Span) -> Result<StackEntry, EvalError> {
        self.stack
            .peek()
            .copied()
            .map_err(|source| EvalError::empty_stack(source, span))
    }

    /// Parse the digit run at `range`.
    fn literal(&self, range: std::ops::Range<usize>) -> Result<i64, EvalError> {
        let text = &self.source[range.clone()];
        text.parse::<i64>()
            .map_err(|_| EvalError::integer_overflow(text, Span::from_range(range)))
    }

    /// Pop the top entry if it is a value.
    fn pop_value(&mut self, span: Span) -> Result<Option<i64>, EvalError> {
        match self.peek(span)?.as_value() {
            Some(value) => {
                self.pop(span)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Resolve the innermost call on a `)` at `close`.
    fn reduce(&mut self, close: Span) -> Result<(), EvalError> {
        if self.open_parens == 0 {
            return Err(EvalError::unbalanced(Imbalance::UnmatchedClose, close));
        }
        self.open_parens -= 1;

        // Operands come off in reverse textual order.
        let Some(right) = self.pop_value(close)? else {
            return Err(self.arity_error(0, close));
        };
        let Some(left) = self.pop_value(close)? else {
            return Err(self.arity_error(1, close));
        };

        match self.pop(close)? {
            StackEntry::OpenMarker => {}
            StackEntry::Value(_) => {
                let mut got = 3;
                while self.pop_value(close)?.is_some() {
                    got += 1;
                }
                return Err(self.arity_error(got, close));
            }
            entry @ StackEntry::Operator(_) => {
                return Err(EvalError::unbalanced(
                    Imbalance::MisplacedOperands {
                        found: entry.describe(),
                    },
                    close,
                ));
            }
        }

        if self.stack.is_empty() {
            return Err(EvalError::unknown_operation(None, close));
        }
        let operation = match self.pop(close)? {
            StackEntry::Operator(symbol) => Operation::from_symbol(symbol).ok_or_else(|| {
                EvalError::unknown_operation(Some(format!("`{symbol}`")), close)
            })?,
            entry => return Err(EvalError::unknown_operation(Some(entry.describe()), close)),
        };

        let result = operation.apply(left, right);
        trace!(%operation, left, right, result, "reduce");
        self.push(StackEntry::Value(result));
        Ok(())
    }

    /// Build an arity error, naming the operation when the operands were
    /// directly inside a call's parentheses.
    fn arity_error(&mut self, got: usize, close: Span) -> EvalError {
        let mut operation = None;
        if matches!(self.stack.peek(), Ok(StackEntry::OpenMarker)) && self.stack.pop().is_ok() {
            if let Ok(StackEntry::Operator(symbol)) = self.stack.peek() {
                operation = Some(*symbol);
            }
        }
        EvalError::wrong_arity(operation, got, close)
    }

    fn finish(mut self) -> EvalResult {
        let end = Span::point(self.source.len());

        if self.stack.is_empty() {
            return Err(EvalError::empty_expression(Span::from_range(
                0..self.source.len(),
            )));
        }
        if self.open_parens > 0 || self.stack.size() != 1 {
            return Err(EvalError::incomplete(self.open_parens, end));
        }

        match self.pop(end)? {
            StackEntry::Value(value) => Ok(value),
            _ => Err(EvalError::incomplete(0, end)),
        }
    }
}

/// Advance past a run of ASCII digits, returning the byte offset just after it.
fn consume_digits(chars: &mut Peekable<CharIndices<'_>>, mut end: usize) -> usize {
    while let Some(&(pos, ch)) = chars.peek() {
        if !ch.is_ascii_digit() {
            break;
        }
        end = pos + 1;
        chars.next();
    }
    end
}
