//! Terminal rendering of evaluation errors.
//!
//! ```text
//! error[E1003]: m expects 2 operands, got 3
//!   | m(5,10,15)
//!   |          ^
//! ```

use mm_eval::EvalError;
use std::fmt::Write;

/// Render `error` against the single-line `source` it came from.
pub fn render_error(source: &str, error: &EvalError) -> String {
    let mut out = format!("error[{}]: {}", error.code(), error.message());

    let range = error.span.to_range();
    let start = range.start.min(source.len());
    let end = range.end.clamp(start, source.len());
    let (Some(prefix), Some(marked)) = (source.get(..start), source.get(start..end)) else {
        return out;
    };

    // Keep tabs so the caret lines up under the same column.
    let padding: String = prefix
        .chars()
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();
    let carets = "^".repeat(marked.chars().count().max(1));

    let _ = write!(out, "\n  | {source}\n  | {padding}{carets}");
    out
}

/// Usage hint printed after every failed REPL evaluation.
pub const USAGE_HINT: &str = "hint: expected m(number, number) or M(number, number)";

/// A correct input shown alongside [`USAGE_HINT`].
pub const EXAMPLE_INPUT: &str = "M(m(2,5),M(3,8))";
