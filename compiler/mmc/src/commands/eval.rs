//! The `eval` command: evaluate one expression given on the command line.

use crate::render::render_error;
use mm_eval::calculate;
use std::io::{self, Write};

/// Print the value of `expression`, or its rendered error to `err`.
pub fn eval_expression(
    expression: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let expression = expression.trim();
    match calculate(expression) {
        Ok(value) => {
            writeln!(out, "{value}")?;
            Ok(true)
        }
        Err(error) => {
            writeln!(err, "{}", render_error(expression, &error))?;
            Ok(false)
        }
    }
}
