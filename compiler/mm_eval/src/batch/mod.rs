//! Parallel evaluation of many independent expressions.

use crate::errors::EvalResult;
use crate::evaluator::calculate;
use rayon::prelude::*;
use tracing::debug;

/// Evaluate every expression, in parallel, returning results in input order.
///
/// Each expression gets its own evaluator, so one failure never affects the
/// others.
pub fn calculate_all<S>(expressions: &[S]) -> Vec<EvalResult>
where
    S: AsRef<str> + Sync,
{
    debug!(count = expressions.len(), "evaluating batch");
    expressions
        .par_iter()
        .map(|expression| calculate(expression.as_ref()))
        .collect()
}
