//! CLI subcommands.
//!
//! Each command writes to the streams it is given and reports success as a
//! `bool`; `main` turns a failure into exit status 1.

mod eval;
mod explain;
mod run;

pub use eval::eval_expression;
pub use explain::explain_error;
pub use run::run_file;
