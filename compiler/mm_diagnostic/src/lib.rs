//! Diagnostics shared by the evaluator and the `mm` CLI.
//!
//! Every failure the evaluator reports carries an [`ErrorCode`] so users can
//! search for it and run `mm --explain <code>` for a longer description.

mod error_code;
pub mod errors;

pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
