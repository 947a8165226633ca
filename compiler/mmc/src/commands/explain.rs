//! The `explain` command: display documentation for error codes.

use mm_diagnostic::{ErrorCode, ErrorDocs};
use std::io::{self, Write};

/// Display detailed documentation for a given error code string.
pub fn explain_error(code_str: &str, out: &mut impl Write, err: &mut impl Write) -> io::Result<bool> {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        writeln!(err, "Unknown error code: {code_str}")?;
        writeln!(err)?;
        writeln!(err, "Codes have the format EXXXX where X is a digit.")?;
        let known: Vec<_> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
        writeln!(err, "Known codes: {}", known.join(", "))?;
        return Ok(false);
    };

    if let Some(doc) = ErrorDocs::get(code) {
        write!(out, "{doc}")?;
        Ok(true)
    } else {
        writeln!(err, "No documentation available for {code}")?;
        Ok(false)
    }
}
