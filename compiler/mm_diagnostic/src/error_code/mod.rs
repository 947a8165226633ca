//! Error codes for all evaluator diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1003`) with the first digit
//! indicating where the problem was found. Used for `--explain` lookups.

use std::fmt;

/// Error codes for all evaluator diagnostics.
///
/// Format: E#### where first digit indicates the category:
/// - E0xxx: Lexical errors (bad characters, bad literals)
/// - E1xxx: Structural errors (parentheses, arity, operations)
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexical Errors (E0xxx)
    /// Invalid character in expression
    E0001,
    /// Integer literal out of range
    E0002,

    // Structural Errors (E1xxx)
    /// Empty expression
    E1001,
    /// Unbalanced parentheses
    E1002,
    /// Wrong number of operands
    E1003,
    /// Unknown or missing operation
    E1004,
    /// Incomplete expression
    E1005,

    // Internal Errors (E9xxx)
    /// Pop or peek on an empty evaluation stack
    E9001,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// When adding a new variant: add it to the enum, `as_str()`, and here.
    pub const ALL: &[ErrorCode] = &[
        // Lexical
        ErrorCode::E0001,
        ErrorCode::E0002,
        // Structural
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        // Internal
        ErrorCode::E9001,
    ];

    /// Get the code as a string (e.g., "E1003").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// Check if this is a lexical error (E0xxx range).
    pub fn is_lexical_error(&self) -> bool {
        matches!(self, ErrorCode::E0001 | ErrorCode::E0002)
    }

    /// Check if this is a structural error (E1xxx range).
    pub fn is_structural_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
                | ErrorCode::E1005
        )
    }

    /// Check if this is an internal error (E9xxx range).
    ///
    /// Internal errors mean the evaluator broke one of its own invariants;
    /// well-formed or malformed user input alone should never produce one.
    pub fn is_internal_error(&self) -> bool {
        matches!(self, ErrorCode::E9001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1003"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
