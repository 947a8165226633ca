//! Stack entries and the operations they name.

use std::fmt;

/// The two operations of the language.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `m`: the smaller operand.
    Min,
    /// `M`: the larger operand.
    Max,
}

impl Operation {
    /// Resolve an operation symbol. Case matters: `m` is min, `M` is max.
    #[inline]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'm' => Some(Operation::Min),
            'M' => Some(Operation::Max),
            _ => None,
        }
    }

    #[inline]
    pub fn is_symbol(symbol: char) -> bool {
        Self::from_symbol(symbol).is_some()
    }

    pub fn symbol(self) -> char {
        match self {
            Operation::Min => 'm',
            Operation::Max => 'M',
        }
    }

    /// Apply to two operands given in textual (left-to-right) order.
    #[inline]
    pub fn apply(self, left: i64, right: i64) -> i64 {
        match self {
            Operation::Min => left.min(right),
            Operation::Max => left.max(right),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One slot of the evaluation stack.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StackEntry {
    /// An operation symbol waiting for its parenthesized operands.
    Operator(char),
    /// An unmatched `(`.
    OpenMarker,
    /// A literal or an already reduced call.
    Value(i64),
}

impl StackEntry {
    /// Short human description, used in error messages.
    pub fn describe(&self) -> String {
        match self {
            StackEntry::Operator(symbol) => format!("operation `{symbol}`"),
            StackEntry::OpenMarker => "'('".to_string(),
            StackEntry::Value(value) => format!("value {value}"),
        }
    }

    #[inline]
    pub fn as_value(&self) -> Option<i64> {
        match self {
            StackEntry::Value(value) => Some(*value),
            _ => None,
        }
    }
}
