//! The dynamic value representation.

use std::collections::HashMap;

use static_assertions::assert_impl_all;

/// A loosely-typed value in the external representation.
///
/// This is a closed sum: leaf transformers pattern-match it
/// exhaustively, and a mismatched variant produces a structural error
/// from the match's fallback arm rather than a panic or a runtime type
/// inspection.
///
/// `AnyValue` is an in-memory representation only; it is not a wire
/// format.
#[derive(Clone, PartialEq, Debug)]
pub enum AnyValue {
    /// A signed integer. All native integer widths bridge through this
    /// variant.
    Integer(i64),
    /// A floating-point number.
    Float(f64),
    /// A boolean.
    Boolean(bool),
    /// A string.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<AnyValue>),
    /// A string-keyed map of values.
    Map(HashMap<String, AnyValue>),
}

impl AnyValue {
    /// Returns the variant name, used in structural error reports.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Map(_) => "map",
        }
    }
}

assert_impl_all!(AnyValue: Send, Sync, Clone);
