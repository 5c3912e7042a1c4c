//! Errors raised by the bridge transformers.

use std::fmt;

/// A failure converting between a native value and [`AnyValue`].
///
/// Composition operators never wrap or annotate errors, so the variant
/// raised at the failing leaf is exactly what the caller of an adapter
/// observes.
///
/// [`AnyValue`]: super::AnyValue
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum BridgeError {
    /// The representation does not have the expected shape - e.g. a map
    /// was expected but a scalar was found.
    UnexpectedShape {
        /// The variant the transformer expected.
        expected: &'static str,
        /// The variant actually found.
        found: &'static str,
    },
    /// A present, correctly-shaped number does not fit the requested
    /// native width.
    OutOfRange {
        /// The offending number.
        value: i128,
        /// The native type it was narrowed to.
        target: &'static str,
    },
}

impl fmt::Display for BridgeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedShape { expected, found } => {
                write!(formatter, "expected {expected}, found {found}")
            }
            Self::OutOfRange { value, target } => {
                write!(formatter, "{value} is out of range for {target}")
            }
        }
    }
}

impl std::error::Error for BridgeError {}
