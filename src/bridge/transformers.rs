//! Leaf and container transformers for [`AnyValue`].
//!
//! One constructor per primitive width, mirroring the numeric bridging
//! table of the platform this design descends from, plus the two
//! container transformers ([`array`], [`dictionary`]) an adapter needs.
//! Every reverse direction checks the variant and reports a structural
//! error on mismatch; narrowing conversions report a range error instead
//! of wrapping.

use std::collections::HashMap;

use super::error::BridgeError;
use super::value::AnyValue;
use crate::transform::{FunctionTransformer, ValueTransformer};

macro_rules! integer_transformer {
    ($(#[$meta:meta])* $name:ident, $ty:ty) => {
        $(#[$meta])*
        pub fn $name()
        -> impl ValueTransformer<Value = $ty, Transformed = AnyValue, Error = BridgeError>
        + Clone
        + Send
        + Sync {
            FunctionTransformer::new(
                |value: $ty| Ok(AnyValue::Integer(i64::from(value))),
                |data: AnyValue| match data {
                    AnyValue::Integer(number) => {
                        <$ty>::try_from(number).map_err(|_| BridgeError::OutOfRange {
                            value: i128::from(number),
                            target: stringify!($ty),
                        })
                    }
                    other => Err(BridgeError::UnexpectedShape {
                        expected: "integer",
                        found: other.kind(),
                    }),
                },
            )
        }
    };
}

integer_transformer!(
    /// Bridges `i8` through [`AnyValue::Integer`].
    int8, i8
);
integer_transformer!(
    /// Bridges `u8` through [`AnyValue::Integer`].
    uint8, u8
);
integer_transformer!(
    /// Bridges `i16` through [`AnyValue::Integer`].
    int16, i16
);
integer_transformer!(
    /// Bridges `u16` through [`AnyValue::Integer`].
    uint16, u16
);
integer_transformer!(
    /// Bridges `i32` through [`AnyValue::Integer`].
    int32, i32
);
integer_transformer!(
    /// Bridges `u32` through [`AnyValue::Integer`].
    uint32, u32
);
integer_transformer!(
    /// Bridges `i64` through [`AnyValue::Integer`].
    int64, i64
);

/// Bridges `u64` through [`AnyValue::Integer`].
///
/// Values above `i64::MAX` do not fit the representation and fail the
/// forward direction with a range error.
pub fn uint64()
-> impl ValueTransformer<Value = u64, Transformed = AnyValue, Error = BridgeError> + Clone + Send + Sync
{
    FunctionTransformer::new(
        |value: u64| {
            i64::try_from(value)
                .map(AnyValue::Integer)
                .map_err(|_| BridgeError::OutOfRange {
                    value: i128::from(value),
                    target: "i64",
                })
        },
        |data: AnyValue| match data {
            AnyValue::Integer(number) => {
                u64::try_from(number).map_err(|_| BridgeError::OutOfRange {
                    value: i128::from(number),
                    target: "u64",
                })
            }
            other => Err(BridgeError::UnexpectedShape {
                expected: "integer",
                found: other.kind(),
            }),
        },
    )
}

/// Bridges `f32` through [`AnyValue::Float`].
///
/// The reverse direction narrows `f64` to `f32`; like the platform
/// bridging this mirrors, the narrowing rounds rather than fails.
pub fn float32()
-> impl ValueTransformer<Value = f32, Transformed = AnyValue, Error = BridgeError> + Clone + Send + Sync
{
    FunctionTransformer::new(
        |value: f32| Ok(AnyValue::Float(f64::from(value))),
        |data: AnyValue| match data {
            #[allow(clippy::cast_possible_truncation)]
            AnyValue::Float(number) => Ok(number as f32),
            other => Err(BridgeError::UnexpectedShape {
                expected: "float",
                found: other.kind(),
            }),
        },
    )
}

/// Bridges `f64` through [`AnyValue::Float`].
pub fn float64()
-> impl ValueTransformer<Value = f64, Transformed = AnyValue, Error = BridgeError> + Clone + Send + Sync
{
    FunctionTransformer::new(
        |value: f64| Ok(AnyValue::Float(value)),
        |data: AnyValue| match data {
            AnyValue::Float(number) => Ok(number),
            other => Err(BridgeError::UnexpectedShape {
                expected: "float",
                found: other.kind(),
            }),
        },
    )
}

/// Bridges `bool` through [`AnyValue::Boolean`].
pub fn boolean()
-> impl ValueTransformer<Value = bool, Transformed = AnyValue, Error = BridgeError> + Clone + Send + Sync
{
    FunctionTransformer::new(
        |value: bool| Ok(AnyValue::Boolean(value)),
        |data: AnyValue| match data {
            AnyValue::Boolean(flag) => Ok(flag),
            other => Err(BridgeError::UnexpectedShape {
                expected: "boolean",
                found: other.kind(),
            }),
        },
    )
}

/// Bridges `String` through [`AnyValue::String`].
pub fn string()
-> impl ValueTransformer<Value = String, Transformed = AnyValue, Error = BridgeError> + Clone + Send + Sync
{
    FunctionTransformer::new(
        |value: String| Ok(AnyValue::String(value)),
        |data: AnyValue| match data {
            AnyValue::String(text) => Ok(text),
            other => Err(BridgeError::UnexpectedShape {
                expected: "string",
                found: other.kind(),
            }),
        },
    )
}

/// Bridges a sequence of values through [`AnyValue::Array`].
pub fn array()
-> impl ValueTransformer<Value = Vec<AnyValue>, Transformed = AnyValue, Error = BridgeError>
+ Clone
+ Send
+ Sync {
    FunctionTransformer::new(
        |value: Vec<AnyValue>| Ok(AnyValue::Array(value)),
        |data: AnyValue| match data {
            AnyValue::Array(elements) => Ok(elements),
            other => Err(BridgeError::UnexpectedShape {
                expected: "array",
                found: other.kind(),
            }),
        },
    )
}

/// Bridges a string-keyed map through [`AnyValue::Map`].
///
/// This is the container transformer a
/// [`DictionaryAdapter`](crate::adapter::DictionaryAdapter) over
/// [`AnyValue`] wants.
#[cfg(feature = "adapter")]
pub fn dictionary()
-> impl ValueTransformer<Value = HashMap<String, AnyValue>, Transformed = AnyValue, Error = BridgeError>
+ Clone
+ Send
+ Sync {
    map()
}

/// Bridges a string-keyed map through [`AnyValue::Map`].
pub fn map()
-> impl ValueTransformer<Value = HashMap<String, AnyValue>, Transformed = AnyValue, Error = BridgeError>
+ Clone
+ Send
+ Sync {
    FunctionTransformer::new(
        |value: HashMap<String, AnyValue>| Ok(AnyValue::Map(value)),
        |data: AnyValue| match data {
            AnyValue::Map(entries) => Ok(entries),
            other => Err(BridgeError::UnexpectedShape {
                expected: "map",
                found: other.kind(),
            }),
        },
    )
}
