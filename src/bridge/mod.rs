//! Bridging between native primitives and a dynamic representation.
//!
//! The core algebra is agnostic to any concrete external format; what an
//! adapter needs from its embedding is a closed "any" value type, one
//! leaf transformer per primitive, and a container transformer for the
//! keyed map. This module supplies all three for in-memory use:
//! [`AnyValue`], the numeric/boolean/string constructors, and
//! [`array`]/[`dictionary`].
//!
//! Structural mismatches surface as [`BridgeError::UnexpectedShape`];
//! numbers that do not fit the requested width surface as
//! [`BridgeError::OutOfRange`]. Nothing panics.
//!
//! # Example
//!
//! ```
//! use adaptics::bridge::{self, AnyValue, BridgeError};
//! use adaptics::transform::ValueTransformer;
//!
//! let transformer = bridge::int32();
//! assert_eq!(transformer.transform(5), Ok(AnyValue::Integer(5)));
//! assert_eq!(transformer.reverse_transform(AnyValue::Integer(5)), Ok(5));
//!
//! let mismatch = transformer.reverse_transform(AnyValue::Boolean(true));
//! assert_eq!(
//!     mismatch,
//!     Err(BridgeError::UnexpectedShape { expected: "integer", found: "boolean" }),
//! );
//! ```

mod error;
mod transformers;
mod value;

pub use error::BridgeError;
#[cfg(feature = "adapter")]
pub use transformers::dictionary;
pub use transformers::{
    array, boolean, float32, float64, int8, int16, int32, int64, map, string, uint8, uint16,
    uint32, uint64,
};
pub use value::AnyValue;
