//! # adaptics
//!
//! A bidirectional mapping layer between strongly-typed domain values and a
//! loosely-typed keyed data representation.
//!
//! ## Overview
//!
//! This library lets a consumer declare, field by field, how a domain type
//! corresponds to keys in an external representation, and derives correct,
//! composable, reversible encode/decode logic from that declaration:
//!
//! - **Optics**: a lens algebra (get/set access to a field of a larger
//!   structure) with composition and lifts over `Option`, `Result`, and
//!   sequences
//! - **Transform**: a value-transformer algebra - bidirectional,
//!   possibly-failing codecs between two representations, with flip,
//!   composition, and container lifts
//! - **Adapter**: a structural adapter that folds a field-name specification
//!   of (lens, transformer) pairs into a single encode/decode pair for a
//!   whole aggregate, plus a fixpoint combinator for recursive domain types
//! - **Bridge**: a closed dynamic value sum type and the leaf transformers
//!   that connect native primitives to it
//!
//! Failure propagation is monadic throughout: every fallible operation
//! returns `Result`, and composition short-circuits on the first failure
//! without wrapping or annotating the error.
//!
//! ## Feature Flags
//!
//! - `optics`: Lens trait, composition, lifts, split/fanout
//! - `transform`: ValueTransformer trait and combinators
//! - `adapter`: Structural adapter and fixpoint combinator
//! - `bridge`: Dynamic value type and primitive transformers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use adaptics::adapter::{Adapter, DictionaryAdapter, Specification};
//! use adaptics::bridge;
//! use adaptics::lens;
//! use adaptics::optics::transformed;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Counter { count: i64 }
//!
//! let adapter = DictionaryAdapter::new(
//!     Specification::new()
//!         .field("count", transformed(lens!(Counter, count), bridge::int64())),
//!     bridge::dictionary(),
//!     |_| Ok(Counter { count: 0 }),
//! );
//!
//! let data = adapter.encode(&Counter { count: 1 }).unwrap();
//! let restored = adapter.decode(Counter { count: 0 }, data).unwrap();
//! assert_eq!(restored, Counter { count: 1 });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use adaptics::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "transform")]
    pub use crate::transform::*;

    #[cfg(feature = "adapter")]
    pub use crate::adapter::*;

    #[cfg(feature = "bridge")]
    pub use crate::bridge::*;
}

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "transform")]
pub mod transform;

#[cfg(feature = "adapter")]
pub mod adapter;

#[cfg(feature = "bridge")]
pub mod bridge;
