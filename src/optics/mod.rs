//! Optics for immutable data manipulation.
//!
//! This module provides composable accessors for immutable data: the
//! [`Lens`] trait, lens composition, lifts over `Option`/`Result`/`Vec`,
//! the product combinators [`split`] and [`fanout`], and (with the
//! `transform` feature) [`transformed`], which routes a lens through a
//! bidirectional value transformer.
//!
//! # Example
//!
//! ```
//! use adaptics::optics::Lens;
//! use adaptics::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let person_street = lens!(Person, address).compose(lens!(Address, street));
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! assert_eq!(person_street.get(&person), "Main St");
//!
//! let updated = person_street.set(person, "Oak Ave".to_string());
//! assert_eq!(updated.address.street, "Oak Ave");
//! assert_eq!(updated.address.city, "Tokyo"); // Other fields unchanged
//! ```

mod combinators;
mod lens;
mod lifted;
#[cfg(feature = "transform")]
mod transformed;

pub use combinators::{FanoutLens, SplitLens, fanout, split};
pub use lens::{ComposedLens, FunctionLens, Lens};
pub use lifted::{
    OptionLens, ResultLens, SequenceLens, lift_option, lift_result, lift_sequence,
};
#[cfg(feature = "transform")]
pub use transformed::{TransformedLens, transformed, transformed_lifted};
