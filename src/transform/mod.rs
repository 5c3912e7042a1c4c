//! Bidirectional value transformers.
//!
//! A [`ValueTransformer`] is a pair of pure functions converting between
//! two representations with explicit failure: `transform` carries a value
//! to its transformed representation, `reverse_transform` carries it
//! back, and either direction returns `Result`. Transformers compose
//! monadically - the first failing stage short-circuits - and can be
//! flipped, chained, and lifted over `Option` (with a default) and over
//! sequences.
//!
//! # Example
//!
//! ```
//! use adaptics::transform::{FunctionTransformer, ValueTransformer};
//!
//! let stringly = FunctionTransformer::new(
//!     |value: i64| Ok::<_, String>(value.to_string()),
//!     |text: String| text.parse::<i64>().map_err(|e| e.to_string()),
//! );
//!
//! // Forward, reverse, and a failing reverse
//! assert_eq!(stringly.transform(1), Ok("1".to_string()));
//! assert_eq!(stringly.reverse_transform("2".to_string()), Ok(2));
//! assert!(stringly.reverse_transform("2.5".to_string()).is_err());
//! ```

mod lifted;
mod transformer;

pub use lifted::{OptionTransformer, SequenceTransformer, sequence, with_default};
pub use transformer::{Composed, Flipped, FunctionTransformer, ValueTransformer};
